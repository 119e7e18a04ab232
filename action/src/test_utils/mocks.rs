//! Mock implementations of port traits
//!
//! An in-memory GitHub that can be configured for testing.
//! It records every call so tests can verify behavior.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::ports::{AssignmentApi, GitHubUser, TeamLookup};
use crate::error::GitHubError;

/// A mutation issued against the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    AddAssignees {
        owner: String,
        repo: String,
        number: u64,
        logins: Vec<String>,
    },
    RemoveAssignees {
        owner: String,
        repo: String,
        number: u64,
        logins: Vec<String>,
    },
    RequestReviewers {
        owner: String,
        repo: String,
        number: u64,
        logins: Vec<String>,
    },
    RemoveReviewers {
        owner: String,
        repo: String,
        number: u64,
        logins: Vec<String>,
    },
}

#[derive(Default)]
pub struct MockGitHubClient {
    /// Team slug -> member logins
    teams: Arc<RwLock<HashMap<String, Vec<String>>>>,
    /// Artificial latency per team lookup
    team_delays: Arc<RwLock<HashMap<String, Duration>>>,
    failing_teams: Arc<RwLock<HashSet<String>>>,
    /// Current assignees of every target
    assignees: Arc<RwLock<Vec<String>>>,
    /// Current requested reviewers of every target
    reviewers: Arc<RwLock<Vec<String>>>,
    /// Numbers that are pull requests rather than issues
    pull_request_numbers: Arc<RwLock<HashSet<u64>>>,
    fail_kind_lookup: Arc<RwLock<bool>>,
    fail_removal: Arc<RwLock<bool>>,
    fail_add: Arc<RwLock<bool>>,
    // Recorded interactions
    calls: Arc<RwLock<Vec<MockCall>>>,
    team_lookups: Arc<RwLock<Vec<(String, String)>>>,
    assignee_fetches: Arc<RwLock<usize>>,
    kind_lookups: Arc<RwLock<usize>>,
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a team and its members
    pub fn with_team(self, team: &str, members: &[&str]) -> Self {
        self.teams.write().unwrap().insert(
            team.to_string(),
            members.iter().map(|m| m.to_string()).collect(),
        );
        self
    }

    /// Delay the lookup of a team
    pub fn with_team_delay(self, team: &str, delay: Duration) -> Self {
        self.team_delays
            .write()
            .unwrap()
            .insert(team.to_string(), delay);
        self
    }

    /// Make the lookup of a team fail
    pub fn failing_team(self, team: &str) -> Self {
        self.failing_teams.write().unwrap().insert(team.to_string());
        self
    }

    /// Configure the current assignees
    pub fn with_assignees(self, logins: &[&str]) -> Self {
        *self.assignees.write().unwrap() = logins.iter().map(|l| l.to_string()).collect();
        self
    }

    /// Configure the currently requested reviewers
    pub fn with_reviewers(self, logins: &[&str]) -> Self {
        *self.reviewers.write().unwrap() = logins.iter().map(|l| l.to_string()).collect();
        self
    }

    /// Mark a number as a pull request for kind lookups
    pub fn with_pull_request_number(self, number: u64) -> Self {
        self.pull_request_numbers.write().unwrap().insert(number);
        self
    }

    pub fn failing_kind_lookup(self) -> Self {
        *self.fail_kind_lookup.write().unwrap() = true;
        self
    }

    pub fn failing_removal(self) -> Self {
        *self.fail_removal.write().unwrap() = true;
        self
    }

    pub fn failing_add(self) -> Self {
        *self.fail_add.write().unwrap() = true;
        self
    }

    /// All mutations, in the order they were issued
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn mutation_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Login lists passed to add-assignees calls
    pub fn added_assignees(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::AddAssignees { logins, .. } => Some(logins),
                _ => None,
            })
            .collect()
    }

    /// Login lists passed to request-reviewers calls
    pub fn requested_reviewers(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::RequestReviewers { logins, .. } => Some(logins),
                _ => None,
            })
            .collect()
    }

    /// (org, team) pairs in the order lookups started
    pub fn team_lookups(&self) -> Vec<(String, String)> {
        self.team_lookups.read().unwrap().clone()
    }

    pub fn assignee_fetches(&self) -> usize {
        *self.assignee_fetches.read().unwrap()
    }

    pub fn kind_lookups(&self) -> usize {
        *self.kind_lookups.read().unwrap()
    }

    fn record(&self, call: MockCall) {
        self.calls.write().unwrap().push(call);
    }

    fn mock_failure(message: &str) -> GitHubError {
        GitHubError::Api {
            status: 500,
            message: message.to_string(),
        }
    }
}

fn users(logins: &[String]) -> Vec<GitHubUser> {
    logins.iter().map(GitHubUser::new).collect()
}

#[async_trait]
impl TeamLookup for MockGitHubClient {
    async fn fetch_team_members(
        &self,
        org: &str,
        team: &str,
    ) -> Result<Vec<GitHubUser>, GitHubError> {
        self.team_lookups
            .write()
            .unwrap()
            .push((org.to_string(), team.to_string()));

        let delay = self.team_delays.read().unwrap().get(team).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing_teams.read().unwrap().contains(team) {
            return Err(GitHubError::NotFound(format!("team {}/{}", org, team)));
        }

        let members = self.teams.read().unwrap().get(team).cloned();
        members
            .map(|m| users(&m))
            .ok_or_else(|| GitHubError::NotFound(format!("team {}/{}", org, team)))
    }
}

#[async_trait]
impl AssignmentApi for MockGitHubClient {
    async fn fetch_current_assignees(
        &self,
        _owner: &str,
        _repo: &str,
        _number: u64,
    ) -> Result<Vec<GitHubUser>, GitHubError> {
        *self.assignee_fetches.write().unwrap() += 1;
        Ok(users(&self.assignees.read().unwrap()))
    }

    async fn fetch_current_reviewers(
        &self,
        _owner: &str,
        _repo: &str,
        _number: u64,
    ) -> Result<Vec<GitHubUser>, GitHubError> {
        Ok(users(&self.reviewers.read().unwrap()))
    }

    async fn is_target_an_issue(
        &self,
        _owner: &str,
        _repo: &str,
        number: u64,
    ) -> Result<bool, GitHubError> {
        *self.kind_lookups.write().unwrap() += 1;
        if *self.fail_kind_lookup.read().unwrap() {
            return Err(GitHubError::NotFound(format!("issue #{}", number)));
        }
        Ok(!self.pull_request_numbers.read().unwrap().contains(&number))
    }

    async fn add_assignees(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        logins: &[String],
    ) -> Result<(), GitHubError> {
        if *self.fail_add.read().unwrap() {
            return Err(Self::mock_failure("Mock add failure"));
        }
        self.record(MockCall::AddAssignees {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
            logins: logins.to_vec(),
        });
        Ok(())
    }

    async fn remove_assignees(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        logins: &[String],
    ) -> Result<(), GitHubError> {
        if *self.fail_removal.read().unwrap() {
            return Err(Self::mock_failure("Mock removal failure"));
        }
        self.record(MockCall::RemoveAssignees {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
            logins: logins.to_vec(),
        });
        Ok(())
    }

    async fn request_reviewers(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        logins: &[String],
    ) -> Result<(), GitHubError> {
        self.record(MockCall::RequestReviewers {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
            logins: logins.to_vec(),
        });
        Ok(())
    }

    async fn remove_reviewers(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        logins: &[String],
    ) -> Result<(), GitHubError> {
        if *self.fail_removal.read().unwrap() {
            return Err(Self::mock_failure("Mock removal failure"));
        }
        self.record(MockCall::RemoveReviewers {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
            logins: logins.to_vec(),
        });
        Ok(())
    }
}
