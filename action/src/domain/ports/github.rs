//! GitHub client port traits
//!
//! Defines the interface for the GitHub API calls made while assigning.
//! Team expansion and target mutation are separate ports so the candidate
//! builder never sees write access.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::GitHubError;

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// GitHub user representation (only the login matters for assignment)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
}

impl GitHubUser {
    #[cfg(test)]
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }
}

/// GitHub issue representation
///
/// The issues endpoint also serves pull requests; those carry a
/// `pull_request` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubIssue {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub assignees: Vec<GitHubUser>,
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

impl GitHubIssue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// GitHub pull request representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubPullRequest {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub requested_reviewers: Vec<GitHubUser>,
}

/// Port trait for expanding a team into its members
#[async_trait]
pub trait TeamLookup: Send + Sync {
    /// List the members of a team in an organization
    async fn fetch_team_members(&self, org: &str, team: &str)
        -> Result<Vec<GitHubUser>, GitHubError>;
}

/// Port trait for reading and changing who is on an issue or pull request
#[async_trait]
pub trait AssignmentApi: Send + Sync {
    // Reads

    /// Current assignees (issues and pull requests share this shape)
    async fn fetch_current_assignees(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<GitHubUser>, GitHubError>;

    /// Currently requested reviewers of a pull request
    async fn fetch_current_reviewers(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<GitHubUser>, GitHubError>;

    /// Whether the number refers to an issue rather than a pull request
    async fn is_target_an_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<bool, GitHubError>;

    // Assignees

    /// Add assignees to an issue or pull request
    async fn add_assignees(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        logins: &[String],
    ) -> Result<(), GitHubError>;

    /// Remove assignees from an issue or pull request
    async fn remove_assignees(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        logins: &[String],
    ) -> Result<(), GitHubError>;

    // Reviewers

    /// Request reviews on a pull request
    async fn request_reviewers(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        logins: &[String],
    ) -> Result<(), GitHubError>;

    /// Withdraw review requests on a pull request
    async fn remove_reviewers(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        logins: &[String],
    ) -> Result<(), GitHubError>;
}
