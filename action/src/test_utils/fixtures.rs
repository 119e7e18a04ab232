//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Payload fixtures follow the shapes GitHub sends for each trigger.

use crate::domain::entities::{
    AssignmentRequest, CandidateSet, EventPayload, IssuePayload, ProjectCardPayload,
    PullRequestPayload, PullRequestRef, Repository, TargetRef, User, WorkflowRunPayload,
};

fn repository(full_name: &str) -> Option<Repository> {
    Some(Repository {
        full_name: full_name.to_string(),
    })
}

fn user(login: Option<&str>) -> Option<User> {
    login.map(|l| User {
        login: l.to_string(),
    })
}

/// Payload of an `issues` event
pub fn issue_payload(full_name: &str, number: u64, author: Option<&str>) -> EventPayload {
    EventPayload {
        repository: repository(full_name),
        issue: Some(IssuePayload {
            number,
            user: user(author),
            pull_request: None,
        }),
        ..Default::default()
    }
}

/// Payload of a `pull_request` event
pub fn pull_request_payload(full_name: &str, number: u64, author: Option<&str>) -> EventPayload {
    EventPayload {
        repository: repository(full_name),
        pull_request: Some(PullRequestPayload {
            number,
            user: user(author),
        }),
        ..Default::default()
    }
}

/// Payload of a `workflow_run` event
pub fn workflow_run_payload(full_name: &str, numbers: &[u64], actor: Option<&str>) -> EventPayload {
    EventPayload {
        repository: repository(full_name),
        workflow_run: Some(WorkflowRunPayload {
            pull_requests: numbers
                .iter()
                .map(|n| PullRequestRef { number: *n })
                .collect(),
            actor: user(actor),
        }),
        ..Default::default()
    }
}

/// Payload of a `project_card` event
pub fn project_card_payload(full_name: &str, content_url: &str) -> EventPayload {
    EventPayload {
        repository: repository(full_name),
        project_card: Some(ProjectCardPayload {
            content_url: Some(content_url.to_string()),
        }),
        ..Default::default()
    }
}

/// Request with the given sources and default flags
pub fn test_request(explicit: &[&str], teams: &[&str]) -> AssignmentRequest {
    AssignmentRequest {
        explicit_names: explicit.iter().map(|s| s.to_string()).collect(),
        team_names: teams.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

/// mockOrg/mockRepo#666 for issues, #667 for pull requests, opened by `author`
pub fn test_target(is_issue: bool) -> TargetRef {
    TargetRef {
        owner: "mockOrg".to_string(),
        repo_name: "mockRepo".to_string(),
        number: if is_issue { 666 } else { 667 },
        is_issue,
        actor: Some("author".to_string()),
    }
}

pub fn candidates(logins: &[&str]) -> CandidateSet {
    CandidateSet::from_logins(logins.iter().map(|s| s.to_string()))
}
