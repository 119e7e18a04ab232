//! Triggering event payload
//!
//! The runner writes the webhook payload of the triggering event to disk.
//! Its shape depends on the event type, so every section is optional here and
//! `TriggerEvent` is the classified form the rest of the pipeline works with.

use serde::Deserialize;

/// Webhook payload of the event that started the run
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub issue: Option<IssuePayload>,
    #[serde(default)]
    pub pull_request: Option<PullRequestPayload>,
    #[serde(default)]
    pub workflow_run: Option<WorkflowRunPayload>,
    #[serde(default)]
    pub project_card: Option<ProjectCardPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub full_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssuePayload {
    pub number: u64,
    #[serde(default)]
    pub user: Option<User>,
    /// Present when the issue is the issue side of a pull request
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    pub number: u64,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestRef {
    pub number: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRunPayload {
    #[serde(default)]
    pub pull_requests: Vec<PullRequestRef>,
    #[serde(default)]
    pub actor: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectCardPayload {
    #[serde(default)]
    pub content_url: Option<String>,
}

/// Classified trigger, carrying only what assignment needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// An issue event on a real issue
    Issue { number: u64, actor: Option<String> },
    /// A pull request event, or an issue event whose issue is a pull request
    PullRequest { number: u64, actor: Option<String> },
    /// A completed workflow run attached to a pull request
    WorkflowRun { number: u64, actor: Option<String> },
    /// A number supplied through the `issueNumber` input
    Manual { number: u64, actor: Option<String> },
    /// A project card linked to an issue or pull request
    ProjectCard { number: u64 },
}

impl TriggerEvent {
    pub fn number(&self) -> u64 {
        match self {
            TriggerEvent::Issue { number, .. }
            | TriggerEvent::PullRequest { number, .. }
            | TriggerEvent::WorkflowRun { number, .. }
            | TriggerEvent::Manual { number, .. }
            | TriggerEvent::ProjectCard { number } => *number,
        }
    }

    pub fn actor(&self) -> Option<&str> {
        match self {
            TriggerEvent::Issue { actor, .. }
            | TriggerEvent::PullRequest { actor, .. }
            | TriggerEvent::WorkflowRun { actor, .. }
            | TriggerEvent::Manual { actor, .. } => actor.as_deref(),
            TriggerEvent::ProjectCard { .. } => None,
        }
    }

    /// Whether the target is an issue, when the payload alone can tell.
    /// `None` means the kind has to be looked up.
    pub fn known_is_issue(&self) -> Option<bool> {
        match self {
            TriggerEvent::Issue { .. } => Some(true),
            TriggerEvent::PullRequest { .. } | TriggerEvent::WorkflowRun { .. } => Some(false),
            TriggerEvent::Manual { .. } | TriggerEvent::ProjectCard { .. } => None,
        }
    }
}

impl std::fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriggerEvent::Issue { number, .. } => write!(f, "issue #{}", number),
            TriggerEvent::PullRequest { number, .. } => write!(f, "pull request #{}", number),
            TriggerEvent::WorkflowRun { number, .. } => {
                write!(f, "workflow run on pull request #{}", number)
            }
            TriggerEvent::Manual { number, .. } => write!(f, "manual target #{}", number),
            TriggerEvent::ProjectCard { number } => write!(f, "project card for #{}", number),
        }
    }
}
