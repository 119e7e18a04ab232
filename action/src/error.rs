//! Unified error types for the auto-assign action
//!
//! This module defines error types for each layer:
//! - `GitHubError`: GitHub API client errors
//! - `AssignError`: Assignment pipeline errors (wraps client errors where a stage needs context)
//! - `ConfigError`: Process-boundary configuration errors

use thiserror::Error;

/// GitHub API client errors
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Assignment pipeline errors
#[derive(Debug, Error)]
pub enum AssignError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Missing required parameters: you must provide assignees or teams")]
    MissingParameters,

    #[error("Couldn't find issue info in current context")]
    MissingTarget,

    #[error("Failed to retrieve team members")]
    TeamLookup(#[source] GitHubError),

    #[error("No candidates found for assignment")]
    NoCandidates,

    #[error("Failed to remove previous {what}")]
    Removal {
        what: &'static str,
        #[source]
        source: GitHubError,
    },

    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),
}

/// Configuration errors raised while reading the process environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required input: {0}")]
    Missing(String),

    #[error("Failed to read event payload {path}: {reason}")]
    EventPayload { path: String, reason: String },
}
