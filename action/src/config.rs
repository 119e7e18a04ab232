use std::env;
use std::path::PathBuf;

use crate::domain::entities::EventPayload;
use crate::error::ConfigError;

/// Raw, unparsed action inputs exactly as the runner supplied them.
///
/// Parsing into typed values happens in `app::input_parser` so that malformed
/// values surface as assignment errors rather than configuration errors.
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
    pub assignees: String,
    pub teams: String,
    pub num_of_assignee: String,
    pub abort_if_previous_assignees: String,
    pub remove_previous_assignees: String,
    pub allow_no_assignees: String,
    pub allow_self_assign: String,
    pub issue_number: String,
}

#[derive(Clone)]
pub struct Config {
    pub repo_token: String,
    /// Base URL for the GitHub REST API (GitHub Enterprise sets this)
    pub api_url: String,
    /// Path to the JSON payload of the triggering event
    pub event_path: PathBuf,
    pub inputs: ActionInputs,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let repo_token = input("repo-token")
            .or_else(|| env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()))
            .ok_or_else(|| ConfigError::Missing("repo-token".to_string()))?;

        let event_path = env::var("GITHUB_EVENT_PATH")
            .map(PathBuf::from)
            .map_err(|_| ConfigError::Missing("GITHUB_EVENT_PATH".to_string()))?;

        Ok(Self {
            repo_token,
            api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            event_path,
            inputs: ActionInputs {
                assignees: input("assignees").unwrap_or_default(),
                teams: input("teams").unwrap_or_default(),
                num_of_assignee: input("numOfAssignee").unwrap_or_default(),
                abort_if_previous_assignees: input("abortIfPreviousAssignees").unwrap_or_default(),
                remove_previous_assignees: input("removePreviousAssignees").unwrap_or_default(),
                allow_no_assignees: input("allowNoAssignees").unwrap_or_default(),
                allow_self_assign: input("allowSelfAssign").unwrap_or_default(),
                issue_number: input("issueNumber").unwrap_or_default(),
            },
        })
    }

    /// Read and deserialize the triggering event payload
    pub fn read_event_payload(&self) -> Result<EventPayload, ConfigError> {
        let path = self.event_path.display().to_string();
        let raw = std::fs::read_to_string(&self.event_path).map_err(|e| {
            ConfigError::EventPayload {
                path: path.clone(),
                reason: e.to_string(),
            }
        })?;
        serde_json::from_str(&raw).map_err(|e| ConfigError::EventPayload {
            path,
            reason: e.to_string(),
        })
    }
}

/// Runners expose `with:` inputs as `INPUT_<NAME>` with the name uppercased
/// and hyphens kept. Blank values count as absent.
fn input(name: &str) -> Option<String> {
    let key = format!("INPUT_{}", name.replace(' ', "_").to_uppercase());
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
