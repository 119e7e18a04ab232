//! Context extractor
//!
//! Works out which issue or pull request an event refers to, who triggered
//! it, and in which repository.

use crate::domain::entities::{EventPayload, TargetRef, TriggerEvent};
use crate::domain::ports::AssignmentApi;
use crate::error::AssignError;

/// Classify an event payload into the trigger it represents.
///
/// Target number precedence: issue, pull request, first pull request of a
/// workflow run, manual override, project card content URL.
pub fn classify(
    payload: &EventPayload,
    manual_number: Option<u64>,
) -> Result<TriggerEvent, AssignError> {
    let workflow_actor = payload
        .workflow_run
        .as_ref()
        .and_then(|run| run.actor.as_ref())
        .map(|u| u.login.clone());

    if let Some(issue) = &payload.issue {
        let actor = issue.user.as_ref().map(|u| u.login.clone());
        let is_pull_request = issue.pull_request.is_some()
            || payload.pull_request.is_some()
            || payload.workflow_run.is_some();

        return Ok(if is_pull_request {
            TriggerEvent::PullRequest {
                number: issue.number,
                actor,
            }
        } else {
            TriggerEvent::Issue {
                number: issue.number,
                actor,
            }
        });
    }

    if let Some(pr) = &payload.pull_request {
        return Ok(TriggerEvent::PullRequest {
            number: pr.number,
            actor: pr.user.as_ref().map(|u| u.login.clone()),
        });
    }

    if let Some(first) = payload
        .workflow_run
        .as_ref()
        .and_then(|run| run.pull_requests.first())
    {
        return Ok(TriggerEvent::WorkflowRun {
            number: first.number,
            actor: workflow_actor,
        });
    }

    if let Some(number) = manual_number {
        return Ok(TriggerEvent::Manual {
            number,
            actor: workflow_actor,
        });
    }

    payload
        .project_card
        .as_ref()
        .and_then(|card| card.content_url.as_deref())
        .and_then(trailing_number)
        .map(|number| TriggerEvent::ProjectCard { number })
        .ok_or(AssignError::MissingTarget)
}

/// Last path segment of a URL as a positive number
fn trailing_number(url: &str) -> Option<u64> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<u64>().ok())
        .filter(|number| *number > 0)
}

/// Split `owner/name` into its parts
pub fn split_full_name(full_name: &str) -> Result<(String, String), AssignError> {
    match full_name.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(AssignError::MalformedInput(format!(
            "Invalid repository name: '{}'",
            full_name
        ))),
    }
}

/// Derive the target of this run, looking up its kind when the payload
/// does not say.
pub async fn extract<A>(
    payload: &EventPayload,
    manual_number: Option<u64>,
    api: &A,
) -> Result<TargetRef, AssignError>
where
    A: AssignmentApi + ?Sized,
{
    let trigger = classify(payload, manual_number)?;

    let full_name = payload
        .repository
        .as_ref()
        .map(|r| r.full_name.as_str())
        .ok_or_else(|| AssignError::MalformedInput("Missing repository in event".to_string()))?;
    let (owner, repo_name) = split_full_name(full_name)?;

    let number = trigger.number();
    let is_issue = match trigger.known_is_issue() {
        Some(known) => known,
        None => match api.is_target_an_issue(&owner, &repo_name, number).await {
            Ok(is_issue) => is_issue,
            Err(e) => {
                // Private repositories reject the lookup for pull requests
                tracing::warn!(
                    owner = %owner,
                    repo = %repo_name,
                    number,
                    error = %e,
                    "Could not look up target kind, treating it as a pull request"
                );
                false
            }
        },
    };

    tracing::debug!(trigger = %trigger, is_issue, "Classified event");

    Ok(TargetRef {
        owner,
        repo_name,
        number,
        is_issue,
        actor: trigger.actor().map(str::to_string),
    })
}
