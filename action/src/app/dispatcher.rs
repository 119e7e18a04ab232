//! Dispatcher
//!
//! Applies a candidate set to the target: optional abort or cleanup of the
//! previous assignees and reviewers, then the assignment itself.

use crate::domain::entities::{AssignmentRequest, CandidateSet, DispatchOutcome, TargetRef};
use crate::domain::ports::{AssignmentApi, GitHubUser};
use crate::error::AssignError;

fn logins(users: Vec<GitHubUser>) -> Vec<String> {
    users.into_iter().map(|u| u.login).collect()
}

/// Apply the candidates to the target.
///
/// Removal and addition are not transactional: when a later call fails,
/// earlier changes stay in place.
pub async fn dispatch<A>(
    target: &TargetRef,
    request: &AssignmentRequest,
    candidates: &CandidateSet,
    api: &A,
) -> Result<DispatchOutcome, AssignError>
where
    A: AssignmentApi + ?Sized,
{
    let (owner, repo, number) = (target.owner.as_str(), target.repo_name.as_str(), target.number);

    let mut current_assignees = None;
    if request.abort_if_has_assignees {
        let existing = logins(api.fetch_current_assignees(owner, repo, number).await?);
        if !existing.is_empty() {
            tracing::info!(
                item = %target,
                existing = ?existing,
                "Target already has assignees, skipping"
            );
            return Ok(DispatchOutcome::Aborted { existing });
        }
        current_assignees = Some(existing);
    }

    if candidates.is_empty() && !request.allow_empty_result {
        return Err(AssignError::NoCandidates);
    }

    if request.remove_prior_assignees {
        remove_prior(target, current_assignees, api).await?;
    }

    let assignees = candidates.as_slice().to_vec();
    if !assignees.is_empty() {
        tracing::info!(
            item = %target,
            kind = target.kind(),
            assignees = ?assignees,
            "Assigning"
        );
        api.add_assignees(owner, repo, number, &assignees).await?;
    }

    let mut reviewers = Vec::new();
    if target.is_pull_request() {
        reviewers = candidates.without(target.actor.as_deref());
        if !reviewers.is_empty() {
            tracing::info!(item = %target, reviewers = ?reviewers, "Requesting reviews");
            api.request_reviewers(owner, repo, number, &reviewers).await?;
        }
    }

    Ok(DispatchOutcome::Applied {
        assignees,
        reviewers,
    })
}

/// Remove whoever is currently assigned (and, on pull requests, requested
/// for review). `known_assignees` skips the fetch when the caller already has
/// the list.
async fn remove_prior<A>(
    target: &TargetRef,
    known_assignees: Option<Vec<String>>,
    api: &A,
) -> Result<(), AssignError>
where
    A: AssignmentApi + ?Sized,
{
    let (owner, repo, number) = (target.owner.as_str(), target.repo_name.as_str(), target.number);

    let assignees = match known_assignees {
        Some(assignees) => assignees,
        None => logins(
            api.fetch_current_assignees(owner, repo, number)
                .await
                .map_err(|source| AssignError::Removal {
                    what: "assignees",
                    source,
                })?,
        ),
    };

    if assignees.is_empty() {
        tracing::debug!(item = %target, "No previous assignees to remove");
    } else {
        tracing::info!(item = %target, assignees = ?assignees, "Removing previous assignees");
        api.remove_assignees(owner, repo, number, &assignees)
            .await
            .map_err(|source| AssignError::Removal {
                what: "assignees",
                source,
            })?;
    }

    if target.is_pull_request() {
        let reviewers = api
            .fetch_current_reviewers(owner, repo, number)
            .await
            .map(logins)
            .map_err(|source| AssignError::Removal {
                what: "reviewers",
                source,
            })?;

        if !reviewers.is_empty() {
            tracing::info!(item = %target, reviewers = ?reviewers, "Removing previous reviewers");
            api.remove_reviewers(owner, repo, number, &reviewers)
                .await
                .map_err(|source| AssignError::Removal {
                    what: "reviewers",
                    source,
                })?;
        }
    }

    Ok(())
}
