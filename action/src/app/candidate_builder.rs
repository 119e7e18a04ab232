//! Candidate builder
//!
//! Expands teams, merges them with the explicit names and narrows the result
//! down to the logins that will be assigned.

use futures::future::try_join_all;
use rand::Rng;

use crate::domain::entities::{AssignmentRequest, CandidateSet, TargetRef};
use crate::domain::ports::TeamLookup;
use crate::error::AssignError;

/// Members of each team, concatenated in the order the teams were given.
///
/// Lookups run concurrently; the first failure aborts the expansion.
pub async fn expand_teams<T>(
    team_lookup: &T,
    org: &str,
    team_names: &[String],
) -> Result<Vec<String>, AssignError>
where
    T: TeamLookup + ?Sized,
{
    let lookups = team_names
        .iter()
        .map(|team| team_lookup.fetch_team_members(org, team));

    let teams: Vec<_> = try_join_all(lookups)
        .await
        .map_err(AssignError::TeamLookup)?;

    Ok(teams
        .into_iter()
        .flatten()
        .map(|member| member.login)
        .collect())
}

/// Build the final candidate set for a request
pub async fn build<T, R>(
    request: &AssignmentRequest,
    target: &TargetRef,
    team_lookup: &T,
    rng: &mut R,
) -> Result<CandidateSet, AssignError>
where
    T: TeamLookup + ?Sized,
    R: Rng + ?Sized,
{
    if !request.has_sources() {
        return Err(AssignError::MissingParameters);
    }

    let mut logins = request.explicit_names.clone();
    if !request.team_names.is_empty() {
        let members = expand_teams(team_lookup, &target.owner, &request.team_names).await?;
        tracing::debug!(
            teams = ?request.team_names,
            members = members.len(),
            "Expanded teams"
        );
        logins.extend(members);
    }

    let mut candidates = CandidateSet::from_logins(logins);

    if !request.allow_self_assign {
        if let Some(actor) = target.actor.as_deref() {
            if candidates.remove(actor) {
                tracing::debug!(actor, "Excluded triggering actor from candidates");
            }
        }
    }

    if candidates.is_empty() {
        if request.allow_empty_result {
            return Ok(candidates);
        }
        return Err(AssignError::NoCandidates);
    }

    if request.sample_size > 0 {
        candidates.sample(request.sample_size as usize, rng);
        tracing::debug!(
            requested = request.sample_size,
            picked = candidates.len(),
            "Sampled candidates"
        );
    }

    Ok(candidates)
}
