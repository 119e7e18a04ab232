//! Assign service
//!
//! Runs one assignment end to end: find the target, build the candidates,
//! apply them.

use std::sync::Arc;

use rand::Rng;

use crate::app::{candidate_builder, context_extractor, dispatcher};
use crate::domain::entities::{AssignmentRequest, DispatchOutcome, EventPayload};
use crate::domain::ports::{AssignmentApi, TeamLookup};
use crate::error::AssignError;

/// Service resolving and applying assignments for a triggering event
pub struct AssignService<TL, AA>
where
    TL: TeamLookup,
    AA: AssignmentApi,
{
    teams: Arc<TL>,
    api: Arc<AA>,
}

impl<TL, AA> AssignService<TL, AA>
where
    TL: TeamLookup,
    AA: AssignmentApi,
{
    pub fn new(teams: Arc<TL>, api: Arc<AA>) -> Self {
        Self { teams, api }
    }

    /// Resolve the target and candidates for `payload`, then assign them
    pub async fn run<R>(
        &self,
        payload: &EventPayload,
        request: &AssignmentRequest,
        rng: &mut R,
    ) -> Result<DispatchOutcome, AssignError>
    where
        R: Rng + ?Sized,
    {
        let target =
            context_extractor::extract(payload, request.manual_target_number, self.api.as_ref())
                .await?;

        let candidates =
            candidate_builder::build(request, &target, self.teams.as_ref(), rng).await?;

        tracing::info!(
            item = %target,
            kind = target.kind(),
            candidates = ?candidates.as_slice(),
            "Resolved candidates"
        );

        let outcome = dispatcher::dispatch(&target, request, &candidates, self.api.as_ref()).await?;

        match &outcome {
            DispatchOutcome::Applied { assignees, .. } if assignees.is_empty() => {
                tracing::info!(item = %target, "Nothing to assign");
            }
            DispatchOutcome::Applied {
                assignees,
                reviewers,
            } => {
                tracing::info!(
                    item = %target,
                    assigned = assignees.len(),
                    reviewers = reviewers.len(),
                    "Assignment applied"
                );
            }
            DispatchOutcome::Aborted { existing } => {
                tracing::info!(item = %target, existing = ?existing, "Assignment aborted");
            }
        }

        Ok(outcome)
    }
}
