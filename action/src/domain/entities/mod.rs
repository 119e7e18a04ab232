//! Domain entities
//!
//! Nothing here outlives a single run: every value is created while resolving
//! one event and dropped when the process exits.

mod assignment;
mod candidates;
mod event;

pub use assignment::{AssignmentRequest, DispatchOutcome, TargetRef};
pub use candidates::CandidateSet;
pub use event::{
    EventPayload, IssuePayload, ProjectCardPayload, PullRequestPayload, PullRequestRef,
    Repository, TriggerEvent, User, WorkflowRunPayload,
};
