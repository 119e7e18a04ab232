//! Domain ports (traits)
//!
//! Port traits define the GitHub capabilities the assignment pipeline requires.
//! Adapters provide concrete implementations of these traits.

pub mod github;

pub use github::{AssignmentApi, GitHubIssue, GitHubPullRequest, GitHubUser, TeamLookup};
