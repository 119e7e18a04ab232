//! Domain layer
//!
//! Contains the assignment model with no external dependencies.
//! - `entities`: Invocation-scoped values (request, target, candidates, event payload)
//! - `ports`: Trait definitions for the GitHub capabilities the pipeline needs

pub mod entities;
pub mod ports;
