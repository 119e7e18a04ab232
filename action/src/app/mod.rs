//! Application layer
//!
//! Contains the assignment pipeline stages and the service that sequences them.

pub mod assign_service;
pub mod candidate_builder;
pub mod context_extractor;
pub mod dispatcher;
pub mod input_parser;

pub use assign_service::AssignService;
pub use input_parser::parse_request;
