//! plume-suggest: the suggestion-service boundary for plume
//!
//! This crate owns the typed contract with the external correction service:
//! the candidate-edit data model, the [`SuggestionService`] trait, parsing
//! and validation of the service's JSON payload, and the prompt/schema an
//! LLM-backed client submits for structured output.

pub mod edit;
pub mod service;

pub use edit::{CandidateEdit, EditKind};
pub use service::payload::{CorrectionPayload, parse_payload, response_schema};
pub use service::prompt::SYSTEM_PROMPT;
pub use service::{ServiceError, SuggestionService};
