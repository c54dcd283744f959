//! Suggestion-service boundary
//!
//! The correction service is an external collaborator; this module owns the
//! typed contract with it. Schema enforcement is a validation concern of
//! this boundary, so the engine core only ever sees validated
//! [`CandidateEdit`]s.

pub mod error;
pub mod payload;
pub mod prompt;

pub use error::ServiceError;
pub use payload::{CorrectionPayload, parse_payload, response_schema};
pub use prompt::SYSTEM_PROMPT;

use std::future::Future;

use crate::edit::CandidateEdit;

/// An external correction-suggestion service.
///
/// The service contract promises:
/// - edits are returned in the order their `original` substrings appear in
///   the input text;
/// - each `original` is an exact, case-sensitive substring of the input;
/// - clean text yields an empty list, never an absent result.
///
/// Failures are recoverable [`ServiceError`]s, never panics.
pub trait SuggestionService {
    /// Request correction proposals for `text`, authenticated by
    /// `credential` (an opaque token).
    fn suggest(
        &self,
        text: &str,
        credential: &str,
    ) -> impl Future<Output = Result<Vec<CandidateEdit>, ServiceError>> + Send;
}
