//! Response payload parsing and validation
//!
//! The service replies with a single JSON object, `{"corrections": [...]}`.

use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::error::{Result, ServiceError};
use crate::edit::CandidateEdit;

/// Top-level response object from the suggestion service.
#[derive(Debug, Deserialize)]
pub struct CorrectionPayload {
    pub corrections: Vec<CandidateEdit>,
}

/// Parse and validate a raw service reply.
///
/// An empty or whitespace-only reply is treated as "no issues found";
/// some model backends return a blank body instead of an empty list.
/// Entries whose `original` is empty are dropped here: a zero-width span
/// can never be located, and one bad entry must not invalidate the rest of
/// the batch.
pub fn parse_payload(raw: &str) -> Result<Vec<CandidateEdit>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let payload: CorrectionPayload =
        serde_json::from_str(raw).map_err(ServiceError::MalformedPayload)?;

    let mut edits = Vec::with_capacity(payload.corrections.len());
    for edit in payload.corrections {
        if edit.original.is_empty() {
            warn!("dropping edit with empty original: {:?}", edit.message);
            continue;
        }
        edits.push(edit);
    }
    Ok(edits)
}

/// JSON schema for the structured-output request configuration.
///
/// LLM-backed clients submit this alongside [`super::SYSTEM_PROMPT`] so the
/// model is constrained to the payload shape [`parse_payload`] expects.
pub fn response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "corrections": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "nullable": true },
                        "type": {
                            "type": "string",
                            "enum": [
                                "spelling", "grammar", "syntax", "repetition",
                                "coherence", "punctuation", "style"
                            ]
                        },
                        "original": { "type": "string" },
                        "suggestion": { "type": "string" },
                        "message": { "type": "string" }
                    },
                    "required": ["type", "original", "suggestion", "message"]
                }
            }
        },
        "required": ["corrections"]
    })
}
