//! Candidate-edit data model shared with the suggestion service

use serde::{Deserialize, Serialize};

/// Category of a proposed edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    Spelling,
    Grammar,
    Syntax,
    Repetition,
    Coherence,
    Punctuation,
    Style,
}

impl EditKind {
    /// Wire/display name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            EditKind::Spelling => "spelling",
            EditKind::Grammar => "grammar",
            EditKind::Syntax => "syntax",
            EditKind::Repetition => "repetition",
            EditKind::Coherence => "coherence",
            EditKind::Punctuation => "punctuation",
            EditKind::Style => "style",
        }
    }
}

/// An unlocated correction proposal from the suggestion service.
///
/// The service is asked to return edits in the order their `original`
/// substrings appear in the analyzed text. Any position information it
/// volunteers is ignored at this boundary; spans are recomputed locally
/// against the text the analysis was requested for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateEdit {
    /// Service-supplied identifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Edit category.
    #[serde(rename = "type")]
    pub kind: EditKind,
    /// Exact substring of the analyzed text to replace (case-sensitive,
    /// whitespace-sensitive).
    pub original: String,
    /// Replacement substring.
    pub suggestion: String,
    /// Short human-readable rationale.
    pub message: String,
}
