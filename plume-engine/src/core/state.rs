//! Analysis state
//!
//! The store's view of the one analysis round trip that may be in flight.

use super::store::AnalysisError;

/// State of the current analysis round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnalysisState {
    /// No analysis in flight, nothing to report.
    #[default]
    Idle,

    /// A request is in flight. Pending corrections were cleared when it
    /// started, so no stale highlights are displayed alongside the spinner.
    Analyzing,

    /// The last analysis failed; this is the single user-visible error
    /// slot, replaced or cleared by the next round.
    Failed(AnalysisError),
}

impl AnalysisState {
    /// Check whether a request is in flight.
    pub fn is_analyzing(&self) -> bool {
        matches!(self, Self::Analyzing)
    }

    /// Get the displayed error, if any.
    pub fn error(&self) -> Option<&AnalysisError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}
