//! Correction store: the single owner of text and pending corrections
//!
//! All mutation flows through the named operations here; there is no
//! ambient shared state. Every operation is total and treats a stale
//! correction id as a benign no-op, because the UI may race a click against
//! an already-applied or already-ignored correction.

mod analysis;

pub use analysis::{AnalysisError, AnalysisRequest, Analyzer};

#[cfg(test)]
mod tests;

use tracing::debug;

use super::correction::{Correction, IdSeq};
use super::segment::{Segment, build_segments};
use super::state::AnalysisState;

/// Owner of the text being corrected and the located correction set.
#[derive(Debug, Default)]
pub struct CorrectionStore {
    /// The text under correction. Owned exclusively by the store while
    /// corrections are pending.
    text: String,
    /// Pending corrections, ascending by start offset.
    corrections: Vec<Correction>,
    /// State of the current analysis round trip.
    state: AnalysisState,
    /// Id generator for corrections the service did not name.
    ids: IdSeq,
    /// Bumped on every analysis start; superseded completions are dropped.
    epoch: u64,
}

impl CorrectionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store over initial text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Pending corrections, ascending by start offset.
    pub fn corrections(&self) -> &[Correction] {
        &self.corrections
    }

    /// Look up a pending correction by id.
    pub fn correction(&self, id: &str) -> Option<&Correction> {
        self.corrections.iter().find(|c| c.id == id)
    }

    /// The analysis state (idle, analyzing, or failed).
    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// Replace the text wholesale.
    ///
    /// Pending corrections are assumed invalid once the user edits the text
    /// directly, so the set is cleared. A late result from an analysis of
    /// the previous text is discarded by its snapshot tag (see
    /// [`CorrectionStore::complete_analysis`]).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.corrections.clear();
    }

    /// Drop all pending corrections and any displayed error.
    ///
    /// Never mutates text.
    pub fn clear_corrections(&mut self) {
        self.corrections.clear();
        if self.state.error().is_some() {
            self.state = AnalysisState::Idle;
        }
    }

    /// Derive the render segments for the current snapshot.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        build_segments(&self.text, &self.corrections)
    }

    /// Apply one correction: splice its suggestion over the span, then
    /// shift every other pending span by the length delta.
    ///
    /// Corrections entirely after the edited region move by the delta,
    /// corrections entirely before keep their offsets, and corrections
    /// overlapping the region are discarded (the text they pointed at has
    /// been rewritten). After this, `text[c.start..c.end] == c.original`
    /// still holds for every surviving correction `c`.
    pub fn apply(&mut self, id: &str) {
        let Some(index) = self.corrections.iter().position(|c| c.id == id) else {
            return;
        };
        let applied = self.corrections.remove(index);
        if self.text.get(applied.span()) != Some(applied.original.as_str()) {
            debug!("span of {} no longer matches its original, dropped", applied.id);
            return;
        }

        let delta = applied.delta();
        self.text.replace_range(applied.span(), &applied.suggestion);

        self.corrections.retain_mut(|c| {
            if c.start >= applied.end {
                c.start = c.start.saturating_add_signed(delta);
                c.end = c.end.saturating_add_signed(delta);
                true
            } else {
                c.end <= applied.start
            }
        });
    }

    /// Apply every pending correction in one pass and clear the set.
    ///
    /// Splicing right-to-left keeps the earlier offsets valid without any
    /// shift bookkeeping between steps. Each splice re-checks that the span
    /// still matches its original; an entry from a corrupted or overlapping
    /// set is skipped rather than corrupting the text.
    pub fn apply_all(&mut self) {
        let mut pending = std::mem::take(&mut self.corrections);
        pending.sort_by(|a, b| b.start.cmp(&a.start));
        for correction in pending {
            if self.text.get(correction.span()) == Some(correction.original.as_str()) {
                self.text
                    .replace_range(correction.span(), &correction.suggestion);
            } else {
                debug!("skipping correction {} with a drifted span", correction.id);
            }
        }
    }

    /// Drop one correction without touching the text.
    pub fn ignore(&mut self, id: &str) {
        self.corrections.retain(|c| c.id != id);
    }
}
