//! Located corrections
//!
//! A [`Correction`] is the addressable form of a service edit: the
//! candidate fields plus the exact byte span it occupies in the text it was
//! located against.

use std::ops::Range;

use plume_suggest::{CandidateEdit, EditKind};

/// A located correction proposal.
///
/// `text[start..end] == original` holds at the instant a correction is
/// created; the store's offset bookkeeping keeps it true (or drops the
/// correction) as the text mutates underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// Unique within one store lifetime; service-supplied or generated.
    pub id: String,
    /// Edit category.
    pub kind: EditKind,
    /// Substring the span covered when the correction was located.
    pub original: String,
    /// Replacement substring.
    pub suggestion: String,
    /// Short human-readable rationale.
    pub message: String,
    /// Start byte offset into the store text (inclusive).
    pub start: usize,
    /// End byte offset into the store text (exclusive).
    pub end: usize,
}

impl Correction {
    /// Build a correction from a candidate edit located at `start`.
    pub fn locate_at(edit: CandidateEdit, start: usize, ids: &mut IdSeq) -> Self {
        let end = start + edit.original.len();
        Self {
            id: edit.id.unwrap_or_else(|| ids.next_id()),
            kind: edit.kind,
            original: edit.original,
            suggestion: edit.suggestion,
            message: edit.message,
            start,
            end,
        }
    }

    /// Byte span as a range.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length delta the replacement causes when applied.
    pub fn delta(&self) -> isize {
        self.suggestion.len() as isize - (self.end - self.start) as isize
    }
}

/// Generator for store-local correction ids.
///
/// Uniqueness is only required within one store's lifetime, so a
/// monotonically increasing sequence suffices.
#[derive(Debug, Clone, Default)]
pub struct IdSeq(u64);

impl IdSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next id.
    pub fn next_id(&mut self) -> String {
        self.0 += 1;
        format!("corr-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(id: Option<&str>, original: &str, suggestion: &str) -> CandidateEdit {
        CandidateEdit {
            id: id.map(str::to_string),
            kind: EditKind::Spelling,
            original: original.to_string(),
            suggestion: suggestion.to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn test_locate_at_spans_the_original() {
        let mut ids = IdSeq::new();
        let c = Correction::locate_at(edit(None, "vait", "vais"), 3, &mut ids);
        assert_eq!(c.span(), 3..7);
        assert_eq!(c.delta(), 0);
    }

    #[test]
    fn test_service_id_wins_over_generated() {
        let mut ids = IdSeq::new();
        let c = Correction::locate_at(edit(Some("svc-9"), "a", "à"), 0, &mut ids);
        assert_eq!(c.id, "svc-9");

        let c = Correction::locate_at(edit(None, "a", "à"), 0, &mut ids);
        assert_eq!(c.id, "corr-1");
    }

    #[test]
    fn test_delta_signs() {
        let mut ids = IdSeq::new();
        let longer = Correction::locate_at(edit(None, "vait", "allait"), 0, &mut ids);
        assert_eq!(longer.delta(), 2);

        let shorter = Correction::locate_at(edit(None, "allait", "va"), 0, &mut ids);
        assert_eq!(shorter.delta(), -4);
    }

    #[test]
    fn test_id_seq_never_repeats() {
        let mut ids = IdSeq::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
    }
}
