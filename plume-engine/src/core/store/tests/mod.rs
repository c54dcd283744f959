//! Tests for the correction store

use plume_suggest::{CandidateEdit, EditKind};

use super::*;


fn edit(original: &str, suggestion: &str) -> CandidateEdit {
    CandidateEdit {
        id: None,
        kind: EditKind::Grammar,
        original: original.to_string(),
        suggestion: suggestion.to_string(),
        message: String::new(),
    }
}

/// Store with `edits` already located against `text`.
fn analyzed_store(text: &str, edits: Vec<CandidateEdit>) -> CorrectionStore {
    let mut store = CorrectionStore::with_text(text);
    let request = store.begin_analysis().expect("text must be non-empty");
    store.complete_analysis(request, Ok(edits));
    store
}

/// Hand-placed correction, for offset scenarios the locator would place
/// differently (e.g. an `original` that also occurs inside an earlier span).
fn corr(id: &str, original: &str, suggestion: &str, start: usize) -> Correction {
    Correction {
        id: id.to_string(),
        kind: EditKind::Grammar,
        original: original.to_string(),
        suggestion: suggestion.to_string(),
        message: String::new(),
        start,
        end: start + original.len(),
    }
}

/// Assert `text[c.start..c.end] == c.original` for every pending correction.
fn assert_spans_hold(store: &CorrectionStore) {
    for c in store.corrections() {
        assert_eq!(
            store.text().get(c.span()),
            Some(c.original.as_str()),
            "span of {} drifted",
            c.id
        );
    }
}
