//! Span locator
//!
//! Maps candidate edits (returned by the service in textual order, but
//! without trustworthy positions) to concrete byte spans in the analyzed
//! text.

use plume_suggest::CandidateEdit;
use tracing::warn;

use super::correction::{Correction, IdSeq};

/// Locate each edit's span in `text`, in input order.
///
/// A monotonically advancing cursor enforces the service's "edits appear in
/// order" promise: each search starts at the cursor, and a hit advances the
/// cursor just past the hit's first character, so two edits can never claim
/// the same starting offset even when the service reports repeated or
/// overlapping occurrences of a short string. An edit not found from the
/// cursor onward falls back to an unconstrained search from the beginning
/// (without advancing the cursor), so fallback placements may come out of
/// order; consumers re-sort by `start`. Edits that cannot be located at all
/// are dropped; one bad edit must not invalidate the rest of the batch.
pub fn locate(text: &str, edits: Vec<CandidateEdit>, ids: &mut IdSeq) -> Vec<Correction> {
    let mut corrections = Vec::with_capacity(edits.len());
    let mut search_index = 0usize;

    for edit in edits {
        if edit.original.is_empty() {
            warn!("dropping edit with empty original");
            continue;
        }

        let from_cursor = text
            .get(search_index..)
            .and_then(|tail| tail.find(&edit.original));

        if let Some(found) = from_cursor {
            let start = search_index + found;
            // Step over the first matched char only: short originals
            // reported twice in a row may legitimately overlap.
            search_index = start + first_char_len(&edit.original);
            corrections.push(Correction::locate_at(edit, start, ids));
        } else if let Some(start) = text.find(&edit.original) {
            warn!(
                "edit {:?} not found from offset {}, placed at first occurrence",
                edit.original, search_index
            );
            corrections.push(Correction::locate_at(edit, start, ids));
        } else {
            warn!("dropping unlocatable edit {:?}", edit.original);
        }
    }

    corrections
}

fn first_char_len(s: &str) -> usize {
    s.chars().next().map_or(1, char::len_utf8)
}
