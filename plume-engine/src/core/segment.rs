//! Render segments
//!
//! A transient view of the text as plain runs and correction runs. Segments
//! borrow from one `(text, corrections)` snapshot and are recomputed
//! wholesale on every call; the borrow makes "never outlives a snapshot"
//! structural.

use super::correction::Correction;

/// One render unit: inert text or an actionable correction span.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// A plain text run. `offset` is the run's byte position in the
    /// snapshot, usable as a render key.
    Text { content: &'a str, offset: usize },
    /// A highlighted correction run. `content` is the exact current
    /// substring of the span.
    Correction {
        correction: &'a Correction,
        content: &'a str,
    },
}

impl Segment<'_> {
    /// The substring of the snapshot this segment covers.
    pub fn content(&self) -> &str {
        match self {
            Segment::Text { content, .. } => content,
            Segment::Correction { content, .. } => content,
        }
    }

    /// The correction behind this segment, if it is a correction run.
    pub fn correction(&self) -> Option<&Correction> {
        match self {
            Segment::Text { .. } => None,
            Segment::Correction { correction, .. } => Some(correction),
        }
    }
}

/// Build the segment sequence for `text` and a correction set.
///
/// The input set need not be sorted, non-overlapping, or even consistent
/// with `text`: the builder sorts by `start` ascending, skips any span that
/// overlaps an already-emitted one, and skips spans that have drifted out
/// of range or off a char boundary (a correction set can briefly lag behind
/// a text edit). Gaps between accepted spans come out as plain runs; empty
/// gaps are omitted. Concatenating the returned segments' contents always
/// reproduces `text`. Deterministic for identical inputs.
pub fn build_segments<'a>(text: &'a str, corrections: &'a [Correction]) -> Vec<Segment<'a>> {
    let mut sorted: Vec<&Correction> = corrections.iter().collect();
    sorted.sort_by_key(|c| c.start);

    let mut segments = Vec::new();
    let mut cursor = 0usize;

    for correction in sorted {
        if correction.start < cursor {
            continue; // overlaps the previous accepted span
        }
        if correction.start >= text.len() {
            break; // sorted, so everything further is out of range too
        }
        let end = correction.end.min(text.len());
        let Some(content) = text.get(correction.start..end) else {
            continue; // stale span off a char boundary
        };
        if correction.start > cursor {
            segments.push(Segment::Text {
                content: &text[cursor..correction.start],
                offset: cursor,
            });
        }
        segments.push(Segment::Correction {
            correction,
            content,
        });
        cursor = end;
    }

    if cursor < text.len() {
        segments.push(Segment::Text {
            content: &text[cursor..],
            offset: cursor,
        });
    }

    segments
}
