//! Word-level diffing
//!
//! The pipeline is linear, each stage feeding the next:
//!
//! - `token`: normalizes a revision and splits it into word tokens, encoding line breaks
//!   as sentinel tokens
//! - `alignment`: the LCS score table over every prefix pair of the two token sequences
//! - `word_diff`: the backward walk over the table that yields ordered diff segments
//! - `segment`: the tagged unit of output (equal, inserted, deleted)
//! - `render`: markup, run merging, plain-text markers and newline restoration
//!
//! The whole pipeline is a total function of its inputs: nothing here fails.
//! Memory grows with the product of both token counts (the alignment table), which is
//! the practical limit on document size.

pub mod alignment;
pub mod render;
pub mod segment;
pub mod token;
pub mod word_diff;

use crate::artifacts::diff::segment::DiffSegment;
use crate::artifacts::diff::word_diff::{DiffAlgorithm, LcsWordDiff};

pub const NEWLINE_REGEX: &str = r"\r\n?";
pub const ENTITY_REGEX: &str = r"&(#?\w+);";
// ASCII whitespace only, a no-break space next to a line break is text
pub const DOUBLE_SENTINEL_REGEX: &str = r"([\t\n\f\r ]*?)&__DOUBLE__;([\t\n\f\r ]*)";
pub const SINGLE_SENTINEL_REGEX: &str = r"([\t\n\f\r ]*?)&__SINGLE__;([\t\n\f\r ]*)";

/// Computes the word diff between the `previous` (older) and `current` (newer) revision.
///
/// Changed runs are wrapped in `<ins>`/`<del>` tags, or in `+++`/`---` markers when
/// `plaintext` is set. The text itself is HTML-escaped in both modes.
pub fn calculate(previous: &str, current: &str, plaintext: bool) -> String {
    render::render(&diff_segments(previous, current), plaintext)
}

/// Runs tokenization, alignment and reconstruction, leaving rendering to the caller.
pub fn diff_segments(previous: &str, current: &str) -> Vec<DiffSegment> {
    let prev = token::tokenize(previous);
    let curr = token::tokenize(current);

    tracing::debug!(
        previous_tokens = prev.len(),
        current_tokens = curr.len(),
        "computing word diff"
    );

    LcsWordDiff::new(&prev, &curr).diff()
}
