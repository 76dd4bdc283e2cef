use crate::artifacts::diff::segment::{DEL_CLOSE, DEL_OPEN, DiffSegment, INS_CLOSE, INS_OPEN};
use crate::artifacts::diff::{DOUBLE_SENTINEL_REGEX, SINGLE_SENTINEL_REGEX};
use regex::Regex;
use std::sync::LazyLock;

pub const INS_MARKER: &str = "+++";
pub const DEL_MARKER: &str = "---";

static DOUBLE_SENTINEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DOUBLE_SENTINEL_REGEX).expect("double sentinel pattern is valid"));
static SINGLE_SENTINEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SINGLE_SENTINEL_REGEX).expect("single sentinel pattern is valid"));

/// Renders ordered diff segments into their final inline form.
pub fn render(segments: &[DiffSegment], plaintext: bool) -> String {
    let markup = merged_markup(segments);

    if plaintext {
        restore_newlines(&to_plaintext(&markup))
    } else {
        restore_newlines(&markup)
    }
}

pub fn to_markup(segments: &[DiffSegment]) -> String {
    segments.iter().map(DiffSegment::as_markup).collect()
}

/// Markup with same-kind runs merged and empty changes dropped, ready for markers and newlines.
pub fn merged_markup(segments: &[DiffSegment]) -> String {
    drop_empty_changes(&merge_adjacent(&to_markup(segments)))
}

/// Collapses runs of consecutive changes of the same kind into one tag pair.
pub fn merge_adjacent(markup: &str) -> String {
    markup
        .replace(&format!("{DEL_CLOSE} {DEL_OPEN}"), " ")
        .replace(&format!("{INS_CLOSE} {INS_OPEN}"), " ")
}

/// Removes tag pairs left around nothing, as an empty revision produces.
///
/// Runs after [`merge_adjacent`], so an empty token inside a run still leaves its join space.
pub fn drop_empty_changes(markup: &str) -> String {
    markup
        .replace(&format!("{INS_OPEN}{INS_CLOSE} "), "")
        .replace(&format!("{DEL_OPEN}{DEL_CLOSE} "), "")
}

/// Swaps tags for the symmetric `+++` / `---` plain-text markers.
pub fn to_plaintext(markup: &str) -> String {
    markup
        .replace(INS_OPEN, INS_MARKER)
        .replace(INS_CLOSE, INS_MARKER)
        .replace(DEL_OPEN, DEL_MARKER)
        .replace(DEL_CLOSE, DEL_MARKER)
}

/// Turns sentinel tokens back into line breaks, dropping the join spaces around them, and
/// trims the result.
pub fn restore_newlines(markup: &str) -> String {
    let restored = DOUBLE_SENTINEL.replace_all(markup, "\n\n");
    let restored = SINGLE_SENTINEL.replace_all(&restored, "\n");

    restored.trim().to_string()
}
