use crate::artifacts::diff::{ENTITY_REGEX, NEWLINE_REGEX};
use regex::Regex;
use std::sync::LazyLock;

/// Stands in for a single line break
pub const SINGLE_SENTINEL: &str = "&__SINGLE__;";
/// Stands in for a blank line (paragraph break)
pub const DOUBLE_SENTINEL: &str = "&__DOUBLE__;";

const HTML_ESCAPES: phf::Map<char, &'static str> = phf::phf_map! {
    '&' => "&amp;",
    '<' => "&lt;",
    '>' => "&gt;",
    '\'' => "&#39;",
    '"' => "&#34;",
};

const HTML_UNESCAPES: phf::Map<&'static str, char> = phf::phf_map! {
    "amp" => '&',
    "lt" => '<',
    "gt" => '>',
    "#39" => '\'',
    "#34" => '"',
};

static NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NEWLINE_REGEX).expect("newline pattern is valid"));
static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ENTITY_REGEX).expect("entity pattern is valid"));

pub type Token = String;
pub type TokenSequence = Vec<Token>;

/// Splits one revision of text into comparable word tokens.
///
/// Line terminators are normalized, HTML-significant characters escaped and
/// line breaks turned into sentinel tokens, so that structural breaks take
/// part in the alignment like any other word. The empty string yields a
/// sequence holding one empty token.
pub fn tokenize(input: &str) -> TokenSequence {
    let normalized = NEWLINE.replace_all(input, "\n");
    let escaped = escape_html(&normalized);

    escaped
        .trim()
        .replace("\n\n", &format!(" {DOUBLE_SENTINEL} "))
        .replace('\n', &format!(" {SINGLE_SENTINEL} "))
        .split(' ')
        .map(Token::from)
        .collect()
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for c in input.chars() {
        match HTML_ESCAPES.get(&c) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(c),
        }
    }

    escaped
}

/// Reverses [`escape_html`]. Entities it never produces are left untouched.
pub fn unescape_html(input: &str) -> String {
    ENTITY
        .replace_all(input, |caps: &regex::Captures| {
            HTML_UNESCAPES
                .get(&caps[1])
                .map(|c| c.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
