//! Fixed pattern sets used to score a snippet.
//!
//! Every pattern is an existence test over the whole text (no line anchoring).
//! Word boundaries are ASCII-only, and the HTML tag names fold case over ASCII
//! only, so non-Latin identifiers next to a keyword still count as a boundary.

use once_cell::sync::Lazy;
use regex::RegexSet;

/// Anything that is not an ASCII word character, or the edge of the text.
const NON_WORD_BEFORE: &str = r"(?:^|[^0-9A-Za-z_])";
const NON_WORD_AFTER: &str = r"(?:[^0-9A-Za-z_]|$)";

const HTML_TAGS: &[&str] = &[
    "html", "body", "div", "span", "p", "script", "style", "link", "meta",
];

/// Opening tag `<name` followed by a word boundary, case-insensitive.
fn opening_tag(name: &str) -> String {
    format!("<(?i-u:{name}){NON_WORD_AFTER}")
}

/// Whole-word keyword.
fn word(keyword: &str) -> String {
    format!("{NON_WORD_BEFORE}{keyword}{NON_WORD_AFTER}")
}

/// Keyword at a word start, followed by optional whitespace and `suffix`.
fn leading_word(keyword: &str, suffix: &str) -> String {
    format!(r"{NON_WORD_BEFORE}{keyword}\s*{suffix}")
}

pub(crate) static HTML_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    build_set(HTML_TAGS.iter().map(|tag| opening_tag(tag)).collect())
});

pub(crate) static JS_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    build_set(vec![
        r"function\s*\(".to_string(),
        word("var"),
        word("let"),
        word("const"),
        "=>".to_string(),
        leading_word("if", r"\("),
        leading_word("for", r"\("),
        leading_word("while", r"\("),
        r"console\.log".to_string(),
        r"document\.".to_string(),
        r"window\.".to_string(),
        "addEventListener".to_string(),
    ])
});

pub(crate) static CSS_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    build_set(vec![
        r"\{\s*[a-zA-Z-]+\s*:".to_string(),
        leading_word("color", ":"),
        leading_word("width", ":"),
        leading_word("height", ":"),
        leading_word("margin", ":"),
        leading_word("padding", ":"),
        r"@media\s".to_string(),
        // `class {` is not real CSS syntax but has always been part of the set
        leading_word("class", r"\{"),
    ])
});

fn build_set(patterns: Vec<String>) -> RegexSet {
    RegexSet::new(&patterns).unwrap_or_else(|e| panic!("invalid detector pattern: {e}"))
}

/// Number of patterns in `set` that match somewhere in `text`.
pub(crate) fn count_matches(set: &RegexSet, text: &str) -> usize {
    set.matches(text).iter().count()
}
