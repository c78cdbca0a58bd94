//! Whitespace compression.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Pass;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static AROUND_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*([{}();,:])\s*").expect("valid regex"));
static SEMICOLON_BEFORE_BRACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:;\s*)+\}").expect("valid regex"));

/// Collapse whitespace and drop it next to punctuation.
///
/// Steps, in order:
/// 1. Any whitespace run becomes one space
/// 2. Spaces touching `{ } ( ) ; , :` are removed
/// 3. A `;` right before `}` is removed (a run `;;}` goes as a whole)
/// 4. Leading/trailing whitespace is trimmed
///
/// The result is a fixed point: compressing it again changes nothing.
pub fn compress_whitespace(code: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(code, " ");
    let tightened = AROUND_PUNCTUATION.replace_all(&collapsed, "${1}");
    let unterminated = SEMICOLON_BEFORE_BRACE.replace_all(&tightened, "}");
    unterminated.trim().to_string()
}

/// Pipeline pass wrapping [`compress_whitespace`].
pub struct CompressWhitespace;

impl Pass for CompressWhitespace {
    fn name(&self) -> &'static str {
        "compress_whitespace"
    }

    fn apply(&mut self, code: &mut String) {
        *code = compress_whitespace(code);
    }
}
