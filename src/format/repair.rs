//! Best-effort error repair.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detect::{detect_code_type, Category};

static MISSING_SEMICOLON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^;{])\s*\}").expect("valid regex"));

/// Patch the most common breakage in a pasted snippet.
///
/// - Missing closing braces are appended at the very end, one per unmatched
///   `{`. No attempt is made to find where they belong.
/// - If the original snippet is CSS, every `}` preceded by a character
///   other than `;` or `{` (optionally followed by blanks) gets `; ` put
///   before it. Blanks count as that character, so `red }` becomes
///   `red; }` and `red; }` becomes `red; ; }`.
pub fn fix_errors(code: &str) -> String {
    let mut result = code.to_string();

    let open = code.matches('{').count();
    let close = code.matches('}').count();
    if open > close {
        tracing::debug!(missing = open - close, "appending closing braces");
        result.push_str(&"}".repeat(open - close));
    }

    if detect_code_type(code) == Category::Css {
        result = MISSING_SEMICOLON.replace_all(&result, "${1}; }").into_owned();
    }

    result
}
