//! Line-breaking JavaScript and CSS pretty printers.
//!
//! Both are lexical approximations: they break lines at `;`, `{` and `}`
//! without tracking nesting depth, so only one level of indentation is ever
//! applied at each brace.

use once_cell::sync::Lazy;
use regex::Regex;

static SEMICOLON: Lazy<Regex> = Lazy::new(|| Regex::new(r";\s*").expect("valid regex"));
static OPEN_BRACE_AFTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\s*").expect("valid regex"));
static OPEN_BRACE_BEFORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\{").expect("valid regex"));
static CLOSE_BRACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\}").expect("valid regex"));
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Break JavaScript after `;` and `{`, and before `}`.
pub fn format_js(code: &str) -> String {
    let result = SEMICOLON.replace_all(code, ";\n");
    let result = OPEN_BRACE_AFTER.replace_all(&result, "{\n  ");
    let result = CLOSE_BRACE.replace_all(&result, "\n}");
    let result = BLANK_LINES.replace_all(&result, "\n");
    result.trim().to_string()
}

/// One declaration per line inside each rule block.
pub fn format_css(code: &str) -> String {
    let result = OPEN_BRACE_BEFORE.replace_all(code, " {\n  ");
    let result = SEMICOLON.replace_all(&result, ";\n  ");
    let result = CLOSE_BRACE.replace_all(&result, "\n}\n");
    let result = BLANK_LINES.replace_all(&result, "\n");
    result.trim().to_string()
}
