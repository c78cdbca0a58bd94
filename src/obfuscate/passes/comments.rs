//! Comment stripping, by category.
//!
//! - JavaScript: `//` line comments, then `/* */` blocks
//! - CSS: `/* */` blocks
//! - HTML: `<!-- -->` blocks, except conditional-comment markers
//!
//! Mixed snippets get all three in that order. Nothing here knows about string
//! literals, so `"http://x"` loses its tail; that is the accepted cost of a
//! pattern-based stripper.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Pass;
use crate::detect::Category;

static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//[^\n\r\u{2028}\u{2029}]*").expect("valid regex"));
static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex"));

const HTML_COMMENT_OPEN: &str = "<!--";
const HTML_COMMENT_CLOSE: &str = "-->";

/// Strip comments appropriate to `category` from `code`.
pub fn remove_comments(code: &str, category: Category) -> String {
    let mut result = code.to_string();

    if matches!(category, Category::JavaScript | Category::Mixed) {
        result = LINE_COMMENT.replace_all(&result, "").into_owned();
        result = BLOCK_COMMENT.replace_all(&result, "").into_owned();
    }

    if matches!(category, Category::Css | Category::Mixed) {
        result = BLOCK_COMMENT.replace_all(&result, "").into_owned();
    }

    if matches!(category, Category::Html | Category::Mixed) {
        result = strip_html_comments(&result);
    }

    result
}

/// Remove `<!-- ... -->` blocks, keeping `<!--[if ...` and `<!--<![endif]-->`.
///
/// A conditional opener is skipped one character at a time, so a plain
/// comment nested after it is still found and removed.
fn strip_html_comments(code: &str) -> String {
    let mut result = String::with_capacity(code.len());
    let mut copied_to = 0;
    let mut search_from = 0;

    while let Some(offset) = code[search_from..].find(HTML_COMMENT_OPEN) {
        let start = search_from + offset;
        let body = start + HTML_COMMENT_OPEN.len();

        if is_conditional_marker(&code[body..]) {
            search_from = start + 1;
            continue;
        }

        let Some(close) = code[body..].find(HTML_COMMENT_CLOSE) else {
            // Unterminated: no later opener can close either
            break;
        };
        let end = body + close + HTML_COMMENT_CLOSE.len();

        result.push_str(&code[copied_to..start]);
        copied_to = end;
        search_from = end;
    }

    result.push_str(&code[copied_to..]);
    result
}

/// Whether the text right after `<!--` opens a conditional comment.
fn is_conditional_marker(rest: &str) -> bool {
    if rest.starts_with("<![endif]") {
        return true;
    }
    rest.strip_prefix("[if")
        .and_then(|after| after.chars().next())
        .is_some_and(char::is_whitespace)
}

/// Pipeline pass wrapping [`remove_comments`].
pub struct RemoveComments {
    category: Category,
}

impl RemoveComments {
    pub fn new(category: Category) -> Self {
        Self { category }
    }
}

impl Pass for RemoveComments {
    fn name(&self) -> &'static str {
        "remove_comments"
    }

    fn apply(&mut self, code: &mut String) {
        *code = remove_comments(code, self.category);
    }
}
