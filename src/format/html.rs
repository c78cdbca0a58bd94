//! Tag-per-line HTML pretty printer.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BETWEEN_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r">\s+<").expect("valid regex"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[^>]+>").expect("valid regex"));
static BLOCK_CLOSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"</(html|head|body|div|section|article|ul|ol|table|form)>").expect("valid regex")
});
static BLOCK_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(html|head|body|div|section|article|ul|ol|table|form)[^>]*>")
        .expect("valid regex")
});

const INDENT: &str = "  ";

/// Put each tag on its own line, indenting inside block-level elements.
///
/// Block-level closers dedent before they are written and block-level openers
/// indent what follows. Text between tags starts an unindented line and the
/// next tag, indentation included, is appended to it. Tag names are matched as
/// prefixes, so `<header>` indents like `<head>` while `</header>` does not
/// dedent.
pub fn format_html(code: &str) -> String {
    let joined = BETWEEN_TAGS.replace_all(code, "><");

    let mut depth: usize = 0;
    let laid_out = TAG.replace_all(&joined, |caps: &Captures| {
        let tag = &caps[0];
        if BLOCK_CLOSE.is_match(tag) {
            depth = depth.saturating_sub(1);
        }
        let line = format!("{}{}\n", INDENT.repeat(depth), tag);
        if BLOCK_OPEN.is_match(tag) {
            depth += 1;
        }
        line
    });

    laid_out.trim().to_string()
}
