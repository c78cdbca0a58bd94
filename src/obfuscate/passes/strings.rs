//! Double-quoted string literal encoding.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fmt::Write;

use super::Pass;

/// `"..."` with no attempt to honour escaped quotes.
static DOUBLE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).expect("valid regex"));

/// Replace every character of every double-quoted literal with `\uXXXX`.
///
/// Characters outside the BMP become a surrogate pair of escapes. Line
/// terminators inside a literal are left as they are.
pub fn encode_strings(code: &str) -> String {
    DOUBLE_QUOTED
        .replace_all(code, |caps: &Captures| {
            format!("\"{}\"", escape_unicode(&caps[1]))
        })
        .into_owned()
}

fn escape_unicode(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len() * 6);
    for c in content.chars() {
        if is_line_terminator(c) {
            escaped.push(c);
            continue;
        }
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
            // Writing to a String cannot fail
            let _ = write!(escaped, "\\u{:04x}", unit);
        }
    }
    escaped
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Pipeline pass wrapping [`encode_strings`].
pub struct EncodeStrings;

impl Pass for EncodeStrings {
    fn name(&self) -> &'static str {
        "encode_strings"
    }

    fn apply(&mut self, code: &mut String) {
        *code = encode_strings(code);
    }
}
