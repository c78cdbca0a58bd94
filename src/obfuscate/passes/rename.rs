//! Declaration-site variable renaming.
//!
//! Each `var`/`let`/`const` declaration whose name is longer than one
//! character gets a single lowercase letter, assigned in first-seen order.
//! Only the declaration token is rewritten; later uses keep the old name.
//! After 26 distinct names the letters wrap around to `a`, so two
//! declarations can end up sharing a letter.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

use super::Pass;

/// `(boundary)(keyword)whitespace(identifier)` with ASCII word rules.
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[^0-9A-Za-z_])(var|let|const)\s+([0-9A-Za-z_]+)").expect("valid regex")
});

const ALPHABET_LEN: usize = 26;

/// Original identifier to replacement letter, for one renaming run.
#[derive(Debug, Default)]
pub struct VariableRenameMap {
    names: HashMap<String, char>,
    next: usize,
}

impl VariableRenameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replacement for `name`, assigning the next letter on first sight.
    ///
    /// Returns `None` for one-character names, which are never renamed.
    pub fn assign(&mut self, name: &str) -> Option<char> {
        if name.len() <= 1 {
            return None;
        }
        if let Some(&letter) = self.names.get(name) {
            return Some(letter);
        }
        let letter = (b'a' + (self.next % ALPHABET_LEN) as u8) as char;
        self.next += 1;
        self.names.insert(name.to_string(), letter);
        Some(letter)
    }

    /// Number of distinct names seen.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Rename declared variables at their declaration site only.
///
/// The whitespace between keyword and name is normalised to one space.
pub fn rename_variables(code: &str) -> String {
    let mut map = VariableRenameMap::new();
    let renamed = DECLARATION.replace_all(code, |caps: &Captures| {
        let name = &caps[3];
        let replacement = match map.assign(name) {
            Some(letter) => letter.to_string(),
            None => name.to_string(),
        };
        format!("{}{} {}", &caps[1], &caps[2], replacement)
    });
    tracing::debug!(renamed = map.len(), "renamed declarations");
    renamed.into_owned()
}

/// Pipeline pass wrapping [`rename_variables`].
pub struct RenameVariables;

impl Pass for RenameVariables {
    fn name(&self) -> &'static str {
        "rename_variables"
    }

    fn apply(&mut self, code: &mut String) {
        *code = rename_variables(code);
    }
}
