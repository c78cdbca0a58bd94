//! Pretty printing, repair and splitting of snippets.
//!
//! All of these operate on raw text with patterns; none of them fail. Bad
//! input comes back unchanged or partially transformed.
//!
//! # Module Structure
//!
//! - [`html`] - Tag-per-line HTML layout
//! - [`lexical`] - JavaScript and CSS line breaking
//! - [`repair`] - Brace balancing and CSS semicolons
//! - [`split`] - Moving `<style>`/`<script>` bodies into their own files
//! - [`annotate`] - Comment insertion

mod annotate;
mod html;
mod lexical;
mod repair;
mod split;

pub use annotate::{add_comments, CommentStyle, DEFAULT_HEADER_TITLE};
pub use html::format_html;
pub use lexical::{format_css, format_js};
pub use repair::fix_errors;
pub use split::{split_files, SplitResult, CSS_FILE, HTML_FILE, JS_FILE};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::detect::{detect_code_type, Category, ParseCategoryError};

/// Which formatter to use: detected, or forced to a category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FormatTarget {
    #[default]
    Auto,
    Fixed(Category),
}

impl FormatTarget {
    /// The category to format as, detecting from `code` when automatic.
    pub fn resolve(&self, code: &str) -> Category {
        match self {
            Self::Auto => detect_code_type(code),
            Self::Fixed(category) => *category,
        }
    }
}

impl fmt::Display for FormatTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Fixed(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for FormatTarget {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else {
            s.parse().map(Self::Fixed)
        }
    }
}

impl TryFrom<String> for FormatTarget {
    type Error = ParseCategoryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FormatTarget> for String {
    fn from(target: FormatTarget) -> Self {
        target.to_string()
    }
}

impl From<Category> for FormatTarget {
    fn from(category: Category) -> Self {
        Self::Fixed(category)
    }
}

/// Pretty print `code` with the formatter for `target`.
///
/// Mixed, unknown and empty snippets go through the HTML formatter.
pub fn format(code: &str, target: FormatTarget) -> String {
    let category = target.resolve(code);
    tracing::debug!(%target, %category, "formatting");
    match category {
        Category::JavaScript => format_js(code),
        Category::Css => format_css(code),
        Category::Html | Category::Mixed | Category::Unknown | Category::Empty => {
            format_html(code)
        }
    }
}
