//! The language-family classification returned by the detector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Best-guess language family of a pasted snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Html,
    #[serde(rename = "javascript")]
    JavaScript,
    Css,
    /// HTML signal together with JavaScript or CSS signal
    Mixed,
    /// No pattern in any set matched
    Unknown,
    /// Input is blank after trimming
    Empty,
}

impl Category {
    /// All categories, in detector priority order.
    pub const ALL: [Category; 6] = [
        Category::Html,
        Category::JavaScript,
        Category::Css,
        Category::Mixed,
        Category::Unknown,
        Category::Empty,
    ];

    /// Wire name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::JavaScript => "javascript",
            Self::Css => "css",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
            Self::Empty => "empty",
        }
    }

    /// Human-readable name for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::JavaScript => "JavaScript",
            Self::Css => "CSS",
            Self::Mixed => "Mixed",
            Self::Unknown => "Unknown",
            Self::Empty => "Detecting...",
        }
    }

    /// Whether the snippet may carry script code.
    pub fn has_script(&self) -> bool {
        matches!(self, Self::JavaScript | Self::Mixed)
    }

    /// Whether the snippet may carry embedded `<style>`/`<script>` blocks.
    pub fn is_markup(&self) -> bool {
        matches!(self, Self::Html | Self::Mixed)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown code type '{0}' (expected html, javascript, css, mixed, unknown or empty)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "javascript" | "js" => Ok(Self::JavaScript),
            "css" => Ok(Self::Css),
            "mixed" => Ok(Self::Mixed),
            "unknown" => Ok(Self::Unknown),
            "empty" => Ok(Self::Empty),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}
