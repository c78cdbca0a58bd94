//! Code type detection for pasted snippets.
//!
//! The detector scores a snippet against three fixed pattern sets (HTML,
//! JavaScript, CSS). Each score is the number of patterns in the set that
//! matched at least once, not the number of occurrences.
//!
//! # Classification
//!
//! - Blank input is [`Category::Empty`], no patterns evaluated
//! - No pattern matched at all is [`Category::Unknown`]
//! - Any HTML signal together with JavaScript or CSS signal is
//!   [`Category::Mixed`], even if HTML has the lowest score
//! - Otherwise the highest score wins, ties going html > javascript > css

mod category;
mod patterns;

pub use category::{Category, ParseCategoryError};

use serde::Serialize;

use patterns::{count_matches, CSS_PATTERNS, HTML_PATTERNS, JS_PATTERNS};

/// Per-set pattern scores for one snippet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub html: usize,
    pub javascript: usize,
    pub css: usize,
}

impl Scores {
    /// Score `code` against all three pattern sets.
    pub fn of(code: &str) -> Self {
        Self {
            html: count_matches(&HTML_PATTERNS, code),
            javascript: count_matches(&JS_PATTERNS, code),
            css: count_matches(&CSS_PATTERNS, code),
        }
    }

    pub fn max(&self) -> usize {
        self.html.max(self.javascript).max(self.css)
    }

    /// Map scores to a category. Never returns [`Category::Empty`].
    pub fn classify(&self) -> Category {
        let max = self.max();
        if max == 0 {
            return Category::Unknown;
        }
        if self.html > 0 && (self.javascript > 0 || self.css > 0) {
            return Category::Mixed;
        }
        if self.html == max {
            Category::Html
        } else if self.javascript == max {
            Category::JavaScript
        } else {
            Category::Css
        }
    }
}

/// Full detection result, for callers that want to show why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub category: Category,
    pub scores: Scores,
}

/// Detect with scores. Blank input short-circuits with zero scores.
pub fn detect(code: &str) -> Detection {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Detection {
            category: Category::Empty,
            scores: Scores::default(),
        };
    }

    let scores = Scores::of(trimmed);
    let category = scores.classify();
    tracing::debug!(
        html = scores.html,
        javascript = scores.javascript,
        css = scores.css,
        %category,
        "detected code type"
    );
    Detection { category, scores }
}

/// Classify a snippet by language family.
pub fn detect_code_type(code: &str) -> Category {
    detect(code).category
}
