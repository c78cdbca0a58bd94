//! Switches for the obfuscation pipeline.

use serde::{Deserialize, Serialize};

use crate::detect::Category;

/// Which obfuscation passes to run.
///
/// The record itself implies no ordering; the pipeline always applies the
/// enabled passes as comments, whitespace, variables, strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    pub remove_comments: bool,
    pub compress_whitespace: bool,
    pub rename_variables: bool,
    pub encode_strings: bool,
}

impl TransformOptions {
    /// Every pass enabled.
    pub fn all() -> Self {
        Self {
            remove_comments: true,
            compress_whitespace: true,
            rename_variables: true,
            encode_strings: true,
        }
    }

    /// Passes worth running for a detected category.
    ///
    /// Comment and whitespace stripping suit any non-blank snippet; variable
    /// renaming and string encoding only make sense where script code may live.
    pub fn suggested_for(category: Category) -> Self {
        if category == Category::Empty {
            return Self::default();
        }
        Self {
            remove_comments: true,
            compress_whitespace: true,
            rename_variables: category.has_script(),
            encode_strings: category.has_script(),
        }
    }

    /// True when no pass is enabled.
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}
