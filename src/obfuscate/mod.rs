//! Heuristic code obfuscation.
//!
//! The pipeline runs up to four independent passes over raw text, always in
//! the same order and each consuming the previous pass's output:
//!
//! 1. [`remove_comments`] (needs the detected [`Category`])
//! 2. [`compress_whitespace`]
//! 3. [`rename_variables`]
//! 4. [`encode_strings`]
//!
//! There is no parsing involved; every pass is pattern based and best effort.
//!
//! # Module Structure
//!
//! - [`options`] - Which passes to run
//! - [`passes`] - The passes and the [`Pass`] trait
//! - [`stats`] - Before/after size report

mod options;
pub mod passes;
mod stats;

pub use options::TransformOptions;
pub use passes::{
    compress_whitespace, encode_strings, remove_comments, rename_variables, Pass,
    VariableRenameMap,
};
pub use stats::ObfuscationStats;

use crate::detect::{detect_code_type, Category};
use passes::{CompressWhitespace, EncodeStrings, RemoveComments, RenameVariables};

/// An ordered chain of passes built from [`TransformOptions`].
pub struct Obfuscator {
    passes: Vec<Box<dyn Pass>>,
}

impl Obfuscator {
    /// Build the pass chain for `options`, stripping comments for `category`.
    pub fn new(options: &TransformOptions, category: Category) -> Self {
        let mut passes: Vec<Box<dyn Pass>> = Vec::new();
        if options.remove_comments {
            passes.push(Box::new(RemoveComments::new(category)));
        }
        if options.compress_whitespace {
            passes.push(Box::new(CompressWhitespace));
        }
        if options.rename_variables {
            passes.push(Box::new(RenameVariables));
        }
        if options.encode_strings {
            passes.push(Box::new(EncodeStrings));
        }
        Self { passes }
    }

    /// Create with specific passes (for testing).
    pub fn with_passes(passes: Vec<Box<dyn Pass>>) -> Self {
        Self { passes }
    }

    /// Names of the passes that will run, in order.
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Run every pass over `code`.
    pub fn run(&mut self, code: &str) -> String {
        let mut result = code.to_string();
        for pass in self.passes.iter_mut() {
            pass.apply(&mut result);
            tracing::debug!(pass = pass.name(), len = result.len(), "applied pass");
        }
        result
    }
}

/// Obfuscate `code`, detecting its category first.
pub fn obfuscate(code: &str, options: &TransformOptions) -> String {
    obfuscate_as(code, options, detect_code_type(code))
}

/// Obfuscate `code` as a known `category`.
pub fn obfuscate_as(code: &str, options: &TransformOptions, category: Category) -> String {
    Obfuscator::new(options, category).run(code)
}
