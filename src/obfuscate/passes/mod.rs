//! Individual obfuscation passes.
//!
//! Each pass implements [`Pass`] and rewrites the text in place, so they can be
//! chained by [`crate::obfuscate::Obfuscator`]. Every pass is also available as
//! a plain function for callers that want a single step.
//!
//! - [`RemoveComments`] - category-aware comment stripping
//! - [`CompressWhitespace`] - whitespace collapse around punctuation
//! - [`RenameVariables`] - declaration-site renaming to single letters
//! - [`EncodeStrings`] - `\uXXXX` escaping of double-quoted literals

mod comments;
mod rename;
mod strings;
mod whitespace;

pub use comments::{remove_comments, RemoveComments};
pub use rename::{rename_variables, RenameVariables, VariableRenameMap};
pub use strings::{encode_strings, EncodeStrings};
pub use whitespace::{compress_whitespace, CompressWhitespace};

/// A single text rewrite step.
pub trait Pass {
    /// Stable name for logging.
    fn name(&self) -> &'static str;

    /// Rewrite `code` in place.
    fn apply(&mut self, code: &mut String);
}
