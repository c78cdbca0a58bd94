//! codekit - detect, obfuscate and format HTML, CSS and JavaScript snippets
//!
//! The text core ([`detect`], [`obfuscate`], [`format`]) is pure and
//! infallible: every function maps a string to a string (or a category) with
//! fixed patterns, never parsing and never failing on malformed input.
//! The remaining modules support the `codekit` binary.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod detect;
pub mod files;
pub mod format;
pub mod input;
pub mod obfuscate;
pub mod prompt;
pub mod samples;
pub mod theme;

pub use config::Config;
pub use detect::{detect_code_type, Category};
pub use format::{fix_errors, format, split_files, FormatTarget, SplitResult};
pub use obfuscate::{obfuscate, ObfuscationStats, TransformOptions};
