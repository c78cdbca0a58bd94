//! Obfuscate command handler

use std::path::PathBuf;

use anyhow::Result;

use codekit::detect::detect_code_type;
use codekit::obfuscate::{obfuscate_as, ObfuscationStats};
use codekit::TransformOptions;

use super::{read_code, Context};

/// Pass switches given on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassFlags {
    pub remove_comments: bool,
    pub compress_whitespace: bool,
    pub rename_variables: bool,
    pub encode_strings: bool,
    pub all: bool,
}

impl PassFlags {
    /// The explicit selection, or `None` when no pass flag was given.
    pub fn selection(&self) -> Option<TransformOptions> {
        if self.all {
            return Some(TransformOptions::all());
        }
        let options = TransformOptions {
            remove_comments: self.remove_comments,
            compress_whitespace: self.compress_whitespace,
            rename_variables: self.rename_variables,
            encode_strings: self.encode_strings,
        };
        (!options.is_noop()).then_some(options)
    }
}

/// Obfuscate the input with the selected passes.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    ctx: &Context,
    file: Option<&PathBuf>,
    output: Option<&PathBuf>,
    flags: PassFlags,
    stats: bool,
) -> Result<()> {
    let code = read_code(file, "obfuscate")?;
    let category = detect_code_type(&code);
    let options = flags
        .selection()
        .unwrap_or_else(|| ctx.config.obfuscate.options_for(category));
    tracing::debug!(?options, %category, "obfuscating");

    let result = obfuscate_as(&code, &options, category);

    if stats {
        ctx.notify(&ObfuscationStats::new(&code, &result).summary());
    }
    ctx.emit(&result, output, "obfuscated code")
}
