//! Format command handler

use std::path::PathBuf;

use anyhow::Result;

use codekit::format::{format, FormatTarget};

use super::{read_code, Context};

/// Pretty print the input. `target` falls back to `[format] default_type`.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    ctx: &Context,
    file: Option<&PathBuf>,
    output: Option<&PathBuf>,
    target: Option<FormatTarget>,
) -> Result<()> {
    let code = read_code(file, "format")?;
    let target = target.unwrap_or(ctx.config.format.default_type);
    ctx.emit(&format(&code, target), output, "formatted code")
}
