//! Fix command handler

use std::path::PathBuf;

use anyhow::Result;

use codekit::format::fix_errors;

use super::{read_code, Context};

#[cfg(not(tarpaulin_include))]
pub fn handle(ctx: &Context, file: Option<&PathBuf>, output: Option<&PathBuf>) -> Result<()> {
    let code = read_code(file, "fix")?;
    ctx.emit(&fix_errors(&code), output, "fixed code")
}
