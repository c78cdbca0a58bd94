//! Prompt command handler

use std::path::PathBuf;

use anyhow::Result;

use codekit::input::read_source;
use codekit::prompt::{build_prompt, PromptKind};

use super::Context;

/// Print `existing` (if given) extended with the instruction for `kind`.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    ctx: &Context,
    kind: PromptKind,
    context: Option<&PathBuf>,
    existing: Option<&PathBuf>,
) -> Result<()> {
    let existing = existing
        .map(|path| read_source(Some(path.as_path())))
        .transpose()?
        .unwrap_or_default();
    let context = context.map(|path| read_source(Some(path.as_path()))).transpose()?;

    let prompt = build_prompt(existing.trim_end(), kind, context.as_deref());
    ctx.emit(&prompt, None, "prompt")
}
