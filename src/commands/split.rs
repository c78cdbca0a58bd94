//! Split command handler

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use codekit::format::{split_files, SplitResult};

use super::{read_code, Context};

/// Split inline styles and scripts out of the input.
///
/// With `json` the [`SplitResult`] is printed; otherwise every non-blank
/// buffer is written to `out_dir` under its configured name.
#[cfg(not(tarpaulin_include))]
pub fn handle(ctx: &Context, file: Option<&PathBuf>, out_dir: &Path, json: bool) -> Result<()> {
    let code = read_code(file, "split")?;
    let result = split_files(&code);

    if json {
        return ctx.emit(&serde_json::to_string_pretty(&result)?, None, "split result");
    }

    if result.is_empty() {
        ctx.notify("Nothing to split: input is not HTML");
        return Ok(());
    }

    let written = write_files(ctx, &result, out_dir)?;
    for path in &written {
        println!("{}", path.display());
    }
    if ctx.copy {
        ctx.notify("--copy ignored: split writes several files");
    }
    Ok(())
}

/// Write each non-blank buffer, returning the paths written.
pub fn write_files(ctx: &Context, result: &SplitResult, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let names = ctx
        .config
        .split
        .names()
        .context("Invalid [split] file name in config")?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let result = result.relink(&names.css, &names.js);
    let mut written = Vec::new();
    for (default_name, body) in result.files() {
        let path = out_dir.join(names.for_default(default_name));
        fs::write(&path, body).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote split file");
        written.push(path);
    }
    Ok(written)
}
