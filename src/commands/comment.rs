//! Comment command handler

use std::path::PathBuf;

use anyhow::Result;

use codekit::format::{add_comments, CommentStyle};

use super::{read_code, Context};

/// Annotate the input. `style` falls back to `[comments] style`.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    ctx: &Context,
    file: Option<&PathBuf>,
    output: Option<&PathBuf>,
    style: Option<CommentStyle>,
) -> Result<()> {
    let code = read_code(file, "comment")?;
    let comments = &ctx.config.comments;
    let style = style.unwrap_or(comments.style);
    let now = chrono::Local::now().naive_local();

    let annotated = add_comments(&code, style, &comments.header_title, now);
    ctx.emit(&annotated, output, "commented code")
}
