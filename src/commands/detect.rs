//! Detect command handler

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use codekit::detect::{detect, Scores};
use codekit::input::read_source;
use codekit::Category;

use super::Context;

/// JSON shape of `codekit detect --json`.
#[derive(Debug, Serialize)]
struct DetectReport {
    category: Category,
    label: &'static str,
    scores: Scores,
}

/// Print the detected category of the input.
///
/// Blank input is not an error here: it is reported as `empty`.
#[cfg(not(tarpaulin_include))]
pub fn handle(ctx: &Context, file: Option<&PathBuf>, json: bool) -> Result<()> {
    let code = read_source(file.map(PathBuf::as_path))?;
    let detection = detect(&code);

    let text = if json {
        serde_json::to_string_pretty(&DetectReport {
            category: detection.category,
            label: detection.category.label(),
            scores: detection.scores,
        })?
    } else {
        detection.category.as_str().to_string()
    };

    ctx.emit(&text, None, "detected type")
}
