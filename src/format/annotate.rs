//! Comment insertion for formatted output.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// How [`add_comments`] annotates code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
    /// Prefix every non-blank line with `// `
    #[default]
    Line,
    /// Prepend a `/* */` header block with a timestamp
    Block,
}

/// Default title written into a block header.
pub const DEFAULT_HEADER_TITLE: &str = "Code file";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Annotate `code` with comments.
///
/// Line style leaves blank lines and lines already starting with `//` alone.
/// Block style writes `title` and `generated_at` into a header.
pub fn add_comments(
    code: &str,
    style: CommentStyle,
    title: &str,
    generated_at: NaiveDateTime,
) -> String {
    match style {
        CommentStyle::Line => code
            .split('\n')
            .map(|line| {
                let trimmed = line.trim();
                if !trimmed.is_empty() && !trimmed.starts_with("//") {
                    format!("// {}", line)
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        CommentStyle::Block => format!(
            "/*\n * {}\n * Generated: {}\n */\n\n{}",
            title,
            generated_at.format(TIMESTAMP_FORMAT),
            code
        ),
    }
}
