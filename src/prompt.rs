//! Building instructions to paste into an AI assistant.

use serde::{Deserialize, Serialize};

/// Canned instruction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PromptKind {
    /// Ask for the change as find-and-replace steps
    Replace,
    /// Ask to break the code into modules by feature
    Decompose,
    /// Ask to introduce shared global state
    GlobalVariables,
    /// Ask for performance and readability improvements
    Optimize,
}

impl PromptKind {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Replace => "Tell me how to change it using find-and-replace steps:",
            Self::Decompose => "Take this code apart and separate it into modules by feature",
            Self::GlobalVariables => "Add global variables so that functions can share data",
            Self::Optimize => "Optimize this code for performance and readability",
        }
    }
}

/// Append `text` to `existing`, separated by a blank line when needed.
pub fn append_keyword(existing: &str, text: &str) -> String {
    if existing.is_empty() {
        text.to_string()
    } else {
        format!("{}\n\n{}", existing, text)
    }
}

/// Append the instruction for `kind`, plus any non-blank code context.
pub fn build_prompt(existing: &str, kind: PromptKind, context: Option<&str>) -> String {
    let mut addition = kind.instruction().to_string();
    if let Some(context) = context.filter(|c| !c.trim().is_empty()) {
        addition.push_str("\n\nCode context:\n");
        addition.push_str(context);
    }
    append_keyword(existing, &addition)
}
