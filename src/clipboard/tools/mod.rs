//! Platform clipboard commands.
//!
//! Every supported tool reads the text to copy from stdin, so one
//! [`PipeTool`] type covers them all; they differ only in program and flags.

use std::io::Write;
use std::process::{Child, Command, Stdio};

use super::result::CopyMethod;
use super::tool::{CopyTool, CopyToolError};

/// Which OS a tool belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
}

impl Platform {
    fn is_current(&self) -> bool {
        match self {
            Self::MacOs => cfg!(target_os = "macos"),
            Self::Linux => cfg!(target_os = "linux"),
        }
    }
}

/// A clipboard command that takes text on stdin.
#[derive(Debug, Clone)]
pub struct PipeTool {
    method: CopyMethod,
    args: &'static [&'static str],
    platform: Platform,
}

impl PipeTool {
    /// macOS pasteboard.
    pub fn pbcopy() -> Self {
        Self {
            method: CopyMethod::Pbcopy,
            args: &[],
            platform: Platform::MacOs,
        }
    }

    /// Linux X11 via xclip.
    pub fn xclip() -> Self {
        Self {
            method: CopyMethod::Xclip,
            args: &["-selection", "clipboard"],
            platform: Platform::Linux,
        }
    }

    /// Linux X11 via xsel.
    pub fn xsel() -> Self {
        Self {
            method: CopyMethod::Xsel,
            args: &["--clipboard", "--input"],
            platform: Platform::Linux,
        }
    }

    /// Linux Wayland.
    pub fn wl_copy() -> Self {
        Self {
            method: CopyMethod::WlCopy,
            args: &[],
            platform: Platform::Linux,
        }
    }

    pub fn args(&self) -> &[&'static str] {
        self.args
    }

    /// Check if the binary is on PATH.
    fn tool_exists(&self) -> bool {
        Command::new("which")
            .arg(self.method.name())
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl CopyTool for PipeTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        if !self.platform.is_current() {
            return false;
        }
        // pbcopy ships with every macOS install
        self.platform == Platform::MacOs || self.tool_exists()
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let child = Command::new(self.method.name())
            .args(self.args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => CopyToolError::NotFound,
                _ => CopyToolError::Failed(e.to_string()),
            })?;

        feed_and_wait(child, text, self.name())
    }
}

/// Write `text` to the child's stdin, close it and reap the child.
///
/// The child is always waited on, even when the write fails.
fn feed_and_wait(mut child: Child, text: &str, name: &str) -> Result<(), CopyToolError> {
    let written = match child.stdin.as_mut() {
        Some(stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    // Close stdin so the tool sees EOF
    drop(child.stdin.take());

    let status = child
        .wait()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    match written {
        Err(e) => Err(CopyToolError::Failed(format!(
            "{} did not accept input: {} ({})",
            name, e, status
        ))),
        Ok(()) if status.success() => Ok(()),
        Ok(()) => Err(CopyToolError::Failed(format!("{} failed ({})", name, status))),
    }
}

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    [
        PipeTool::pbcopy(),
        PipeTool::xclip(),
        PipeTool::xsel(),
        PipeTool::wl_copy(),
    ]
    .into_iter()
    .filter(|tool| tool.platform.is_current())
    .map(|tool| Box::new(tool) as Box<dyn CopyTool>)
    .collect()
}
