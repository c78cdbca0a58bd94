//! Copying command output to the system clipboard.
//!
//! - [`Copy`] - tries the platform's tools in priority order
//! - [`CopyTool`] - one clipboard command
//! - [`PipeTool`] - the stdin-driven commands shipped by each OS

mod copy;
mod error;
mod result;
mod tool;
mod tools;

pub use copy::Copy;
pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};
pub use tool::{CopyTool, CopyToolError};
pub use tools::{platform_tools, PipeTool, Platform};
