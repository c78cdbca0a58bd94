//! Reading snippets from files or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Errors from reading command input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {}: {source}", path.display())]
    File { path: PathBuf, source: io::Error },

    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("Please provide code to {verb}")]
    Blank { verb: &'static str },
}

/// Read `path`, or stdin when `path` is absent or `-`.
pub fn read_source(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| InputError::File {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(InputError::Stdin)?;
            Ok(buf)
        }
    }
}

/// Reject blank input for a command that needs code to work on.
pub fn require_code(code: String, verb: &'static str) -> Result<String, InputError> {
    if code.trim().is_empty() {
        Err(InputError::Blank { verb })
    } else {
        Ok(code)
    }
}
