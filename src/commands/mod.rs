//! Subcommand handlers.
//!
//! Each handler reads its input, calls into the library and hands the
//! result to [`Context::emit`], which deals with `-o` and `--copy`.

pub mod comment;
pub mod completions;
pub mod config;
pub mod detect;
pub mod example;
pub mod fix;
pub mod format;
pub mod obfuscate;
pub mod prompt;
pub mod split;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use codekit::clipboard::Copy;
use codekit::input::{read_source, require_code};
use codekit::theme::Theme;
use codekit::Config;

/// State shared by every handler.
pub struct Context {
    pub config: Config,
    pub copy: bool,
    pub theme: Theme,
}

impl Context {
    /// Load the config from `path` (or the default location).
    ///
    /// An unresolvable default location falls back to the built-in defaults;
    /// a file that exists but does not parse is an error.
    pub fn load(path: Option<&Path>, copy: bool, theme: Theme) -> Result<Self> {
        let config = match Config::resolve_path(path) {
            Ok(path) => Config::load_from(&path)?,
            Err(e) => {
                tracing::warn!("{}, using default config", e);
                Config::default()
            }
        };
        Ok(Self {
            config,
            copy,
            theme,
        })
    }

    /// Print a status line to stderr.
    pub fn notify(&self, message: &str) {
        eprintln!("{}", self.theme.secondary_text(message));
    }

    /// Write `text` to `output` (or stdout) and copy it when `--copy` is set.
    pub fn emit(&self, text: &str, output: Option<&PathBuf>, what: &str) -> Result<()> {
        match output {
            Some(path) => {
                fs::write(path, text)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::info!(path = %path.display(), "wrote {}", what);
                self.notify(&format!("Wrote {} to {}", what, path.display()));
            }
            None => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", text)?;
                stdout.flush()?;
            }
        }

        if self.copy {
            self.copy_to_clipboard(text, what)?;
        }
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str, what: &str) -> Result<()> {
        let result = Copy::new().text(text)?;
        eprintln!("{}", self.theme.success_text(&result.message(what)));
        Ok(())
    }
}

/// Read a command's input and reject it when blank.
pub fn read_code(file: Option<&PathBuf>, verb: &'static str) -> Result<String> {
    let code = read_source(file.map(PathBuf::as_path))?;
    Ok(require_code(code, verb)?)
}
