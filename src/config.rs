//! Configuration file handling.
//!
//! The file lives at `$XDG_CONFIG_HOME/codekit/config.toml` unless a path is
//! given with `--config` or `CODEKIT_CONFIG`. Every field has a default, so a
//! partial or missing file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::detect::Category;
use crate::files::filename::{self, FilenameError};
use crate::format::{
    CommentStyle, FormatTarget, CSS_FILE, DEFAULT_HEADER_TITLE, HTML_FILE, JS_FILE,
};
use crate::obfuscate::TransformOptions;

/// Environment variable that points at an alternate config file.
pub const CONFIG_ENV: &str = "CODEKIT_CONFIG";

const APP_DIR: &str = "codekit";
const CONFIG_FILE: &str = "config.toml";

/// Errors from locating, reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid [split] file name: {0}")]
    SplitName(#[from] FilenameError),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub obfuscate: ObfuscateConfig,
    pub format: FormatConfig,
    pub split: SplitConfig,
    pub comments: CommentsConfig,
}

/// `[obfuscate]` pass switches. Unset means "use the per-category suggestion".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObfuscateConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compress_whitespace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename_variables: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encode_strings: Option<bool>,
}

impl ObfuscateConfig {
    /// Options for a snippet of `category`, configured switches taking
    /// precedence over the suggestion.
    pub fn options_for(&self, category: Category) -> TransformOptions {
        let suggested = TransformOptions::suggested_for(category);
        TransformOptions {
            remove_comments: self.remove_comments.unwrap_or(suggested.remove_comments),
            compress_whitespace: self
                .compress_whitespace
                .unwrap_or(suggested.compress_whitespace),
            rename_variables: self.rename_variables.unwrap_or(suggested.rename_variables),
            encode_strings: self.encode_strings.unwrap_or(suggested.encode_strings),
        }
    }
}

/// `[format]` defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub default_type: FormatTarget,
}

/// `[split]` output file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub html_file: String,
    pub css_file: String,
    pub js_file: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            html_file: HTML_FILE.to_string(),
            css_file: CSS_FILE.to_string(),
            js_file: JS_FILE.to_string(),
        }
    }
}

/// Sanitized split file names, keyed by the default name they replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitNames {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl SplitNames {
    /// Configured name for one of the default split file names.
    pub fn for_default(&self, default: &str) -> &str {
        match default {
            CSS_FILE => &self.css,
            JS_FILE => &self.js,
            _ => &self.html,
        }
    }
}

impl SplitConfig {
    /// Sanitize and validate the configured names.
    pub fn names(&self) -> Result<SplitNames, FilenameError> {
        Ok(SplitNames {
            html: filename::output_name(&self.html_file, HTML_FILE)?,
            css: filename::output_name(&self.css_file, CSS_FILE)?,
            js: filename::output_name(&self.js_file, JS_FILE)?,
        })
    }
}

/// `[comments]` defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    pub style: CommentStyle,
    pub header_title: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            style: CommentStyle::default(),
            header_title: DEFAULT_HEADER_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// The explicit override if any, otherwise the default location.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_path(),
        }
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(write_err)?;
        tracing::info!(path = %path.display(), "wrote config");
        Ok(())
    }

    /// Write to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }
}
