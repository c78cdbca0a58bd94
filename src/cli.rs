//! Command-line definitions.
//!
//! Lives in the library so `xtask` can render man pages from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use tracing_subscriber::filter::LevelFilter;

use crate::format::{CommentStyle, FormatTarget};
use crate::prompt::PromptKind;
use crate::samples::SampleKind;

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("CODEKIT_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("CODEKIT_BUILD_DATE"),
    ")"
);

/// Obfuscation pass flags that `--all` replaces.
const PASS_FLAGS: [&str; 4] = [
    "remove_comments",
    "compress_whitespace",
    "rename_variables",
    "encode_strings",
];

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors (default)
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "codekit")]
#[command(about = "Detect, obfuscate and format HTML, CSS and JavaScript snippets")]
#[command(version, long_version = LONG_VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (defaults to ~/.config/codekit/config.toml)
    #[arg(long, global = true, env = crate::config::CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Also copy the command's output to the system clipboard
    #[arg(long, global = true)]
    pub copy: bool,
}

impl Cli {
    /// Log level from the flags, if either was given.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        match (self.log_level, self.verbose) {
            (Some(level), _) => Some(level.into()),
            (None, true) => Some(LevelFilter::DEBUG),
            (None, false) => None,
        }
    }
}

/// Input source shared by the text-processing commands.
#[derive(Debug, Clone, clap::Args)]
pub struct InputArgs {
    /// Input file (reads stdin when absent or "-")
    pub file: Option<PathBuf>,
}

/// Output destination shared by the text-processing commands.
#[derive(Debug, Clone, clap::Args)]
pub struct OutputArgs {
    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report whether a snippet is HTML, JavaScript, CSS or a mix
    Detect {
        #[command(flatten)]
        input: InputArgs,

        /// Print the category, label and scores as JSON
        #[arg(long)]
        json: bool,
    },

    /// Strip, compress and scramble a snippet
    ///
    /// Without pass flags the passes come from the config file, falling back
    /// to a suggestion for the detected category.
    Obfuscate {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Remove comments
        #[arg(long)]
        remove_comments: bool,

        /// Collapse whitespace
        #[arg(long)]
        compress_whitespace: bool,

        /// Rename var/let/const declarations to single letters
        #[arg(long)]
        rename_variables: bool,

        /// Escape double-quoted strings as \uXXXX
        #[arg(long)]
        encode_strings: bool,

        /// Enable every pass
        #[arg(long, conflicts_with_all = PASS_FLAGS)]
        all: bool,

        /// Print size statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Pretty print a snippet
    Format {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Formatter to use: auto, html, javascript or css (default from config)
        #[arg(long = "type", value_name = "TYPE")]
        target: Option<FormatTarget>,
    },

    /// Balance braces and add missing CSS semicolons
    Fix {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Move <style> and <script> bodies into separate files
    Split {
        #[command(flatten)]
        input: InputArgs,

        /// Directory to write the files into
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Print the split result as JSON instead of writing files
        #[arg(long)]
        json: bool,
    },

    /// Annotate a snippet with comments
    Comment {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Comment style (default from config)
        #[arg(long, value_enum)]
        style: Option<CommentStyle>,
    },

    /// Build an instruction prompt for an AI assistant
    Prompt {
        /// Which instruction to add
        #[arg(value_enum)]
        kind: PromptKind,

        /// File with code to include as context
        #[arg(long, value_name = "FILE")]
        context: Option<PathBuf>,

        /// File with an existing prompt to extend
        #[arg(long, value_name = "FILE")]
        existing: Option<PathBuf>,
    },

    /// Print a bundled example snippet
    Example {
        #[arg(value_enum, default_value_t = SampleKind::Mixed)]
        kind: SampleKind,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write the default configuration if no file exists
    Init,
}
