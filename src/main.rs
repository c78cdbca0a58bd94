//! codekit command-line entry point

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use codekit::cli::{Cli, Commands, ConfigCommands};
use codekit::theme::current_theme;

use commands::obfuscate::PassFlags;
use commands::Context;

const DEFAULT_LOG_FILTER: &str = "warn";

fn init_logging(cli: &Cli) {
    let filter = match cli.level_filter() {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let theme = current_theme();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Completions need no config
    if let Commands::Completions { shell } = cli.command {
        commands::completions::handle(shell);
        return Ok(());
    }

    let config_path = cli.config.as_deref();
    let ctx = Context::load(config_path, cli.copy, current_theme())?;

    match cli.command {
        Commands::Detect { input, json } => {
            commands::detect::handle(&ctx, input.file.as_ref(), json)
        }
        Commands::Obfuscate {
            input,
            output,
            remove_comments,
            compress_whitespace,
            rename_variables,
            encode_strings,
            all,
            stats,
        } => {
            let flags = PassFlags {
                remove_comments,
                compress_whitespace,
                rename_variables,
                encode_strings,
                all,
            };
            commands::obfuscate::handle(
                &ctx,
                input.file.as_ref(),
                output.output.as_ref(),
                flags,
                stats,
            )
        }
        Commands::Format {
            input,
            output,
            target,
        } => commands::format::handle(&ctx, input.file.as_ref(), output.output.as_ref(), target),
        Commands::Fix { input, output } => {
            commands::fix::handle(&ctx, input.file.as_ref(), output.output.as_ref())
        }
        Commands::Split {
            input,
            out_dir,
            json,
        } => commands::split::handle(&ctx, input.file.as_ref(), &out_dir, json),
        Commands::Comment {
            input,
            output,
            style,
        } => commands::comment::handle(&ctx, input.file.as_ref(), output.output.as_ref(), style),
        Commands::Prompt {
            kind,
            context,
            existing,
        } => commands::prompt::handle(&ctx, kind, context.as_ref(), existing.as_ref()),
        Commands::Example { kind } => commands::example::handle(&ctx, kind),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&ctx),
            ConfigCommands::Path => commands::config::handle_path(config_path),
            ConfigCommands::Init => commands::config::handle_init(&ctx, config_path),
        },
        Commands::Completions { .. } => Ok(()),
    }
}
