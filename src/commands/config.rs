//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use codekit::Config;

use super::Context;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(ctx: &Context) -> Result<()> {
    let toml_str = ctx.config.to_toml()?;
    println!("{}", toml_str.trim_end());
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    println!("{}", Config::resolve_path(explicit)?.display());
    Ok(())
}

/// Write the default configuration unless a file already exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(ctx: &Context, explicit: Option<&Path>) -> Result<()> {
    let config_path = Config::resolve_path(explicit)?;

    if config_path.exists() {
        ctx.notify(&format!(
            "Config already exists at {}, leaving it alone",
            config_path.display()
        ));
        return Ok(());
    }

    Config::default().save_to(&config_path)?;
    eprintln!(
        "{}",
        ctx.theme
            .success_text(&format!("Created {}", config_path.display()))
    );
    Ok(())
}
