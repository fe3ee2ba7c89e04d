//! Config command implementation
//!
//! Shows and validates the merged effective configuration.

use anyhow::{Context, Result};

use crate::cli::{ConfigCommands, Output};
use crate::config::MylibConfig;

/// Execute a config subcommand
pub fn execute(cmd: ConfigCommands, config_path: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(config_path, output),
        ConfigCommands::Validate => validate(config_path, output),
    }
}

fn show(config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = MylibConfig::load_with_custom_config(config_path)?;
    let rendered =
        toml::to_string_pretty(&config).context("Failed to serialize configuration")?;

    output.header("Effective configuration");
    print!("{rendered}");
    Ok(())
}

fn validate(config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = MylibConfig::load_with_custom_config(config_path)?;
    config.validate()?;

    output.success("Configuration is valid");
    output.key_value(
        "Resolved workers:",
        &config.parallel.resolve_workers().to_string(),
    );
    Ok(())
}
