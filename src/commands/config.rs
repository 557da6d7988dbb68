use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigFormat};
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, HeaderGuardError, Result};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => {
            run_config_show(config.as_deref(), *format, cli.no_config)
        }
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file, including the template it points at.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, has
/// semantic errors, or names a template that cannot be loaded.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(HeaderGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let loader = FileConfigLoader::new();
    let loaded = loader.load_from_path(config_path)?;
    loader.load_template(&loaded)?;
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ConfigFormat, no_config: bool) -> i32 {
    match run_config_show_impl(config_path, format, no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;

    match format {
        ConfigFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        ConfigFormat::Text => format_config_text(&loaded),
    }
}

pub(crate) fn format_config_text(loaded: &LoadResult) -> Result<String> {
    let source = loaded.source.as_ref().map_or_else(
        || "built-in defaults".to_string(),
        |path| path.display().to_string(),
    );
    let body = toml::to_string_pretty(&loaded.config)?;
    Ok(format!("# Effective configuration ({source})\n\n{body}"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
