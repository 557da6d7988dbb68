use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::ColorChoice;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::{HeaderGuardError, Result};
use crate::header::HeaderTemplate;
use crate::output::ColorMode;

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from the filesystem, or defaults with `--no-config`.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed or validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        debug!("--no-config given, using defaults");
        return Ok(LoadResult::defaults());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Resolves the header template once per run.
///
/// A `--template-file` given on the command line is read relative to the
/// working directory and replaces any template from the configuration.
///
/// # Errors
/// Returns an error if a template file cannot be read or a template lacks
/// its placeholders.
pub(crate) fn resolve_template(
    loaded: &LoadResult,
    cli_template_file: Option<&Path>,
) -> Result<HeaderTemplate> {
    if let Some(path) = cli_template_file {
        debug!(path = %path.display(), "loading header template from command line");
        let content = fs::read_to_string(path).map_err(|source| HeaderGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        return HeaderTemplate::new(content);
    }

    FileConfigLoader::new().load_template(loaded)
}

/// Writes a report to `output_path`, or to stdout unless `quiet`.
///
/// # Errors
/// Returns an error if the output file or its parent directory cannot be written.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
