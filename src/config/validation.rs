//! Configuration semantic validation.
//!
//! Runs right after parsing so that a bad template or pattern is rejected
//! before any file is scanned.

use crate::config::Config;
use crate::header::HeaderTemplate;
use crate::{HeaderGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if both template sources are set, the inline template
/// lacks a placeholder, no extension is configured, or an exclude glob is invalid.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_header_section(config)?;
    validate_scanner_section(config)?;
    Ok(())
}

fn validate_header_section(config: &Config) -> Result<()> {
    let header = &config.header;
    if header.template.is_some() && header.template_file.is_some() {
        return Err(HeaderGuardError::Config(
            "header.template and header.template_file are mutually exclusive".to_string(),
        ));
    }

    if let Some(inline) = &header.template {
        HeaderTemplate::new(inline.as_str())?;
    }
    Ok(())
}

fn validate_scanner_section(config: &Config) -> Result<()> {
    if config.scanner.extensions.is_empty() {
        return Err(HeaderGuardError::Config(
            "scanner.extensions must list at least one extension".to_string(),
        ));
    }

    for (i, ext) in config.scanner.extensions.iter().enumerate() {
        if ext.is_empty() || ext.starts_with('.') {
            return Err(HeaderGuardError::Config(format!(
                "scanner.extensions[{i}] must be a bare extension like \"php\", got \"{ext}\""
            )));
        }
    }

    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| HeaderGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
