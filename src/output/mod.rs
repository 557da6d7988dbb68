mod json;
mod progress;
mod sarif;
mod text;

pub use json::JsonFormatter;
pub use progress::ScanProgress;
pub use sarif::SarifFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::checker::{CheckResult, CheckStatus};
use crate::error::Result;

/// Trait for formatting check results into various output formats.
pub trait OutputFormatter {
    /// Format the check results into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, results: &[CheckResult]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Sarif,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "sarif" => Ok(Self::Sarif),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Per-status counts over a set of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    #[must_use]
    pub fn from_results(results: &[CheckResult]) -> Self {
        results.iter().fold(
            Self {
                total: results.len(),
                ..Self::default()
            },
            |mut summary, result| {
                match result.status() {
                    CheckStatus::Passed => summary.passed += 1,
                    CheckStatus::Skipped => summary.skipped += 1,
                    CheckStatus::Failed => summary.failed += 1,
                }
                summary
            },
        )
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
