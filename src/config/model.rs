use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::header::{DEFAULT_CODE_OWNER, HeaderSettings};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Header template and substitution values.
    #[serde(default)]
    pub header: HeaderConfig,

    /// File discovery.
    #[serde(default)]
    pub scanner: ScannerConfig,
}

/// Header configuration [header].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Replaces `OWNER` in the template.
    #[serde(default = "default_code_owner")]
    pub code_owner: String,

    /// Replace `YYYY` with the current year instead of accepting any year.
    #[serde(default)]
    pub force_current_year: bool,

    /// Inline template; takes precedence over `template_file`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Template file, relative to the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_file: Option<PathBuf>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            code_owner: default_code_owner(),
            force_current_year: false,
            template: None,
            template_file: None,
        }
    }
}

impl HeaderConfig {
    #[must_use]
    pub fn settings(&self) -> HeaderSettings {
        HeaderSettings {
            code_owner: self.code_owner.clone(),
            force_current_year: self.force_current_year,
        }
    }
}

/// Scanner configuration [scanner].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// File extensions whose headers are checked.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns excluded from checking.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: default_exclude(),
            gitignore: true,
        }
    }
}

fn default_code_owner() -> String {
    DEFAULT_CODE_OWNER.to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["php".to_string(), "phtml".to_string()]
}

fn default_exclude() -> Vec<String> {
    vec!["**/vendor/**".to_string(), "**/.git/**".to_string()]
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
