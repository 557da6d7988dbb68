use chrono::Datelike;

use crate::error::{HeaderGuardError, Result};

pub const OWNER_PLACEHOLDER: &str = "OWNER";
pub const YEAR_PLACEHOLDER: &str = "YYYY";

/// Header every file must open with unless the config supplies its own.
pub const BUILTIN_TEMPLATE: &str = "<?php
/**
 * @author    Blue Acorn iCi <code@blueacornici.com>
 * @copyright YYYY OWNER. All Rights Reserved.
 */
";

/// Raw header text carrying the `OWNER` and `YYYY` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
    raw: String,
}

impl HeaderTemplate {
    /// Validates a template before any file is checked.
    ///
    /// # Errors
    /// Returns an error if the template is blank or lacks either placeholder.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(HeaderGuardError::InvalidTemplate(
                "template is empty".to_string(),
            ));
        }
        for placeholder in [OWNER_PLACEHOLDER, YEAR_PLACEHOLDER] {
            if !raw.contains(placeholder) {
                return Err(HeaderGuardError::InvalidTemplate(format!(
                    "template has no {placeholder} placeholder"
                )));
            }
        }
        Ok(Self { raw })
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self {
            raw: BUILTIN_TEMPLATE.to_string(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitutes the owner, and the current year when `force_current_year` is set.
    ///
    /// The year is read on every call.
    #[must_use]
    pub fn build(&self, code_owner: &str, force_current_year: bool) -> String {
        self.build_with_year(code_owner, force_current_year.then(current_year))
    }

    /// Substitutes the owner and, if given, the year. `None` keeps `YYYY`.
    #[must_use]
    pub fn build_with_year(&self, code_owner: &str, year: Option<i32>) -> String {
        let text = self.raw.replace(OWNER_PLACEHOLDER, code_owner);
        match year {
            Some(year) => text.replace(YEAR_PLACEHOLDER, &format!("{year:04}")),
            None => text,
        }
    }
}

impl Default for HeaderTemplate {
    fn default() -> Self {
        Self::builtin()
    }
}

#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
