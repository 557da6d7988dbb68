mod result;

pub use result::{CheckResult, CheckStatus};

use std::path::Path;

use tracing::debug;

use crate::error::{HeaderGuardError, Result};
use crate::header::{
    ExpectedHeader, HeaderMatcher, HeaderSettings, HeaderTemplate, Outcome, header_entry,
};
use crate::lexer::{DocCommentLexer, Tokenizer};

pub trait Checker {
    /// Check one file's contents.
    fn check(&self, path: &Path, source: &str) -> CheckResult;
}

/// Runs the header comparison for whole files.
///
/// Holds no per-file state, so one instance can be shared across rayon workers.
#[derive(Debug, Clone)]
pub struct HeaderChecker<T: Tokenizer = DocCommentLexer> {
    template: HeaderTemplate,
    settings: HeaderSettings,
    tokenizer: T,
}

impl HeaderChecker<DocCommentLexer> {
    #[must_use]
    pub const fn new(template: HeaderTemplate, settings: HeaderSettings) -> Self {
        Self::with_tokenizer(template, settings, DocCommentLexer)
    }
}

impl<T: Tokenizer> HeaderChecker<T> {
    #[must_use]
    pub const fn with_tokenizer(
        template: HeaderTemplate,
        settings: HeaderSettings,
        tokenizer: T,
    ) -> Self {
        Self {
            template,
            settings,
            tokenizer,
        }
    }

    #[must_use]
    pub const fn template(&self) -> &HeaderTemplate {
        &self.template
    }

    #[must_use]
    pub const fn settings(&self) -> &HeaderSettings {
        &self.settings
    }

    #[must_use]
    pub fn expected_header(&self) -> ExpectedHeader {
        ExpectedHeader::build(&self.template, &self.settings, &self.tokenizer)
    }

    /// Compares `source` against the expected header.
    ///
    /// The file is entered at its first doc comment and the template is cut
    /// at the same index, so anything before the header must match too. A
    /// file without a doc comment is entered where the template's sits.
    #[must_use]
    pub fn check_source(&self, source: &str) -> Outcome {
        let expected = self.expected_header();
        let actual = self.tokenizer.tokenize(source);
        let entry_offset = header_entry(&actual).unwrap_or(expected.entry);

        HeaderMatcher::new(self.settings.force_current_year).match_tokens(
            &actual,
            entry_offset,
            expected.tokens_from(entry_offset),
        )
    }

    /// Reads and checks a file. Invalid UTF-8 is replaced, not rejected.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn check_file(&self, path: &Path) -> Result<CheckResult> {
        let bytes = std::fs::read(path).map_err(|source| HeaderGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes);
        Ok(self.check(path, &source))
    }
}

impl<T: Tokenizer> Checker for HeaderChecker<T> {
    fn check(&self, path: &Path, source: &str) -> CheckResult {
        let outcome = self.check_source(source);
        debug!(path = %path.display(), ?outcome, "header checked");
        CheckResult::new(path, outcome)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
