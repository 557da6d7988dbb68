use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::lexer::Token;

use super::template::YEAR_PLACEHOLDER;

/// Issue code attached to every header diagnostic.
pub const ISSUE_INVALID_FORMAT: &str = "InvalidHeaderFormat";

const LINE_BREAK: &str = "\n";

static YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: constant pattern
    Regex::new("[0-9]{4}").expect("valid year pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MismatchKind {
    ContentMismatch,
    UnexpectedLineBreak,
}

/// The first diverging token pair of a header comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchDescriptor {
    pub kind: MismatchKind,
    pub actual: Token,
    pub expected: Token,
    /// Line of the actual token.
    pub line: usize,
}

impl MismatchDescriptor {
    fn new(actual: &Token, expected: &Token) -> Self {
        let kind = if expected.content == LINE_BREAK {
            MismatchKind::UnexpectedLineBreak
        } else {
            MismatchKind::ContentMismatch
        };
        Self {
            kind,
            actual: actual.clone(),
            expected: expected.clone(),
            line: actual.line,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self.kind {
            MismatchKind::UnexpectedLineBreak => {
                "Invalid token, unexpected line-break.".to_string()
            }
            MismatchKind::ContentMismatch => {
                format!("Invalid token, expected \"{}\".", self.expected.content)
            }
        }
    }

    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            message: self.message(),
            line: self.line,
            code: ISSUE_INVALID_FORMAT,
        }
    }
}

/// Message, line and issue code handed to the reporting sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub line: usize,
    pub code: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Match,
    /// Too little input to judge the header.
    Skip,
    Mismatch(MismatchDescriptor),
}

impl Outcome {
    #[must_use]
    pub const fn mismatch(&self) -> Option<&MismatchDescriptor> {
        match self {
            Self::Mismatch(descriptor) => Some(descriptor),
            Self::Match | Self::Skip => None,
        }
    }
}

/// Positional comparison of a file's tokens against the expected header.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderMatcher {
    force_current_year: bool,
}

impl HeaderMatcher {
    #[must_use]
    pub const fn new(force_current_year: bool) -> Self {
        Self { force_current_year }
    }

    /// Walks `expected` against `actual[entry_offset..]` and stops at the first divergence.
    ///
    /// Returns `Skip` when `entry_offset` exceeds the expected length, or when
    /// fewer than `expected.len()` actual tokens remain from the offset.
    #[must_use]
    pub fn match_tokens(
        &self,
        actual: &[Token],
        entry_offset: usize,
        expected: &[Token],
    ) -> Outcome {
        if entry_offset > expected.len() {
            return Outcome::Skip;
        }

        let window = entry_offset
            .checked_add(expected.len())
            .and_then(|end| actual.get(entry_offset..end));
        let Some(window) = window else {
            return Outcome::Skip;
        };

        window
            .iter()
            .zip(expected)
            .find(|(actual_token, expected_token)| {
                !self.tokens_match(actual_token, expected_token)
            })
            .map_or(Outcome::Match, |(actual_token, expected_token)| {
                Outcome::Mismatch(MismatchDescriptor::new(actual_token, expected_token))
            })
    }

    fn tokens_match(&self, actual: &Token, expected: &Token) -> bool {
        actual.token_type == expected.token_type
            && self.normalized_content(actual, expected) == expected.content
    }

    /// Actual content with any four-digit run folded to `YYYY` where the
    /// expected token still carries the placeholder.
    fn normalized_content<'a>(&self, actual: &'a Token, expected: &Token) -> Cow<'a, str> {
        if !self.force_current_year && expected.content.contains(YEAR_PLACEHOLDER) {
            YEAR_PATTERN.replace_all(&actual.content, YEAR_PLACEHOLDER)
        } else {
            Cow::Borrowed(&actual.content)
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
