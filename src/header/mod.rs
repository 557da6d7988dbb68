mod matcher;
mod template;

pub use matcher::{
    Diagnostic, HeaderMatcher, ISSUE_INVALID_FORMAT, MismatchDescriptor, MismatchKind, Outcome,
};
pub use template::{
    BUILTIN_TEMPLATE, HeaderTemplate, OWNER_PLACEHOLDER, YEAR_PLACEHOLDER, current_year,
};

use serde::{Deserialize, Serialize};

use crate::lexer::{Token, TokenType, Tokenizer};

pub const DEFAULT_CODE_OWNER: &str = "Blue Acorn iCi";

/// Per-run options of the header check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSettings {
    pub code_owner: String,
    pub force_current_year: bool,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            code_owner: DEFAULT_CODE_OWNER.to_string(),
            force_current_year: false,
        }
    }
}

/// The substituted template together with its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedHeader {
    pub text: String,
    pub tokens: Vec<Token>,
    /// Index of the first doc comment opener in `tokens`, 0 if there is none.
    /// Files without a doc comment are entered here.
    pub entry: usize,
}

impl ExpectedHeader {
    pub fn build<T: Tokenizer + ?Sized>(
        template: &HeaderTemplate,
        settings: &HeaderSettings,
        tokenizer: &T,
    ) -> Self {
        let text = template.build(&settings.code_owner, settings.force_current_year);
        let tokens = tokenizer.tokenize(&text);
        let entry = header_entry(&tokens).unwrap_or(0);
        Self {
            text,
            tokens,
            entry,
        }
    }

    /// Tokens compared against a file entered at `entry_offset`.
    ///
    /// The template is cut at the file's own offset, so every token the file
    /// has before its doc comment shifts the comparison.
    #[must_use]
    pub fn tokens_from(&self, entry_offset: usize) -> &[Token] {
        &self.tokens[entry_offset.min(self.tokens.len())..]
    }
}

/// Position of the first doc comment opener, where a header begins.
#[must_use]
pub fn header_entry(tokens: &[Token]) -> Option<usize> {
    tokens
        .iter()
        .position(|token| token.token_type == TokenType::DocCommentOpenTag)
}

/// Checks already-tokenized source against `template`.
pub fn check<T: Tokenizer + ?Sized>(
    actual: &[Token],
    entry_offset: usize,
    template: &HeaderTemplate,
    settings: &HeaderSettings,
    tokenizer: &T,
) -> Outcome {
    let expected = ExpectedHeader::build(template, settings, tokenizer);
    HeaderMatcher::new(settings.force_current_year).match_tokens(
        actual,
        entry_offset,
        expected.tokens_from(entry_offset),
    )
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
