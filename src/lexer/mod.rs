mod doc_comment;

pub use doc_comment::DocCommentLexer;

use serde::Serialize;

/// Token categories produced for the leading region of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenType {
    /// `<?php` plus the single line break or space that follows it.
    OpenTag,
    /// Text before the open tag, one token per line.
    InlineHtml,
    /// `/**`
    DocCommentOpenTag,
    /// `*/` closing a doc comment.
    DocCommentCloseTag,
    /// Leading `*` of a doc comment line.
    DocCommentStar,
    /// `@author`, `@copyright`, ...
    DocCommentTag,
    /// Free text inside a doc comment, up to the end of the line.
    DocCommentString,
    /// Blank run or single line break inside a doc comment.
    DocCommentWhitespace,
    /// `//`, `#` or `/* */` comment, one token per line.
    Comment,
    /// Blank run outside comments; a line break ends the token.
    Whitespace,
    /// Identifier or number.
    Word,
    /// Any other single character.
    Punctuation,
}

impl TokenType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenTag => "OPEN_TAG",
            Self::InlineHtml => "INLINE_HTML",
            Self::DocCommentOpenTag => "DOC_COMMENT_OPEN_TAG",
            Self::DocCommentCloseTag => "DOC_COMMENT_CLOSE_TAG",
            Self::DocCommentStar => "DOC_COMMENT_STAR",
            Self::DocCommentTag => "DOC_COMMENT_TAG",
            Self::DocCommentString => "DOC_COMMENT_STRING",
            Self::DocCommentWhitespace => "DOC_COMMENT_WHITESPACE",
            Self::Comment => "COMMENT",
            Self::Whitespace => "WHITESPACE",
            Self::Word => "WORD",
            Self::Punctuation => "PUNCTUATION",
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed, positioned slice of source text. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub content: String,
    pub line: usize,
}

impl Token {
    #[must_use]
    pub fn new(token_type: TokenType, content: impl Into<String>, line: usize) -> Self {
        Self {
            token_type,
            content: content.into(),
            line,
        }
    }
}

/// Converts source text into an ordered token sequence.
///
/// Implementations must be total: malformed input still yields tokens.
pub trait Tokenizer {
    fn tokenize(&self, source: &str) -> Vec<Token>;
}
