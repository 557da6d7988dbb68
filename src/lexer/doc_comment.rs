use super::{Token, TokenType, Tokenizer};

const OPEN_TAG: &[u8] = b"<?php";
const DOC_COMMENT_OPEN: &str = "/**";
const COMMENT_CLOSE: &str = "*/";

/// Tokenizer for the leading region of C-family and PHP sources.
///
/// Doc comments (`/** ... */`) are split into the fine-grained tokens a
/// header comparison needs; the rest of the file is cut into comments,
/// whitespace, words and single punctuation characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocCommentLexer;

impl Tokenizer for DocCommentLexer {
    fn tokenize(&self, source: &str) -> Vec<Token> {
        let mut cursor = Cursor::new(source);
        cursor.lex_preamble();
        while !cursor.is_at_end() {
            cursor.lex_code();
        }
        cursor.tokens
    }
}

struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Cursor<'a> {
    const fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    const fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Emits the next `len` bytes as one token and advances past them.
    fn emit(&mut self, token_type: TokenType, len: usize) {
        let content = &self.source[self.pos..self.pos + len];
        self.tokens.push(Token::new(token_type, content, self.line));
        self.line += content.matches('\n').count();
        self.pos += len;
    }

    /// Handles everything up to and including the `<?php` open tag, if any.
    fn lex_preamble(&mut self) {
        let Some(tag_at) = find_open_tag(self.source) else {
            return;
        };

        while self.pos < tag_at {
            let len = line_len(&self.source[self.pos..tag_at]);
            self.emit(TokenType::InlineHtml, len);
        }

        let after = &self.source[tag_at + OPEN_TAG.len()..];
        let trailing = match line_break_len(after) {
            0 if after.starts_with(' ') => 1,
            n => n,
        };
        self.emit(TokenType::OpenTag, OPEN_TAG.len() + trailing);
    }

    fn lex_code(&mut self) {
        let rest = self.rest();

        if rest.starts_with(DOC_COMMENT_OPEN) && !rest.starts_with("/**/") {
            self.lex_doc_comment();
        } else if rest.starts_with("/*") {
            self.lex_block_comment();
        } else if rest.starts_with("//") || rest.starts_with('#') {
            self.emit(TokenType::Comment, line_len(rest));
        } else {
            let blank = blank_len(rest);
            let whitespace = blank + line_break_len(&rest[blank..]);
            if whitespace > 0 {
                self.emit(TokenType::Whitespace, whitespace);
                return;
            }

            let word = rest
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            if word > 0 {
                self.emit(TokenType::Word, word);
            } else {
                let len = rest.chars().next().map_or(1, char::len_utf8);
                self.emit(TokenType::Punctuation, len);
            }
        }
    }

    fn lex_block_comment(&mut self) {
        let rest = self.rest();
        let mut remaining = rest[2..]
            .find(COMMENT_CLOSE)
            .map_or(rest.len(), |at| at + 2 + COMMENT_CLOSE.len());

        while remaining > 0 {
            let len = line_len(&self.rest()[..remaining]);
            self.emit(TokenType::Comment, len);
            remaining -= len;
        }
    }

    fn lex_doc_comment(&mut self) {
        self.emit(TokenType::DocCommentOpenTag, DOC_COMMENT_OPEN.len());
        let mut line_start = false;

        loop {
            let rest = self.rest();
            if rest.is_empty() {
                return;
            }
            if rest.starts_with(COMMENT_CLOSE) {
                self.emit(TokenType::DocCommentCloseTag, COMMENT_CLOSE.len());
                return;
            }

            let line_break = line_break_len(rest);
            if line_break > 0 {
                self.emit(TokenType::DocCommentWhitespace, line_break);
                line_start = true;
                continue;
            }

            let blank = blank_len(rest);
            if blank > 0 {
                self.emit(TokenType::DocCommentWhitespace, blank);
                continue;
            }

            if line_start && rest.starts_with('*') {
                self.emit(TokenType::DocCommentStar, 1);
                line_start = false;
                continue;
            }
            line_start = false;

            let tag = tag_len(rest);
            if tag > 1 {
                self.emit(TokenType::DocCommentTag, tag);
            } else {
                self.emit(TokenType::DocCommentString, doc_string_len(rest));
            }
        }
    }
}

/// Byte offset of a `<?php` tag that precedes the first doc comment.
fn find_open_tag(source: &str) -> Option<usize> {
    let search_end = source.find(DOC_COMMENT_OPEN).unwrap_or(source.len());
    source.as_bytes()[..search_end]
        .windows(OPEN_TAG.len())
        .position(|window| window.eq_ignore_ascii_case(OPEN_TAG))
}

/// Length of the current line including its `\n`, or of the whole input.
fn line_len(s: &str) -> usize {
    s.find('\n').map_or(s.len(), |at| at + 1)
}

fn line_break_len(s: &str) -> usize {
    if s.starts_with("\r\n") {
        2
    } else {
        usize::from(s.starts_with('\n'))
    }
}

fn blank_len(s: &str) -> usize {
    s.len() - s.trim_start_matches([' ', '\t']).len()
}

/// Length of an `@tag` at the start of `s`; 1 means a lone `@`.
fn tag_len(s: &str) -> usize {
    if !s.starts_with('@') {
        return 0;
    }
    let end = s[1..].find(char::is_whitespace).map_or(s.len(), |at| at + 1);
    s[..end].find(COMMENT_CLOSE).unwrap_or(end)
}

/// Doc text runs to the end of the line or the closing `*/`, minus trailing blanks.
fn doc_string_len(s: &str) -> usize {
    let mut end = s.find('\n').unwrap_or(s.len());
    if let Some(close) = s[..end].find(COMMENT_CLOSE) {
        end = close;
    }
    s[..end].trim_end_matches([' ', '\t', '\r']).len().max(1)
}

#[cfg(test)]
#[path = "doc_comment_tests.rs"]
mod tests;
