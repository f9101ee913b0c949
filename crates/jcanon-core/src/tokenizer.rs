//! Lexical scanner -- raw JSON text to a flat token sequence.
//!
//! The tokenizer makes a single left-to-right pass over the input and emits
//! tokens without any grammar knowledge; structure is the parser's job.
//! Scanning is fail-fast: the first malformed lexeme abandons the pass, and
//! a partial token sequence is never returned.
//!
//! # Key design decisions
//!
//! - **Byte-offset lookahead**: `peek_at(n)` reads n bytes ahead without
//!   moving the cursor, and `consume(n)` advances it, so keyword and number
//!   scanning never backtrack. `"` and `\` cannot occur as UTF-8
//!   continuation bytes, so byte scanning keeps slice boundaries valid and
//!   multibyte text passes through string lexemes untouched.
//! - **Verbatim escapes**: a backslash and the byte after it are copied
//!   into the lexeme as-is, never decoded. The writer emits them back
//!   verbatim, which keeps canonical round trips byte-exact.
//! - **Arena-backed lexemes**: string and number lexemes are carved from
//!   the [`Arena`] supplied at construction and share its lifetime.

use crate::arena::Arena;
use crate::error::{JsonError, Result};

/// The lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Comma,
    Str,
    Number,
    Boolean,
    Null,
}

impl TokenKind {
    /// True if a token of this kind can begin a JSON value.
    pub fn is_value_initial(self) -> bool {
        matches!(
            self,
            TokenKind::LBrace
                | TokenKind::LBracket
                | TokenKind::Str
                | TokenKind::Number
                | TokenKind::Boolean
                | TokenKind::Null
        )
    }
}

/// One lexical unit: a kind plus its text.
///
/// For strings the lexeme is the raw content between the quotes (escapes
/// kept verbatim); for numbers it is the literal text; punctuation and
/// keywords carry their fixed spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'arena> {
    pub kind: TokenKind,
    pub lexeme: &'arena str,
}

/// Single-pass scanner over a complete JSON document.
pub struct Tokenizer<'input, 'arena> {
    input: &'input str,
    pos: usize,
    arena: &'arena Arena,
}

impl<'input, 'arena> Tokenizer<'input, 'arena> {
    /// `arena` backs every string and number lexeme the scan produces.
    pub fn new(input: &'input str, arena: &'arena Arena) -> Self {
        Self {
            input,
            pos: 0,
            arena,
        }
    }

    /// Consume the entire input and return the complete token sequence, or
    /// the error describing the first malformed lexeme.
    pub fn tokenize(mut self) -> Result<Vec<Token<'arena>>> {
        let mut tokens = Vec::new();
        while let Some(c) = self.peek() {
            if c == b'-' || c.is_ascii_digit() {
                let lexeme = self.read_numeric_literal()?;
                tokens.push(Token {
                    kind: TokenKind::Number,
                    lexeme,
                });
                continue;
            }
            if c == b'n' && self.matches_keyword("null") {
                self.consume(4);
                tokens.push(Token {
                    kind: TokenKind::Null,
                    lexeme: "null",
                });
                continue;
            }
            if c == b't' && self.matches_keyword("true") {
                self.consume(4);
                tokens.push(Token {
                    kind: TokenKind::Boolean,
                    lexeme: "true",
                });
                continue;
            }
            if c == b'f' && self.matches_keyword("false") {
                self.consume(5);
                tokens.push(Token {
                    kind: TokenKind::Boolean,
                    lexeme: "false",
                });
                continue;
            }
            self.consume(1);
            if c.is_ascii_whitespace() {
                continue;
            }
            let kind = match c {
                b'"' => {
                    let lexeme = self.read_string_literal()?;
                    tokens.push(Token {
                        kind: TokenKind::Str,
                        lexeme,
                    });
                    continue;
                }
                b'{' => TokenKind::LBrace,
                b'}' => TokenKind::RBrace,
                b'[' => TokenKind::LBracket,
                b']' => TokenKind::RBracket,
                b':' => TokenKind::Colon,
                b',' => TokenKind::Comma,
                _ => return Err(self.unrecognized_character()),
            };
            tokens.push(Token {
                kind,
                lexeme: punctuation_text(kind),
            });
        }
        Ok(tokens)
    }

    /// The byte at the cursor, without advancing.
    fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// The byte `offset` positions ahead of the cursor, without advancing.
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + offset).copied()
    }

    /// Advance the cursor `n` bytes, stopping at the end of input.
    fn consume(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// True if the bytes at the cursor spell out `keyword` exactly.
    fn matches_keyword(&self, keyword: &str) -> bool {
        keyword
            .bytes()
            .enumerate()
            .all(|(i, k)| self.peek_at(i) == Some(k))
    }

    /// Scan a numeric literal from the cursor onwards.
    ///
    /// Grammar: an optional leading `-` must be immediately followed by a
    /// digit; a literal starting with `0` must not be followed by another
    /// digit; a `.` must be preceded and followed by a digit and may appear
    /// at most once; no exponent form.
    fn read_numeric_literal(&mut self) -> Result<&'arena str> {
        let start = self.pos;
        match self.peek() {
            Some(b'0') => {
                if self.peek_at(1).is_some_and(|d| d.is_ascii_digit()) {
                    return Err(JsonError::Tokenization(
                        "numeric literals cannot start with '0' immediately followed by \
                         another digit"
                            .into(),
                    ));
                }
            }
            Some(b'-') => {
                if !self.peek_at(1).is_some_and(|d| d.is_ascii_digit()) {
                    return Err(JsonError::Tokenization(
                        "negative numbers must have a digit after '-'".into(),
                    ));
                }
                self.consume(1);
            }
            _ => {}
        }
        let mut seen_dot = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.consume(1);
            } else if c == b'.' {
                if seen_dot {
                    return Err(JsonError::Tokenization(
                        "numeric literals cannot contain a second '.'".into(),
                    ));
                }
                if !self.peek_at(1).is_some_and(|d| d.is_ascii_digit()) {
                    return Err(JsonError::Tokenization(
                        "decimals must be followed by a digit".into(),
                    ));
                }
                seen_dot = true;
                self.consume(1);
            } else {
                break;
            }
        }
        Ok(self.arena.alloc_str(&self.input[start..self.pos]))
    }

    /// Scan a string literal from the cursor onwards (the opening quote has
    /// already been consumed).
    ///
    /// Raw bytes are copied up to the first unescaped `"`. A backslash and
    /// the byte immediately after it are both kept verbatim; no escape is
    /// interpreted. Reaching end of input before the closing quote fails.
    fn read_string_literal(&mut self) -> Result<&'arena str> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            self.consume(1);
            if c == b'"' {
                return Ok(self.arena.alloc_str(&self.input[start..self.pos - 1]));
            }
            if c == b'\\' {
                if self.peek().is_none() {
                    break;
                }
                self.consume(1);
            }
        }
        Err(JsonError::Tokenization(
            "hit end of input before the closing '\"' of a string literal".into(),
        ))
    }

    /// Build the error for a byte no token can start with. The cursor has
    /// already moved past the offending byte.
    fn unrecognized_character(&self) -> JsonError {
        let offset = self.pos - 1;
        match self.input[offset..].chars().next() {
            Some(ch) => JsonError::Tokenization(format!("unrecognized character {ch:?}")),
            None => JsonError::Tokenization("unrecognized character".into()),
        }
    }
}

/// The fixed spelling of a punctuation token.
fn punctuation_text(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::LBrace => "{",
        TokenKind::RBrace => "}",
        TokenKind::LBracket => "[",
        TokenKind::RBracket => "]",
        TokenKind::Colon => ":",
        TokenKind::Comma => ",",
        TokenKind::Str | TokenKind::Number | TokenKind::Boolean | TokenKind::Null => "",
    }
}
