//! Recursive-descent parser -- token sequence to a rooted [`Node`] tree.
//!
//! Grammar:
//!
//! ```text
//! Value  := Object | Array | String | Number | Boolean | Null
//! Object := '{' (String ':' Value (',' String ':' Value)*)? '}'
//! Array  := '[' (Value (',' Value)*)? ']'
//! ```
//!
//! The top level is stricter than `Value`: a document must begin with `{`
//! or `[`, and a bare scalar at the root is rejected.
//!
//! # Edge-case policies
//!
//! - **Trailing commas are rejected**: a comma directly followed by the
//!   matching closing bracket fails with a trailing-comma error.
//! - **Adjacent values are rejected**: two values (or pairs) with no comma
//!   between them fail with a comma-delimiting error.
//! - **Duplicate object keys**: the last occurrence wins; no error.
//! - **Exhausted tokens** fail with [`JsonError::MissingToken`] naming what
//!   was expected; a present-but-wrong token fails with
//!   [`JsonError::WrongTokenType`].
//! - **Tokens after the root value** are ignored; the parse stops at the
//!   root's closing bracket.

use crate::error::{JsonError, Result};
use crate::node::{Array, Node, Object};
use crate::tokenizer::{Token, TokenKind};

/// Parses a token sequence into a parse tree.
///
/// [`parse`](Parser::parse) consumes the parser and returns the root, so a
/// tree can only be obtained from a parse that succeeded.
pub struct Parser<'arena> {
    tokens: Vec<Token<'arena>>,
    pos: usize,
}

impl<'arena> Parser<'arena> {
    pub fn new(tokens: Vec<Token<'arena>>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the token sequence and return the rooted tree.
    ///
    /// The document must begin with `{` or `[`; anything else fails, an
    /// empty sequence with [`JsonError::MissingToken`] and a bare scalar
    /// with [`JsonError::WrongTokenType`].
    pub fn parse(mut self) -> Result<Node<'arena>> {
        let first = self
            .peek()
            .ok_or_else(|| JsonError::MissingToken("cannot parse an empty token sequence".into()))?;
        match first.kind {
            TokenKind::LBrace => self.parse_object(),
            TokenKind::LBracket => self.parse_array(),
            _ => Err(JsonError::WrongTokenType(
                "top-level value must be an object or an array".into(),
            )),
        }
    }

    /// The token at the read position, without advancing.
    fn peek(&self) -> Option<Token<'arena>> {
        self.peek_at(0)
    }

    /// The token `offset` positions ahead of the read position.
    fn peek_at(&self, offset: usize) -> Option<Token<'arena>> {
        self.tokens.get(self.pos + offset).copied()
    }

    /// Advance the read position `n` tokens, stopping at the end.
    fn consume(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.tokens.len());
    }

    /// Parse one value of any kind at the read position.
    fn parse_value(&mut self) -> Result<Node<'arena>> {
        let token = self
            .peek()
            .ok_or_else(|| JsonError::MissingToken("expected a value".into()))?;
        match token.kind {
            TokenKind::LBrace => self.parse_object(),
            TokenKind::LBracket => self.parse_array(),
            TokenKind::Str => {
                self.consume(1);
                Ok(Node::String(token.lexeme))
            }
            TokenKind::Number => {
                self.consume(1);
                number_node(token.lexeme)
            }
            TokenKind::Boolean => {
                self.consume(1);
                Ok(Node::Bool(token.lexeme == "true"))
            }
            TokenKind::Null => {
                self.consume(1);
                Ok(Node::Null)
            }
            TokenKind::RBrace | TokenKind::RBracket | TokenKind::Colon | TokenKind::Comma => Err(
                JsonError::WrongTokenType("next token does not begin a value".into()),
            ),
        }
    }

    /// Parse an object; the read position is on the opening `{`.
    fn parse_object(&mut self) -> Result<Node<'arena>> {
        self.consume(1);
        let mut object = Object::new();
        let mut token = self
            .peek()
            .ok_or_else(|| JsonError::MissingToken("expected a token after '{'".into()))?;
        while token.kind != TokenKind::RBrace {
            if token.kind != TokenKind::Str {
                return Err(JsonError::WrongTokenType(
                    "expected '}' or a key-value pair after '{'".into(),
                ));
            }
            let key = token.lexeme;
            self.consume(1);
            let colon = self.peek().ok_or_else(|| {
                JsonError::MissingToken(format!("expected a token after key \"{key}\""))
            })?;
            if colon.kind != TokenKind::Colon {
                return Err(JsonError::WrongTokenType(format!(
                    "expected ':' after key \"{key}\""
                )));
            }
            self.consume(1);
            let value = self.parse_value()?;
            // Last occurrence of a duplicate key wins.
            object.insert(key, value);
            token = self.peek().ok_or_else(|| {
                JsonError::MissingToken("expected a token after a key-value pair".into())
            })?;
            if token.kind == TokenKind::Comma {
                let lookahead = self
                    .peek_at(1)
                    .ok_or_else(|| JsonError::MissingToken("expected a token after ','".into()))?;
                if lookahead.kind == TokenKind::RBrace {
                    return Err(JsonError::WrongTokenType(
                        "trailing commas are not allowed".into(),
                    ));
                }
                self.consume(1);
                token = lookahead;
            } else if token.kind.is_value_initial() {
                return Err(JsonError::WrongTokenType(
                    "key-value pairs must be comma-delimited".into(),
                ));
            }
        }
        self.consume(1);
        Ok(Node::Object(object))
    }

    /// Parse an array; the read position is on the opening `[`.
    fn parse_array(&mut self) -> Result<Node<'arena>> {
        self.consume(1);
        let mut array = Array::new();
        let mut token = self
            .peek()
            .ok_or_else(|| JsonError::MissingToken("expected a token after '['".into()))?;
        while token.kind != TokenKind::RBracket {
            if !token.kind.is_value_initial() {
                return Err(JsonError::WrongTokenType(
                    "expected ']' or a value after '['".into(),
                ));
            }
            array.push(self.parse_value()?);
            token = self
                .peek()
                .ok_or_else(|| JsonError::MissingToken("expected a token after a value".into()))?;
            if token.kind == TokenKind::Comma {
                let lookahead = self
                    .peek_at(1)
                    .ok_or_else(|| JsonError::MissingToken("expected a token after ','".into()))?;
                if lookahead.kind == TokenKind::RBracket {
                    return Err(JsonError::WrongTokenType(
                        "trailing commas are not allowed".into(),
                    ));
                }
                self.consume(1);
                token = lookahead;
            } else if token.kind.is_value_initial() {
                return Err(JsonError::WrongTokenType(
                    "values must be comma-delimited".into(),
                ));
            }
        }
        self.consume(1);
        Ok(Node::Array(array))
    }
}

/// Convert a numeric lexeme into a node.
///
/// A lexeme containing `.` converts to a 64-bit float, anything else to a
/// signed 64-bit integer. An integer lexeme outside the `i64` range is a
/// malformed number and fails the parse.
fn number_node<'arena>(lexeme: &str) -> Result<Node<'arena>> {
    if lexeme.contains('.') {
        let x = lexeme.parse::<f64>().map_err(|_| {
            JsonError::Tokenization(format!("malformed float literal \"{lexeme}\""))
        })?;
        Ok(Node::Float(x))
    } else {
        let n = lexeme.parse::<i64>().map_err(|_| {
            JsonError::Tokenization(format!("integer literal out of range: \"{lexeme}\""))
        })?;
        Ok(Node::Int(n))
    }
}
