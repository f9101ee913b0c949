//! Error types for tokenization, parsing, and tree queries.

use thiserror::Error;

/// Errors produced while turning JSON text into a tree or back.
///
/// Tokenizer and parser are fail-fast: the first error abandons the whole
/// pass, and no partial token sequence or tree is ever returned. Messages
/// name what was expected and, where available, the offending key, lexeme,
/// or character.
#[derive(Error, Debug)]
pub enum JsonError {
    /// A malformed lexeme: bad number, unterminated string, or an
    /// unrecognized character.
    #[error("tokenization failed: {0}")]
    Tokenization(String),

    /// The token sequence ended where a token was structurally required.
    #[error("missing token: {0}")]
    MissingToken(String),

    /// The next token is present but grammatically wrong, including the
    /// trailing-comma and comma-delimiting special cases.
    #[error("wrong token type: {0}")]
    WrongTokenType(String),

    /// A node's discriminant fell outside the known set. Unreachable with
    /// the closed [`Node`](crate::Node) enum; kept so the error taxonomy
    /// matches the exception set it replaces.
    #[error("undefined node type: {0}")]
    UndefinedType(String),
}

/// Convenience alias used throughout jcanon-core.
pub type Result<T> = std::result::Result<T, JsonError>;
