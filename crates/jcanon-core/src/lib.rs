//! # jcanon-core
//!
//! Arena-backed JSON tokenizer, recursive-descent parser, and canonical
//! pretty-printer.
//!
//! One pass flows bytes → [`Tokenizer`] → token sequence → [`Parser`] →
//! rooted [`Node`] tree → [`writer::write`] → formatted text. All string
//! data produced by the pass lives in a single [`Arena`] and is released
//! as a whole when the arena goes out of scope; the borrow checker keeps
//! the tree from outliving it.
//!
//! The writer always emits the same canonical form regardless of input
//! formatting: 2-space indentation, key-sorted objects, and a `.0` suffix
//! on floats with a zero fractional part.
//!
//! ## Quick start
//!
//! ```rust
//! use jcanon_core::{parse, write, Arena};
//!
//! let arena = Arena::new();
//! let root = parse(r#"{"b": 2, "a": 1}"#, &arena).unwrap();
//! assert_eq!(write(&root), "{\n  \"a\": 1,\n  \"b\": 2\n}");
//! ```
//!
//! ## Modules
//!
//! - [`arena`] — bump-pointer region backing lexeme and string allocation
//! - [`tokenizer`] — text → token sequence
//! - [`parser`] — token sequence → [`Node`] tree
//! - [`node`] — the tagged JSON value type and its query API
//! - [`writer`] — [`Node`] tree → canonical text
//! - [`structure`] — composable shape predicates for consumers
//! - [`error`] — error types for tokenize/parse failures

pub mod arena;
pub mod error;
pub mod node;
pub mod parser;
pub mod structure;
pub mod tokenizer;
pub mod writer;

pub use arena::Arena;
pub use error::{JsonError, Result};
pub use node::{Array, Node, Object};
pub use parser::Parser;
pub use structure::{ArrayStructure, NodePredicate, ObjectStructure, Structure};
pub use tokenizer::{Token, TokenKind, Tokenizer};
pub use writer::write;

/// Tokenize and parse `input` in one step, returning the rooted tree.
///
/// Every lexeme and string payload is carved from `arena`; the tree borrows
/// it and dies with it.
pub fn parse<'arena>(input: &str, arena: &'arena Arena) -> Result<Node<'arena>> {
    let tokens = Tokenizer::new(input, arena).tokenize()?;
    Parser::new(tokens).parse()
}
