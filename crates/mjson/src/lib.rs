//! A small JSON lexer, parser and dynamic value tree.
//!
//! Parsing runs in two passes. [`tokenize`] classifies the source character by
//! character and produces a flat [`TokenBuffer`]; [`Parser`] then walks the
//! tokens once and builds a [`Value`] tree whose root is always an array or an
//! object.
//!
//! ```rust
//! use mjson::{Kind, Value};
//!
//! let doc = mjson::load_from_text(r#"{"a": [1, 2.5], "b": null}"#).unwrap();
//! assert_eq!(doc.kind(), Kind::Object);
//! assert_eq!(doc["a"][0], Value::Integer(1));
//! assert_eq!(doc["a"][1], Value::Float(2.5));
//! assert!(doc["b"].is_null());
//! ```
//!
//! The accepted grammar is a strict subset of JSON: strings have no escape
//! sequences and numbers have no exponent. Commas only separate, so a missing
//! or doubled comma between values is tolerated.

#![allow(missing_docs)]

mod access;
mod classify;
mod error;
mod lexer;
mod loader;
mod options;
mod parser;
mod token;
mod value;
mod value_zipper;

#[cfg(test)]
mod tests;

pub use access::{AccessError, FromValue};
pub use classify::{CharClass, Significant, Unrecognized, classify, next_significant};
pub use error::LoadError;
pub use lexer::tokenize;
pub use loader::{Loader, load_from_file, load_from_text};
pub use options::{DEFAULT_MAX_DEPTH, DuplicateKeys, MAX_DEPTH_CEILING, ParserOptions};
pub use parser::{ParseError, Parser, SyntaxError, parse};
pub use token::{Position, Token, TokenBuffer, TokenKind};
pub use value::{Array, Kind, Object, Value};
