//! Tree builder: turns a [`TokenBuffer`] into a [`Value`].
//!
//! The parser makes a single pass over the tokens. Two pieces of state guard
//! the grammar:
//! - the kind of the previous token, which rules out sequences such as a value
//!   directly after `{`;
//! - the stack of open containers, which decides whether a value is appended to
//!   an array or must arrive through a key.
//!
//! A key looks ahead exactly one token and consumes it as its value, so an
//! object only ever receives children through keys.
//!
//! The first violation aborts the parse and the partially built tree is
//! dropped.

mod error;

use tracing::{debug, trace};

pub use self::error::{ParseError, SyntaxError};
use crate::{
    lexer::is_number_literal,
    options::{DuplicateKeys, MAX_DEPTH_CEILING, ParserOptions},
    token::{Position, Token, TokenBuffer, TokenKind},
    value::Value,
    value_zipper::{ContainerKind, ValueZipper, ZipperError},
};


/// Builds value trees from token buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Builds the document described by `tokens`.
    ///
    /// # Errors
    ///
    /// Fails with the first grammar violation: an empty buffer, a token that
    /// cannot follow its predecessor, a scalar root, a container left open, or
    /// a violation of the configured depth or duplicate key policy.
    pub fn parse(&self, tokens: &TokenBuffer) -> Result<Value, ParseError> {
        let result = ParseState::new(tokens.as_slice(), self.options).run();

        #[cfg(any(test, feature = "fuzzing"))]
        if self.options.panic_on_error {
            if let Err(err) = &result {
                panic!("{err}");
            }
        }

        result
    }
}

/// Builds the document described by `tokens` with the default options.
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse(tokens: &TokenBuffer) -> Result<Value, ParseError> {
    Parser::default().parse(tokens)
}

struct ParseState<'t> {
    tokens: &'t [Token],
    cursor: usize,
    /// Kind of the last token consumed; `Nothing` before the first one.
    last: TokenKind,
    options: ParserOptions,
    zipper: ValueZipper,
}

impl<'t> ParseState<'t> {
    fn new(tokens: &'t [Token], options: ParserOptions) -> Self {
        Self {
            tokens,
            cursor: 0,
            last: TokenKind::Nothing,
            options,
            zipper: ValueZipper::new(),
        }
    }

    fn run(mut self) -> Result<Value, ParseError> {
        let tokens = self.tokens;
        let Some(final_token) = tokens.last() else {
            return Err(ParseError::new(SyntaxError::EmptySource, Position::default()));
        };

        while let Some(token) = tokens.get(self.cursor) {
            self.cursor += 1;
            trace!(kind = %token.kind, after = %self.last, depth = self.zipper.depth(), "parse step");
            match token.kind {
                TokenKind::ObjectStart | TokenKind::ArrayStart => self.open(token)?,
                TokenKind::ObjectEnd | TokenKind::ArrayEnd => self.close(token)?,
                TokenKind::Key => self.key(token)?,
                TokenKind::Number | TokenKind::Bool | TokenKind::String | TokenKind::Null => {
                    self.scalar(token)?;
                }
                TokenKind::Comma | TokenKind::Colon | TokenKind::Nothing => {
                    return Err(self.unexpected(token));
                }
            }
        }

        if self.zipper.is_open() {
            return Err(ParseError::new(
                SyntaxError::UnterminatedContainer,
                final_token.position,
            ));
        }

        let root = self
            .zipper
            .into_value()
            .ok_or_else(|| ParseError::new(SyntaxError::EmptySource, Position::default()))?;
        debug!(tokens = tokens.len(), kind = %root.kind(), "parsed document");
        Ok(root)
    }

    fn open(&mut self, token: &Token) -> Result<(), ParseError> {
        let Some(kind) = ContainerKind::opened_by(token.kind) else {
            return Err(self.unexpected(token));
        };
        if self.last == TokenKind::ObjectStart {
            return Err(self.unexpected(token));
        }

        if self.last == TokenKind::Nothing {
            self.check_depth(token)?;
            self.zipper
                .open_root(kind)
                .map_err(|err| self.zipper_error(err, token))?;
        } else {
            // a closed root, or an object expecting a key
            if self.zipper.active_kind() != Some(ContainerKind::Array) {
                return Err(self.unexpected(token));
            }
            self.check_depth(token)?;
            self.zipper
                .append(kind.empty())
                .map_err(|err| self.zipper_error(err, token))?;
        }

        self.last = token.kind;
        Ok(())
    }

    fn close(&mut self, token: &Token) -> Result<(), ParseError> {
        if self.last == TokenKind::Key {
            return Err(self.unexpected(token));
        }
        match self.zipper.active_kind() {
            Some(open) if open.closed_by() == token.kind => {
                self.zipper
                    .pop()
                    .map_err(|err| self.zipper_error(err, token))?;
            }
            _ => return Err(self.unexpected(token)),
        }
        self.last = token.kind;
        Ok(())
    }

    fn key(&mut self, token: &Token) -> Result<(), ParseError> {
        if self.last == TokenKind::Key
            || self.zipper.active_kind() != Some(ContainerKind::Object)
        {
            return Err(self.unexpected(token));
        }

        let tokens = self.tokens;
        let Some(value_token) = tokens.get(self.cursor) else {
            return Err(ParseError::new(
                SyntaxError::UnterminatedContainer,
                token.position,
            ));
        };

        let value = if let Some(kind) = ContainerKind::opened_by(value_token.kind) {
            self.check_depth(value_token)?;
            kind.empty()
        } else if value_token.kind.is_scalar() {
            scalar_value(value_token)?
        } else {
            return Err(ParseError::new(
                SyntaxError::UnexpectedTokenSequence {
                    found: value_token.kind,
                    after: TokenKind::Key,
                },
                value_token.position,
            ));
        };

        let replaced = self
            .zipper
            .insert(token.text.clone(), value)
            .map_err(|err| self.zipper_error(err, token))?;
        if replaced {
            if self.options.duplicate_keys == DuplicateKeys::Reject {
                return Err(ParseError::new(
                    SyntaxError::DuplicateKey(token.text.clone()),
                    token.position,
                ));
            }
            debug!(key = %token.text, position = %token.position, "duplicate key replaced");
        }

        self.cursor += 1;
        self.last = value_token.kind;
        Ok(())
    }

    fn scalar(&mut self, token: &Token) -> Result<(), ParseError> {
        if matches!(self.last, TokenKind::ObjectStart | TokenKind::Key) {
            return Err(self.unexpected(token));
        }
        match self.zipper.active_kind() {
            Some(ContainerKind::Array) => {
                let value = scalar_value(token)?;
                self.zipper
                    .append(value)
                    .map_err(|err| self.zipper_error(err, token))?;
            }
            None if !self.zipper.has_root() => {
                return Err(ParseError::new(
                    SyntaxError::ScalarRoot(token.kind),
                    token.position,
                ));
            }
            // a bare value inside an object, or anything after the root closed
            _ => return Err(self.unexpected(token)),
        }
        self.last = token.kind;
        Ok(())
    }

    /// Opening `token` would add one level to the currently open containers.
    fn check_depth(&self, token: &Token) -> Result<(), ParseError> {
        let max = self.options.max_depth.min(MAX_DEPTH_CEILING);
        if self.zipper.depth() >= max {
            return Err(ParseError::new(
                SyntaxError::DepthLimitExceeded(max),
                token.position,
            ));
        }
        Ok(())
    }

    fn unexpected(&self, token: &Token) -> ParseError {
        ParseError::new(
            SyntaxError::UnexpectedTokenSequence {
                found: token.kind,
                after: self.last,
            },
            token.position,
        )
    }

    fn zipper_error(&self, err: ZipperError, token: &Token) -> ParseError {
        trace!(%err, "tree builder refused token");
        self.unexpected(token)
    }
}

/// Converts a scalar token into its value.
fn scalar_value(token: &Token) -> Result<Value, ParseError> {
    let value = match token.kind {
        TokenKind::Bool => Value::Boolean(token.text == "true"),
        TokenKind::String => Value::String(token.text.clone()),
        TokenKind::Null => Value::Null,
        TokenKind::Number => number_value(token)?,
        found => {
            return Err(ParseError::new(
                SyntaxError::UnexpectedTokenSequence {
                    found,
                    after: TokenKind::Nothing,
                },
                token.position,
            ));
        }
    };
    Ok(value)
}

/// A literal with a `.` is a float, anything else an integer. Either kind
/// fails when the literal is out of range.
fn number_value(token: &Token) -> Result<Value, ParseError> {
    let text = token.text.as_str();
    let invalid = || ParseError::new(SyntaxError::InvalidNumber(text.to_owned()), token.position);
    if !is_number_literal(text) {
        return Err(invalid());
    }
    if text.contains('.') {
        match text.parse::<f64>() {
            Ok(float) if float.is_finite() => Ok(Value::Float(float)),
            _ => Err(invalid()),
        }
    } else {
        text.parse().map(Value::Integer).map_err(|_| invalid())
    }
}
