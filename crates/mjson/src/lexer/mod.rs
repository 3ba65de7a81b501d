//! Lexer: turns source text into a flat [`TokenBuffer`].
//!
//! The lexer walks the source left to right and consumes one semantic unit per
//! step:
//! - `{`, `}`, `[` and `]` become structural tokens;
//! - whitespace, newlines and commas are dropped, so commas never reach the
//!   parser;
//! - a quoted run becomes a `KEY` when the next significant character is a
//!   colon (which is consumed with it), or a `STRING` when it is followed by a
//!   comma, a closing brace or bracket, or the end of input;
//! - a letter starts one of the keywords `true`, `false` or `null`;
//! - a digit or minus starts a number, which runs up to the next comma, closing
//!   brace or bracket, blank, or the end of input.
//!
//! Strings have no escape sequences: a string ends at the next `"`.
//!
//! The lexer only knows about neighbouring characters. Whether the tokens form
//! a valid document is decided by the parser.

use bstr::ByteSlice;
use tracing::{debug, trace};

use crate::{
    classify::{self, CharClass, Significant},
    parser::{ParseError, SyntaxError},
    token::{Locator, Token, TokenBuffer, TokenKind},
};


/// Bytes that end a number literal.
const NUMBER_DELIMITERS: &[u8] = b",}] \t\r\n";

/// Splits `source` into tokens.
///
/// # Errors
///
/// Fails on the first lexical problem: an empty source, a character outside the
/// grammar, an unterminated string, an unknown bare word, or a malformed number.
pub fn tokenize(source: &str) -> Result<TokenBuffer, ParseError> {
    Lexer::new(source).run()
}

struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    locator: Locator,
    tokens: TokenBuffer,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            locator: Locator::default(),
            // roughly one token for every two characters of dense JSON
            tokens: TokenBuffer::with_capacity(source.len() / 2),
        }
    }

    fn run(mut self) -> Result<TokenBuffer, ParseError> {
        if self.source.is_empty() {
            return Err(self.error_at(SyntaxError::EmptySource, 0));
        }

        while let Some(next) = self.next_significant(self.pos)? {
            self.pos = next.next;
            match next.class {
                CharClass::BraceOpen => self.emit(TokenKind::ObjectStart, "", next.offset),
                CharClass::BraceClose => self.emit(TokenKind::ObjectEnd, "", next.offset),
                CharClass::BracketOpen => self.emit(TokenKind::ArrayStart, "", next.offset),
                CharClass::BracketClose => self.emit(TokenKind::ArrayEnd, "", next.offset),
                CharClass::Comma | CharClass::Whitespace | CharClass::Newline => {}
                CharClass::Quote => self.string_literal(next.offset)?,
                CharClass::Letter => self.keyword(next.offset)?,
                CharClass::DigitOrMinus => self.number(next.offset)?,
                CharClass::Colon => {
                    let after = self.last_kind();
                    return Err(self.error_at(
                        SyntaxError::MisplacedCharacter {
                            found: CharClass::Colon,
                            after,
                        },
                        next.offset,
                    ));
                }
                CharClass::Period => {
                    return Err(self.error_at(SyntaxError::InvalidCharacter('.'), next.offset));
                }
            }
        }

        if self.tokens.is_empty() {
            return Err(self.error_at(SyntaxError::EmptySource, 0));
        }

        self.tokens.compact();
        debug!(
            bytes = self.source.len(),
            tokens = self.tokens.len(),
            "tokenized source"
        );
        Ok(self.tokens)
    }

    /// Scans a quoted run starting at the opening quote and decides from the
    /// following character whether it is a key or a string value.
    fn string_literal(&mut self, open: usize) -> Result<(), ParseError> {
        let source = self.source;
        let start = open + 1;
        let Some(len) = source.as_bytes()[start..].find_byte(b'"') else {
            return Err(self.error_at(SyntaxError::UnterminatedString, open));
        };
        let close = start + len;
        let text = &source[start..close];
        self.pos = close + 1;

        match self.next_significant(self.pos)? {
            Some(Significant {
                class: CharClass::Colon,
                next,
                ..
            }) => {
                self.emit(TokenKind::Key, text, open);
                self.pos = next;
            }
            Some(Significant {
                class: CharClass::Comma | CharClass::BraceClose | CharClass::BracketClose,
                ..
            })
            | None => self.emit(TokenKind::String, text, open),
            Some(other) => {
                return Err(self.error_at(
                    SyntaxError::MisplacedCharacter {
                        found: other.class,
                        after: TokenKind::String,
                    },
                    other.offset,
                ));
            }
        }
        Ok(())
    }

    fn keyword(&mut self, start: usize) -> Result<(), ParseError> {
        let source = self.source;
        let word_len = source.as_bytes()[start..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        let word = &source[start..start + word_len];
        let kind = match word {
            "true" | "false" => TokenKind::Bool,
            "null" => TokenKind::Null,
            _ => {
                return Err(self.error_at(SyntaxError::InvalidLiteral(word.to_owned()), start));
            }
        };
        self.emit(kind, word, start);
        self.pos = start + word_len;
        Ok(())
    }

    fn number(&mut self, start: usize) -> Result<(), ParseError> {
        let source = self.source;
        // the parser decides what a number at the very end means
        let len = source.as_bytes()[start..]
            .find_byteset(NUMBER_DELIMITERS)
            .unwrap_or(source.len() - start);
        let text = &source[start..start + len];
        if !is_number_literal(text) {
            return Err(self.error_at(SyntaxError::InvalidNumber(text.to_owned()), start));
        }
        self.emit(TokenKind::Number, text, start);
        self.pos = start + len;
        Ok(())
    }

    fn next_significant(&mut self, offset: usize) -> Result<Option<Significant>, ParseError> {
        classify::next_significant(self.source, offset)
            .map_err(|bad| self.error_at(SyntaxError::InvalidCharacter(bad.ch), bad.offset))
    }

    fn emit(&mut self, kind: TokenKind, text: &str, offset: usize) {
        let position = self.locator.locate(self.source, offset);
        trace!(%kind, text, %position, "token");
        self.tokens.push(Token::at(kind, text, position));
    }

    fn last_kind(&self) -> TokenKind {
        self.tokens
            .as_slice()
            .last()
            .map_or(TokenKind::Nothing, |token| token.kind)
    }

    fn error_at(&mut self, kind: SyntaxError, offset: usize) -> ParseError {
        ParseError::new(kind, self.locator.locate(self.source, offset))
    }
}

/// Checks `text` against `-? digit+ ('.' digit+)?`.
pub(crate) fn is_number_literal(text: &str) -> bool {
    fn all_digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    match unsigned.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => all_digits(unsigned),
    }
}
