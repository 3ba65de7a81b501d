//! Tokens and the buffer that carries them from the lexer to the parser.

use core::{fmt, ops::Index, slice};

use bstr::ByteSlice;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
    /// Sentinel for "no token yet"; never emitted by the lexer.
    #[default]
    Nothing,
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    /// A string literal directly followed by a colon.
    Key,
    /// Consumed by the lexer; never emitted.
    Colon,
    /// Consumed by the lexer; never emitted.
    Comma,
    Number,
    Bool,
    String,
    Null,
}

impl TokenKind {
    /// Returns the name of the kind as it appears in token dumps and errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Nothing => "NOTHING",
            TokenKind::ObjectStart => "OBJECT_START",
            TokenKind::ObjectEnd => "OBJECT_END",
            TokenKind::ArrayStart => "ARRAY_START",
            TokenKind::ArrayEnd => "ARRAY_END",
            TokenKind::Key => "KEY",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Number => "NUMBER",
            TokenKind::Bool => "BOOL",
            TokenKind::String => "STRING",
            TokenKind::Null => "NULL_VALUE",
        }
    }

    /// `true` for the kinds that become a scalar value.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::Bool | TokenKind::String | TokenKind::Null
        )
    }

    /// `true` for the kinds that open a container.
    #[must_use]
    pub const fn is_container_start(self) -> bool {
        matches!(self, TokenKind::ObjectStart | TokenKind::ArrayStart)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a token starts in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Converts byte offsets into line/column positions.
///
/// Offsets are expected to be requested in increasing order, which is how the
/// lexer produces them; each request only scans the bytes since the previous
/// one. A request behind the cursor restarts from the beginning.
#[derive(Debug, Clone, Default)]
pub(crate) struct Locator {
    at: Position,
}

impl Locator {
    pub(crate) fn locate(&mut self, source: &str, offset: usize) -> Position {
        if offset < self.at.offset {
            self.at = Position::default();
        }
        let end = offset.min(source.len());
        let start = self.at.offset.min(end);
        for &byte in &source.as_bytes()[start..end] {
            if byte == b'\n' {
                self.at.line += 1;
                self.at.column = 1;
            } else if byte & 0xC0 != 0x80 {
                // continuation bytes belong to the previous character
                self.at.column += 1;
            }
        }
        self.at.offset = offset;
        self.at
    }
}

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The raw lexeme for keys, strings, numbers and booleans; empty otherwise.
    pub text: String,
    pub position: Position,
}

impl Token {
    /// Creates a token at the start of the source.
    ///
    /// Useful for building token buffers by hand; the lexer always records the
    /// real position with [`Token::at`].
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self::at(kind, text, Position::default())
    }

    pub fn at(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token{{{},{}}}", self.kind, self.text.as_bytes().as_bstr())
    }
}

/// An append-only, ordered sequence of tokens.
///
/// The lexer sizes the buffer up front from the source length and compacts it
/// once the whole source has been scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
}

impl TokenBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Drops any capacity that was reserved but never filled.
    pub fn compact(&mut self) {
        self.tokens.shrink_to_fit();
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Token> {
        self.tokens.get(idx)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tokens.capacity()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The kinds of all tokens, in order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|token| token.kind)
    }
}

impl Index<usize> for TokenBuffer {
    type Output = Token;

    fn index(&self, idx: usize) -> &Token {
        &self.tokens[idx]
    }
}

impl<'a> IntoIterator for &'a TokenBuffer {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenBuffer {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Token>> for TokenBuffer {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

/// One token per line, in the `Token{KIND,text}` form.
impl fmt::Display for TokenBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{token}")?;
        }
        Ok(())
    }
}
