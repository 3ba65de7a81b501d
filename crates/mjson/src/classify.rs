//! Character classification.
//!
//! Every byte the lexer looks at is mapped to a [`CharClass`]. The mapping is a
//! plain `match`, so there is no table to initialise and nothing shared between
//! parses. Classification works on bytes: every character with a meaning in
//! the grammar is ASCII, and multi-byte UTF-8 sequences only ever appear inside
//! string literals, which the lexer skips without classifying.

use core::fmt;

/// The semantic class of a single source character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `"`
    Quote,
    /// `.`
    Period,
    /// ASCII `a-z` and `A-Z`.
    Letter,
    /// `-` and ASCII `0-9`.
    DigitOrMinus,
    /// Space, tab and carriage return.
    Whitespace,
    /// `\n`
    Newline,
}

impl CharClass {
    /// Returns the name of the class as it appears in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CharClass::BraceOpen => "BRACE_OPEN",
            CharClass::BraceClose => "BRACE_CLOSE",
            CharClass::BracketOpen => "BRACKET_OPEN",
            CharClass::BracketClose => "BRACKET_CLOSE",
            CharClass::Colon => "COLON",
            CharClass::Comma => "COMMA",
            CharClass::Quote => "QUOTE",
            CharClass::Period => "PERIOD",
            CharClass::Letter => "LETTER",
            CharClass::DigitOrMinus => "NUMBER",
            CharClass::Whitespace => "WHITESPACE",
            CharClass::Newline => "NEWLINE",
        }
    }

    /// Whether the lexer skips this class between tokens.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, CharClass::Whitespace | CharClass::Newline)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a byte to its class, or `None` if the grammar has no class for it.
#[must_use]
pub const fn classify(byte: u8) -> Option<CharClass> {
    let class = match byte {
        b'{' => CharClass::BraceOpen,
        b'}' => CharClass::BraceClose,
        b'[' => CharClass::BracketOpen,
        b']' => CharClass::BracketClose,
        b':' => CharClass::Colon,
        b',' => CharClass::Comma,
        b'"' => CharClass::Quote,
        b'.' => CharClass::Period,
        b'a'..=b'z' | b'A'..=b'Z' => CharClass::Letter,
        b'-' | b'0'..=b'9' => CharClass::DigitOrMinus,
        b' ' | b'\t' | b'\r' => CharClass::Whitespace,
        b'\n' => CharClass::Newline,
        _ => return None,
    };
    Some(class)
}

/// The next significant character found by [`next_significant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Significant {
    pub class: CharClass,
    /// Byte offset of the character itself.
    pub offset: usize,
    /// Byte offset immediately following the character.
    pub next: usize,
}

/// A character the grammar has no class for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unrecognized {
    pub ch: char,
    pub offset: usize,
}

/// Skips whitespace and newlines starting at `offset` and classifies the first
/// character that remains.
///
/// Returns `Ok(None)` when only blanks are left.
///
/// # Errors
///
/// Returns [`Unrecognized`] if the first significant character has no class.
pub fn next_significant(source: &str, offset: usize) -> Result<Option<Significant>, Unrecognized> {
    let bytes = source.as_bytes();
    let mut idx = offset;
    while let Some(&byte) = bytes.get(idx) {
        match classify(byte) {
            Some(class) if class.is_blank() => idx += 1,
            Some(class) => {
                return Ok(Some(Significant {
                    class,
                    offset: idx,
                    next: idx + 1,
                }));
            }
            None => {
                let ch = source
                    .get(idx..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(Unrecognized { ch, offset: idx });
            }
        }
    }
    Ok(None)
}
