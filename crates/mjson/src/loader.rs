//! Entry points that go from text or a file to a [`Value`].

use std::{fs, path::Path};

use tracing::debug;

use crate::{
    error::LoadError,
    lexer,
    options::ParserOptions,
    parser::{ParseError, Parser},
    value::Value,
};

/// Runs the lexer and parser with a fixed set of options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Loader {
    parser: Parser,
}

impl Loader {
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            parser: Parser::new(options),
        }
    }

    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        self.parser.options()
    }

    /// Parses an in-memory document.
    ///
    /// # Errors
    ///
    /// Returns the first lexical or grammar error in `source`.
    pub fn load_text(&self, source: &str) -> Result<Value, ParseError> {
        let tokens = lexer::tokenize(source)?;
        self.parser.parse(&tokens)
    }

    /// Reads the whole file at `path` and parses it.
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if the file cannot be read as UTF-8 text,
    /// [`LoadError::Parse`] if its contents are not a valid document.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Value, LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "read source file");
        Ok(self.load_text(&source)?)
    }
}

/// Parses an in-memory document with the default options.
///
/// ```
/// let doc = mjson::load_from_text(r#"{"name": "mjson", "tags": ["small", "strict"]}"#)?;
/// assert_eq!(doc.get_as::<&str>("name")?, "mjson");
/// assert_eq!(doc["tags"].len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// See [`Loader::load_text`].
pub fn load_from_text(source: &str) -> Result<Value, ParseError> {
    Loader::default().load_text(source)
}

/// Reads and parses a file with the default options.
///
/// # Errors
///
/// See [`Loader::load_file`].
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Value, LoadError> {
    Loader::default().load_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{options::DuplicateKeys, parser::SyntaxError};

    #[test]
    fn text_round_trip_through_lexer_and_parser() {
        let doc = load_from_text("[1, 2.5, \"three\", true, null]").unwrap();
        assert_eq!(
            doc,
            Value::Array(vec![
                Value::Integer(1),
                Value::Float(2.5),
                Value::from("three"),
                Value::Boolean(true),
                Value::Null,
            ])
        );
    }

    #[test]
    fn lexer_errors_surface_unchanged() {
        let err = load_from_text("[1, @]").unwrap_err();
        assert_eq!(err.kind, SyntaxError::InvalidCharacter('@'));
    }

    #[test]
    fn loader_applies_its_options() {
        let loader = Loader::new(ParserOptions {
            duplicate_keys: DuplicateKeys::Reject,
            ..Default::default()
        });
        assert_eq!(loader.options().duplicate_keys, DuplicateKeys::Reject);
        assert!(loader.load_text(r#"{"k": 1, "k": 1}"#).is_err());
        assert!(load_from_text(r#"{"k": 1, "k": 1}"#).is_ok());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.as_parse_error().is_none());
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
