use std::{io, path::PathBuf};

use thiserror::Error;

use crate::parser::ParseError;

/// Why [`load_from_file`](crate::load_from_file) produced no document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl LoadError {
    /// The syntax error, if reading succeeded but parsing did not.
    #[must_use]
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            LoadError::Parse(err) => Some(err),
            LoadError::Io { .. } => None,
        }
    }
}
