//! Workspace-wide error type using thiserror.

use std::path::PathBuf;

/// Common result type for Lexicon operations.
pub type Result<T> = std::result::Result<T, LexiconError>;

/// Errors that cross the Lexicon API boundary.
///
/// Only configuration problems are ever returned to callers of the
/// translation manager. Per-file parse failures are logged and skipped during
/// a load and only surface through [`LexiconError::Parse`] when a parser is
/// invoked directly.
#[derive(thiserror::Error, Debug)]
pub enum LexiconError {
    /// The requested source path exists neither in the active resource
    /// source nor on disk.
    #[error("{} does not exist", path.display())]
    PathNotFound {
        /// The path as given by the caller.
        path: PathBuf,
    },

    /// Placeholder delimiters were empty.
    #[error("Invalid delimiters: left {left:?}, right {right:?}")]
    InvalidDelimiters {
        /// Left delimiter.
        left: String,
        /// Right delimiter.
        right: String,
    },

    /// A translation file could not be decoded into a flat mapping.
    #[error("Failed to parse {path}: {message}")]
    Parse {
        /// File the content came from.
        path: String,
        /// Parser error text.
        message: String,
    },

    /// A packed resource archive could not be opened or read.
    #[error("Archive error: {0}")]
    Archive(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registering a file-change watch failed.
    #[error("Watch error: {0}")]
    Watch(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LexiconError {
    /// Builds a [`LexiconError::Config`] from any displayable message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Builds a [`LexiconError::Parse`] for the given file.
    pub fn parse(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_message() {
        let err = LexiconError::PathNotFound {
            path: PathBuf::from("missing/i18n"),
        };
        assert_eq!(err.to_string(), "missing/i18n does not exist");
    }

    #[test]
    fn test_parse_helper() {
        let err = LexiconError::parse("en.json", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Failed to parse en.json: expected value at line 1"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: LexiconError = io.into();
        assert!(matches!(err, LexiconError::Io(_)));
    }
}
