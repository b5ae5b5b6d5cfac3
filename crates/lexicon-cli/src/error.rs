//! CLI error types using thiserror.

use lexicon_common::LexiconError;

/// Errors raised while setting up or running the CLI.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Settings, path or delimiter error from the library.
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the CLI.
pub type CliResult<T> = Result<T, CliError>;
