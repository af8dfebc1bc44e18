//! Shell error types

use thiserror::Error;

/// Errors raised while bringing the shell up or talking to the terminal.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] reel_library::LibraryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for shell operations
pub type Result<T> = std::result::Result<T, CliError>;
