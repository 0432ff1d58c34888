//! Unified application error type.
//! Converter, aggregator, config and CLI all return AppError so the
//! user-visible message is produced in a single place (main.rs).

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid file type: '{0}' (expected a .txt or .csv file)")]
    InvalidFileType(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Parse error: {0}")]
    Parse(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// CSV failures are either I/O (propagated as such) or malformed input.
impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(e) => AppError::Io(e),
                other => AppError::Parse(format!("{other:?}")),
            }
        } else {
            AppError::Parse(err.to_string())
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
