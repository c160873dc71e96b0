//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Value object validation errors live in [`crate::domain::ValidationError`] and are
//! wrapped by [`BookError`] when they surface from store operations.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when working with contacts and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A name, phone, or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("No record found for name: {0}")]
    NoRecord(String),

    /// The contact has no phone number equal to the given one
    #[error("Phone number not found: {0}")]
    NoSuchPhone(String),

    /// The birthday has no matching date in the target year (Feb 29 in a non-leap year)
    #[error("No celebration date for {name} in {year}")]
    InvalidCelebrationDate { name: String, year: i32 },
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document is not valid JSON or holds invalid values
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The stored document was written by an incompatible format version
    #[error("Unsupported address book version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while executing a console command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The underlying book operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// Saving the book on exit failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Reading input from or writing replies to the console failed
    #[error("Console I/O error: {0}")]
    Console(#[from] std::io::Error),

    /// The command was given fewer arguments than it needs
    #[error("Missing arguments, usage: {0}")]
    MissingArguments(&'static str),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Validation(err))
    }
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
