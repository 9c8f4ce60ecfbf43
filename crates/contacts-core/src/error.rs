//! Error types for the address book
//!
//! Three of the variants are session faults: they are reported to the user
//! and the interpreter keeps running. I/O errors on the terminal streams are
//! not faults and end the session.

use thiserror::Error;

/// Result type alias for address book operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the address book
#[derive(Error, Debug)]
pub enum Error {
    /// Contact absent from the store
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Value failed format validation (e.g. a malformed birthday)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Command received the wrong number of arguments
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Terminal stream errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an invalid command error
    pub fn invalid_command(msg: impl Into<String>) -> Self {
        Self::InvalidCommand(msg.into())
    }

    /// User-facing text for a session fault
    ///
    /// Returns `None` for errors that are not session faults.
    pub fn reply(&self) -> Option<&'static str> {
        match self {
            Error::NotFound(_) => Some("Contact not found."),
            Error::InvalidInput(_) => Some("Invalid input."),
            Error::InvalidCommand(_) => Some("Invalid command."),
            Error::Io(_) => None,
        }
    }
}
