//! Engine error taxonomy.
//!
//! None of these are fatal: a failed command leaves the model untouched and
//! the engine ready for the next line.

use thiserror::Error;

use stockbook_core::{SerialNumber, ValidationError};

/// Malformed command syntax: the input line never became a command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command")]
    UnknownCommand,

    /// The command word was recognized but its arguments break the command's
    /// format rules. Carries the command's usage text.
    #[error("Invalid command format!\n{0}")]
    InvalidCommandFormat(&'static str),

    /// A field value failed its format rule.
    #[error(transparent)]
    InvalidField(#[from] ValidationError),
}

/// A well-formed command failed while executing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Stock with given serial number already exists in the stock book")]
    DuplicateSerialNumber,

    /// Carries a newline-prefixed listing of every unresolved serial number.
    #[error("Serial number(s) not found:{0}")]
    SerialNumbersNotFound(String),
}

impl CommandError {
    pub fn serial_numbers_not_found(serial_numbers: &[SerialNumber]) -> Self {
        let listing = serial_numbers
            .iter()
            .map(|serial| format!("\n{serial}"))
            .collect();
        Self::SerialNumbersNotFound(listing)
    }
}

/// Everything the engine can report; the shell prints these uniformly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),
}
