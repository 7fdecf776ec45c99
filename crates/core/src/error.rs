//! Field validation error model.

use thiserror::Error;

/// Result type used by the field constructors.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A field value failed its format rule.
///
/// Keep this focused on deterministic, per-field format failures. Command
/// syntax and execution failures belong to the logic layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Serial numbers should not be blank")]
    BlankSerialNumber,

    #[error("Names should not be blank")]
    BlankName,

    #[error("Sources should not be blank")]
    BlankSource,

    #[error("Locations should not be blank")]
    BlankLocation,

    #[error("Notes should not be blank")]
    BlankNote,

    /// Quantity text was not a non-negative whole number in range.
    #[error("Quantities should be non-negative whole numbers")]
    InvalidQuantity,
}
