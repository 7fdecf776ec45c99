//! `stockbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no parsing or storage
//! concerns): the field value objects a stock is made of, the `Stock` entity
//! itself, and the validation error model.

pub mod error;
pub mod fields;
pub mod stock;

pub use error::{ValidationError, ValidationResult};
pub use fields::{Location, Name, Note, Quantity, SerialNumber, Source};
pub use stock::Stock;
