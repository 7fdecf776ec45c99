//! `stockbook-model` — application state.
//!
//! Owns the stock book, the serial-number registry and the active search
//! filter, behind a `Model` facade that keeps book and registry in lockstep.

pub mod model;
pub mod predicate;
pub mod serial_numbers;
pub mod stock_book;

pub use model::Model;
pub use predicate::{StockFilter, StockPredicate};
pub use serial_numbers::{SerialNumberSet, SerialNumberSetsBook};
pub use stock_book::StockBook;
