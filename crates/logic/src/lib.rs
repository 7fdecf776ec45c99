//! `stockbook-logic` — the command engine.
//!
//! Raw input line → [`parser::parse_command`] → [`commands::Command`] →
//! `execute(&mut Model)` → [`commands::CommandResult`] or a [`LogicError`].
//! Parsing and execution are synchronous; a failed line leaves the model
//! exactly as it was.

pub mod commands;
pub mod errors;
pub mod parser;
pub mod syntax;
pub mod tokenizer;

pub use commands::{Command, CommandResult};
pub use errors::{CommandError, LogicError, ParseError};
pub use parser::parse_command;

use stockbook_model::Model;

/// Parse and execute one input line against the model.
pub fn execute(input: &str, model: &mut Model) -> Result<CommandResult, LogicError> {
    let command = parse_command(input)?;
    let result = command.execute(model)?;
    Ok(result)
}
