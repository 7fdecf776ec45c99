//! Parser for the `delete` command.

use stockbook_core::SerialNumber;

use crate::commands::DeleteCommand;
use crate::errors::ParseError;
use crate::syntax::{ALL_PREFIXES, PREFIX_SERIAL_NUMBER, invalid_prefixes_for};
use crate::tokenizer::tokenize;

/// Targets come from two places, in order: bare whitespace-separated tokens
/// in the preamble, then every `sn/` value (the prefix may repeat; one value
/// may contain spaces). At least one target is required.
pub fn parse(args: &str) -> Result<DeleteCommand, ParseError> {
    let map = tokenize(args, &ALL_PREFIXES);

    if map.contains_any(&invalid_prefixes_for(&[PREFIX_SERIAL_NUMBER])) {
        return Err(ParseError::InvalidCommandFormat(
            DeleteCommand::MESSAGE_USAGE,
        ));
    }

    let mut targets: Vec<SerialNumber> = Vec::new();
    for token in map.preamble().split_whitespace() {
        targets.push(SerialNumber::parse(token)?);
    }
    for value in map.values(PREFIX_SERIAL_NUMBER) {
        targets.push(SerialNumber::parse(value)?);
    }

    if targets.is_empty() {
        return Err(ParseError::InvalidCommandFormat(
            DeleteCommand::MESSAGE_USAGE,
        ));
    }

    Ok(DeleteCommand::new(targets))
}
