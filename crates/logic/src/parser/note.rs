//! Parser for the `note` command.

use stockbook_core::{Note, SerialNumber};

use crate::commands::NoteCommand;
use crate::errors::ParseError;
use crate::syntax::{ALL_PREFIXES, PREFIX_NOTE, PREFIX_SERIAL_NUMBER, Prefix, invalid_prefixes_for};
use crate::tokenizer::tokenize;

const VALID_PREFIXES: [Prefix; 2] = [PREFIX_SERIAL_NUMBER, PREFIX_NOTE];

pub fn parse(args: &str) -> Result<NoteCommand, ParseError> {
    let map = tokenize(args, &ALL_PREFIXES);

    if !map.contains_all(&VALID_PREFIXES)
        || map.contains_any(&invalid_prefixes_for(&VALID_PREFIXES))
        || map.has_duplicate(&VALID_PREFIXES)
        || !map.preamble().is_empty()
    {
        return Err(ParseError::InvalidCommandFormat(NoteCommand::MESSAGE_USAGE));
    }

    let serial_number = SerialNumber::parse(map.value(PREFIX_SERIAL_NUMBER).unwrap_or_default())?;
    let note = Note::parse(map.value(PREFIX_NOTE).unwrap_or_default())?;

    Ok(NoteCommand::new(serial_number, note))
}
