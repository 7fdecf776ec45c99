//! Parser for the `sort` command.

use crate::commands::{SortCommand, SortField, SortOrder};
use crate::errors::ParseError;
use crate::syntax::{ALL_PREFIXES, PREFIX_SORT_FIELD, PREFIX_SORT_ORDER, Prefix, invalid_prefixes_for};
use crate::tokenizer::tokenize;

const VALID_PREFIXES: [Prefix; 2] = [PREFIX_SORT_FIELD, PREFIX_SORT_ORDER];

/// Requires exactly one field and one order token; unrecognized tokens fail
/// the parse the same way a missing prefix does.
pub fn parse(args: &str) -> Result<SortCommand, ParseError> {
    let map = tokenize(args, &ALL_PREFIXES);

    if !map.contains_all(&VALID_PREFIXES)
        || map.contains_any(&invalid_prefixes_for(&VALID_PREFIXES))
        || map.has_duplicate(&VALID_PREFIXES)
        || !map.preamble().is_empty()
    {
        return Err(ParseError::InvalidCommandFormat(SortCommand::MESSAGE_USAGE));
    }

    let field = SortField::parse_token(map.value(PREFIX_SORT_FIELD).unwrap_or_default())
        .ok_or(ParseError::InvalidCommandFormat(SortCommand::MESSAGE_USAGE))?;
    let order = SortOrder::parse_token(map.value(PREFIX_SORT_ORDER).unwrap_or_default())
        .ok_or(ParseError::InvalidCommandFormat(SortCommand::MESSAGE_USAGE))?;

    Ok(SortCommand::new(field, order))
}
