//! Parser for the `find` command.

use stockbook_model::StockPredicate;

use crate::commands::FindCommand;
use crate::errors::ParseError;
use crate::syntax::{
    ALL_PREFIXES, PREFIX_LOCATION, PREFIX_NAME, PREFIX_SERIAL_NUMBER, PREFIX_SOURCE, Prefix,
    invalid_prefixes_for,
};
use crate::tokenizer::tokenize;

const VALID_PREFIXES: [Prefix; 4] = [
    PREFIX_NAME,
    PREFIX_SERIAL_NUMBER,
    PREFIX_SOURCE,
    PREFIX_LOCATION,
];

/// At least one searchable prefix must be present; repeating one is
/// ambiguous and rejected. One predicate is built per present prefix, and
/// the command ORs them together.
pub fn parse(args: &str) -> Result<FindCommand, ParseError> {
    let map = tokenize(args, &ALL_PREFIXES);

    if !map.contains_any(&VALID_PREFIXES)
        || map.contains_any(&invalid_prefixes_for(&VALID_PREFIXES))
        || map.has_duplicate(&VALID_PREFIXES)
        || !map.preamble().is_empty()
    {
        return Err(ParseError::InvalidCommandFormat(FindCommand::MESSAGE_USAGE));
    }

    let mut predicates: Vec<StockPredicate> = Vec::new();
    for prefix in VALID_PREFIXES {
        let Some(keywords) = map.value(prefix) else {
            continue;
        };
        predicates.push(build_predicate(prefix, keywords));
    }

    Ok(FindCommand::new(predicates))
}

/// Maps a searchable prefix to its predicate kind.
fn build_predicate(prefix: Prefix, keywords: &str) -> StockPredicate {
    match prefix {
        PREFIX_NAME => StockPredicate::name_contains(keywords),
        PREFIX_SERIAL_NUMBER => StockPredicate::serial_number_contains(keywords),
        PREFIX_SOURCE => StockPredicate::source_contains(keywords),
        _ => StockPredicate::location_contains(keywords),
    }
}
