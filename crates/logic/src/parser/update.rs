//! Parser for the `update` command.

use stockbook_core::{Location, Name, Quantity, SerialNumber};

use crate::commands::UpdateCommand;
use crate::errors::ParseError;
use crate::syntax::{
    ALL_PREFIXES, PREFIX_LOCATION, PREFIX_NAME, PREFIX_QUANTITY, PREFIX_SERIAL_NUMBER, Prefix,
    invalid_prefixes_for,
};
use crate::tokenizer::tokenize;

const VALID_PREFIXES: [Prefix; 4] = [
    PREFIX_SERIAL_NUMBER,
    PREFIX_NAME,
    PREFIX_QUANTITY,
    PREFIX_LOCATION,
];

const UPDATABLE_PREFIXES: [Prefix; 3] = [PREFIX_NAME, PREFIX_QUANTITY, PREFIX_LOCATION];

/// Requires the target's `sn/` plus at least one updatable field. Source is
/// deliberately absent from the valid set: it anchors the serial-number
/// registry's grouping, so changing it would desync the books.
pub fn parse(args: &str) -> Result<UpdateCommand, ParseError> {
    let map = tokenize(args, &ALL_PREFIXES);

    if !map.contains(PREFIX_SERIAL_NUMBER)
        || !map.contains_any(&UPDATABLE_PREFIXES)
        || map.contains_any(&invalid_prefixes_for(&VALID_PREFIXES))
        || map.has_duplicate(&VALID_PREFIXES)
        || !map.preamble().is_empty()
    {
        return Err(ParseError::InvalidCommandFormat(
            UpdateCommand::MESSAGE_USAGE,
        ));
    }

    let serial_number = SerialNumber::parse(map.value(PREFIX_SERIAL_NUMBER).unwrap_or_default())?;
    let name = map.value(PREFIX_NAME).map(Name::parse).transpose()?;
    let quantity = map.value(PREFIX_QUANTITY).map(Quantity::parse).transpose()?;
    let location = map.value(PREFIX_LOCATION).map(Location::parse).transpose()?;

    Ok(UpdateCommand::new(serial_number, name, quantity, location))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_core::ValidationError;

    fn expect_invalid_format(args: &str) {
        match parse(args).unwrap_err() {
            ParseError::InvalidCommandFormat(usage) => {
                assert!(usage.starts_with("update:"));
            }
            other => panic!("Expected InvalidCommandFormat for {args:?}, got {other:?}"),
        }
    }

    #[test]
    fn one_updatable_field_is_enough() {
        let command = parse("sn/Ntuc1 q/25").unwrap();
        let expected = UpdateCommand::new(
            SerialNumber::parse("Ntuc1").unwrap(),
            None,
            Some(Quantity::new(25)),
            None,
        );
        assert_eq!(command, expected);
    }

    #[test]
    fn all_updatable_fields_at_once() {
        let command = parse("sn/Ntuc1 n/Cavendish q/25 l/Cold room").unwrap();
        let expected = UpdateCommand::new(
            SerialNumber::parse("Ntuc1").unwrap(),
            Some(Name::parse("Cavendish").unwrap()),
            Some(Quantity::new(25)),
            Some(Location::parse("Cold room").unwrap()),
        );
        assert_eq!(command, expected);
    }

    #[test]
    fn target_alone_fails_the_parse() {
        expect_invalid_format("sn/Ntuc1");
    }

    #[test]
    fn missing_target_fails_the_parse() {
        expect_invalid_format("q/25");
        expect_invalid_format("");
    }

    #[test]
    fn source_is_not_updatable() {
        expect_invalid_format("sn/Ntuc1 s/Cold Storage");
    }

    #[test]
    fn repeated_prefix_fails_the_parse() {
        expect_invalid_format("sn/Ntuc1 q/25 q/30");
    }

    #[test]
    fn leftover_preamble_fails_the_parse() {
        expect_invalid_format("now sn/Ntuc1 q/25");
    }

    #[test]
    fn bad_quantity_is_a_field_error() {
        match parse("sn/Ntuc1 q/-3").unwrap_err() {
            ParseError::InvalidField(ValidationError::InvalidQuantity) => {}
            other => panic!("Expected InvalidQuantity, got {other:?}"),
        }
    }
}
