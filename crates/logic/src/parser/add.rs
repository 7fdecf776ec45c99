//! Parser for the `add` command.

use stockbook_core::{Location, Name, Quantity, SerialNumber, Source, Stock};

use crate::commands::AddCommand;
use crate::errors::ParseError;
use crate::syntax::{
    ALL_PREFIXES, PREFIX_LOCATION, PREFIX_NAME, PREFIX_QUANTITY, PREFIX_SERIAL_NUMBER,
    PREFIX_SOURCE, Prefix, invalid_prefixes_for,
};
use crate::tokenizer::tokenize;

const VALID_PREFIXES: [Prefix; 5] = [
    PREFIX_SERIAL_NUMBER,
    PREFIX_NAME,
    PREFIX_SOURCE,
    PREFIX_QUANTITY,
    PREFIX_LOCATION,
];

/// Every field is mandatory, appears once, and the preamble must be empty.
pub fn parse(args: &str) -> Result<AddCommand, ParseError> {
    let map = tokenize(args, &ALL_PREFIXES);

    if !map.contains_all(&VALID_PREFIXES)
        || map.contains_any(&invalid_prefixes_for(&VALID_PREFIXES))
        || map.has_duplicate(&VALID_PREFIXES)
        || !map.preamble().is_empty()
    {
        return Err(ParseError::InvalidCommandFormat(AddCommand::MESSAGE_USAGE));
    }

    let serial_number = SerialNumber::parse(map.value(PREFIX_SERIAL_NUMBER).unwrap_or_default())?;
    let name = Name::parse(map.value(PREFIX_NAME).unwrap_or_default())?;
    let source = Source::parse(map.value(PREFIX_SOURCE).unwrap_or_default())?;
    let quantity = Quantity::parse(map.value(PREFIX_QUANTITY).unwrap_or_default())?;
    let location = Location::parse(map.value(PREFIX_LOCATION).unwrap_or_default())?;

    Ok(AddCommand::new(Stock::new(
        serial_number,
        name,
        source,
        quantity,
        location,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_core::ValidationError;
    use stockbook_model::Model;

    fn expect_invalid_format(args: &str) {
        match parse(args).unwrap_err() {
            ParseError::InvalidCommandFormat(usage) => {
                assert!(usage.starts_with("add:"));
            }
            other => panic!("Expected InvalidCommandFormat for {args:?}, got {other:?}"),
        }
    }

    #[test]
    fn full_argument_set_builds_the_command() {
        let command = parse("sn/Ntuc1 n/Banana s/Ntuc q/100 l/Fruits section").unwrap();

        let mut model = Model::empty();
        let result = command.execute(&mut model).unwrap();
        assert_eq!(
            result.feedback(),
            "New stock added: Banana Serial Number: Ntuc1 Source: Ntuc Quantity: 100 Location: Fruits section"
        );
    }

    #[test]
    fn prefix_order_does_not_matter() {
        assert!(parse("l/Shelf q/5 s/Ntuc n/Banana sn/Ntuc1").is_ok());
    }

    #[test]
    fn each_missing_field_fails_the_parse() {
        expect_invalid_format("n/Banana s/Ntuc q/100 l/Shelf");
        expect_invalid_format("sn/Ntuc1 s/Ntuc q/100 l/Shelf");
        expect_invalid_format("sn/Ntuc1 n/Banana q/100 l/Shelf");
        expect_invalid_format("sn/Ntuc1 n/Banana s/Ntuc l/Shelf");
        expect_invalid_format("sn/Ntuc1 n/Banana s/Ntuc q/100");
        expect_invalid_format("");
    }

    #[test]
    fn repeated_prefix_fails_the_parse() {
        expect_invalid_format("sn/A sn/B n/Banana s/Ntuc q/100 l/Shelf");
    }

    #[test]
    fn foreign_prefix_fails_the_parse() {
        expect_invalid_format("sn/A n/Banana s/Ntuc q/100 l/Shelf nt/fragile");
    }

    #[test]
    fn leftover_preamble_fails_the_parse() {
        expect_invalid_format("oops sn/A n/Banana s/Ntuc q/100 l/Shelf");
    }

    #[test]
    fn bad_quantity_is_a_field_error_not_a_format_error() {
        let err = parse("sn/A n/Banana s/Ntuc q/ten l/Shelf").unwrap_err();
        match err {
            ParseError::InvalidField(ValidationError::InvalidQuantity) => {}
            other => panic!("Expected InvalidQuantity, got {other:?}"),
        }
    }

    #[test]
    fn blank_field_value_is_a_field_error() {
        let err = parse("sn/A n/ s/Ntuc q/1 l/Shelf").unwrap_err();
        match err {
            ParseError::InvalidField(ValidationError::BlankName) => {}
            other => panic!("Expected BlankName, got {other:?}"),
        }
    }
}
