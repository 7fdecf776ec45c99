//! Field value objects making up a stock.
//!
//! Each constructor trims its input and rejects values that fail the field's
//! format rule, so a successfully built field is always well-formed. Fields
//! are immutable and compared by value.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// User-assigned identifier of a stock, unique within the stock book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankSerialNumber);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Display name of a stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Where a stock was obtained from. Also the grouping key of the
/// serial-number registry, so it cannot be edited after the fact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Source(String);

impl Source {
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankSource);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Source {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Where a stock is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankLocation);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Free-text annotation attached to a stock after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note(String);

impl Note {
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankNote);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Note {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// How many units of a stock are on hand.
///
/// Only plain decimal digits are accepted: no sign, no decimal point, no
/// grouping separators. `"  42 "` parses, `"+42"` and `"4.2"` do not.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidQuantity);
        }
        // All-digit strings can still overflow the backing integer.
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidQuantity)
    }

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn serial_number_trims_surrounding_whitespace() {
        let serial = SerialNumber::parse("  Ntuc1  ").unwrap();
        assert_eq!(serial.as_str(), "Ntuc1");
    }

    #[test]
    fn blank_serial_number_is_rejected() {
        let err = SerialNumber::parse("   ").unwrap_err();
        match err {
            ValidationError::BlankSerialNumber => {}
            _ => panic!("Expected BlankSerialNumber for whitespace-only input"),
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Name::parse("").unwrap_err();
        match err {
            ValidationError::BlankName => {}
            _ => panic!("Expected BlankName for empty input"),
        }
    }

    #[test]
    fn quantity_parses_plain_digits() {
        assert_eq!(Quantity::parse("100").unwrap().value(), 100);
        assert_eq!(Quantity::parse("0").unwrap().value(), 0);
        assert_eq!(Quantity::parse("007").unwrap().value(), 7);
        assert_eq!(Quantity::parse(" 42 ").unwrap().value(), 42);
    }

    #[test]
    fn quantity_rejects_signs_and_fractions() {
        for raw in ["+5", "-2", "1.5", "1,000", "ten", ""] {
            let err = Quantity::parse(raw).unwrap_err();
            match err {
                ValidationError::InvalidQuantity => {}
                _ => panic!("Expected InvalidQuantity for {raw:?}"),
            }
        }
    }

    #[test]
    fn quantity_rejects_out_of_range_digits() {
        // One past u64::MAX.
        let err = Quantity::parse("18446744073709551616").unwrap_err();
        match err {
            ValidationError::InvalidQuantity => {}
            _ => panic!("Expected InvalidQuantity for overflowing digits"),
        }
    }

    #[test]
    fn note_rejects_blank_text() {
        let err = Note::parse(" \t ").unwrap_err();
        match err {
            ValidationError::BlankNote => {}
            _ => panic!("Expected BlankNote for whitespace-only input"),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every all-digit string short enough to fit the backing
        /// integer parses, and the value matches a plain integer parse.
        #[test]
        fn quantity_accepts_short_digit_strings(raw in "[0-9]{1,18}") {
            let quantity = Quantity::parse(&raw).unwrap();
            prop_assert_eq!(quantity.value(), raw.parse::<u64>().unwrap());
        }

        /// Property: surrounding whitespace never changes the accepted value.
        #[test]
        fn text_fields_ignore_surrounding_whitespace(inner in "[A-Za-z0-9]{1,12}") {
            let padded = format!("  {inner}\t");
            let name = Name::parse(&padded).unwrap();
            let source = Source::parse(&padded).unwrap();
            let location = Location::parse(&padded).unwrap();
            prop_assert_eq!(name.as_str(), inner.as_str());
            prop_assert_eq!(source.as_str(), inner.as_str());
            prop_assert_eq!(location.as_str(), inner.as_str());
        }
    }
}
