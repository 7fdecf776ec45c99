//! The stock entity.

use serde::{Deserialize, Serialize};

use crate::fields::{Location, Name, Note, Quantity, SerialNumber, Source};

/// A single inventory record, identified by its serial number.
///
/// Stocks carry value semantics: an edit builds a replacement and swaps it
/// into the book rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    serial_number: SerialNumber,
    name: Name,
    source: Source,
    quantity: Quantity,
    location: Location,
    note: Option<Note>,
}

impl Stock {
    pub fn new(
        serial_number: SerialNumber,
        name: Name,
        source: Source,
        quantity: Quantity,
        location: Location,
    ) -> Self {
        Self {
            serial_number,
            name,
            source,
            quantity,
            location,
            note: None,
        }
    }

    pub fn serial_number(&self) -> &SerialNumber {
        &self.serial_number
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn note(&self) -> Option<&Note> {
        self.note.as_ref()
    }

    /// Build a copy carrying `note`, replacing any existing note.
    pub fn with_note(mut self, note: Note) -> Self {
        self.note = Some(note);
        self
    }

    /// Build a copy with the given editable fields replaced. The serial
    /// number, source and note are preserved.
    pub fn with_details(mut self, name: Name, quantity: Quantity, location: Location) -> Self {
        self.name = name;
        self.quantity = quantity;
        self.location = location;
        self
    }
}

impl core::fmt::Display for Stock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} Serial Number: {} Source: {} Quantity: {} Location: {}",
            self.name, self.serial_number, self.source, self.quantity, self.location
        )?;
        if let Some(note) = &self.note {
            write!(f, " Note: {note}")?;
        }
        Ok(())
    }
}
