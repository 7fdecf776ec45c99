//! Replaces a stock's editable fields in place.

use stockbook_core::{Location, Name, Quantity, SerialNumber};
use stockbook_model::Model;

use crate::commands::CommandResult;
use crate::errors::CommandError;

/// Swaps an edited copy of the target stock into its current position.
///
/// The lookup runs against the full collection, not the displayed list: an
/// update is a keyed mutation, not a view operation. Serial number and
/// source are not editable; the note rides along unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCommand {
    serial_number: SerialNumber,
    name: Option<Name>,
    quantity: Option<Quantity>,
    location: Option<Location>,
}

impl UpdateCommand {
    pub const COMMAND_WORD: &'static str = "update";

    pub const MESSAGE_USAGE: &'static str =
        "update: Updates the name, quantity or location of an existing stock.\n\
        Parameters: sn/SERIAL NUMBER followed by at least one of n/NAME q/QUANTITY l/LOCATION\n\
        Example: update sn/Ntuc1 q/25";

    /// The parser guarantees at least one field to change.
    pub fn new(
        serial_number: SerialNumber,
        name: Option<Name>,
        quantity: Option<Quantity>,
        location: Option<Location>,
    ) -> Self {
        debug_assert!(name.is_some() || quantity.is_some() || location.is_some());
        Self {
            serial_number,
            name,
            quantity,
            location,
        }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let Some(existing) = model.stock_book().find(&self.serial_number).cloned() else {
            return Err(CommandError::serial_numbers_not_found(std::slice::from_ref(
                &self.serial_number,
            )));
        };

        let name = self.name.clone().unwrap_or_else(|| existing.name().clone());
        let quantity = self.quantity.unwrap_or(existing.quantity());
        let location = self
            .location
            .clone()
            .unwrap_or_else(|| existing.location().clone());
        let updated = existing.with_details(name, quantity, location);

        model.set_stock(&self.serial_number, updated.clone());
        Ok(CommandResult::new(format!("Updated Stock: {updated}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_core::{Note, Source, Stock};
    use stockbook_model::{StockFilter, StockPredicate};

    fn seeded_model() -> Model {
        let mut model = Model::empty();
        model.add_stock(Stock::new(
            SerialNumber::parse("Ntuc1").unwrap(),
            Name::parse("Banana").unwrap(),
            Source::parse("Ntuc").unwrap(),
            Quantity::new(100),
            Location::parse("Fruits section").unwrap(),
        ));
        model.add_stock(Stock::new(
            SerialNumber::parse("Ntuc2").unwrap(),
            Name::parse("Apple").unwrap(),
            Source::parse("Ntuc").unwrap(),
            Quantity::new(50),
            Location::parse("Fruits section").unwrap(),
        ));
        model
    }

    fn serial(raw: &str) -> SerialNumber {
        SerialNumber::parse(raw).unwrap()
    }

    #[test]
    fn updates_only_the_given_fields() {
        let mut model = seeded_model();
        let command = UpdateCommand::new(
            serial("Ntuc1"),
            None,
            Some(Quantity::new(25)),
            None,
        );

        let result = command.execute(&mut model).unwrap();

        assert_eq!(
            result.feedback(),
            "Updated Stock: Banana Serial Number: Ntuc1 Source: Ntuc Quantity: 25 Location: Fruits section"
        );
        let updated = model.stock_book().find(&serial("Ntuc1")).unwrap();
        assert_eq!(updated.quantity().value(), 25);
        assert_eq!(updated.name().as_str(), "Banana");
    }

    #[test]
    fn keeps_position_note_and_registry() {
        let mut model = seeded_model();
        let noted = model
            .stock_book()
            .find(&serial("Ntuc1"))
            .unwrap()
            .clone()
            .with_note(Note::parse("bruised").unwrap());
        model.set_stock(&serial("Ntuc1"), noted);
        let registry_before = model.serial_number_sets_book().clone();

        UpdateCommand::new(
            serial("Ntuc1"),
            Some(Name::parse("Cavendish").unwrap()),
            None,
            Some(Location::parse("Cold room").unwrap()),
        )
        .execute(&mut model)
        .unwrap();

        let stocks = model.stock_book().stocks();
        assert_eq!(stocks[0].name().as_str(), "Cavendish");
        assert_eq!(stocks[0].note().unwrap().as_str(), "bruised");
        assert_eq!(stocks[1].name().as_str(), "Apple");
        assert_eq!(model.serial_number_sets_book(), &registry_before);
    }

    #[test]
    fn unknown_serial_number_is_an_error() {
        let mut model = seeded_model();
        let err = UpdateCommand::new(serial("Ntuc9"), Some(Name::parse("Ghost").unwrap()), None, None)
            .execute(&mut model)
            .unwrap_err();

        assert_eq!(err.to_string(), "Serial number(s) not found:\nNtuc9");
    }

    #[test]
    fn updates_reach_stocks_hidden_by_the_filter() {
        let mut model = seeded_model();
        model.update_filtered_stock_list(StockFilter::AnyOf(vec![StockPredicate::name_contains(
            "apple",
        )]));

        // Banana is filtered out of the view but still updatable by key.
        UpdateCommand::new(serial("Ntuc1"), None, Some(Quantity::new(7)), None)
            .execute(&mut model)
            .unwrap();

        let updated = model.stock_book().find(&serial("Ntuc1")).unwrap();
        assert_eq!(updated.quantity().value(), 7);
    }
}
