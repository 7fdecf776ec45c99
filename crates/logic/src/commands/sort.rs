//! Reorders the stock book by one field.

use std::cmp::Ordering;

use stockbook_core::Stock;
use stockbook_model::Model;

use crate::commands::CommandResult;
use crate::errors::CommandError;

/// Stock fields a sort can key on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortField {
    Name,
    Source,
    SerialNumber,
    Location,
    Quantity,
}

impl SortField {
    /// Token accepted after `by/`, case-insensitively.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "name" => Some(SortField::Name),
            "source" => Some(SortField::Source),
            "serialnumber" => Some(SortField::SerialNumber),
            "location" => Some(SortField::Location),
            "quantity" => Some(SortField::Quantity),
            _ => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Source => "source",
            SortField::SerialNumber => "serial number",
            SortField::Location => "location",
            SortField::Quantity => "quantity",
        }
    }

    fn compare(self, a: &Stock, b: &Stock) -> Ordering {
        match self {
            SortField::Name => compare_ignore_case(a.name().as_str(), b.name().as_str()),
            SortField::Source => compare_ignore_case(a.source().as_str(), b.source().as_str()),
            SortField::SerialNumber => {
                compare_ignore_case(a.serial_number().as_str(), b.serial_number().as_str())
            }
            SortField::Location => {
                compare_ignore_case(a.location().as_str(), b.location().as_str())
            }
            SortField::Quantity => a.quantity().value().cmp(&b.quantity().value()),
        }
    }
}

/// Direction accepted after `o/`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "ascending" => Some(SortOrder::Ascending),
            "descending" => Some(SortOrder::Descending),
            _ => None,
        }
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Stable-reorders the full collection. The active filter stays as it is,
/// so a filtered view keeps its membership in the new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCommand {
    field: SortField,
    order: SortOrder,
}

impl SortCommand {
    pub const COMMAND_WORD: &'static str = "sort";

    pub const MESSAGE_USAGE: &'static str = "sort: Sorts the stock book by one field.\n\
        Parameters: by/FIELD o/ORDER (field: name, source, serialnumber, location or quantity; order: ascending or descending)\n\
        Example: sort by/name o/ascending";

    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let mut stocks = model.stock_book().stocks().to_vec();
        stocks.sort_by(|a, b| {
            let ordering = self.field.compare(a, b);
            match self.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
        model.set_stocks(stocks);

        Ok(CommandResult::new(format!(
            "Sorted stocks by {}",
            self.field.description()
        )))
    }
}
