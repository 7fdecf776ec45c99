//! Deletes stocks by serial number from the displayed list.

use stockbook_core::{SerialNumber, Stock};
use stockbook_model::Model;

use crate::commands::CommandResult;
use crate::errors::CommandError;

const MESSAGE_DELETE_STOCK_SUCCESS: &str = "All serial number(s) are found.\nDeleted Stock(s): ";
const MESSAGE_DELETE_STOCK_SOME_SUCCESS: &str =
    "Some serial number(s) are not found.\nDeleted Stock(s): ";

/// Deletes every stock whose serial number appears in the target list.
///
/// Targets resolve against the currently displayed list, so a stock hidden
/// by the active filter cannot be deleted. Each target scans its snapshot to
/// the end rather than stopping at the first hit; serial uniqueness makes the
/// extra scanning a no-op, and a repeated target resolves only once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    target_serial_numbers: Vec<SerialNumber>,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";

    pub const MESSAGE_USAGE: &'static str =
        "delete: Deletes the stocks identified by their exact serial numbers.\n\
        Parameters: sn/SERIAL NUMBER [sn/SERIAL NUMBER]...\n\
        Example: delete sn/Kc company1";

    /// The parser guarantees at least one target.
    pub fn new(target_serial_numbers: Vec<SerialNumber>) -> Self {
        debug_assert!(!target_serial_numbers.is_empty());
        Self {
            target_serial_numbers,
        }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let mut deleted_stocks: Vec<Stock> = Vec::new();
        let mut unknown_serial_numbers: Vec<SerialNumber> = Vec::new();

        for target in &self.target_serial_numbers {
            // A fresh snapshot per target keeps later targets from seeing
            // stocks already deleted by earlier ones.
            let displayed = model.filtered_stock_list();
            let mut target_resolved = false;

            for stock in &displayed {
                if stock.serial_number() == target {
                    target_resolved = true;
                    deleted_stocks.push(stock.clone());
                    model.delete_stock(stock);
                }
            }

            if !target_resolved {
                unknown_serial_numbers.push(target.clone());
            }
        }

        if unknown_serial_numbers.is_empty() {
            Ok(CommandResult::new(format!(
                "{MESSAGE_DELETE_STOCK_SUCCESS}{}",
                stocks_as_string(&deleted_stocks)
            )))
        } else if !deleted_stocks.is_empty() {
            let not_found = CommandError::serial_numbers_not_found(&unknown_serial_numbers);
            Ok(CommandResult::new(format!(
                "{MESSAGE_DELETE_STOCK_SOME_SUCCESS}{}\n{not_found}",
                stocks_as_string(&deleted_stocks)
            )))
        } else {
            Err(CommandError::serial_numbers_not_found(
                &unknown_serial_numbers,
            ))
        }
    }
}

/// One stock per line, each on a fresh line below the heading.
fn stocks_as_string(stocks: &[Stock]) -> String {
    if stocks.is_empty() {
        return "No stocks deleted".to_string();
    }
    stocks.iter().map(|stock| format!("\n{stock}")).collect()
}
