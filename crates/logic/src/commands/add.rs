//! Adds a new stock to the stock book.

use stockbook_core::Stock;
use stockbook_model::Model;

use crate::commands::CommandResult;
use crate::errors::CommandError;

/// Inserts a stock after checking its serial number against both the stock
/// book and the serial-number registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    stock: Stock,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";

    pub const MESSAGE_USAGE: &'static str = "add: Adds a stock to the stock book.\n\
        Parameters: sn/SERIAL NUMBER n/NAME s/SOURCE q/QUANTITY l/LOCATION\n\
        Example: add sn/Ntuc1 n/Banana s/Ntuc q/100 l/Fruits section";

    pub fn new(stock: Stock) -> Self {
        Self { stock }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let serial_number = self.stock.serial_number();
        if model.has_stock(serial_number) || model.has_serial_number(serial_number) {
            return Err(CommandError::DuplicateSerialNumber);
        }

        model.add_stock(self.stock.clone());
        Ok(CommandResult::new(format!("New stock added: {}", self.stock)))
    }
}
