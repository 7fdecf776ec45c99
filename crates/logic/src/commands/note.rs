//! Attaches a note to an existing stock.

use stockbook_core::{Note, SerialNumber};
use stockbook_model::Model;

use crate::commands::CommandResult;
use crate::errors::CommandError;

/// Swaps in a copy of the target stock carrying the note. A second note for
/// the same stock overwrites the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCommand {
    serial_number: SerialNumber,
    note: Note,
}

impl NoteCommand {
    pub const COMMAND_WORD: &'static str = "note";

    pub const MESSAGE_USAGE: &'static str = "note: Attaches a note to an existing stock.\n\
        Parameters: sn/SERIAL NUMBER nt/NOTE\n\
        Example: note sn/Ntuc1 nt/keep refrigerated";

    pub fn new(serial_number: SerialNumber, note: Note) -> Self {
        Self {
            serial_number,
            note,
        }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let Some(existing) = model.stock_book().find(&self.serial_number).cloned() else {
            return Err(CommandError::serial_numbers_not_found(std::slice::from_ref(
                &self.serial_number,
            )));
        };

        let noted = existing.with_note(self.note.clone());
        model.set_stock(&self.serial_number, noted.clone());
        Ok(CommandResult::new(format!("Added note to stock: {noted}")))
    }
}
