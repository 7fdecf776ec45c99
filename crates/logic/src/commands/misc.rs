//! Help, list and exit.

use stockbook_model::{Model, StockFilter};

use crate::commands::{
    AddCommand, CommandResult, DeleteCommand, FindCommand, NoteCommand, SortCommand, UpdateCommand,
};
use crate::errors::CommandError;

/// Shows every command's usage text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";

    pub const MESSAGE_USAGE: &'static str = "help: Shows this overview of every command.\n\
        Example: help";

    pub fn execute(&self, _model: &mut Model) -> Result<CommandResult, CommandError> {
        let usages = [
            AddCommand::MESSAGE_USAGE,
            DeleteCommand::MESSAGE_USAGE,
            FindCommand::MESSAGE_USAGE,
            SortCommand::MESSAGE_USAGE,
            UpdateCommand::MESSAGE_USAGE,
            NoteCommand::MESSAGE_USAGE,
            ListCommand::MESSAGE_USAGE,
            HelpCommand::MESSAGE_USAGE,
            ExitCommand::MESSAGE_USAGE,
        ];
        Ok(CommandResult::new(usages.join("\n\n")))
    }
}

/// Clears the active filter so every stock shows again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";

    pub const MESSAGE_USAGE: &'static str = "list: Lists every stock in the stock book.\n\
        Example: list";

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_stock_list(StockFilter::All);
        Ok(CommandResult::new("Listed all stocks"))
    }
}

/// Asks the shell to terminate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";

    pub const MESSAGE_USAGE: &'static str = "exit: Exits the program.\n\
        Example: exit";

    pub fn execute(&self, _model: &mut Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::exit("Exiting Stock Book as requested ..."))
    }
}
