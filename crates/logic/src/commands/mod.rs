//! Executable command objects.
//!
//! Each command is an immutable value built by its parser. `execute` performs
//! exactly one state transition or query against the model and reports a
//! human-readable result, or a `CommandError` that leaves the model as it
//! was.

pub mod add;
pub mod delete;
pub mod find;
pub mod misc;
pub mod note;
pub mod sort;
pub mod update;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use find::FindCommand;
pub use misc::{ExitCommand, HelpCommand, ListCommand};
pub use note::NoteCommand;
pub use sort::{SortCommand, SortField, SortOrder};
pub use update::UpdateCommand;

use stockbook_model::Model;

use crate::errors::CommandError;

/// What a command reports back on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
    exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: false,
        }
    }

    /// A result that also asks the shell to terminate.
    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: true,
        }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

/// A fully parsed command, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Delete(DeleteCommand),
    Find(FindCommand),
    Sort(SortCommand),
    Update(UpdateCommand),
    Note(NoteCommand),
    List(ListCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(command) => command.execute(model),
            Command::Delete(command) => command.execute(model),
            Command::Find(command) => command.execute(model),
            Command::Sort(command) => command.execute(model),
            Command::Update(command) => command.execute(model),
            Command::Note(command) => command.execute(model),
            Command::List(command) => command.execute(model),
            Command::Help(command) => command.execute(model),
            Command::Exit(command) => command.execute(model),
        }
    }
}
