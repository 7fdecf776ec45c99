//! Command-line parsers.
//!
//! `parse_command` splits the command word off the input line and hands the
//! rest to the matching per-command parser. Each parser owns its prefix
//! rules: which prefixes must appear, which may not appear, whether repeats
//! are allowed, and whether a preamble is allowed. Format failures surface
//! before field validation failures.

pub mod add;
pub mod delete;
pub mod find;
pub mod note;
pub mod sort;
pub mod update;

use crate::commands::{
    AddCommand, Command, DeleteCommand, ExitCommand, FindCommand, HelpCommand, ListCommand,
    NoteCommand, SortCommand, UpdateCommand,
};
use crate::errors::ParseError;

/// Parse one input line into a command.
///
/// The command word is the first whitespace-delimited token and is matched
/// case-sensitively, exactly once per line.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    let (command_word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    match command_word {
        AddCommand::COMMAND_WORD => add::parse(args).map(Command::Add),
        DeleteCommand::COMMAND_WORD => delete::parse(args).map(Command::Delete),
        FindCommand::COMMAND_WORD => find::parse(args).map(Command::Find),
        SortCommand::COMMAND_WORD => sort::parse(args).map(Command::Sort),
        UpdateCommand::COMMAND_WORD => update::parse(args).map(Command::Update),
        NoteCommand::COMMAND_WORD => note::parse(args).map(Command::Note),
        ListCommand::COMMAND_WORD => {
            parse_bare(args, ListCommand::MESSAGE_USAGE).map(|()| Command::List(ListCommand))
        }
        HelpCommand::COMMAND_WORD => {
            parse_bare(args, HelpCommand::MESSAGE_USAGE).map(|()| Command::Help(HelpCommand))
        }
        ExitCommand::COMMAND_WORD => {
            parse_bare(args, ExitCommand::MESSAGE_USAGE).map(|()| Command::Exit(ExitCommand))
        }
        _ => Err(ParseError::UnknownCommand),
    }
}

/// Commands that take no arguments reject any leftover text.
fn parse_bare(args: &str, usage: &'static str) -> Result<(), ParseError> {
    if args.trim().is_empty() {
        Ok(())
    } else {
        Err(ParseError::InvalidCommandFormat(usage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_the_first_word() {
        match parse_command("list").unwrap() {
            Command::List(_) => {}
            other => panic!("Expected a list command, got {other:?}"),
        }
        match parse_command("help").unwrap() {
            Command::Help(_) => {}
            other => panic!("Expected a help command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_words_are_rejected() {
        let err = parse_command("frobnicate sn/A").unwrap_err();
        match err {
            ParseError::UnknownCommand => {}
            _ => panic!("Expected UnknownCommand"),
        }
    }

    #[test]
    fn command_words_are_case_sensitive() {
        let err = parse_command("Add sn/A n/B s/C q/1 l/D").unwrap_err();
        match err {
            ParseError::UnknownCommand => {}
            _ => panic!("Expected UnknownCommand for capitalized word"),
        }
    }

    #[test]
    fn bare_commands_reject_arguments() {
        let err = parse_command("help me").unwrap_err();
        match err {
            ParseError::InvalidCommandFormat(usage) => {
                assert!(usage.starts_with("help:"));
            }
            _ => panic!("Expected InvalidCommandFormat"),
        }

        let err = parse_command("exit now").unwrap_err();
        match err {
            ParseError::InvalidCommandFormat(usage) => {
                assert!(usage.starts_with("exit:"));
            }
            _ => panic!("Expected InvalidCommandFormat"),
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(parse_command("   exit   ").is_ok());
    }
}
