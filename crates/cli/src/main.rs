//! Interactive shell for the stock book.
//!
//! Reads one line at a time, runs it through the engine, prints the result
//! and persists after every successful command. Results go to stdout, errors
//! and logs to stderr.

use anyhow::{Context, anyhow};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use stockbook_logic::execute;
use stockbook_model::Model;
use stockbook_storage::JsonStorage;

const PROMPT: &str = "stockbook> ";

fn main() -> anyhow::Result<()> {
    stockbook_observability::init();

    let storage = JsonStorage::from_env().context("failed to set up storage")?;
    let model = load_model(&storage);

    println!("Stock Book");
    println!("Type `help` for commands. Type `exit` to quit.\n");

    run_shell(model, &storage)
}

/// Load the books, falling back to an empty model when the data files are
/// unreadable. A corrupt file is warned about, not fatal; the next save
/// overwrites it.
fn load_model(storage: &JsonStorage) -> Model {
    match storage.load() {
        Ok((stock_book, serial_numbers)) => Model::new(stock_book, serial_numbers),
        Err(err) => {
            tracing::warn!("failed to load saved data, starting empty: {err:#}");
            Model::empty()
        }
    }
}

fn run_shell(mut model: Model, storage: &JsonStorage) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new().map_err(|e| anyhow!("failed to init rustyline: {e}"))?;

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => continue,
            Err(e) => return Err(anyhow!("readline error: {e}")),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line);

        match execute(line, &mut model) {
            Ok(result) => {
                println!("{}", result.feedback());
                if let Err(err) =
                    storage.save(model.stock_book(), model.serial_number_sets_book())
                {
                    tracing::warn!("failed to save: {err:#}");
                }
                if result.is_exit() {
                    break;
                }
            }
            Err(err) => eprintln!("{err}"),
        }
    }

    Ok(())
}
