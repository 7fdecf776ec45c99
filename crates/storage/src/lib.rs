//! `stockbook-storage` — JSON persistence of the two books.
//!
//! The stock book and the serial-number registry persist as two
//! pretty-printed JSON files in a resolved data directory. Missing files
//! load as empty books; anything else that goes wrong surfaces as an error
//! for the shell to report.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use stockbook_model::{SerialNumberSetsBook, StockBook};

const STOCK_BOOK_FILE: &str = "stockbook.json";
const SERIAL_NUMBERS_FILE: &str = "serialnumbers.json";

/// Environment variable overriding the resolved data directory.
pub const DATA_DIR_ENV: &str = "STOCKBOOK_DATA_DIR";

/// Loads and saves both books as JSON files under one directory.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    data_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolve the data directory and make sure it exists.
    ///
    /// `STOCKBOOK_DATA_DIR` wins when set; otherwise the platform app-data
    /// directory plus `stockbook/`, falling back to `~/.local/share` when
    /// the platform lookup comes up empty.
    pub fn from_env() -> anyhow::Result<Self> {
        let dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let base = dirs::data_dir()
                    .or_else(|| {
                        dirs::home_dir().map(|mut home| {
                            home.push(".local");
                            home.push("share");
                            home
                        })
                    })
                    .context(
                        "failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share",
                    )?;
                base.join("stockbook")
            }
        };

        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create data directory at {dir:?}"))?;
        Ok(Self::new(dir))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load both books. A file that does not exist yet loads as an empty
    /// book; a file that exists but cannot be read or parsed is an error.
    pub fn load(&self) -> anyhow::Result<(StockBook, SerialNumberSetsBook)> {
        let stock_book = self
            .load_file::<StockBook>(STOCK_BOOK_FILE)?
            .unwrap_or_default();
        let serial_numbers = self
            .load_file::<SerialNumberSetsBook>(SERIAL_NUMBERS_FILE)?
            .unwrap_or_default();

        tracing::debug!(
            stocks = stock_book.len(),
            sets = serial_numbers.sets().len(),
            dir = ?self.data_dir,
            "loaded books"
        );
        Ok((stock_book, serial_numbers))
    }

    /// Save both books, creating the directory if needed.
    pub fn save(
        &self,
        stock_book: &StockBook,
        serial_numbers: &SerialNumberSetsBook,
    ) -> anyhow::Result<()> {
        fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("failed to create data directory at {:?}", self.data_dir))?;
        self.save_file(STOCK_BOOK_FILE, stock_book)?;
        self.save_file(SERIAL_NUMBERS_FILE, serial_numbers)?;
        Ok(())
    }

    fn load_file<T: serde::de::DeserializeOwned>(&self, name: &str) -> anyhow::Result<Option<T>> {
        let path = self.data_dir.join(name);
        if !path.exists() {
            return Ok(None);
        }
        let text =
            fs::read_to_string(&path).with_context(|| format!("failed to read {path:?}"))?;
        let value =
            serde_json::from_str(&text).with_context(|| format!("failed to parse {path:?}"))?;
        Ok(Some(value))
    }

    fn save_file<T: serde::Serialize>(&self, name: &str, value: &T) -> anyhow::Result<()> {
        let path = self.data_dir.join(name);
        let text = serde_json::to_string_pretty(value)
            .with_context(|| format!("failed to serialize {name}"))?;
        fs::write(&path, text).with_context(|| format!("failed to write {path:?}"))?;
        Ok(())
    }
}
