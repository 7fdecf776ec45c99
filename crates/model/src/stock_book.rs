//! The authoritative stock collection.

use serde::{Deserialize, Serialize};

use stockbook_core::{SerialNumber, Stock};

/// Ordered collection of stocks, unique by serial number.
///
/// Insertion order is the display order until a sort rearranges it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockBook {
    stocks: Vec<Stock>,
}

impl StockBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    pub fn contains(&self, serial_number: &SerialNumber) -> bool {
        self.find(serial_number).is_some()
    }

    pub fn find(&self, serial_number: &SerialNumber) -> Option<&Stock> {
        self.stocks
            .iter()
            .find(|stock| stock.serial_number() == serial_number)
    }

    /// Append a stock. The caller guarantees the serial number is new.
    pub fn add(&mut self, stock: Stock) {
        debug_assert!(!self.contains(stock.serial_number()));
        self.stocks.push(stock);
    }

    /// Remove and return the stock with the given serial number.
    pub fn remove(&mut self, serial_number: &SerialNumber) -> Option<Stock> {
        let index = self
            .stocks
            .iter()
            .position(|stock| stock.serial_number() == serial_number)?;
        Some(self.stocks.remove(index))
    }

    /// Swap in `edited` at the position of `target`, keeping display order.
    /// Returns false when no stock carries the target serial number.
    pub fn replace(&mut self, target: &SerialNumber, edited: Stock) -> bool {
        match self
            .stocks
            .iter()
            .position(|stock| stock.serial_number() == target)
        {
            Some(index) => {
                self.stocks[index] = edited;
                true
            }
            None => false,
        }
    }

    /// Replace the whole collection, e.g. after sorting.
    pub fn set_stocks(&mut self, stocks: Vec<Stock>) {
        self.stocks = stocks;
    }
}
