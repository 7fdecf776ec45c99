//! The model facade owning all application state.

use stockbook_core::{SerialNumber, Stock};

use crate::predicate::StockFilter;
use crate::serial_numbers::SerialNumberSetsBook;
use crate::stock_book::StockBook;

/// Owns the stock book, the serial-number registry and the active filter.
///
/// Mutations go through this facade so the book and the registry stay in
/// lockstep: an add or delete touches both or neither. Construction trusts
/// the books as given, which allows a registry to carry reservations with no
/// matching stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    stock_book: StockBook,
    serial_numbers: SerialNumberSetsBook,
    filter: StockFilter,
}

impl Model {
    pub fn new(stock_book: StockBook, serial_numbers: SerialNumberSetsBook) -> Self {
        Self {
            stock_book,
            serial_numbers,
            filter: StockFilter::default(),
        }
    }

    pub fn empty() -> Self {
        Self::new(StockBook::new(), SerialNumberSetsBook::new())
    }

    pub fn stock_book(&self) -> &StockBook {
        &self.stock_book
    }

    pub fn serial_number_sets_book(&self) -> &SerialNumberSetsBook {
        &self.serial_numbers
    }

    pub fn has_stock(&self, serial_number: &SerialNumber) -> bool {
        self.stock_book.contains(serial_number)
    }

    pub fn has_serial_number(&self, serial_number: &SerialNumber) -> bool {
        self.serial_numbers.contains(serial_number)
    }

    /// The stocks currently visible under the active filter, in book order.
    pub fn filtered_stock_list(&self) -> Vec<Stock> {
        self.stock_book
            .stocks()
            .iter()
            .filter(|stock| self.filter.test(stock))
            .cloned()
            .collect()
    }

    /// Insert a stock and register its serial number under its source.
    pub fn add_stock(&mut self, stock: Stock) {
        self.serial_numbers
            .add(stock.source().clone(), stock.serial_number().clone());
        self.stock_book.add(stock);
    }

    /// Remove a stock and release its serial number.
    pub fn delete_stock(&mut self, stock: &Stock) {
        self.stock_book.remove(stock.serial_number());
        self.serial_numbers.remove(stock.serial_number());
    }

    /// Swap in an edited stock at the position of `target`. Returns false
    /// when no stock carries the target serial number.
    pub fn set_stock(&mut self, target: &SerialNumber, edited: Stock) -> bool {
        self.stock_book.replace(target, edited)
    }

    /// Replace the whole collection, e.g. after sorting.
    pub fn set_stocks(&mut self, stocks: Vec<Stock>) {
        self.stock_book.set_stocks(stocks);
    }

    pub fn update_filtered_stock_list(&mut self, filter: StockFilter) {
        self.filter = filter;
    }
}
