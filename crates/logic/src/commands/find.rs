//! Filters the displayed list by keyword predicates.

use stockbook_model::{Model, StockFilter, StockPredicate};

use crate::commands::CommandResult;
use crate::errors::CommandError;

/// Installs the union of its predicates as the model's active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicates: Vec<StockPredicate>,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";

    pub const MESSAGE_USAGE: &'static str =
        "find: Finds stocks whose fields contain any of the given keywords.\n\
        Parameters: at least one of n/NAME KEYWORDS sn/SERIAL NUMBER KEYWORDS s/SOURCE KEYWORDS l/LOCATION KEYWORDS\n\
        Example: find n/Ap s/price";

    /// The parser guarantees at least one predicate.
    pub fn new(predicates: Vec<StockPredicate>) -> Self {
        debug_assert!(!predicates.is_empty());
        Self { predicates }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_stock_list(StockFilter::AnyOf(self.predicates.clone()));
        let listed = model.filtered_stock_list().len();

        let searched: Vec<String> = self
            .predicates
            .iter()
            .map(|predicate| predicate.to_string())
            .collect();
        Ok(CommandResult::new(format!(
            "Searching for:\n{}\n{listed} stocks listed!",
            searched.join(", ")
        )))
    }
}
