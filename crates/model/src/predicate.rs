//! Search predicates over stocks.

use stockbook_core::Stock;

/// A field-scoped keyword test.
///
/// Keywords come from splitting the user's search text on whitespace; a stock
/// matches when the targeted field contains any of them, case-insensitively.
/// Blank search text keeps a single empty keyword, and an empty keyword never
/// matches, so searching for nothing finds nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockPredicate {
    NameContains(Vec<String>),
    SerialNumberContains(Vec<String>),
    SourceContains(Vec<String>),
    LocationContains(Vec<String>),
}

impl StockPredicate {
    pub fn name_contains(text: &str) -> Self {
        Self::NameContains(split_keywords(text))
    }

    pub fn serial_number_contains(text: &str) -> Self {
        Self::SerialNumberContains(split_keywords(text))
    }

    pub fn source_contains(text: &str) -> Self {
        Self::SourceContains(split_keywords(text))
    }

    pub fn location_contains(text: &str) -> Self {
        Self::LocationContains(split_keywords(text))
    }

    pub fn test(&self, stock: &Stock) -> bool {
        let (field, keywords) = match self {
            Self::NameContains(keywords) => (stock.name().as_str(), keywords),
            Self::SerialNumberContains(keywords) => (stock.serial_number().as_str(), keywords),
            Self::SourceContains(keywords) => (stock.source().as_str(), keywords),
            Self::LocationContains(keywords) => (stock.location().as_str(), keywords),
        };
        let field = field.to_lowercase();
        keywords
            .iter()
            .filter(|keyword| !keyword.is_empty())
            .any(|keyword| field.contains(&keyword.to_lowercase()))
    }

    fn keywords(&self) -> &[String] {
        match self {
            Self::NameContains(keywords)
            | Self::SerialNumberContains(keywords)
            | Self::SourceContains(keywords)
            | Self::LocationContains(keywords) => keywords,
        }
    }
}

impl core::fmt::Display for StockPredicate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::NameContains(_) => "Name",
            Self::SerialNumberContains(_) => "Serial Number",
            Self::SourceContains(_) => "Source",
            Self::LocationContains(_) => "Location",
        };
        write!(f, "{}: {}", label, self.keywords().join(" "))
    }
}

fn split_keywords(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return vec![String::new()];
    }
    trimmed.split_whitespace().map(str::to_string).collect()
}

/// The model's active filter: everything, or any-of a predicate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockFilter {
    All,
    AnyOf(Vec<StockPredicate>),
}

impl StockFilter {
    pub fn test(&self, stock: &Stock) -> bool {
        match self {
            Self::All => true,
            Self::AnyOf(predicates) => predicates.iter().any(|predicate| predicate.test(stock)),
        }
    }
}

impl Default for StockFilter {
    fn default() -> Self {
        Self::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_core::{Location, Name, Quantity, SerialNumber, Source};

    fn apple() -> Stock {
        Stock::new(
            SerialNumber::parse("Ntuc1").unwrap(),
            Name::parse("Apple Juice").unwrap(),
            Source::parse("Ntuc").unwrap(),
            Quantity::new(30),
            Location::parse("Drinks section").unwrap(),
        )
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let predicate = StockPredicate::name_contains("ap");
        assert!(predicate.test(&apple()));

        let predicate = StockPredicate::name_contains("JUICE");
        assert!(predicate.test(&apple()));

        let predicate = StockPredicate::name_contains("pear");
        assert!(!predicate.test(&apple()));
    }

    #[test]
    fn any_keyword_is_enough() {
        let predicate = StockPredicate::name_contains("pear juice");
        assert!(predicate.test(&apple()));
    }

    #[test]
    fn blank_text_matches_nothing() {
        let predicate = StockPredicate::name_contains("   ");
        assert!(!predicate.test(&apple()));
    }

    #[test]
    fn each_variant_reads_its_own_field() {
        assert!(StockPredicate::serial_number_contains("ntuc1").test(&apple()));
        assert!(StockPredicate::source_contains("Ntuc").test(&apple()));
        assert!(StockPredicate::location_contains("drinks").test(&apple()));
        assert!(!StockPredicate::location_contains("Ntuc1").test(&apple()));
    }

    #[test]
    fn display_shows_field_and_keywords() {
        let predicate = StockPredicate::name_contains("Ap ple");
        assert_eq!(predicate.to_string(), "Name: Ap ple");

        let predicate = StockPredicate::serial_number_contains("Kc");
        assert_eq!(predicate.to_string(), "Serial Number: Kc");
    }

    #[test]
    fn filter_any_of_is_a_union() {
        let filter = StockFilter::AnyOf(vec![
            StockPredicate::name_contains("pear"),
            StockPredicate::source_contains("ntuc"),
        ]);
        assert!(filter.test(&apple()));

        let filter = StockFilter::AnyOf(vec![
            StockPredicate::name_contains("pear"),
            StockPredicate::source_contains("cold storage"),
        ]);
        assert!(!filter.test(&apple()));
    }

    #[test]
    fn default_filter_shows_everything() {
        assert!(StockFilter::default().test(&apple()));
    }
}
