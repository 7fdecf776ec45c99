//! Prefix syntax shared by all command parsers.

/// A literal marker introducing one field's value in an argument string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn token(self) -> &'static str {
        self.0
    }
}

impl core::fmt::Display for Prefix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_SERIAL_NUMBER: Prefix = Prefix("sn/");
pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_SOURCE: Prefix = Prefix("s/");
pub const PREFIX_LOCATION: Prefix = Prefix("l/");
pub const PREFIX_QUANTITY: Prefix = Prefix("q/");
pub const PREFIX_NOTE: Prefix = Prefix("nt/");
pub const PREFIX_SORT_FIELD: Prefix = Prefix("by/");
pub const PREFIX_SORT_ORDER: Prefix = Prefix("o/");

/// Every prefix the tokenizer recognizes, regardless of command.
///
/// Parsers tokenize with the full set so that an out-of-place prefix is
/// captured as a prefix, not swallowed into a neighboring value, and can then
/// be rejected by the command's forbidden-prefix rule.
pub const ALL_PREFIXES: [Prefix; 8] = [
    PREFIX_SERIAL_NUMBER,
    PREFIX_NAME,
    PREFIX_SOURCE,
    PREFIX_LOCATION,
    PREFIX_QUANTITY,
    PREFIX_NOTE,
    PREFIX_SORT_FIELD,
    PREFIX_SORT_ORDER,
];

/// The prefixes a command does not accept: everything outside `valid`.
pub fn invalid_prefixes_for(valid: &[Prefix]) -> Vec<Prefix> {
    ALL_PREFIXES
        .iter()
        .copied()
        .filter(|prefix| !valid.contains(prefix))
        .collect()
}
