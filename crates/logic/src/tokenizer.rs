//! Prefix tokenizer for command argument strings.

use crate::syntax::Prefix;

/// Result of tokenizing one argument string: the text before the first
/// recognized prefix, plus every prefixed value in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMap {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

impl ArgumentMap {
    /// Text before the first recognized prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(candidate, _)| *candidate == prefix)
            .map(|(_, value)| value.as_str())
    }

    /// Every value given for `prefix`, in order of appearance.
    pub fn values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(candidate, _)| *candidate == prefix)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.iter().any(|(candidate, _)| *candidate == prefix)
    }

    pub fn contains_any(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().any(|&prefix| self.contains(prefix))
    }

    pub fn contains_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|&prefix| self.contains(prefix))
    }

    /// True when any prefix in `prefixes` appears more than once.
    pub fn has_duplicate(&self, prefixes: &[Prefix]) -> bool {
        prefixes
            .iter()
            .any(|&prefix| self.values(prefix).len() > 1)
    }
}

/// Split `args` into a preamble and prefixed values.
///
/// A prefix counts only at a token boundary, i.e. at the start of the string
/// or right after whitespace; anywhere else the same characters are literal
/// text. Each value runs until the next recognized prefix or the end of the
/// string and is trimmed. Tokenizing never fails.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        collect_positions(args, prefix, &mut positions);
    }
    positions.sort_by_key(|&(start, _)| start);

    let preamble_end = positions.first().map_or(args.len(), |&(start, _)| start);
    let preamble = args[..preamble_end].trim().to_string();

    let mut values = Vec::with_capacity(positions.len());
    for (index, &(start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.token().len();
        let value_end = positions
            .get(index + 1)
            .map_or(args.len(), |&(next, _)| next);
        let value = args[value_start..value_end].trim().to_string();
        values.push((prefix, value));
    }

    ArgumentMap { preamble, values }
}

fn collect_positions(args: &str, prefix: Prefix, positions: &mut Vec<(usize, Prefix)>) {
    let token = prefix.token();
    let mut from = 0;
    while let Some(offset) = args[from..].find(token) {
        let start = from + offset;
        let at_boundary = args[..start]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace);
        if at_boundary {
            positions.push((start, prefix));
        }
        // Prefix tokens start with an ASCII letter, so +1 stays on a char
        // boundary.
        from = start + 1;
    }
}
