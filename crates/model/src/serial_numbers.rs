//! Registry of issued serial numbers, grouped by source.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use stockbook_core::{SerialNumber, Source};

/// Serial numbers issued under one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialNumberSet {
    source: Source,
    serial_numbers: BTreeSet<SerialNumber>,
}

impl SerialNumberSet {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            serial_numbers: BTreeSet::new(),
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn serial_numbers(&self) -> impl Iterator<Item = &SerialNumber> {
        self.serial_numbers.iter()
    }

    pub fn contains(&self, serial_number: &SerialNumber) -> bool {
        self.serial_numbers.contains(serial_number)
    }

    pub fn is_empty(&self) -> bool {
        self.serial_numbers.is_empty()
    }
}

/// All serial-number sets, one per source.
///
/// Duplicate detection consults this registry rather than the stock book, so
/// a serial number stays reserved even when its stock is absent. Command
/// execution keeps both books in lockstep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialNumberSetsBook {
    sets: Vec<SerialNumberSet>,
}

impl SerialNumberSetsBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sets(&self) -> &[SerialNumberSet] {
        &self.sets
    }

    pub fn contains(&self, serial_number: &SerialNumber) -> bool {
        self.sets.iter().any(|set| set.contains(serial_number))
    }

    /// Record a serial number under its source, creating the set on first use.
    pub fn add(&mut self, source: Source, serial_number: SerialNumber) {
        match self.sets.iter_mut().find(|set| set.source == source) {
            Some(set) => {
                set.serial_numbers.insert(serial_number);
            }
            None => {
                let mut set = SerialNumberSet::new(source);
                set.serial_numbers.insert(serial_number);
                self.sets.push(set);
            }
        }
    }

    /// Drop a serial number wherever it is registered. Sets left empty are
    /// removed.
    pub fn remove(&mut self, serial_number: &SerialNumber) {
        for set in &mut self.sets {
            set.serial_numbers.remove(serial_number);
        }
        self.sets.retain(|set| !set.is_empty());
    }
}
