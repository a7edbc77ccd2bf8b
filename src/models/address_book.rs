//! In-memory address book keyed by contact name.

use super::record::Record;
use std::collections::HashMap;
use tracing::debug;

/// Collection of records keyed by name.
///
/// Every key equals the name of the record it maps to. Iteration follows
/// first-insertion order of the names still present; replacing a record keeps
/// its slot.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name, replacing any previous one wholesale.
    ///
    /// Returns the replaced record, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key.clone(), record);
        if previous.is_none() {
            debug!(contact = %key, "record added");
            self.order.push(key);
        } else {
            debug!(contact = %key, "record replaced");
        }
        previous
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable lookup. A record's name cannot change, so the key stays valid.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record; absent names are a no-op returning `None`.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        debug!(contact = %name, "record deleted");
        Some(removed)
    }

    /// Records in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
