//! Insertion-ordered keyed collections.

use std::collections::HashMap;

use super::records::Record;

/// Records keyed by id, iterated in insertion order.
///
/// Building from a list is last-write-wins: a repeated id keeps the slot of
/// its first occurrence but takes the value of its last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    /// Build a collection from records in source order.
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        let mut collection = Self::default();
        for record in records {
            collection.insert(record);
        }
        collection
    }

    fn insert(&mut self, record: T) {
        if let Some(&slot) = self.index.get(record.id()) {
            self.entries[slot] = record;
            return;
        }
        self.index.insert(record.id().to_string(), self.entries.len());
        self.entries.push(record);
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).and_then(|&slot| self.entries.get(slot))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }
}

impl<T> Collection<T> {
    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
