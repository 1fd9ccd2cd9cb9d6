//! Flat statistics store standing in for an explicit search tree.
//!
//! Entries are keyed by [`StatsKey`] and only ever created or incremented.
//! The store is owned by exactly one searcher and discarded (or cleared)
//! wholesale when a decision is finished.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::node::{StatField, StatsEntry, StatsKey};

/// Map from node identity to its counters.
#[derive(Debug, Clone)]
pub struct StatsStore<S> {
    entries: HashMap<StatsKey<S>, StatsEntry>,
}

impl<S> Default for StatsStore<S> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<S: Hash + Eq> StatsStore<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the counters for a key, if it has been expanded.
    #[inline]
    pub fn get(&self, key: &StatsKey<S>) -> Option<&StatsEntry> {
        self.entries.get(key)
    }

    #[inline]
    pub fn contains(&self, key: &StatsKey<S>) -> bool {
        self.entries.contains_key(key)
    }

    /// Create an all-zero entry if `key` is absent.
    ///
    /// Returns `true` when an entry was created, `false` when one already
    /// existed (which is left untouched).
    pub fn insert_zero(&mut self, key: StatsKey<S>) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(StatsEntry::default());
                true
            }
        }
    }

    /// Increment one counter of an existing entry.
    ///
    /// Absent keys are ignored and `false` is returned: only expanded
    /// nodes accumulate statistics.
    pub fn increment(&mut self, key: &StatsKey<S>, field: StatField) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.bump(field);
                true
            }
            None => false,
        }
    }

    /// Number of expanded nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&StatsKey<S>, &StatsEntry)> {
        self.entries.iter()
    }
}
