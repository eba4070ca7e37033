//! Concurrent in-memory record arena shared by the memory repositories.

use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// Keyed record store with the id-assignment behavior of the real backend:
/// new records get `max existing id + 1`, starting at 1.
pub struct Arena<T> {
    records: DashMap<i64, T>,
    next_id: AtomicI64,
}

impl<T: Clone> Arena<T> {
    pub fn new() -> Self {
        Arena {
            records: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Builds an arena pre-populated with fixture records. The id counter
    /// continues from the highest seeded id.
    pub fn seeded(records: impl IntoIterator<Item = (i64, T)>) -> Self {
        let records: DashMap<i64, T> = records.into_iter().collect();
        let next = records.iter().map(|e| *e.key()).max().unwrap_or(0) + 1;
        Arena {
            records,
            next_id: AtomicI64::new(next),
        }
    }

    /// Assigns the next id and stores the record the closure builds around it.
    pub fn insert_with(&self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = build(id);
        self.records.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.records.get(&id).map(|r| r.clone())
    }

    /// All records ordered by id, so listings are stable across calls.
    pub fn all(&self) -> Vec<T> {
        let mut entries: Vec<(i64, T)> = self
            .records
            .iter()
            .map(|e| (*e.key(), e.value().clone()))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter().map(|(_, record)| record).collect()
    }

    /// Overwrites an existing record in place. Returns false when the id is
    /// unknown.
    pub fn replace(&self, id: i64, record: T) -> bool {
        match self.records.get_mut(&id) {
            Some(mut slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, id: i64) -> bool {
        self.records.remove(&id).is_some()
    }
}

impl<T: Clone> Default for Arena<T> {
    fn default() -> Self {
        Arena::new()
    }
}
