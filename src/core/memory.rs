//! In-memory storage backend.
//!
//! Each entity type gets its own id-keyed table. Children store their parent's
//! id, so "append to the parent's collection" is a plain insert.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use parking_lot::Mutex;

/// Id-keyed table with store-assigned, monotonically increasing ids.
///
/// Ids start at 1 to match `AUTO_INCREMENT`. Iteration is in id order.
pub struct InMemoryTable<T> {
    rows: Mutex<BTreeMap<i64, T>>,
    next_id: AtomicI64,
}

impl<T: Clone> InMemoryTable<T> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Assign the next id, let `assign` stamp it on the row, and store it.
    pub fn insert_with(&self, mut row: T, assign: impl FnOnce(&mut T, i64)) -> T {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        assign(&mut row, id);
        self.rows.lock().insert(id, row.clone());
        row
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.rows.lock().get(&id).cloned()
    }

    /// Replace an existing row. Returns false when the id is absent.
    pub fn replace(&self, id: i64, row: T) -> bool {
        let mut rows = self.rows.lock();
        match rows.get_mut(&id) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, id: i64) -> Option<T> {
        self.rows.lock().remove(&id)
    }

    /// Rows matching `predicate`, in id order
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .lock()
            .values()
            .filter(|row| predicate(*row))
            .cloned()
            .collect()
    }

    pub fn any(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.rows.lock().values().any(predicate)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Default for InMemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
