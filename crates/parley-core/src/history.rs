//! Mutation-guarded append-only history store.
//!
//! The store is the single shared resource in the system. Every access runs
//! under one mutex, so appends and reads are atomic at the granularity of a
//! full operation: no snapshot ever observes a half-appended entry, and
//! concurrent appends linearize into the order all later snapshots see.

use std::sync::{Mutex, MutexGuard, PoisonError};

use parley_types::history::Snapshot;

/// Ordered, append-only log of formatted chat entries.
///
/// Entries are never reordered or removed within the process lifetime;
/// history length only grows. Both operations copy the full history out
/// under the lock, so returned snapshots are consistent prefix-complete
/// views independent of later mutation.
pub struct HistoryStore {
    entries: Mutex<Vec<String>>,
}

impl HistoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Append one entry and return a snapshot of the full post-append history.
    ///
    /// Accepts any string, including empty. The history grows by exactly
    /// one element; there is no error condition.
    pub fn append(&self, entry: String) -> Snapshot {
        let mut entries = self.lock();
        entries.push(entry);
        Snapshot::new(entries.clone())
    }

    /// Return a snapshot of the current history without mutation.
    pub fn read(&self) -> Snapshot {
        Snapshot::new(self.lock().clone())
    }

    /// Current history length.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        // A poisoned lock cannot leave the Vec torn: push completes or it
        // doesn't. Recover the guard instead of propagating the panic.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
