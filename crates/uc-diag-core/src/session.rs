//! Bounded session log — fixed-capacity ring buffer of recent actions.

use std::collections::VecDeque;
use std::sync::Mutex;

use uc_protocol::SessionLogEntry;

/// Default capacity of the session log.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Append-only ring buffer of session actions. When full, the oldest entry
/// is dropped (FIFO eviction); appending never errors. Appends are ordered
/// by a single lock, so entry order matches call arrival order.
pub struct SessionLog {
    entries: Mutex<VecDeque<SessionLogEntry>>,
    capacity: usize,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Append an entry, evicting from the front when over capacity.
    pub fn append(&self, entry: SessionLogEntry) {
        let mut entries = self.entries.lock().unwrap();
        entries.push_back(entry);
        while entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    /// Up to `n` most recent entries, oldest first (most recent last).
    pub fn recent(&self, n: usize) -> Vec<SessionLogEntry> {
        let entries = self.entries.lock().unwrap();
        let skip = entries.len().saturating_sub(n);
        entries.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::new()
    }
}
