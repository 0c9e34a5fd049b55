//! Per-queue state for a FIFO single-server queue
//!
//! A queue holds `(end_time, total_time)` entries for visitors routed to it
//! whose service has not finished before the current clock. Because one
//! server handles visitors in arrival order, each appended `end_time` is at
//! least the previous one, so finished visitors always form a prefix and
//! eviction only ever pops from the front.
//!
//! The entry being served counts towards `len()`.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One visitor still present in a queue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Clock time the visitor's service completes
    pub end_time: f64,

    /// Visitor's time in system
    pub total_time: f64,
}

/// Ordered record of pending and in-service visitors for one queue
///
/// # Example
/// ```
/// use queue_simulator_core_rs::QueueState;
///
/// let mut queue = QueueState::new();
/// queue.append(2.0, 1.0);
/// queue.append(3.5, 2.5);
/// assert_eq!(queue.len(), 2);
/// assert_eq!(queue.last_end_time(), Some(3.5));
///
/// // Visitor finishing at 2.0 is gone by 2.1
/// assert_eq!(queue.evict(2.1), 1);
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueState {
    entries: VecDeque<QueueEntry>,
}

impl QueueState {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every leading entry with `end_time < current_time`.
    ///
    /// Stops at the first entry finishing at or after `current_time`.
    /// Returns the number of entries removed.
    pub fn evict(&mut self, current_time: f64) -> usize {
        let mut evicted = 0;
        while let Some(front) = self.entries.front() {
            if front.end_time >= current_time {
                break;
            }
            self.entries.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Number of entries currently held
    ///
    /// Only meaningful after `evict` has been called for the current clock.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a visitor at the tail.
    ///
    /// Callers must keep `end_time` non-decreasing; the engine guarantees
    /// this because a new visitor never finishes before the one ahead.
    pub fn append(&mut self, end_time: f64, total_time: f64) {
        self.entries.push_back(QueueEntry {
            end_time,
            total_time,
        });
    }

    /// End time of the most recently appended entry, `None` if empty
    pub fn last_end_time(&self) -> Option<f64> {
        self.entries.back().map(|entry| entry.end_time)
    }

    /// Entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = &QueueEntry> {
        self.entries.iter()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evict_empty_queue_is_noop() {
        let mut queue = QueueState::new();
        assert_eq!(queue.evict(100.0), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_evict_keeps_entry_ending_exactly_now() {
        let mut queue = QueueState::new();
        queue.append(5.0, 1.0);

        assert_eq!(queue.evict(5.0), 0);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_evict_stops_at_first_unfinished_entry() {
        let mut queue = QueueState::new();
        queue.append(1.0, 1.0);
        queue.append(2.0, 1.5);
        queue.append(4.0, 3.0);

        assert_eq!(queue.evict(3.0), 2);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.last_end_time(), Some(4.0));
    }

    #[test]
    fn test_last_end_time_empty_sentinel() {
        let queue = QueueState::new();
        assert_eq!(queue.last_end_time(), None);
    }
}
