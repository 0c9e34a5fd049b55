//! Round-Robin Policy
//!
//! Cycles through the queues in index order regardless of their occupancy.
//! The cursor lives on the selector instance and persists across runs of the
//! same engine until `reset` is called.

use super::{QueuePolicy, QueueSelector};
use crate::rng::RngManager;

/// Cyclic queue assignment
///
/// # Example
///
/// ```
/// use queue_simulator_core_rs::policy::{QueueSelector, RoundRobinSelector};
/// use queue_simulator_core_rs::RngManager;
///
/// let mut selector = RoundRobinSelector::new();
/// let mut rng = RngManager::new(1);
/// let lengths = [5, 0, 2];
///
/// let picks: Vec<usize> = (0..5).map(|_| selector.select(&lengths, &mut rng)).collect();
/// assert_eq!(picks, vec![0, 1, 2, 0, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoundRobinSelector {
    counter: usize,
}

impl RoundRobinSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selections made since creation or the last reset
    pub fn counter(&self) -> usize {
        self.counter
    }
}

impl QueueSelector for RoundRobinSelector {
    fn select(&mut self, queue_lengths: &[usize], _rng: &mut RngManager) -> usize {
        let queue_id = self.counter % queue_lengths.len();
        self.counter = self.counter.wrapping_add(1);
        queue_id
    }

    fn policy(&self) -> QueuePolicy {
        QueuePolicy::RoundRobin
    }

    fn reset(&mut self) {
        self.counter = 0;
    }
}
