//! Shortest-Queue Policy
//!
//! Greedy load balancing: join the queue with the fewest visitors present.
//! When several queues share the minimum length one of them is drawn
//! uniformly at random.

use super::{QueuePolicy, QueueSelector};
use crate::rng::RngManager;

/// Least-occupied queue with random tie-breaking
#[derive(Debug, Clone, Default)]
pub struct ShortestQueueSelector {
    ties: Vec<usize>,
}

impl ShortestQueueSelector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QueueSelector for ShortestQueueSelector {
    fn select(&mut self, queue_lengths: &[usize], rng: &mut RngManager) -> usize {
        assert!(!queue_lengths.is_empty(), "cannot select from zero queues");
        let min_len = queue_lengths.iter().copied().min().unwrap_or(0);

        // Reuse the buffer across visitors
        self.ties.clear();
        self.ties.extend(
            queue_lengths
                .iter()
                .enumerate()
                .filter(|(_, len)| **len == min_len)
                .map(|(queue_id, _)| queue_id),
        );

        self.ties[rng.index(self.ties.len())]
    }

    fn policy(&self) -> QueuePolicy {
        QueuePolicy::ShortestQueue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "cannot select from zero queues")]
    fn test_empty_queue_list_panics() {
        let mut rng = RngManager::new(1);
        ShortestQueueSelector::new().select(&[], &mut rng);
    }

    #[test]
    fn test_unique_minimum_selected() {
        let mut selector = ShortestQueueSelector::new();
        let mut rng = RngManager::new(1);

        for _ in 0..50 {
            assert_eq!(selector.select(&[3, 1, 2, 4], &mut rng), 1);
        }
    }

    #[test]
    fn test_ties_only_pick_minimal_queues() {
        let mut selector = ShortestQueueSelector::new();
        let mut rng = RngManager::new(9);
        let mut picked = [0usize; 4];

        for _ in 0..1000 {
            picked[selector.select(&[2, 0, 5, 0], &mut rng)] += 1;
        }

        assert_eq!(picked[0], 0);
        assert_eq!(picked[2], 0);
        assert!(picked[1] > 0, "queue 1 never chosen among ties");
        assert!(picked[3] > 0, "queue 3 never chosen among ties");
    }

    #[test]
    fn test_all_empty_queues_all_tie() {
        let mut selector = ShortestQueueSelector::new();
        let mut rng = RngManager::new(21);
        let mut picked = [false; 5];

        for _ in 0..1000 {
            picked[selector.select(&[0; 5], &mut rng)] = true;
        }

        assert!(picked.iter().all(|p| *p));
    }
}
