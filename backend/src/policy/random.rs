//! Random Policy
//!
//! Sends each visitor to a uniformly drawn queue. Queue occupancy is
//! ignored, so this is the baseline every other policy is compared to.

use super::{QueuePolicy, QueueSelector};
use crate::rng::RngManager;

/// Uniform random queue choice
#[derive(Debug, Clone, Default)]
pub struct RandomSelector;

impl RandomSelector {
    pub fn new() -> Self {
        Self
    }
}

impl QueueSelector for RandomSelector {
    fn select(&mut self, queue_lengths: &[usize], rng: &mut RngManager) -> usize {
        rng.index(queue_lengths.len())
    }

    fn policy(&self) -> QueuePolicy {
        QueuePolicy::Random
    }
}
