//! Queue Selection Policy Module
//!
//! Decides which queue each arriving visitor joins.
//!
//! # Policy Interface
//!
//! Every policy implements the `QueueSelector` trait. The engine hands it the
//! post-eviction length of every queue and the run's RNG:
//!
//! ```rust
//! use queue_simulator_core_rs::policy::{QueueSelector, ShortestQueueSelector};
//! use queue_simulator_core_rs::RngManager;
//!
//! let mut selector = ShortestQueueSelector::new();
//! let mut rng = RngManager::new(42);
//!
//! let queue_id = selector.select(&[3, 0, 2], &mut rng);
//! assert_eq!(queue_id, 1);
//! ```
//!
//! Available policies:
//! 1. **Random**: uniform queue, ignores occupancy
//! 2. **RoundRobin**: cyclic 0, 1, …, n-1, 0, … ignoring occupancy
//! 3. **ShortestQueue**: least occupied queue, ties broken uniformly at random
//!
//! Policies are built from their names through `QueuePolicy`:
//!
//! ```rust
//! use queue_simulator_core_rs::policy::{create_selector, QueuePolicy};
//!
//! let policy: QueuePolicy = "shortest-queue".parse().unwrap();
//! let selector = create_selector(policy);
//! assert_eq!(selector.policy(), QueuePolicy::ShortestQueue);
//!
//! assert!("fastest-queue".parse::<QueuePolicy>().is_err());
//! ```

use crate::orchestrator::SimulationError;
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod random;
pub mod round_robin;
pub mod shortest_queue;

pub use random::RandomSelector;
pub use round_robin::RoundRobinSelector;
pub use shortest_queue::ShortestQueueSelector;

/// Queue assignment strategy, identified by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueuePolicy {
    /// `"random"`
    Random,
    /// `"round-robin"`
    RoundRobin,
    /// `"shortest-queue"`
    ShortestQueue,
}

impl QueuePolicy {
    /// All policies, in a stable order
    pub const ALL: [QueuePolicy; 3] = [
        QueuePolicy::Random,
        QueuePolicy::RoundRobin,
        QueuePolicy::ShortestQueue,
    ];

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            QueuePolicy::Random => "random",
            QueuePolicy::RoundRobin => "round-robin",
            QueuePolicy::ShortestQueue => "shortest-queue",
        }
    }
}

impl fmt::Display for QueuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueuePolicy {
    type Err = SimulationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        QueuePolicy::ALL
            .into_iter()
            .find(|policy| policy.as_str() == name)
            .ok_or_else(|| SimulationError::InvalidPolicy(name.to_string()))
    }
}

/// Chooses a queue index for each new visitor
///
/// `queue_lengths` has one entry per queue and is never empty. The returned
/// index must be in `[0, queue_lengths.len())`.
pub trait QueueSelector: Send + Sync {
    /// Pick the queue for the next visitor
    fn select(&mut self, queue_lengths: &[usize], rng: &mut RngManager) -> usize;

    /// Policy implemented by this selector
    fn policy(&self) -> QueuePolicy;

    /// Clear any state carried between visitors (and between runs)
    fn reset(&mut self) {}
}

/// Build the selector for a policy
pub fn create_selector(policy: QueuePolicy) -> Box<dyn QueueSelector> {
    match policy {
        QueuePolicy::Random => Box::new(RandomSelector::new()),
        QueuePolicy::RoundRobin => Box::new(RoundRobinSelector::new()),
        QueuePolicy::ShortestQueue => Box::new(ShortestQueueSelector::new()),
    }
}

/// Build a selector from a policy name
///
/// # Errors
///
/// `InvalidPolicy` for anything other than `"random"`, `"round-robin"` or
/// `"shortest-queue"`.
pub fn create_selector_by_name(name: &str) -> Result<Box<dyn QueueSelector>, SimulationError> {
    Ok(create_selector(name.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names_round_trip() {
        for policy in QueuePolicy::ALL {
            assert_eq!(policy.as_str().parse::<QueuePolicy>().unwrap(), policy);
            assert_eq!(policy.to_string(), policy.as_str());
        }
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = "Random".parse::<QueuePolicy>().unwrap_err();
        assert_eq!(err, SimulationError::InvalidPolicy("Random".to_string()));

        assert!(create_selector_by_name("least-loaded").is_err());
        assert!(create_selector_by_name("").is_err());
    }

    #[test]
    fn test_serde_uses_kebab_case_names() {
        let json = serde_json::to_string(&QueuePolicy::ShortestQueue).unwrap();
        assert_eq!(json, "\"shortest-queue\"");

        let policy: QueuePolicy = serde_json::from_str("\"round-robin\"").unwrap();
        assert_eq!(policy, QueuePolicy::RoundRobin);
    }

    #[test]
    fn test_factory_builds_matching_selector() {
        for policy in QueuePolicy::ALL {
            assert_eq!(create_selector(policy).policy(), policy);
        }
    }
}
