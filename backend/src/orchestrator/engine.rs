//! Simulation Engine
//!
//! Runs one multi-queue simulation from pre-drawn samples:
//!
//! ```text
//! Draw all arrival gaps, then all process times
//! Start the clock at arrival_gaps[0]
//! For each visitor i:
//! 1. Select a queue from the current (post-eviction) queue lengths
//! 2. Start service now if the queue is empty, else when the last
//!    visitor in that queue finishes
//! 3. Emit the Visitor record
//! 4. Append (end_time, total_time) to the queue and update statistics
//! 5. Advance the clock by arrival_gaps[i + 1] and evict finished
//!    visitors from every queue
//! Average waiting time per queue (0 for queues nobody joined)
//! ```
//!
//! # Example
//!
//! ```rust
//! use queue_simulator_core_rs::orchestrator::{QueueSimulator, SimulatorConfig};
//!
//! let config = SimulatorConfig::new(10.0, 1.0, 20, 8, "shortest-queue")
//!     .unwrap()
//!     .with_seed(12345);
//!
//! let mut simulator = QueueSimulator::new(config).unwrap();
//! let result = simulator.simulate().unwrap();
//!
//! assert_eq!(result.visitors.len(), 20);
//! assert_eq!(result.max_queue_lengths.len(), 8);
//! assert_eq!(result.average_waiting_times.len(), 8);
//! ```

use crate::arrivals::{validate_rate, ArrivalConfig, ArrivalSamples, SampleGenerator};
use crate::core::clock::SimulationClock;
use crate::models::queue::QueueState;
use crate::models::visitor::Visitor;
use crate::policy::{create_selector, QueuePolicy, QueueSelector};
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, trace};

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete simulator configuration
///
/// # Fields
///
/// * `arrival_rate` - Expected arrivals per time unit (λ > 0)
/// * `service_rate` - Expected completions per time unit per server (μ > 0)
/// * `num_visitors` - Visitors simulated per run (≥ 1)
/// * `num_queues` - Number of single-server queues (≥ 1)
/// * `queue_policy` - Queue assignment strategy
/// * `rng_seed` - Seed for the run's random source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    pub arrival_rate: f64,

    pub service_rate: f64,

    pub num_visitors: usize,

    pub num_queues: usize,

    pub queue_policy: QueuePolicy,

    /// RNG seed for deterministic simulation
    #[serde(default)]
    pub rng_seed: u64,
}

impl SimulatorConfig {
    /// Build and validate a configuration from a policy name
    ///
    /// # Errors
    ///
    /// * `InvalidPolicy` - `queue_policy` is not `"random"`, `"round-robin"`
    ///   or `"shortest-queue"`
    /// * `InvalidParameter` - a rate is not positive or a count is zero
    pub fn new(
        arrival_rate: f64,
        service_rate: f64,
        num_visitors: usize,
        num_queues: usize,
        queue_policy: &str,
    ) -> Result<Self, SimulationError> {
        let config = Self {
            arrival_rate,
            service_rate,
            num_visitors,
            num_queues,
            queue_policy: queue_policy.parse()?,
            rng_seed: 0,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the RNG seed
    pub fn with_seed(mut self, rng_seed: u64) -> Self {
        self.rng_seed = rng_seed;
        self
    }

    /// Check every numeric parameter
    pub fn validate(&self) -> Result<(), SimulationError> {
        validate_rate("arrival_rate", self.arrival_rate)?;
        validate_rate("service_rate", self.service_rate)?;
        if self.num_visitors < 1 {
            return Err(SimulationError::InvalidParameter(
                "num_visitors must be at least 1".to_string(),
            ));
        }
        if self.num_queues < 1 {
            return Err(SimulationError::InvalidParameter(
                "num_queues must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Arrival and service parameters for the sample generator
    pub fn arrival_config(&self) -> ArrivalConfig {
        ArrivalConfig {
            arrival_rate: self.arrival_rate,
            service_rate: self.service_rate,
            num_visitors: self.num_visitors,
        }
    }
}

// ============================================================================
// Results and Errors
// ============================================================================

/// Output of a single `simulate()` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// One record per visitor, in arrival order
    pub visitors: Vec<Visitor>,

    /// Highest queue length observed right after each assignment
    pub max_queue_lengths: Vec<usize>,

    /// Mean waiting time of visitors routed to each queue (0 if none)
    pub average_waiting_times: Vec<f64>,

    /// Number of visitors routed to each queue
    pub visitors_per_queue: Vec<usize>,
}

impl SimulationResult {
    /// Mean waiting time over every visitor in the run
    pub fn mean_waiting_time(&self) -> f64 {
        if self.visitors.is_empty() {
            return 0.0;
        }
        let total: f64 = self.visitors.iter().map(Visitor::waiting_time).sum();
        total / self.visitors.len() as f64
    }

    /// SHA256 of the JSON serialization, as lowercase hex
    ///
    /// Two runs with the same digest produced identical visitors and
    /// statistics.
    pub fn digest(&self) -> Result<String, SimulationError> {
        let json = serde_json::to_string(self).map_err(|e| {
            SimulationError::SerializationError(format!("Result serialization failed: {}", e))
        })?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }
}

/// Simulation errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// Unrecognized queue policy name
    #[error("Invalid queue policy: {0}")]
    InvalidPolicy(String),

    /// Non-positive rate or count, or malformed samples
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Result or config could not be serialized
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Simulator
// ============================================================================

/// Multi-queue simulation engine
///
/// Owns the random source, the queue selector and the per-queue state.
/// Queue contents are cleared at the start of every run; the round-robin
/// cursor and the RNG carry over from one `simulate()` call to the next.
///
/// # Determinism
///
/// All randomness comes from `rng`. Same seed + same config = identical
/// results.
pub struct QueueSimulator {
    config: SimulatorConfig,

    rng: RngManager,

    selector: Box<dyn QueueSelector>,

    queues: Vec<QueueState>,
}

impl QueueSimulator {
    /// Create a simulator seeded from `config.rng_seed`
    pub fn new(config: SimulatorConfig) -> Result<Self, SimulationError> {
        let rng = RngManager::new(config.rng_seed);
        Self::with_rng(config, rng)
    }

    /// Create a simulator drawing from an explicit random source
    pub fn with_rng(config: SimulatorConfig, rng: RngManager) -> Result<Self, SimulationError> {
        config.validate()?;

        let selector = create_selector(config.queue_policy);
        let queues = vec![QueueState::new(); config.num_queues];

        Ok(Self {
            config,
            rng,
            selector,
            queues,
        })
    }

    /// Draw fresh samples and run one simulation
    pub fn simulate(&mut self) -> Result<SimulationResult, SimulationError> {
        let samples = SampleGenerator::generate(&self.config.arrival_config(), &mut self.rng)?;
        self.simulate_with_samples(&samples)
    }

    /// Run one simulation from caller-supplied samples
    ///
    /// The number of visitors is `samples.len()`. The simulator's RNG is
    /// still used for random queue choices and tie-breaking.
    pub fn simulate_with_samples(
        &mut self,
        samples: &ArrivalSamples,
    ) -> Result<SimulationResult, SimulationError> {
        if samples.is_empty() {
            return Err(SimulationError::InvalidParameter(
                "cannot simulate zero visitors".to_string(),
            ));
        }

        let gaps = samples.arrival_gaps();
        let process_times = samples.process_times();
        if gaps.len() != process_times.len() {
            return Err(SimulationError::InvalidParameter(format!(
                "arrival_gaps has {} entries but process_times has {}",
                gaps.len(),
                process_times.len()
            )));
        }
        let num_visitors = samples.len();
        let num_queues = self.queues.len();

        debug!(
            num_visitors,
            num_queues,
            policy = %self.config.queue_policy,
            rng_state = self.rng.get_state(),
            "starting simulation run"
        );

        for queue in &mut self.queues {
            queue.clear();
        }

        let mut visitors = Vec::with_capacity(num_visitors);
        let mut max_queue_lengths = vec![0usize; num_queues];
        let mut total_waiting_times = vec![0.0f64; num_queues];
        let mut visitors_per_queue = vec![0usize; num_queues];
        let mut queue_lengths = vec![0usize; num_queues];

        let mut clock = SimulationClock::new();
        clock.start(gaps[0]);

        for visitor_id in 0..num_visitors {
            let current_time = clock.current_time();

            for (len, queue) in queue_lengths.iter_mut().zip(&self.queues) {
                *len = queue.len();
            }
            let queue_id = self.selector.select(&queue_lengths, &mut self.rng);
            let queue = &mut self.queues[queue_id];
            let queue_len = queue.len();

            // Single server: wait for whoever is last in line
            let start_time = queue.last_end_time().unwrap_or(current_time);
            let process_time = process_times[visitor_id];
            let total_time = start_time - current_time + process_time;
            let end_time = current_time + total_time;

            trace!(visitor_id, queue_id, queue_len, start_time, end_time, "visitor assigned");

            visitors.push(Visitor {
                visitor_id,
                arrival_time: current_time,
                process_time,
                start_time,
                end_time,
                total_time,
                queue_id,
            });

            queue.append(end_time, total_time);
            visitors_per_queue[queue_id] += 1;
            total_waiting_times[queue_id] += total_time - process_time;
            max_queue_lengths[queue_id] = max_queue_lengths[queue_id].max(queue_len + 1);

            if visitor_id + 1 < num_visitors {
                clock.advance(gaps[visitor_id + 1]);
                self.evict_finished(clock.current_time());
            }
        }

        let average_waiting_times = total_waiting_times
            .iter()
            .zip(&visitors_per_queue)
            .map(|(total, count)| if *count > 0 { total / *count as f64 } else { 0.0 })
            .collect();

        let result = SimulationResult {
            visitors,
            max_queue_lengths,
            average_waiting_times,
            visitors_per_queue,
        };

        debug!(
            num_visitors,
            end_time = clock.current_time(),
            mean_waiting_time = result.mean_waiting_time(),
            "simulation run complete"
        );

        Ok(result)
    }

    /// Remove finished visitors from every queue
    fn evict_finished(&mut self, current_time: f64) {
        for (queue_id, queue) in self.queues.iter_mut().enumerate() {
            let evicted = queue.evict(current_time);
            if evicted > 0 {
                trace!(queue_id, evicted, current_time, "evicted finished visitors");
            }
        }
    }

    /// Restart round-robin assignment at queue 0
    pub fn reset_round_robin(&mut self) {
        self.selector.reset();
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn policy(&self) -> QueuePolicy {
        self.selector.policy()
    }

    pub fn num_queues(&self) -> usize {
        self.queues.len()
    }

    /// Queue contents as left by the last run
    pub fn queues(&self) -> &[QueueState] {
        &self.queues
    }

    /// Current RNG state (for replay)
    pub fn rng_state(&self) -> u64 {
        self.rng.get_state()
    }
}
