//! Arrival and service-time sampling for a single run.
//!
//! Visitors arrive as a Poisson process and are served with exponential
//! service times. All draws for a run are taken up front from the run's
//! `RngManager`, so the simulation loop itself consumes no randomness
//! except for queue selection.
//!
//! # Stream order
//!
//! The full arrival-gap sequence is drawn before the full process-time
//! sequence. Changing this order changes every run for a given seed.
//!
//! # Example
//!
//! ```
//! use queue_simulator_core_rs::arrivals::{ArrivalConfig, SampleGenerator};
//! use queue_simulator_core_rs::rng::RngManager;
//!
//! let mut rng = RngManager::new(42);
//! let config = ArrivalConfig {
//!     arrival_rate: 10.0,
//!     service_rate: 1.0,
//!     num_visitors: 20,
//! };
//!
//! let samples = SampleGenerator::generate(&config, &mut rng).unwrap();
//! assert_eq!(samples.len(), 20);
//! ```

use crate::orchestrator::SimulationError;
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};

/// Parameters of the arrival and service processes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrivalConfig {
    /// Expected arrivals per time unit (λ)
    pub arrival_rate: f64,

    /// Expected service completions per time unit for one server (μ)
    pub service_rate: f64,

    /// Number of visitors to draw samples for
    pub num_visitors: usize,
}

impl ArrivalConfig {
    /// Reject non-positive or non-finite rates and an empty visitor count.
    pub fn validate(&self) -> Result<(), SimulationError> {
        validate_rate("arrival_rate", self.arrival_rate)?;
        validate_rate("service_rate", self.service_rate)?;
        if self.num_visitors < 1 {
            return Err(SimulationError::InvalidParameter(
                "num_visitors must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_rate(name: &str, rate: f64) -> Result<(), SimulationError> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(SimulationError::InvalidParameter(format!(
            "{} must be a positive finite number, got {}",
            name, rate
        )));
    }
    Ok(())
}

/// Pre-drawn random inputs for one run.
///
/// `arrival_gaps[0]` is the absolute arrival time of visitor 0 (the clock
/// starts there, not at zero); every later entry is the gap since the
/// previous arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawArrivalSamples")]
pub struct ArrivalSamples {
    arrival_gaps: Vec<f64>,
    process_times: Vec<f64>,
}

/// Unchecked wire form; deserialization goes through `ArrivalSamples::new`.
#[derive(Deserialize)]
struct RawArrivalSamples {
    arrival_gaps: Vec<f64>,
    process_times: Vec<f64>,
}

impl TryFrom<RawArrivalSamples> for ArrivalSamples {
    type Error = SimulationError;

    fn try_from(raw: RawArrivalSamples) -> Result<Self, Self::Error> {
        Self::new(raw.arrival_gaps, raw.process_times)
    }
}

impl ArrivalSamples {
    /// Build samples from explicit sequences.
    ///
    /// Both sequences must be non-empty, of equal length, and contain only
    /// finite non-negative values.
    pub fn new(arrival_gaps: Vec<f64>, process_times: Vec<f64>) -> Result<Self, SimulationError> {
        if arrival_gaps.is_empty() {
            return Err(SimulationError::InvalidParameter(
                "sample sequences must not be empty".to_string(),
            ));
        }
        if arrival_gaps.len() != process_times.len() {
            return Err(SimulationError::InvalidParameter(format!(
                "arrival_gaps has {} entries but process_times has {}",
                arrival_gaps.len(),
                process_times.len()
            )));
        }
        if let Some(bad) = arrival_gaps
            .iter()
            .chain(process_times.iter())
            .find(|v| !v.is_finite() || **v < 0.0)
        {
            return Err(SimulationError::InvalidParameter(format!(
                "sample values must be finite and non-negative, got {}",
                bad
            )));
        }
        Ok(Self {
            arrival_gaps,
            process_times,
        })
    }

    /// Gap before each arrival (entry 0 is the first arrival time)
    pub fn arrival_gaps(&self) -> &[f64] {
        &self.arrival_gaps
    }

    /// Service duration of each visitor
    pub fn process_times(&self) -> &[f64] {
        &self.process_times
    }

    /// Number of visitors covered by these samples
    pub fn len(&self) -> usize {
        self.arrival_gaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrival_gaps.is_empty()
    }

    /// Absolute arrival times (running sum of the gaps).
    pub fn arrival_times(&self) -> Vec<f64> {
        self.arrival_gaps
            .iter()
            .scan(0.0, |clock, gap| {
                *clock += gap;
                Some(*clock)
            })
            .collect()
    }
}

/// Draws the arrival-gap and process-time sequences for a run.
pub struct SampleGenerator;

impl SampleGenerator {
    /// Generate `num_visitors` exponential arrival gaps (mean `1/λ`) followed
    /// by `num_visitors` exponential process times (mean `1/μ`).
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if a rate is not positive or `num_visitors` is 0.
    /// The RNG is not advanced in that case.
    pub fn generate(
        config: &ArrivalConfig,
        rng: &mut RngManager,
    ) -> Result<ArrivalSamples, SimulationError> {
        config.validate()?;

        let arrival_gaps = Self::draw_exponential(config.arrival_rate, config.num_visitors, rng);
        let process_times = Self::draw_exponential(config.service_rate, config.num_visitors, rng);

        Ok(ArrivalSamples {
            arrival_gaps,
            process_times,
        })
    }

    fn draw_exponential(rate: f64, count: usize, rng: &mut RngManager) -> Vec<f64> {
        (0..count).map(|_| rng.exponential(rate)).collect()
    }
}
