//! Parallel Monte-Carlo batches
//!
//! Run `k` of a batch uses seed `rng_seed + k` (wrapping) and its own
//! `QueueSimulator`, so the report depends only on the config, never on
//! how rayon schedules the runs.

use super::SummaryStats;
use crate::orchestrator::{QueueSimulator, SimulationError, SimulationResult, SimulatorConfig};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A set of independent runs of one configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Configuration shared by every run (its seed is the batch base seed)
    pub simulator: SimulatorConfig,

    /// Number of runs (≥ 1)
    pub runs: usize,
}

/// Aggregated statistics over a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub runs: usize,

    /// Mean waiting time of each run, in run order
    pub mean_waiting_times: Vec<f64>,

    /// Distribution of per-run mean waiting times
    pub waiting_time: SummaryStats,

    /// Per queue: distribution of that queue's average waiting time
    pub queue_waiting_times: Vec<SummaryStats>,

    /// Per queue: distribution of that queue's max length
    pub queue_max_lengths: Vec<SummaryStats>,
}

/// Execute every run of the batch in parallel and aggregate the results
///
/// # Errors
///
/// `InvalidParameter` for zero runs or an invalid simulator config.
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport, SimulationError> {
    if config.runs < 1 {
        return Err(SimulationError::InvalidParameter(
            "runs must be at least 1".to_string(),
        ));
    }
    config.simulator.validate()?;

    let base_seed = config.simulator.rng_seed;
    let results: Vec<SimulationResult> = (0..config.runs)
        .into_par_iter()
        .map(|run| {
            let run_config = config
                .simulator
                .clone()
                .with_seed(base_seed.wrapping_add(run as u64));
            QueueSimulator::new(run_config)?.simulate()
        })
        .collect::<Result<_, _>>()?;

    let report = aggregate(&results, config.simulator.num_queues)?;

    info!(
        runs = report.runs,
        policy = %config.simulator.queue_policy,
        mean_waiting_time = report.waiting_time.mean,
        "batch complete"
    );

    Ok(report)
}

fn aggregate(results: &[SimulationResult], num_queues: usize) -> Result<BatchReport, SimulationError> {
    let mean_waiting_times: Vec<f64> = results.iter().map(SimulationResult::mean_waiting_time).collect();
    let waiting_time = summarize(&mean_waiting_times)?;

    let mut queue_waiting_times = Vec::with_capacity(num_queues);
    let mut queue_max_lengths = Vec::with_capacity(num_queues);
    for queue_id in 0..num_queues {
        let waits: Vec<f64> = results
            .iter()
            .map(|r| r.average_waiting_times[queue_id])
            .collect();
        let lengths: Vec<f64> = results
            .iter()
            .map(|r| r.max_queue_lengths[queue_id] as f64)
            .collect();
        queue_waiting_times.push(summarize(&waits)?);
        queue_max_lengths.push(summarize(&lengths)?);
    }

    Ok(BatchReport {
        runs: results.len(),
        mean_waiting_times,
        waiting_time,
        queue_waiting_times,
        queue_max_lengths,
    })
}

fn summarize(samples: &[f64]) -> Result<SummaryStats, SimulationError> {
    SummaryStats::from_samples(samples)
        .ok_or_else(|| SimulationError::InvalidParameter("no runs to summarize".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_runs_rejected() {
        let config = BatchConfig {
            simulator: SimulatorConfig::new(1.0, 1.0, 5, 2, "random").unwrap(),
            runs: 0,
        };
        assert!(matches!(
            run_batch(&config),
            Err(SimulationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_run_k_matches_sequential_run_with_offset_seed() {
        let simulator = SimulatorConfig::new(3.0, 1.0, 30, 3, "shortest-queue")
            .unwrap()
            .with_seed(500);
        let report = run_batch(&BatchConfig {
            simulator: simulator.clone(),
            runs: 4,
        })
        .unwrap();

        for (run, mean) in report.mean_waiting_times.iter().enumerate() {
            let mut sim = QueueSimulator::new(simulator.clone().with_seed(500 + run as u64)).unwrap();
            assert_eq!(*mean, sim.simulate().unwrap().mean_waiting_time());
        }
    }
}
