//! Cross-run statistics
//!
//! A single run is noisy; policies are compared on the distribution of
//! per-run statistics over many independently seeded runs. Runs share no
//! state, so `batch` executes them in parallel.

pub mod batch;

pub use batch::{run_batch, BatchConfig, BatchReport};

use serde::{Deserialize, Serialize};

/// Summary of a sample of per-run values
///
/// Variance is the population variance (divides by `count`).
///
/// # Example
/// ```
/// use queue_simulator_core_rs::stats::SummaryStats;
///
/// let stats = SummaryStats::from_samples(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(stats.mean, 2.5);
/// assert_eq!(stats.median, 2.5);
/// assert_eq!(stats.variance, 1.25);
///
/// assert!(SummaryStats::from_samples(&[]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl SummaryStats {
    /// Summarize `samples`, `None` when empty
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(Self {
            count,
            mean,
            median,
            variance,
            std_dev: variance.sqrt(),
            min: sorted[0],
            max: sorted[count - 1],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sample() {
        let stats = SummaryStats::from_samples(&[4.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 4.0);
        assert_eq!(stats.median, 4.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_odd_count_median_ignores_input_order() {
        let stats = SummaryStats::from_samples(&[9.0, 1.0, 5.0]).unwrap();
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 9.0);
    }

    #[test]
    fn test_std_dev_is_sqrt_of_population_variance() {
        let stats = SummaryStats::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.variance, 4.0);
        assert_eq!(stats.std_dev, 2.0);
    }
}
