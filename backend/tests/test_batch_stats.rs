//! Tests for parallel batches and summary statistics

use queue_simulator_core_rs::{
    run_batch, BatchConfig, QueuePolicy, SimulationError, SimulatorConfig, SummaryStats,
};

fn batch(policy: &str, runs: usize, seed: u64) -> BatchConfig {
    BatchConfig {
        simulator: SimulatorConfig::new(10.0, 1.0, 50, 8, policy)
            .unwrap()
            .with_seed(seed),
        runs,
    }
}

#[test]
fn test_batch_shapes() {
    let report = run_batch(&batch("shortest-queue", 16, 1)).unwrap();

    assert_eq!(report.runs, 16);
    assert_eq!(report.mean_waiting_times.len(), 16);
    assert_eq!(report.waiting_time.count, 16);
    assert_eq!(report.queue_waiting_times.len(), 8);
    assert_eq!(report.queue_max_lengths.len(), 8);
    assert!(report.queue_max_lengths.iter().all(|s| s.count == 16));
}

#[test]
fn test_batch_is_reproducible() {
    let a = run_batch(&batch("random", 32, 77)).unwrap();
    let b = run_batch(&batch("random", 32, 77)).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_batch_summary_matches_per_run_values() {
    let report = run_batch(&batch("round-robin", 10, 5)).unwrap();
    let expected = SummaryStats::from_samples(&report.mean_waiting_times).unwrap();

    assert_eq!(report.waiting_time, expected);
    assert!(report.waiting_time.min <= report.waiting_time.median);
    assert!(report.waiting_time.median <= report.waiting_time.max);
}

#[test]
fn test_shortest_queue_beats_random_on_average() {
    // Moderate load over 8 counters: greedy balancing should wait less
    let random = run_batch(&batch(QueuePolicy::Random.as_str(), 200, 11)).unwrap();
    let shortest = run_batch(&batch(QueuePolicy::ShortestQueue.as_str(), 200, 11)).unwrap();

    assert!(
        shortest.waiting_time.mean < random.waiting_time.mean,
        "shortest-queue {} vs random {}",
        shortest.waiting_time.mean,
        random.waiting_time.mean
    );
}

#[test]
fn test_batch_rejects_invalid_config() {
    let mut config = batch("random", 4, 0);
    config.simulator.service_rate = 0.0;

    assert!(matches!(
        run_batch(&config),
        Err(SimulationError::InvalidParameter(_))
    ));
}

#[test]
fn test_summary_empty_is_none() {
    assert!(SummaryStats::from_samples(&[]).is_none());
}

#[test]
fn test_report_serializes_to_json() {
    let report = run_batch(&batch("random", 3, 9)).unwrap();
    let json = serde_json::to_string(&report).unwrap();

    assert!(json.contains("\"queue_waiting_times\""));
}
