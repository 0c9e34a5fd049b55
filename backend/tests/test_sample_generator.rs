//! Tests for arrival-gap and process-time sampling

use queue_simulator_core_rs::{
    ArrivalConfig, ArrivalSamples, RngManager, SampleGenerator, SimulationError,
};

fn config(arrival_rate: f64, service_rate: f64, num_visitors: usize) -> ArrivalConfig {
    ArrivalConfig {
        arrival_rate,
        service_rate,
        num_visitors,
    }
}

#[test]
fn test_same_seed_same_samples() {
    let cfg = config(10.0, 1.0, 50);

    let a = SampleGenerator::generate(&cfg, &mut RngManager::new(7)).unwrap();
    let b = SampleGenerator::generate(&cfg, &mut RngManager::new(7)).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_different_samples() {
    let cfg = config(10.0, 1.0, 50);

    let a = SampleGenerator::generate(&cfg, &mut RngManager::new(7)).unwrap();
    let b = SampleGenerator::generate(&cfg, &mut RngManager::new(8)).unwrap();

    assert_ne!(a.arrival_gaps(), b.arrival_gaps());
}

#[test]
fn test_sample_means_track_rates() {
    let cfg = config(10.0, 0.5, 100_000);
    let samples = SampleGenerator::generate(&cfg, &mut RngManager::new(2024)).unwrap();

    let gap_mean = samples.arrival_gaps().iter().sum::<f64>() / samples.len() as f64;
    let process_mean = samples.process_times().iter().sum::<f64>() / samples.len() as f64;

    assert!((gap_mean - 0.1).abs() < 0.005, "gap mean {}", gap_mean);
    assert!((process_mean - 2.0).abs() < 0.05, "process mean {}", process_mean);
}

#[test]
fn test_all_samples_non_negative() {
    let samples = SampleGenerator::generate(&config(3.0, 4.0, 1000), &mut RngManager::new(1)).unwrap();

    assert!(samples.arrival_gaps().iter().all(|g| *g >= 0.0 && g.is_finite()));
    assert!(samples.process_times().iter().all(|p| *p >= 0.0 && p.is_finite()));
}

#[test]
fn test_single_visitor() {
    let samples = SampleGenerator::generate(&config(1.0, 1.0, 1), &mut RngManager::new(3)).unwrap();

    assert_eq!(samples.len(), 1);
    assert_eq!(samples.arrival_times(), samples.arrival_gaps().to_vec());
}

#[test]
fn test_invalid_parameters() {
    let mut rng = RngManager::new(1);

    for cfg in [
        config(0.0, 1.0, 10),
        config(-2.0, 1.0, 10),
        config(1.0, 0.0, 10),
        config(1.0, f64::INFINITY, 10),
        config(1.0, 1.0, 0),
    ] {
        assert!(
            matches!(
                SampleGenerator::generate(&cfg, &mut rng),
                Err(SimulationError::InvalidParameter(_))
            ),
            "{:?} should be rejected",
            cfg
        );
    }
}

#[test]
fn test_explicit_samples_round_trip_accessors() {
    let samples = ArrivalSamples::new(vec![0.2, 0.3], vec![1.0, 2.0]).unwrap();

    assert_eq!(samples.arrival_gaps(), &[0.2, 0.3]);
    assert_eq!(samples.process_times(), &[1.0, 2.0]);
    assert_eq!(samples.len(), 2);
    assert!(!samples.is_empty());
}
