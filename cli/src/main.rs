//! Command-line front end for the queue simulator
//!
//! Single run: prints the visitor table and per-queue statistics.
//! `--runs N`: runs a parallel batch and prints summary statistics.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use queue_simulator_core_rs::{
    run_batch, BatchConfig, BatchReport, QueueSimulator, SimulationResult, SimulatorConfig,
    SummaryStats,
};

#[derive(Parser, Debug)]
#[command(about = "Compare queue assignment policies by simulated waiting time", long_about = None)]
struct Args {
    /// Simulator configuration JSON file (overrides the parameter flags).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Average arrivals per time unit.
    #[arg(long, default_value = "10")]
    arrival_rate: f64,

    /// Average services per time unit per counter.
    #[arg(long, default_value = "1")]
    service_rate: f64,

    /// Number of visitors per run.
    #[arg(long, default_value = "20")]
    visitors: usize,

    /// Number of queues.
    #[arg(long, default_value = "8")]
    queues: usize,

    /// Queue policy: random, round-robin or shortest-queue.
    #[arg(long, default_value = "shortest-queue")]
    policy: String,

    /// Random seed (defaults to the current Unix time).
    #[arg(long)]
    seed: Option<u64>,

    /// Number of independent runs; more than one prints batch statistics.
    #[arg(long, default_value = "1")]
    runs: usize,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{}", message);
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let config = load_config(args)?;
    info!(
        policy = %config.queue_policy,
        seed = config.rng_seed,
        runs = args.runs,
        "configuration loaded"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.runs > 1 {
        let report = run_batch(&BatchConfig {
            simulator: config,
            runs: args.runs,
        })
        .map_err(|e| e.to_string())?;

        if args.json {
            write_json(&mut out, &report)?;
        } else {
            write_batch_report(&mut out, &report).map_err(|e| e.to_string())?;
        }
    } else {
        let result = QueueSimulator::new(config)
            .and_then(|mut sim| sim.simulate())
            .map_err(|e| e.to_string())?;

        if args.json {
            write_json(&mut out, &result)?;
        } else {
            write_run_report(&mut out, &result).map_err(|e| e.to_string())?;
        }
    }

    out.flush().map_err(|e| e.to_string())
}

fn load_config(args: &Args) -> Result<SimulatorConfig, String> {
    if args.runs == 0 {
        return Err("--runs must be at least 1".to_string());
    }
    let config = match &args.config {
        Some(path) => {
            let file = File::open(path).map_err(|e| format!("cannot open {}: {}", path.display(), e))?;
            let mut config: SimulatorConfig = serde_json::from_reader(BufReader::new(file))
                .map_err(|e| format!("invalid config {}: {}", path.display(), e))?;
            if let Some(seed) = args.seed {
                config.rng_seed = seed;
            }
            config.validate().map_err(|e| e.to_string())?;
            config
        }
        None => SimulatorConfig::new(
            args.arrival_rate,
            args.service_rate,
            args.visitors,
            args.queues,
            &args.policy,
        )
        .map_err(|e| e.to_string())?
        .with_seed(args.seed.unwrap_or_else(unix_time_seed)),
    };
    Ok(config)
}

fn unix_time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> Result<(), String> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(|e| e.to_string())?;
    writeln!(out).map_err(|e| e.to_string())
}

fn write_run_report<W: Write>(out: &mut W, result: &SimulationResult) -> io::Result<()> {
    writeln!(out, "Visitors:")?;
    writeln!(
        out,
        "Visitor ID;Arrival Time;Start Time;End Time;Process Time;Total Time;Queue ID"
    )?;
    for v in &result.visitors {
        writeln!(
            out,
            "{};{};{};{};{};{};{}",
            v.visitor_id, v.arrival_time, v.start_time, v.end_time, v.process_time, v.total_time, v.queue_id
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Queue Stats:")?;
    for (queue_id, max_length) in result.max_queue_lengths.iter().enumerate() {
        writeln!(
            out,
            "Queue ID: {}, Max Queue Length: {}, Average Waiting Time: {}",
            queue_id, max_length, result.average_waiting_times[queue_id]
        )?;
    }
    Ok(())
}

fn write_batch_report<W: Write>(out: &mut W, report: &BatchReport) -> io::Result<()> {
    writeln!(out, "Runs: {}", report.runs)?;
    write_summary(out, "Mean Waiting Time", &report.waiting_time)?;

    writeln!(out)?;
    writeln!(out, "Queue Stats:")?;
    for (queue_id, (waits, lengths)) in report
        .queue_waiting_times
        .iter()
        .zip(&report.queue_max_lengths)
        .enumerate()
    {
        writeln!(out, "Queue ID: {}", queue_id)?;
        write_summary(out, "  Average Waiting Time", waits)?;
        write_summary(out, "  Max Queue Length", lengths)?;
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, label: &str, stats: &SummaryStats) -> io::Result<()> {
    writeln!(
        out,
        "{}: mean {:.4}, median {:.4}, variance {:.4}, std dev {:.4}, min {:.4}, max {:.4}",
        label, stats.mean, stats.median, stats.variance, stats.std_dev, stats.min, stats.max
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use queue_simulator_core_rs::{ArrivalSamples, QueueSimulator};

    #[test]
    fn test_run_report_layout() {
        let config = SimulatorConfig::new(1.0, 1.0, 2, 2, "round-robin").unwrap();
        let samples = ArrivalSamples::new(vec![0.5, 0.25], vec![1.0, 2.0]).unwrap();
        let result = QueueSimulator::new(config)
            .unwrap()
            .simulate_with_samples(&samples)
            .unwrap();

        let mut buf = Vec::new();
        write_run_report(&mut buf, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let expected = "Visitors:\n\
            Visitor ID;Arrival Time;Start Time;End Time;Process Time;Total Time;Queue ID\n\
            0;0.5;0.5;1.5;1;1;0\n\
            1;0.75;0.75;2.75;2;2;1\n\
            \n\
            Queue Stats:\n\
            Queue ID: 0, Max Queue Length: 1, Average Waiting Time: 0\n\
            Queue ID: 1, Max Queue Length: 1, Average Waiting Time: 0\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_args_build_config() {
        let args = Args::parse_from(["queue-sim", "--policy", "round-robin", "--queues", "3", "--seed", "9"]);
        let config = load_config(&args).unwrap();

        assert_eq!(config.num_queues, 3);
        assert_eq!(config.rng_seed, 9);
        assert_eq!(config.queue_policy.as_str(), "round-robin");
    }

    #[test]
    fn test_unknown_policy_is_an_error() {
        let args = Args::parse_from(["queue-sim", "--policy", "fastest"]);
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn test_zero_runs_is_rejected() {
        let args = Args::parse_from(["queue-sim", "--runs", "0", "--seed", "1"]);
        assert_eq!(load_config(&args).unwrap_err(), "--runs must be at least 1");
        assert!(run(&args).is_err());
    }
}
