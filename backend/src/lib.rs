//! Queue Simulator Core - Rust Engine
//!
//! Discrete-event simulation of a facility with several single-server FIFO
//! queues (checkout counters, ticket windows), used to compare queue
//! assignment policies by waiting time.
//!
//! # Architecture
//!
//! - **rng**: Deterministic random number generation
//! - **arrivals**: Poisson arrivals and exponential service times
//! - **models**: Domain types (Visitor, QueueState)
//! - **core**: Simulation clock
//! - **policy**: Queue selection policies (random, round-robin, shortest-queue)
//! - **orchestrator**: Single-run simulation engine
//! - **stats**: Cross-run aggregation (parallel batches)
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG passed explicitly)
//! 2. Per-queue completion times never decrease in insertion order
//! 3. FFI boundary is minimal and safe

// Module declarations
pub mod arrivals;
pub mod core;
pub mod models;
pub mod orchestrator;
pub mod policy;
pub mod rng;
pub mod stats;

// Re-exports for convenience
pub use arrivals::{ArrivalConfig, ArrivalSamples, SampleGenerator};
pub use crate::core::clock::SimulationClock;
pub use models::{
    queue::{QueueEntry, QueueState},
    visitor::Visitor,
};
pub use orchestrator::{QueueSimulator, SimulationError, SimulationResult, SimulatorConfig};
pub use policy::{create_selector, QueuePolicy, QueueSelector};
pub use rng::RngManager;
pub use stats::{run_batch, BatchConfig, BatchReport, SummaryStats};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn queue_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::simulator::PyQueueSimulator>()?;
    m.add_function(wrap_pyfunction!(ffi::types::py_run_batch, m)?)?;
    Ok(())
}
