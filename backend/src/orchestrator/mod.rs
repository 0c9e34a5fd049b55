//! Orchestrator - single-run simulation engine
//!
//! See `engine.rs` for the full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{QueueSimulator, SimulationError, SimulationResult, SimulatorConfig};
