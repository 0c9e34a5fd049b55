//! Python bindings (feature `pyo3`)
//!
//! Exposes the engine to Python code that aggregates and plots runs.

pub mod simulator;
pub mod types;
