//! PyO3 wrapper for QueueSimulator
//!
//! # Example (from Python)
//!
//! ```python
//! from queue_simulator_core_rs import QueueSimulator
//!
//! sim = QueueSimulator(10.0, 1.0, 20, 8, "shortest-queue", seed=12345)
//! visitors, max_queue_lengths, average_waiting_times = sim.simulate()
//! print(visitors[0]["start_time"], max_queue_lengths)
//! ```

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{simulation_error_to_py, visitor_to_py};
use crate::orchestrator::{QueueSimulator, SimulatorConfig};

/// Python wrapper for the Rust simulator
#[pyclass(name = "QueueSimulator")]
pub struct PyQueueSimulator {
    inner: QueueSimulator,
}

#[pymethods]
impl PyQueueSimulator {
    /// Create a simulator
    ///
    /// # Errors
    ///
    /// Raises ValueError for an unknown policy name or a non-positive
    /// rate or count.
    #[new]
    #[pyo3(signature = (arrival_rate, service_rate, num_visitors, num_queues, queue_policy = "random", seed = 0))]
    fn new(
        arrival_rate: f64,
        service_rate: f64,
        num_visitors: usize,
        num_queues: usize,
        queue_policy: &str,
        seed: u64,
    ) -> PyResult<Self> {
        let config = SimulatorConfig::new(
            arrival_rate,
            service_rate,
            num_visitors,
            num_queues,
            queue_policy,
        )
        .map_err(simulation_error_to_py)?
        .with_seed(seed);

        let inner = QueueSimulator::new(config).map_err(simulation_error_to_py)?;
        Ok(Self { inner })
    }

    /// Run one simulation
    ///
    /// Returns `(visitors, max_queue_lengths, average_waiting_times)` where
    /// each visitor is a dict with keys `visitor_id`, `arrival_time`,
    /// `process_time`, `start_time`, `end_time`, `total_time`, `queue_id`.
    fn simulate(&mut self, py: Python<'_>) -> PyResult<(Vec<Py<PyDict>>, Vec<usize>, Vec<f64>)> {
        let result = self.inner.simulate().map_err(simulation_error_to_py)?;

        let visitors = result
            .visitors
            .iter()
            .map(|visitor| visitor_to_py(py, visitor))
            .collect::<PyResult<Vec<_>>>()?;

        Ok((
            visitors,
            result.max_queue_lengths,
            result.average_waiting_times,
        ))
    }

    /// Restart round-robin assignment at queue 0
    fn reset_round_robin(&mut self) {
        self.inner.reset_round_robin();
    }

    #[getter]
    fn num_queues(&self) -> usize {
        self.inner.num_queues()
    }

    #[getter]
    fn queue_policy(&self) -> &'static str {
        self.inner.policy().as_str()
    }
}
