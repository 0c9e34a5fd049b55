//! Type conversion utilities for the FFI boundary

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::models::Visitor;
use crate::orchestrator::{SimulationError, SimulatorConfig};
use crate::stats::{run_batch, BatchConfig};

/// Convert a Visitor to a Python dict
pub fn visitor_to_py(py: Python<'_>, visitor: &Visitor) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("visitor_id", visitor.visitor_id)?;
    dict.set_item("arrival_time", visitor.arrival_time)?;
    dict.set_item("process_time", visitor.process_time)?;
    dict.set_item("start_time", visitor.start_time)?;
    dict.set_item("end_time", visitor.end_time)?;
    dict.set_item("total_time", visitor.total_time)?;
    dict.set_item("queue_id", visitor.queue_id)?;

    Ok(dict.unbind())
}

/// Map engine errors onto ValueError
pub fn simulation_error_to_py(err: SimulationError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Run a parallel batch described by a `SimulatorConfig` JSON object
///
/// Returns the `BatchReport` as a JSON string.
#[pyfunction]
#[pyo3(name = "run_batch")]
pub fn py_run_batch(py: Python<'_>, config_json: &str, runs: usize) -> PyResult<String> {
    let simulator: SimulatorConfig = serde_json::from_str(config_json).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("JSON parsing failed: {}", e))
    })?;

    let config = BatchConfig { simulator, runs };
    let report = py
        .allow_threads(|| run_batch(&config))
        .map_err(simulation_error_to_py)?;

    serde_json::to_string(&report).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!("Report serialization failed: {}", e))
    })
}
