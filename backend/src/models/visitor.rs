//! Visitor model
//!
//! One immutable record per simulated visitor, emitted in arrival order.
//! Times are absolute simulated clock values.

use serde::{Deserialize, Serialize};

/// Outcome of a single visitor's pass through the facility
///
/// # Invariants
///
/// - `start_time >= arrival_time`
/// - `total_time >= process_time >= 0`
/// - `end_time == arrival_time + total_time`
///
/// # Example
/// ```
/// use queue_simulator_core_rs::Visitor;
///
/// let visitor = Visitor {
///     visitor_id: 0,
///     arrival_time: 1.0,
///     process_time: 0.5,
///     start_time: 1.25,
///     end_time: 1.75,
///     total_time: 0.75,
///     queue_id: 2,
/// };
/// assert_eq!(visitor.waiting_time(), 0.25);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    /// 0-based arrival index
    pub visitor_id: usize,

    /// Clock time the visitor arrived
    pub arrival_time: f64,

    /// Drawn service duration
    pub process_time: f64,

    /// Clock time service began
    pub start_time: f64,

    /// Clock time service completed
    pub end_time: f64,

    /// Time in system: waiting time plus process time
    pub total_time: f64,

    /// Queue the visitor was routed to
    pub queue_id: usize,
}

impl Visitor {
    /// Time spent waiting before service began
    pub fn waiting_time(&self) -> f64 {
        self.total_time - self.process_time
    }
}
