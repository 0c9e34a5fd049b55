//! Simulated clock for one run
//!
//! Time is continuous (`f64`). The clock starts at the first visitor's
//! arrival rather than at zero and only moves forward.

use serde::{Deserialize, Serialize};

/// Continuous simulation clock
///
/// # Example
/// ```
/// use queue_simulator_core_rs::SimulationClock;
///
/// let mut clock = SimulationClock::new();
/// clock.start(0.5);
/// clock.advance(0.25);
/// assert_eq!(clock.current_time(), 0.75);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationClock {
    current_time: f64,
    started: bool,
}

impl SimulationClock {
    /// Create a clock at time zero that has not been started
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clock to the first arrival time
    ///
    /// # Example
    /// ```
    /// use queue_simulator_core_rs::SimulationClock;
    ///
    /// let mut clock = SimulationClock::new();
    /// assert!(!clock.started());
    /// clock.start(2.0);
    /// assert!(clock.started());
    /// assert_eq!(clock.current_time(), 2.0);
    /// ```
    pub fn start(&mut self, at: f64) {
        assert!(at >= 0.0, "clock cannot start before zero");
        self.current_time = at;
        self.started = true;
    }

    /// Move the clock forward by an inter-arrival gap
    pub fn advance(&mut self, gap: f64) {
        assert!(self.started, "clock must be started before advancing");
        assert!(gap >= 0.0, "clock cannot move backwards");
        self.current_time += gap;
    }

    /// Current simulated time
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Whether `start` has been called
    pub fn started(&self) -> bool {
        self.started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "clock must be started before advancing")]
    fn test_advance_before_start_panics() {
        let mut clock = SimulationClock::new();
        clock.advance(1.0);
    }

    #[test]
    #[should_panic(expected = "clock cannot move backwards")]
    fn test_negative_gap_panics() {
        let mut clock = SimulationClock::new();
        clock.start(1.0);
        clock.advance(-0.5);
    }

    #[test]
    fn test_advance_accumulates() {
        let mut clock = SimulationClock::new();
        clock.start(1.0);
        clock.advance(0.5);
        clock.advance(1.5);
        assert_eq!(clock.current_time(), 3.0);
    }
}
