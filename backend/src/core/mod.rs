//! Simulation clock

pub mod clock;
