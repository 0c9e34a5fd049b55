//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, reproducible draws.
//! Every random decision in a run (arrival gaps, service times, random
//! and tie-breaking queue choices) is taken from an explicitly passed
//! `RngManager`, never from process-wide state.

mod xorshift;

pub use xorshift::RngManager;
