//! Domain models for the queue simulator

pub mod queue;
pub mod visitor;

// Re-exports
pub use queue::{QueueEntry, QueueState};
pub use visitor::Visitor;
