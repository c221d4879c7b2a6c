//! Simulation harness: image loading, the run loop, and state tracing.

/// Machine-code image parsing and loading.
pub mod loader;

/// The run loop and halt/cap handling.
pub mod simulator;

/// Per-cycle state dumps and the final-state summary.
pub mod trace;

pub use simulator::Simulator;
