//! Machine core: pipeline latches, hazard resolution, and stage logic.
//!
//! The core is a pure state-transition function: [`step`] maps a
//! [`MachineState`] to the next cycle's state, resolving data hazards by
//! stalling and forwarding and control hazards by late branch resolution
//! and flush.

/// Load-use stall detection and operand forwarding.
pub mod hazards;

/// Inter-stage pipeline latch structures.
pub mod latches;

/// The five pipeline stage implementations.
pub mod stages;

/// Architectural state and the cycle transition function.
pub mod state;

pub use state::{step, MachineState};
