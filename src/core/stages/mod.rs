//! Pipeline stage implementations.
//!
//! One module per stage. Every stage function reads exclusively from the
//! current state and writes its latch into the next state; the decode-stage
//! stall and the memory-stage branch flush override what earlier stages
//! wrote for the same cycle.

/// Decode stage: register read, immediate extension, load-use stall.
pub mod decode;

/// Execute stage: operand forwarding, ALU, branch target and equality.
pub mod execute;

/// Fetch stage: instruction memory read and pc advance.
pub mod fetch;

/// Memory stage: data memory access and branch resolution.
pub mod memory_access;

/// Writeback stage: register file update and retirement.
pub mod write_back;
