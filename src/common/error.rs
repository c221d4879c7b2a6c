//! Fault definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Fault Representation:** The hard faults a cycle transition can raise.
//! 2. **Image Errors:** Failures while parsing a machine-code image.
//! 3. **Error Handling:** Integration with the standard Rust error traits.

use std::fmt;

/// Hard faults raised while computing a cycle transition.
///
/// A fault terminates the run: the cycle in which it is raised produces no
/// next state, and there is no recovery or retry path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// Instruction fetch outside the provisioned instruction memory.
    ///
    /// The associated value is the faulting program counter, which may be
    /// negative after a wild branch.
    InstructionFetchOutOfRange(i32),

    /// Load from an address outside the provisioned data memory.
    ///
    /// The associated value is the effective address.
    LoadOutOfRange(i32),

    /// Store to an address outside the provisioned data memory.
    ///
    /// The associated value is the effective address.
    StoreOutOfRange(i32),

    /// The configured cycle cap was reached before the program halted.
    ///
    /// Only raised when a cap is configured; an unbounded run of a program
    /// that never halts is otherwise accepted.
    CycleLimitExceeded(u64),
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::InstructionFetchOutOfRange(pc) => {
                write!(f, "InstructionFetchOutOfRange(pc={})", pc)
            }
            Fault::LoadOutOfRange(addr) => write!(f, "LoadOutOfRange(addr={})", addr),
            Fault::StoreOutOfRange(addr) => write!(f, "StoreOutOfRange(addr={})", addr),
            Fault::CycleLimitExceeded(limit) => write!(f, "CycleLimitExceeded(limit={})", limit),
        }
    }
}

impl std::error::Error for Fault {}

/// Errors produced while parsing a machine-code image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// A line of the image file was not a decimal-encoded 32-bit word.
    ///
    /// The associated value is the 1-based line number.
    BadWord(usize),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::BadWord(line) => {
                write!(f, "line {} is not a decimal-encoded word", line)
            }
        }
    }
}

impl std::error::Error for ImageError {}
