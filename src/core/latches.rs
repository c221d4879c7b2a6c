//! Pipeline latch structures for inter-stage communication.
//!
//! One struct per inter-stage boundary. Every latch is written exactly once
//! per cycle and read by the following stage and by the hazard/forwarding
//! logic of later stages. A latch slot that carries no in-flight instruction
//! holds the no-op encoding, so downstream opcode dispatch never reads
//! garbage, and the destination sentinel, so producer comparisons never
//! false-match.

use crate::common::constants::DEST_NONE;
use crate::isa::{Opcode, NOOP_WORD};

/// IF/ID latch (Fetch to Decode).
#[derive(Clone, Debug)]
pub struct IfId {
    /// Fetched instruction word.
    pub inst: i32,
    /// Address of the next sequential instruction.
    pub pc_plus1: i32,
}

impl Default for IfId {
    fn default() -> Self {
        Self {
            inst: NOOP_WORD,
            pc_plus1: 0,
        }
    }
}

/// ID/EX latch (Decode to Execute).
///
/// Carries the decoded instruction together with the register values read at
/// decode time; the Execute stage may replace those values through
/// forwarding before use.
#[derive(Clone, Debug)]
pub struct IdEx {
    /// Instruction word.
    pub inst: i32,
    /// Address of the next sequential instruction.
    pub pc_plus1: i32,
    /// Value of regA read from the register file at decode time.
    pub read_a: i32,
    /// Value of regB read from the register file at decode time.
    pub read_b: i32,
    /// Sign-extended immediate.
    pub offset: i32,
    /// Latched opcode (`None` for non-executable data).
    pub op: Option<Opcode>,
    /// Destination register index, or the sentinel for non-writers.
    pub dest: i32,
}

impl Default for IdEx {
    fn default() -> Self {
        Self {
            inst: NOOP_WORD,
            pc_plus1: 0,
            read_a: 0,
            read_b: 0,
            offset: 0,
            op: Some(Opcode::Noop),
            dest: DEST_NONE,
        }
    }
}

/// EX/MEM latch (Execute to Memory).
#[derive(Clone, Debug)]
pub struct ExMem {
    /// Instruction word.
    pub inst: i32,
    /// Branch target (pc + 1 + offset), computed for every instruction and
    /// consumed only by a taken branch.
    pub branch_target: i32,
    /// Operand equality, for branch resolution.
    pub eq: bool,
    /// ALU result, or the effective address for a load/store.
    pub alu: i32,
    /// Forwarded regB value, carried for the store data path.
    pub read_b: i32,
    /// Latched opcode (`None` for non-executable data).
    pub op: Option<Opcode>,
    /// Destination register index, or the sentinel for non-writers.
    pub dest: i32,
}

impl Default for ExMem {
    fn default() -> Self {
        Self {
            inst: NOOP_WORD,
            branch_target: 0,
            eq: false,
            alu: 0,
            read_b: 0,
            op: Some(Opcode::Noop),
            dest: DEST_NONE,
        }
    }
}

/// MEM/WB latch (Memory to Writeback).
#[derive(Clone, Debug)]
pub struct MemWb {
    /// Instruction word.
    pub inst: i32,
    /// Value to be written back (loaded word, or the ALU result).
    pub write_data: i32,
    /// Latched opcode (`None` for non-executable data).
    pub op: Option<Opcode>,
    /// Destination register index, or the sentinel for non-writers.
    pub dest: i32,
}

impl Default for MemWb {
    fn default() -> Self {
        Self {
            inst: NOOP_WORD,
            write_data: 0,
            op: Some(Opcode::Noop),
            dest: DEST_NONE,
        }
    }
}

/// WB/Retire latch (Writeback to retirement).
///
/// Produced unconditionally so the forwarding network keeps one extra cycle
/// of visibility into values that have just been written to the register
/// file.
#[derive(Clone, Debug)]
pub struct WbRetire {
    /// Instruction word.
    pub inst: i32,
    /// Value that was written back.
    pub write_data: i32,
    /// Destination register index, or the sentinel for non-writers.
    pub dest: i32,
}

impl Default for WbRetire {
    fn default() -> Self {
        Self {
            inst: NOOP_WORD,
            write_data: 0,
            dest: DEST_NONE,
        }
    }
}
