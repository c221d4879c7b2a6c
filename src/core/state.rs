//! Architectural state and the per-cycle transition function.

use crate::common::constants::NUM_REGS;
use crate::common::error::Fault;
use crate::core::latches::{ExMem, IdEx, IfId, MemWb, WbRetire};
use crate::core::stages;
use crate::isa::Opcode;
use crate::stats::SimStats;

/// Complete architectural state of the machine at a cycle boundary.
///
/// A state value is never mutated mid-cycle: each cycle derives a wholly new
/// state from the previous one, and no stage observes another stage's output
/// from the same cycle. The register file is written only by Writeback and
/// data memory only by the Memory stage, each at most once per cycle.
#[derive(Clone, Debug)]
pub struct MachineState {
    /// Program counter: a word index into instruction memory.
    pub pc: i32,
    /// Instruction memory; read-only after load.
    pub instr_mem: Vec<i32>,
    /// Data memory.
    pub data_mem: Vec<i32>,
    /// The general-purpose registers. Register 0 is an ordinary register.
    pub regs: [i32; NUM_REGS],
    /// Fetch to Decode latch.
    pub if_id: IfId,
    /// Decode to Execute latch.
    pub id_ex: IdEx,
    /// Execute to Memory latch.
    pub ex_mem: ExMem,
    /// Memory to Writeback latch.
    pub mem_wb: MemWb,
    /// Writeback to Retire latch.
    pub wb_retire: WbRetire,
    /// Cycles executed so far.
    pub cycles: u64,
    /// Words occupied by the loaded image, for reporting.
    pub image_words: usize,
}

impl MachineState {
    /// Builds the cycle-zero state from a machine-code image.
    ///
    /// Both memories are provisioned to `mem_words` (grown if the image is
    /// larger) and zero-filled past the image. The image is mirrored into
    /// data memory at the same word indices, so a program can read its own
    /// trailing data words.
    pub fn new(image: &[i32], mem_words: usize) -> Self {
        let mut instr_mem = vec![0; mem_words.max(image.len())];
        instr_mem[..image.len()].copy_from_slice(image);
        let data_mem = instr_mem.clone();

        Self {
            pc: 0,
            instr_mem,
            data_mem,
            regs: [0; NUM_REGS],
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            wb_retire: WbRetire::default(),
            cycles: 0,
            image_words: image.len(),
        }
    }

    /// True once the instruction in the Memory/Writeback latch is HALT.
    ///
    /// Evaluated at the start of a cycle, so by the time the run loop
    /// observes it one further state (propagating whatever followed the
    /// halt) has already been computed; that state is the reported result.
    pub fn halted(&self) -> bool {
        Opcode::of(self.mem_wb.inst) == Some(Opcode::Halt)
    }
}

/// Computes the next architectural state from `cur`.
///
/// The next state starts as a clone of the current one and every stage reads
/// exclusively from `cur`, so the five stage computations are order-free
/// except for the overrides: the decode-stage stall rewinds the fetch, and
/// the memory-stage branch flush resets the three younger latches. The
/// stages therefore run front to back: fetch, decode, execute, memory,
/// writeback.
pub fn step(cur: &MachineState, stats: &mut SimStats) -> Result<MachineState, Fault> {
    let mut next = cur.clone();
    next.cycles += 1;

    stages::fetch::fetch_stage(cur, &mut next)?;
    stages::decode::decode_stage(cur, &mut next, stats);
    stages::execute::execute_stage(cur, &mut next);
    stages::memory_access::mem_stage(cur, &mut next, stats)?;
    stages::write_back::wb_stage(cur, &mut next, stats);

    Ok(next)
}
