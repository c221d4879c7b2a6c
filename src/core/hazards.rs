//! Data hazard detection and operand forwarding.
//!
//! This module implements the logic for maintaining pipeline consistency
//! when data dependences exist between in-flight instructions. It provides:
//! 1. **Hazard Detection:** Identifies load-use hazards that require a
//!    one-cycle pipeline stall.
//! 2. **Operand Forwarding:** Resolves Read-After-Write hazards by bypassing
//!    the register file from three producer latches.
//!
//! Both checks are deliberately shallow: the stall window is one instruction
//! deep, and forwarding searches exactly three producer latches. Together
//! they cover every dependence this pipeline can create; neither is a
//! general solution for deeper hazard chains.

use crate::core::latches::{ExMem, IdEx, IfId, MemWb, WbRetire};
use crate::isa::{self, Opcode};

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction just decoded consumes a
/// register that the load currently in Execute has not yet fetched from
/// memory. A consumer that is itself a load only depends through its address
/// register (regA); its regB field names its destination, not a source.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch holding the instruction entering Execute.
/// * `if_id` - The IF/ID latch holding the instruction just decoded.
///
/// # Returns
///
/// `true` if a bubble must be inserted to resolve the hazard.
pub fn need_stall_load_use(id_ex: &IdEx, if_id: &IfId) -> bool {
    if id_ex.op != Some(Opcode::Lw) {
        return false;
    }

    let a = isa::reg_a(if_id.inst) as i32;
    let b = isa::reg_b(if_id.inst) as i32;

    match Opcode::of(if_id.inst) {
        Some(Opcode::Add | Opcode::Nor | Opcode::Beq | Opcode::Sw) => {
            id_ex.dest == a || id_ex.dest == b
        }
        Some(Opcode::Lw) => id_ex.dest == a,
        _ => false,
    }
}

/// Resolves the Execute-stage source operands through forwarding.
///
/// Searches producer latches nearest-first: the EX/MEM ALU result, then the
/// MEM/WB write-back value, then the retired WB value, falling back to the
/// register value read at decode time. Only ADD, NOR and LW produce a
/// forwardable register value; every other producer carries the destination
/// sentinel and never matches.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch whose operands are being resolved.
/// * `ex_mem` - The EX/MEM latch (one-cycle-old result).
/// * `mem_wb` - The MEM/WB latch (two-cycle-old result).
/// * `wb_retire` - The WB/Retire latch (three-cycle-old result).
///
/// # Returns
///
/// The resolved `(regA, regB)` operand values.
pub fn forward_operands(
    id_ex: &IdEx,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
    wb_retire: &WbRetire,
) -> (i32, i32) {
    let forward = |src: i32, decoded: i32| -> i32 {
        if ex_mem.dest == src && matches!(ex_mem.op, Some(op) if op.writes_register()) {
            return ex_mem.alu;
        }
        if mem_wb.dest == src && matches!(mem_wb.op, Some(op) if op.writes_register()) {
            return mem_wb.write_data;
        }
        if wb_retire.dest == src
            && matches!(Opcode::of(wb_retire.inst), Some(op) if op.writes_register())
        {
            return wb_retire.write_data;
        }
        decoded
    };

    let a = forward(isa::reg_a(id_ex.inst) as i32, id_ex.read_a);
    let b = forward(isa::reg_b(id_ex.inst) as i32, id_ex.read_b);
    (a, b)
}
