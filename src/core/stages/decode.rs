use crate::common::constants::{DEST_NONE, REG_MASK};
use crate::core::hazards;
use crate::core::latches::IdEx;
use crate::core::MachineState;
use crate::isa::{self, Opcode};
use crate::stats::SimStats;

pub fn decode_stage(cur: &MachineState, next: &mut MachineState, stats: &mut SimStats) {
    let inst = cur.if_id.inst;
    let d = isa::decode(inst);

    next.id_ex.inst = inst;
    next.id_ex.pc_plus1 = cur.if_id.pc_plus1;
    next.id_ex.read_a = cur.regs[d.a];
    next.id_ex.read_b = cur.regs[d.b];
    next.id_ex.offset = d.offset;
    next.id_ex.op = d.op;

    // Load-use hazard: hold the decoded instruction back for re-decode,
    // issue a bubble instead, and rewind the fetch done earlier this cycle.
    if hazards::need_stall_load_use(&cur.id_ex, &cur.if_id) {
        next.if_id.inst = inst;
        next.if_id.pc_plus1 -= 1;
        next.id_ex = IdEx::default();
        next.pc -= 1;
        stats.stalls_data += 1;
        return;
    }

    next.id_ex.dest = match d.op {
        Some(Opcode::Add | Opcode::Nor) => d.imm & REG_MASK,
        Some(Opcode::Lw) => d.b as i32,
        _ => DEST_NONE,
    };
}
