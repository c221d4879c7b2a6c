use crate::core::MachineState;
use crate::isa::Opcode;
use crate::stats::SimStats;

pub fn wb_stage(cur: &MachineState, next: &mut MachineState, stats: &mut SimStats) {
    let mw = &cur.mem_wb;

    next.wb_retire.inst = mw.inst;
    next.wb_retire.dest = mw.dest;
    next.wb_retire.write_data = mw.write_data;

    if matches!(mw.op, Some(op) if op.writes_register()) {
        next.regs[mw.dest as usize] = mw.write_data;
    }

    match mw.op {
        Some(Opcode::Add | Opcode::Nor) => {
            stats.instructions_retired += 1;
            stats.inst_alu += 1;
        }
        Some(Opcode::Lw) => {
            stats.instructions_retired += 1;
            stats.inst_load += 1;
        }
        Some(Opcode::Sw) => {
            stats.instructions_retired += 1;
            stats.inst_store += 1;
        }
        Some(Opcode::Beq) => {
            stats.instructions_retired += 1;
            stats.inst_branch += 1;
        }
        // No-ops, bubbles, halt and data words do not retire.
        _ => {}
    }
}
