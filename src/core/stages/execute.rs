use crate::core::hazards;
use crate::core::MachineState;
use crate::isa::Opcode;

pub fn execute_stage(cur: &MachineState, next: &mut MachineState) {
    let (a, b) = hazards::forward_operands(&cur.id_ex, &cur.ex_mem, &cur.mem_wb, &cur.wb_retire);

    next.ex_mem.inst = cur.id_ex.inst;
    next.ex_mem.op = Opcode::of(cur.id_ex.inst);
    next.ex_mem.dest = cur.id_ex.dest;
    next.ex_mem.eq = a == b;
    next.ex_mem.read_b = b;
    // Computed for every instruction; only a taken branch consumes it.
    next.ex_mem.branch_target = cur.id_ex.pc_plus1.wrapping_add(cur.id_ex.offset);

    match cur.id_ex.op {
        Some(Opcode::Add) => next.ex_mem.alu = a.wrapping_add(b),
        Some(Opcode::Nor) => next.ex_mem.alu = !(a | b),
        Some(Opcode::Lw | Opcode::Sw) => {
            next.ex_mem.alu = a.wrapping_add(cur.id_ex.offset);
        }
        // Other opcodes define no result; the slot keeps its previous value.
        _ => {}
    }
}
