use crate::common::error::Fault;
use crate::core::latches::{ExMem, IdEx, IfId};
use crate::core::MachineState;
use crate::isa::Opcode;
use crate::stats::SimStats;

pub fn mem_stage(
    cur: &MachineState,
    next: &mut MachineState,
    stats: &mut SimStats,
) -> Result<(), Fault> {
    let em = &cur.ex_mem;

    next.mem_wb.inst = em.inst;
    next.mem_wb.op = Opcode::of(em.inst);
    next.mem_wb.dest = em.dest;
    next.mem_wb.write_data = em.alu;

    match Opcode::of(em.inst) {
        Some(Opcode::Lw) => {
            let word = usize::try_from(em.alu)
                .ok()
                .and_then(|addr| cur.data_mem.get(addr))
                .ok_or(Fault::LoadOutOfRange(em.alu))?;
            next.mem_wb.write_data = *word;
        }
        Some(Opcode::Sw) => {
            let addr = usize::try_from(em.alu)
                .ok()
                .filter(|&addr| addr < next.data_mem.len())
                .ok_or(Fault::StoreOutOfRange(em.alu))?;
            next.data_mem[addr] = em.read_b;
        }
        Some(Opcode::Beq) if em.eq => {
            // Branch resolved taken: squash the three younger in-flight
            // instructions and redirect fetch to the target.
            next.if_id = IfId::default();
            next.id_ex = IdEx::default();
            next.ex_mem = ExMem::default();
            next.pc = em.branch_target;
            stats.branches_taken += 1;
            stats.stalls_control += 3;
        }
        Some(Opcode::Beq) => {
            stats.branches_untaken += 1;
        }
        _ => {}
    }
    Ok(())
}
