use crate::common::error::Fault;
use crate::core::MachineState;

pub fn fetch_stage(cur: &MachineState, next: &mut MachineState) -> Result<(), Fault> {
    let inst = usize::try_from(cur.pc)
        .ok()
        .and_then(|pc| cur.instr_mem.get(pc))
        .ok_or(Fault::InstructionFetchOutOfRange(cur.pc))?;

    next.if_id.inst = *inst;
    next.if_id.pc_plus1 = cur.pc + 1;
    next.pc = cur.pc + 1;
    Ok(())
}
