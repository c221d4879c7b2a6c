//! State tracing: renders full per-cycle snapshots of the machine.
//!
//! Pure formatting over the state vector; the core computes, this renders.
//! Instruction words are disassembled next to their raw encodings, and
//! non-opcode words render as `.fill` data.

use crate::core::MachineState;
use crate::isa;
use serde_json::{json, Value};

/// Prints one full architectural snapshot.
pub fn print_state(state: &MachineState) {
    println!("@@@");
    println!("state before cycle {} starts:", state.cycles);
    println!("\tpc = {}", state.pc);

    println!("\tregisters:");
    for (i, r) in state.regs.iter().enumerate() {
        println!("\t\treg[{}] = {}", i, r);
    }

    println!("\tdata memory:");
    for (i, w) in state.data_mem[..state.image_words].iter().enumerate() {
        println!("\t\tmem[{}] = {}", i, w);
    }

    println!(
        "\tIF/ID:  inst = {} ( {} ), pc+1 = {}",
        state.if_id.inst,
        isa::disasm(state.if_id.inst),
        state.if_id.pc_plus1
    );
    println!(
        "\tID/EX:  inst = {} ( {} ), pc+1 = {}, regA = {}, regB = {}, offset = {}, dest = {}",
        state.id_ex.inst,
        isa::disasm(state.id_ex.inst),
        state.id_ex.pc_plus1,
        state.id_ex.read_a,
        state.id_ex.read_b,
        state.id_ex.offset,
        state.id_ex.dest
    );
    println!(
        "\tEX/MEM: inst = {} ( {} ), target = {}, eq = {}, alu = {}, regB = {}, dest = {}",
        state.ex_mem.inst,
        isa::disasm(state.ex_mem.inst),
        state.ex_mem.branch_target,
        state.ex_mem.eq,
        state.ex_mem.alu,
        state.ex_mem.read_b,
        state.ex_mem.dest
    );
    println!(
        "\tMEM/WB: inst = {} ( {} ), write = {}, dest = {}",
        state.mem_wb.inst,
        isa::disasm(state.mem_wb.inst),
        state.mem_wb.write_data,
        state.mem_wb.dest
    );
    println!(
        "\tWB/RET: inst = {} ( {} ), write = {}, dest = {}",
        state.wb_retire.inst,
        isa::disasm(state.wb_retire.inst),
        state.wb_retire.write_data,
        state.wb_retire.dest
    );
    println!("end state");
}

/// Prints the final report after the machine halts.
pub fn print_final(state: &MachineState) {
    println!("machine halted");
    println!("total of {} cycles executed", state.cycles);
    println!("final state of machine:");
    print_state(state);
}

/// Machine-readable summary of the final state, for host tooling.
pub fn json_summary(state: &MachineState) -> Value {
    json!({
        "cycles": state.cycles,
        "pc": state.pc,
        "registers": state.regs,
        "data_memory": &state.data_mem[..state.image_words],
    })
}
