//! Tests for the three-tier operand forwarding network.

use pipesim::common::constants::DEST_NONE;
use pipesim::core::hazards::forward_operands;
use pipesim::core::latches::{ExMem, IdEx, MemWb, WbRetire};
use pipesim::isa::Opcode;

/// Encodes an instruction word from its opcode and fields.
fn enc(op: Opcode, a: i32, b: i32, c: i32) -> i32 {
    ((op as i32) << 22) | (a << 19) | (b << 16) | (c & 0xFFFF)
}

/// Creates an ID/EX latch whose instruction reads the given registers.
fn consumer(a: i32, b: i32, read_a: i32, read_b: i32) -> IdEx {
    IdEx {
        inst: enc(Opcode::Add, a, b, 0),
        read_a,
        read_b,
        op: Some(Opcode::Add),
        ..IdEx::default()
    }
}

/// Creates an EX/MEM latch producing `alu` for register `dest`.
fn ex_mem_producer(dest: i32, op: Opcode, alu: i32) -> ExMem {
    ExMem {
        dest,
        op: Some(op),
        alu,
        ..ExMem::default()
    }
}

/// Creates a MEM/WB latch producing `write_data` for register `dest`.
fn mem_wb_producer(dest: i32, op: Opcode, write_data: i32) -> MemWb {
    MemWb {
        dest,
        op: Some(op),
        write_data,
        ..MemWb::default()
    }
}

/// Creates a WB/Retire latch producing `write_data` for register `dest`.
fn retired_producer(dest: i32, op: Opcode, write_data: i32) -> WbRetire {
    WbRetire {
        inst: enc(op, 0, 0, dest),
        write_data,
        dest,
    }
}

/// Tests forwarding from the EX/MEM latch (tier 1).
#[test]
fn test_forward_from_ex_mem() {
    let id_ex = consumer(1, 0, 111, 7);
    let ex_mem = ex_mem_producer(1, Opcode::Add, 555);

    let (a, b) = forward_operands(&id_ex, &ex_mem, &MemWb::default(), &WbRetire::default());

    assert_eq!(a, 555, "regA should come from EX/MEM");
    assert_eq!(b, 7, "regB should keep its decode-time value");
}

/// Tests that the nearest producer wins when several match.
#[test]
fn test_nearest_producer_wins() {
    let id_ex = consumer(1, 0, 111, 7);
    let ex_mem = ex_mem_producer(1, Opcode::Add, 555);
    let mem_wb = mem_wb_producer(1, Opcode::Add, 777);
    let retired = retired_producer(1, Opcode::Add, 999);

    let (a, _) = forward_operands(&id_ex, &ex_mem, &mem_wb, &retired);
    assert_eq!(a, 555, "EX/MEM outranks older producers");

    let (a, _) = forward_operands(&id_ex, &ExMem::default(), &mem_wb, &retired);
    assert_eq!(a, 777, "MEM/WB outranks the retire latch");
}

/// Tests forwarding a loaded value from the MEM/WB latch (tier 2).
#[test]
fn test_forward_load_from_mem_wb() {
    let id_ex = consumer(1, 2, 111, 222);
    let mem_wb = mem_wb_producer(1, Opcode::Lw, 0x1234);

    let (a, b) = forward_operands(&id_ex, &ExMem::default(), &mem_wb, &WbRetire::default());

    assert_eq!(a, 0x1234, "loaded value should be forwarded");
    assert_eq!(b, 222);
}

/// Tests forwarding from the retire latch (tier 3).
#[test]
fn test_forward_from_retire_latch() {
    let id_ex = consumer(3, 0, 111, 7);
    let retired = retired_producer(3, Opcode::Nor, 999);

    let (a, _) = forward_operands(&id_ex, &ExMem::default(), &MemWb::default(), &retired);

    assert_eq!(a, 999, "retired value outlives the register-file write");
}

/// Tests that producers which write no register are filtered out.
#[test]
fn test_non_writers_do_not_forward() {
    let id_ex = consumer(1, 0, 111, 7);
    let retired = WbRetire {
        inst: enc(Opcode::Beq, 0, 0, 0),
        write_data: 999,
        dest: 1,
    };

    let (a, _) = forward_operands(&id_ex, &ExMem::default(), &MemWb::default(), &retired);

    assert_eq!(a, 111, "a branch produces no forwardable value");
}

/// Tests that the destination sentinel never matches register 0.
#[test]
fn test_sentinel_never_matches() {
    let id_ex = consumer(0, 0, 42, 42);
    let ex_mem = ExMem {
        dest: DEST_NONE,
        op: Some(Opcode::Noop),
        alu: 12345,
        ..ExMem::default()
    };

    let (a, b) = forward_operands(&id_ex, &ex_mem, &MemWb::default(), &WbRetire::default());

    assert_eq!((a, b), (42, 42), "bubbles must never forward to register 0");
}
