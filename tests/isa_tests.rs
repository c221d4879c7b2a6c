//! Tests for instruction decoding, field extraction, and disassembly.

use pipesim::isa::{self, Opcode, NOOP_WORD};

/// Encodes an instruction word from its opcode and fields.
fn enc(op: Opcode, a: i32, b: i32, c: i32) -> i32 {
    ((op as i32) << 22) | (a << 19) | (b << 16) | (c & 0xFFFF)
}

/// Tests opcode and field extraction of a plain register instruction.
#[test]
fn test_decode_fields() {
    let word = enc(Opcode::Add, 1, 2, 3);
    let d = isa::decode(word);

    assert_eq!(d.op, Some(Opcode::Add));
    assert_eq!(d.a, 1);
    assert_eq!(d.b, 2);
    assert_eq!(d.imm, 3);
    assert_eq!(d.offset, 3);
}

/// Tests sign extension of the 16-bit immediate field.
#[test]
fn test_sign_extension() {
    assert_eq!(isa::sign_extend(0x7FFF), 32767);
    assert_eq!(isa::sign_extend(0x8000), -32768);
    assert_eq!(isa::sign_extend(0xFFFF), -1);
    assert_eq!(isa::sign_extend(0), 0);

    let word = enc(Opcode::Beq, 0, 0, -5);
    assert_eq!(isa::decode(word).offset, -5, "negative offsets round-trip");
}

/// Tests that decoding is a pure function of the word.
#[test]
fn test_decode_idempotent() {
    for word in [enc(Opcode::Lw, 3, 4, -100), NOOP_WORD, -42, 999] {
        assert_eq!(isa::decode(word), isa::decode(word));
    }
}

/// Tests that words outside the opcode enumeration decode as data.
#[test]
fn test_non_opcode_words_are_data() {
    assert_eq!(Opcode::of(0x4000_0000), None, "opcode 256 is out of range");
    assert_eq!(Opcode::of(-1), None, "negative shifted opcode is data");
    assert_eq!(Opcode::of(i32::MIN), None);
}

/// Tests the canonical no-op encoding.
#[test]
fn test_noop_word() {
    assert_eq!(NOOP_WORD, 0x1c00000);
    assert_eq!(Opcode::of(NOOP_WORD), Some(Opcode::Noop));
}

/// Tests the register-writer classification used by hazard logic.
#[test]
fn test_writes_register() {
    assert!(Opcode::Add.writes_register());
    assert!(Opcode::Nor.writes_register());
    assert!(Opcode::Lw.writes_register());
    assert!(!Opcode::Sw.writes_register());
    assert!(!Opcode::Beq.writes_register());
    assert!(!Opcode::Jalr.writes_register());
    assert!(!Opcode::Halt.writes_register());
    assert!(!Opcode::Noop.writes_register());
}

/// Tests disassembly of opcodes and data words.
#[test]
fn test_disasm() {
    assert_eq!(isa::disasm(enc(Opcode::Add, 1, 2, 3)), "add 1 2 3");
    assert_eq!(isa::disasm(NOOP_WORD), "noop 0 0 0");
    assert_eq!(isa::disasm(-42), ".fill -42");
    assert_eq!(isa::disasm(999), "add 0 0 999", "small values are add words");
}
