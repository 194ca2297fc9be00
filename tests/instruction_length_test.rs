//! Instruction length tests
//!
//! Walks all 256 opcodes with every condition arranged to fail and checks that
//! the program counter ends up just past the encoding listed in the opcode table.

use lib1802::{ExternalFlag, FlatMemory, MemoryBus, CPU, OPCODE_TABLE};

const PROGRAM: u16 = 0x1000;
const DATA: u16 = 0x8000;
const PC_REG: u8 = 3;
const DATA_REG: u8 = 2;

/// Condition inputs to apply before stepping.
#[derive(Clone, Copy)]
enum Flags {
    /// Q, DF and EF1-EF4 low, D non-zero, IE set
    Low,
    /// Q, DF and EF1-EF4 high, D zero, IE set
    High,
    /// Like `Low` with interrupts disabled
    LowInterruptsOff,
}

/// Inputs under which a conditional opcode does not branch or skip.
fn failing_flags(opcode: u8) -> Flags {
    match opcode {
        0x31..=0x37 | 0xC1..=0xC3 | 0xCD..=0xCF => Flags::Low,
        0x39..=0x3F | 0xC9..=0xCB | 0xC5..=0xC7 => Flags::High,
        0xCC => Flags::LowInterruptsOff,
        _ => Flags::Low,
    }
}

/// Expected program counter advance, or None for opcodes that re-point R(P)
/// unconditionally.
fn expected_advance(opcode: u8) -> Option<u16> {
    let size = OPCODE_TABLE[opcode as usize].size_bytes as u16;
    let row = opcode >> 4;
    let n = opcode & 0x0F;

    match opcode {
        0x00 => Some(0), // IDL stays put
        0x30 | 0xC0 => None, // BR, LBR
        0x38 => Some(size + 1), // SKP steps over one byte
        0xC8 => Some(size + 2), // LSKP steps over two
        0xD0..=0xDF if n != PC_REG => None,
        _ if matches!(row, 0x1 | 0x2 | 0x4 | 0xA | 0xB) && n == PC_REG => None,
        _ => Some(size),
    }
}

fn setup_cpu(opcode: u8, flags: Flags) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(PROGRAM, &[opcode, 0x00, 0x00]).unwrap();
    // RET / DIS restore X=2, P=3
    memory.write(DATA, 0x23);

    let mut cpu = CPU::new(memory);
    cpu.set_register(PC_REG, PROGRAM);
    cpu.set_p(PC_REG);
    cpu.set_register(DATA_REG, DATA);
    cpu.set_x(DATA_REG);

    let high = matches!(flags, Flags::High);
    cpu.set_q(high);
    cpu.set_df(high);
    cpu.set_d(if high { 0x00 } else { 0x01 });
    cpu.set_ie(!matches!(flags, Flags::LowInterruptsOff));
    for flag in [
        ExternalFlag::Ef1,
        ExternalFlag::Ef2,
        ExternalFlag::Ef3,
        ExternalFlag::Ef4,
    ] {
        cpu.set_ef(flag, high);
    }
    cpu
}

#[test]
fn test_every_opcode_not_taken_length() {
    let mut mismatches = Vec::new();

    for opcode in 0..=255u8 {
        let Some(advance) = expected_advance(opcode) else {
            continue;
        };

        let mut cpu = setup_cpu(opcode, failing_flags(opcode));
        let result = cpu.step();

        if matches!(opcode, 0x78 | 0x79) {
            assert!(result.is_err(), "opcode 0x{:02X} should fail", opcode);
        } else {
            assert!(result.is_ok(), "opcode 0x{:02X} should execute", opcode);
        }

        let actual = cpu.register(PC_REG).wrapping_sub(PROGRAM);
        if actual != advance {
            mismatches.push((opcode, advance, actual));
        }
    }

    assert!(
        mismatches.is_empty(),
        "(opcode, expected, actual): {:02X?}",
        mismatches
    );
}

#[test]
fn test_conditional_branches_not_taken() {
    // Short branches step over one operand byte, long branches over two
    let cases = [
        (0x31, 2), // BQ
        (0x32, 2), // BZ
        (0x33, 2), // BDF
        (0x34, 2), // B1
        (0x37, 2), // B4
        (0x39, 2), // BNQ
        (0x3A, 2), // BNZ
        (0x3B, 2), // BNF
        (0x3C, 2), // BN1
        (0x3F, 2), // BN4
        (0xC1, 3), // LBQ
        (0xC2, 3), // LBZ
        (0xC3, 3), // LBDF
        (0xC9, 3), // LBNQ
        (0xCA, 3), // LBNZ
        (0xCB, 3), // LBNF
    ];

    for (opcode, advance) in cases {
        let mut cpu = setup_cpu(opcode, failing_flags(opcode));
        cpu.step().unwrap();
        assert_eq!(
            cpu.pc(),
            PROGRAM + advance,
            "{} not taken",
            OPCODE_TABLE[opcode as usize].mnemonic
        );
    }
}

#[test]
fn test_unconditional_branches_leave_sequence() {
    let mut cpu = setup_cpu(0x30, Flags::Low);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), PROGRAM & 0xFF00);

    let mut cpu = setup_cpu(0xC0, Flags::Low);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0000);
}
