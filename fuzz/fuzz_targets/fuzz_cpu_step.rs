//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents,
//! then executes one instruction to find edge cases and crashes.

#![no_main]

use arbitrary::Arbitrary;
use lib1802::{ExecutionError, ExternalFlag, FlatMemory, MemoryBus, CPU, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    /// Data register
    d: u8,
    /// Data flag
    df: bool,
    /// Scratchpad registers
    r: [u16; 16],
    /// Program counter selector
    p: u8,
    /// Data pointer selector
    x: u8,
    /// Interrupt enable
    ie: bool,
    /// Output flip-flop
    q: bool,
    /// External flags
    ef: [bool; 4],
    /// Data bus latch
    bus: u8,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Bytes at the data pointer location
    data_bytes: [u8; 4],
}

fuzz_target!(|input: FuzzInput| {
    let state = &input.cpu_state;
    let mut cpu = CPU::new(FlatMemory::new());

    for (index, &value) in state.r.iter().enumerate() {
        cpu.set_register(index as u8, value);
    }
    cpu.set_p(state.p);
    cpu.set_x(state.x);
    cpu.set_d(state.d);
    cpu.set_df(state.df);
    cpu.set_ie(state.ie);
    cpu.set_q(state.q);
    cpu.set_bus(state.bus);
    let flags = [
        ExternalFlag::Ef1,
        ExternalFlag::Ef2,
        ExternalFlag::Ef3,
        ExternalFlag::Ef4,
    ];
    for (flag, &level) in flags.iter().zip(state.ef.iter()) {
        cpu.set_ef(*flag, level);
    }

    // Data first so the instruction wins if the two regions overlap
    let data_pointer = cpu.data_pointer();
    for (i, &byte) in input.data_bytes.iter().enumerate() {
        cpu.memory_mut().write(data_pointer.wrapping_add(i as u16), byte);
    }
    let pc = cpu.pc();
    for (i, &byte) in input.instruction_bytes.iter().enumerate() {
        cpu.memory_mut().write(pc.wrapping_add(i as u16), byte);
    }

    let opcode = input.instruction_bytes[0];
    match cpu.step() {
        Ok(()) => {
            // Invariants that must hold after any instruction
            assert_eq!(cpu.n(), opcode & 0x0F);
            assert_eq!(cpu.i(), opcode >> 4);
            assert!(cpu.p() <= 0x0F);
            assert!(cpu.x() <= 0x0F);
        }
        Err(ExecutionError::UnsupportedInstruction { opcode: failed, mnemonic }) => {
            assert_eq!(failed, opcode);
            assert_eq!(mnemonic, OPCODE_TABLE[opcode as usize].mnemonic);
            assert!(matches!(opcode, 0x78 | 0x79));
        }
    }
});
