//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences to the disassembler
//! to find edge cases and crashes in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use lib1802::disassembler::formatter::{format_instruction, format_listing};
use lib1802::{disassemble, DisassemblyOptions};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u16,
    hex_dump: bool,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let options = DisassemblyOptions {
        start_address: input.start_address,
        hex_dump: input.hex_dump,
    };

    let instructions = disassemble(&input.bytes, options);

    let mut total_size: usize = 0;
    let mut expected_address = input.start_address;

    for instr in &instructions {
        assert_eq!(instr.address, expected_address);
        assert!(instr.size_bytes >= 1 && instr.size_bytes <= 3);
        assert!(instr.operand_bytes.len() <= instr.size_bytes as usize);
        assert!(!format_instruction(instr).is_empty());

        total_size += instr.size_bytes as usize;
        expected_address = expected_address.wrapping_add(instr.size_bytes as u16);
    }

    // Total size should equal input size
    assert_eq!(total_size, input.bytes.len());
    assert_eq!(format_listing(&instructions, options).lines().count(), instructions.len());
});
