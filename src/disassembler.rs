//! 1802 Disassembler Module
//!
//! Converts binary machine code into human-readable assembly mnemonics.

pub mod decoder;
pub mod formatter;

use std::ops::Range;

use crate::addressing::OperandKind;
use crate::memory::MEMORY_SIZE;

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDI", "GLO", "LBR")
    pub mnemonic: &'static str,

    /// How the operand is encoded
    pub operand: OperandKind,

    /// Operand bytes (0-2 bytes depending on operand kind)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,
}

impl Instruction {
    /// Register or port number carried in the opcode's low nibble.
    pub fn nibble(&self) -> u8 {
        match self.operand {
            OperandKind::Port => self.opcode & 0x07,
            _ => self.opcode & 0x0F,
        }
    }

    /// Where control goes if the branch is taken, for short and long branches.
    pub fn branch_target(&self) -> Option<u16> {
        match (self.operand, self.operand_bytes.as_slice()) {
            (OperandKind::ShortBranch, &[low]) => {
                // The page is that of the operand byte
                let page = self.address.wrapping_add(1) & 0xFF00;
                Some(page | low as u16)
            }
            (OperandKind::LongBranch, &[high, low]) => Some(u16::from_be_bytes([high, low])),
            _ => None,
        }
    }
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy)]
pub struct DisassemblyOptions {
    /// Starting address for disassembly (affects address display and branch targets)
    pub start_address: u16,

    /// Whether listings include the raw instruction bytes
    pub hex_dump: bool,
}

impl Default for DisassemblyOptions {
    fn default() -> Self {
        Self {
            start_address: 0x0000,
            hex_dump: false,
        }
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// The undefined opcode 0x68 and instructions cut off by the end of the slice
/// become one-byte `.byte` entries.
///
/// # Examples
///
/// ```
/// use lib1802::{disassemble, DisassemblyOptions};
/// use lib1802::disassembler::formatter::format_instruction;
///
/// let listing: Vec<String> = disassemble(&[0xF8, 0x05, 0x30, 0x00], DisassemblyOptions::default())
///     .iter()
///     .map(format_instruction)
///     .collect();
/// assert_eq!(listing, vec!["LDI #$05", "BR $0000"]);
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut pc = 0;
    let mut address = options.start_address;

    while pc < bytes.len() {
        let instr = decoder::decode_instruction(&bytes[pc..], address).unwrap_or_else(|| {
            Instruction {
                address,
                opcode: bytes[pc],
                mnemonic: ".byte",
                operand: OperandKind::Implied,
                operand_bytes: vec![bytes[pc]],
                size_bytes: 1,
            }
        });

        pc += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}

/// Byte range of the address space covering `max_instructions` instructions
/// starting at `start_address`, clamped to the end of memory.
///
/// # Examples
///
/// ```
/// use lib1802::disassembler::disassembly_window;
///
/// assert_eq!(disassembly_window(0x0100, 4), 0x0100..0x010C);
/// assert_eq!(disassembly_window(0xFFFE, 10), 0xFFFE..0x1_0000);
/// ```
pub fn disassembly_window(start_address: u16, max_instructions: u32) -> Range<usize> {
    // Longest instruction is three bytes
    let start = start_address as usize;
    let span = (max_instructions as usize).saturating_mul(3);
    start..start.saturating_add(span).min(MEMORY_SIZE)
}
