//! Instruction decoder for the 1802 disassembler

use crate::disassembler::Instruction;
use crate::opcodes::OPCODE_TABLE;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// Some(Instruction) for a defined opcode with all of its operand bytes present,
/// None otherwise
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let metadata = &OPCODE_TABLE[opcode as usize];

    if metadata.is_undefined() {
        return None;
    }

    let operand_len = metadata.size_bytes as usize - 1;
    let operand_bytes = rest.get(..operand_len)?.to_vec();

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        operand: metadata.operand,
        operand_bytes,
        size_bytes: metadata.size_bytes,
    })
}
