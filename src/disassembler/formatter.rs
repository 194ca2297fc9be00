//! Formatting functions for disassembled instructions

use crate::addressing::OperandKind;
use crate::disassembler::{DisassemblyOptions, Instruction};

/// Format a single instruction as assembly text
///
/// # Arguments
///
/// * `instr` - The instruction to format
///
/// # Returns
///
/// A string containing the formatted assembly instruction
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Format the operand based on its encoding
fn format_operand(instr: &Instruction) -> String {
    // .byte entries (undefined or truncated)
    if instr.mnemonic == ".byte" {
        return format!("${:02X}", instr.opcode);
    }

    match instr.operand {
        OperandKind::Implied => String::new(),
        OperandKind::Register => format!("R{:X}", instr.nibble()),
        OperandKind::Port => format!("{}", instr.nibble()),
        OperandKind::Immediate => match instr.operand_bytes.first() {
            Some(value) => format!("#${:02X}", value),
            None => "#$??".to_string(),
        },
        OperandKind::ShortBranch | OperandKind::LongBranch => match instr.branch_target() {
            Some(target) => format!("${:04X}", target),
            None => "$????".to_string(),
        },
    }
}

/// Format instructions as a listing, one per line, prefixed with addresses
///
/// With `hex_dump` set, the raw bytes of each instruction follow the address.
///
/// # Examples
///
/// ```
/// use lib1802::{disassemble, DisassemblyOptions};
/// use lib1802::disassembler::formatter::format_listing;
///
/// let options = DisassemblyOptions { start_address: 0x0100, hex_dump: true };
/// let listing = format_listing(&disassemble(&[0xF8, 0x05, 0x00], options), options);
/// assert_eq!(listing, "0100  F8 05     LDI #$05\n0102  00        IDL\n");
/// ```
pub fn format_listing(instructions: &[Instruction], options: DisassemblyOptions) -> String {
    let mut listing = String::new();

    for instr in instructions {
        listing.push_str(&format!("{:04X}  ", instr.address));

        if options.hex_dump {
            let mut bytes = vec![format!("{:02X}", instr.opcode)];
            if instr.mnemonic != ".byte" {
                bytes.extend(instr.operand_bytes.iter().map(|b| format!("{:02X}", b)));
            }
            listing.push_str(&format!("{:<10}", bytes.join(" ")));
        }

        listing.push_str(&format_instruction(instr));
        listing.push('\n');
    }

    listing
}
