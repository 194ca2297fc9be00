//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that serves as the
//! single source of truth for 1802 instruction information outside the executor:
//! the disassembler, the WebAssembly bindings and the tests all read it.
//!
//! Every byte value decodes to an instruction. The only hole in the 1802 map is
//! 0x68, which later CDP1804/1806 parts use as an extended-opcode prefix; here it
//! is listed as "???" and executes as a one-byte no-op.

use crate::addressing::OperandKind;
use crate::addressing::OperandKind::*;

/// Metadata for a single 1802 opcode.
///
/// # Fields
///
/// - `mnemonic`: Instruction name (e.g., "LDI", "GLO", "???")
/// - `operand`: How the operand is encoded
/// - `size_bytes`: Total encoded size including the opcode (1-3 bytes)
///
/// Skips and `SKP` list only their own encoding; the bytes they step over belong
/// to the following instruction.
///
/// # Examples
///
/// ```
/// use lib1802::{OPCODE_TABLE, OperandKind};
///
/// let ldi = &OPCODE_TABLE[0xF8];
/// assert_eq!(ldi.mnemonic, "LDI");
/// assert_eq!(ldi.operand, OperandKind::Immediate);
/// assert_eq!(ldi.size_bytes, 2);
///
/// let lbr = &OPCODE_TABLE[0xC0];
/// assert_eq!(lbr.size_bytes, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic.
    pub mnemonic: &'static str,

    /// Operand encoding for this instruction.
    pub operand: OperandKind,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    /// Returns true for the single undefined opcode (0x68).
    pub fn is_undefined(&self) -> bool {
        self.mnemonic == "???"
    }
}

const fn op(mnemonic: &'static str, operand: OperandKind) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operand,
        size_bytes: 1 + operand.operand_bytes(),
    }
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// Rows follow the 1802's own layout: the high nibble selects the instruction
/// group, the low nibble a register, port or condition.
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00-0x0F
    op("IDL", Implied), // 0x00
    op("LDN", Register), // 0x01
    op("LDN", Register), // 0x02
    op("LDN", Register), // 0x03
    op("LDN", Register), // 0x04
    op("LDN", Register), // 0x05
    op("LDN", Register), // 0x06
    op("LDN", Register), // 0x07
    op("LDN", Register), // 0x08
    op("LDN", Register), // 0x09
    op("LDN", Register), // 0x0A
    op("LDN", Register), // 0x0B
    op("LDN", Register), // 0x0C
    op("LDN", Register), // 0x0D
    op("LDN", Register), // 0x0E
    op("LDN", Register), // 0x0F
    // 0x10-0x1F
    op("INC", Register), // 0x10
    op("INC", Register), // 0x11
    op("INC", Register), // 0x12
    op("INC", Register), // 0x13
    op("INC", Register), // 0x14
    op("INC", Register), // 0x15
    op("INC", Register), // 0x16
    op("INC", Register), // 0x17
    op("INC", Register), // 0x18
    op("INC", Register), // 0x19
    op("INC", Register), // 0x1A
    op("INC", Register), // 0x1B
    op("INC", Register), // 0x1C
    op("INC", Register), // 0x1D
    op("INC", Register), // 0x1E
    op("INC", Register), // 0x1F
    // 0x20-0x2F
    op("DEC", Register), // 0x20
    op("DEC", Register), // 0x21
    op("DEC", Register), // 0x22
    op("DEC", Register), // 0x23
    op("DEC", Register), // 0x24
    op("DEC", Register), // 0x25
    op("DEC", Register), // 0x26
    op("DEC", Register), // 0x27
    op("DEC", Register), // 0x28
    op("DEC", Register), // 0x29
    op("DEC", Register), // 0x2A
    op("DEC", Register), // 0x2B
    op("DEC", Register), // 0x2C
    op("DEC", Register), // 0x2D
    op("DEC", Register), // 0x2E
    op("DEC", Register), // 0x2F
    // 0x30-0x3F
    op("BR", ShortBranch), // 0x30
    op("BQ", ShortBranch), // 0x31
    op("BZ", ShortBranch), // 0x32
    op("BDF", ShortBranch), // 0x33
    op("B1", ShortBranch), // 0x34
    op("B2", ShortBranch), // 0x35
    op("B3", ShortBranch), // 0x36
    op("B4", ShortBranch), // 0x37
    op("SKP", Implied), // 0x38
    op("BNQ", ShortBranch), // 0x39
    op("BNZ", ShortBranch), // 0x3A
    op("BNF", ShortBranch), // 0x3B
    op("BN1", ShortBranch), // 0x3C
    op("BN2", ShortBranch), // 0x3D
    op("BN3", ShortBranch), // 0x3E
    op("BN4", ShortBranch), // 0x3F
    // 0x40-0x4F
    op("LDA", Register), // 0x40
    op("LDA", Register), // 0x41
    op("LDA", Register), // 0x42
    op("LDA", Register), // 0x43
    op("LDA", Register), // 0x44
    op("LDA", Register), // 0x45
    op("LDA", Register), // 0x46
    op("LDA", Register), // 0x47
    op("LDA", Register), // 0x48
    op("LDA", Register), // 0x49
    op("LDA", Register), // 0x4A
    op("LDA", Register), // 0x4B
    op("LDA", Register), // 0x4C
    op("LDA", Register), // 0x4D
    op("LDA", Register), // 0x4E
    op("LDA", Register), // 0x4F
    // 0x50-0x5F
    op("STR", Register), // 0x50
    op("STR", Register), // 0x51
    op("STR", Register), // 0x52
    op("STR", Register), // 0x53
    op("STR", Register), // 0x54
    op("STR", Register), // 0x55
    op("STR", Register), // 0x56
    op("STR", Register), // 0x57
    op("STR", Register), // 0x58
    op("STR", Register), // 0x59
    op("STR", Register), // 0x5A
    op("STR", Register), // 0x5B
    op("STR", Register), // 0x5C
    op("STR", Register), // 0x5D
    op("STR", Register), // 0x5E
    op("STR", Register), // 0x5F
    // 0x60-0x6F
    op("IRX", Implied), // 0x60
    op("OUT", Port), // 0x61
    op("OUT", Port), // 0x62
    op("OUT", Port), // 0x63
    op("OUT", Port), // 0x64
    op("OUT", Port), // 0x65
    op("OUT", Port), // 0x66
    op("OUT", Port), // 0x67
    op("???", Implied), // 0x68
    op("INP", Port), // 0x69
    op("INP", Port), // 0x6A
    op("INP", Port), // 0x6B
    op("INP", Port), // 0x6C
    op("INP", Port), // 0x6D
    op("INP", Port), // 0x6E
    op("INP", Port), // 0x6F
    // 0x70-0x7F
    op("RET", Implied), // 0x70
    op("DIS", Implied), // 0x71
    op("LDXA", Implied), // 0x72
    op("STXD", Implied), // 0x73
    op("ADC", Implied), // 0x74
    op("SDB", Implied), // 0x75
    op("SHRC", Implied), // 0x76
    op("SMB", Implied), // 0x77
    op("SAV", Implied), // 0x78
    op("MARK", Implied), // 0x79
    op("REQ", Implied), // 0x7A
    op("SEQ", Implied), // 0x7B
    op("ADCI", Immediate), // 0x7C
    op("SDBI", Immediate), // 0x7D
    op("SHLC", Implied), // 0x7E
    op("SMBI", Immediate), // 0x7F
    // 0x80-0x8F
    op("GLO", Register), // 0x80
    op("GLO", Register), // 0x81
    op("GLO", Register), // 0x82
    op("GLO", Register), // 0x83
    op("GLO", Register), // 0x84
    op("GLO", Register), // 0x85
    op("GLO", Register), // 0x86
    op("GLO", Register), // 0x87
    op("GLO", Register), // 0x88
    op("GLO", Register), // 0x89
    op("GLO", Register), // 0x8A
    op("GLO", Register), // 0x8B
    op("GLO", Register), // 0x8C
    op("GLO", Register), // 0x8D
    op("GLO", Register), // 0x8E
    op("GLO", Register), // 0x8F
    // 0x90-0x9F
    op("GHI", Register), // 0x90
    op("GHI", Register), // 0x91
    op("GHI", Register), // 0x92
    op("GHI", Register), // 0x93
    op("GHI", Register), // 0x94
    op("GHI", Register), // 0x95
    op("GHI", Register), // 0x96
    op("GHI", Register), // 0x97
    op("GHI", Register), // 0x98
    op("GHI", Register), // 0x99
    op("GHI", Register), // 0x9A
    op("GHI", Register), // 0x9B
    op("GHI", Register), // 0x9C
    op("GHI", Register), // 0x9D
    op("GHI", Register), // 0x9E
    op("GHI", Register), // 0x9F
    // 0xA0-0xAF
    op("PLO", Register), // 0xA0
    op("PLO", Register), // 0xA1
    op("PLO", Register), // 0xA2
    op("PLO", Register), // 0xA3
    op("PLO", Register), // 0xA4
    op("PLO", Register), // 0xA5
    op("PLO", Register), // 0xA6
    op("PLO", Register), // 0xA7
    op("PLO", Register), // 0xA8
    op("PLO", Register), // 0xA9
    op("PLO", Register), // 0xAA
    op("PLO", Register), // 0xAB
    op("PLO", Register), // 0xAC
    op("PLO", Register), // 0xAD
    op("PLO", Register), // 0xAE
    op("PLO", Register), // 0xAF
    // 0xB0-0xBF
    op("PHI", Register), // 0xB0
    op("PHI", Register), // 0xB1
    op("PHI", Register), // 0xB2
    op("PHI", Register), // 0xB3
    op("PHI", Register), // 0xB4
    op("PHI", Register), // 0xB5
    op("PHI", Register), // 0xB6
    op("PHI", Register), // 0xB7
    op("PHI", Register), // 0xB8
    op("PHI", Register), // 0xB9
    op("PHI", Register), // 0xBA
    op("PHI", Register), // 0xBB
    op("PHI", Register), // 0xBC
    op("PHI", Register), // 0xBD
    op("PHI", Register), // 0xBE
    op("PHI", Register), // 0xBF
    // 0xC0-0xCF
    op("LBR", LongBranch), // 0xC0
    op("LBQ", LongBranch), // 0xC1
    op("LBZ", LongBranch), // 0xC2
    op("LBDF", LongBranch), // 0xC3
    op("NOP", Implied), // 0xC4
    op("LSNQ", Implied), // 0xC5
    op("LSNZ", Implied), // 0xC6
    op("LSNF", Implied), // 0xC7
    op("LSKP", Implied), // 0xC8
    op("LBNQ", LongBranch), // 0xC9
    op("LBNZ", LongBranch), // 0xCA
    op("LBNF", LongBranch), // 0xCB
    op("LSIE", Implied), // 0xCC
    op("LSQ", Implied), // 0xCD
    op("LSZ", Implied), // 0xCE
    op("LSDF", Implied), // 0xCF
    // 0xD0-0xDF
    op("SEP", Register), // 0xD0
    op("SEP", Register), // 0xD1
    op("SEP", Register), // 0xD2
    op("SEP", Register), // 0xD3
    op("SEP", Register), // 0xD4
    op("SEP", Register), // 0xD5
    op("SEP", Register), // 0xD6
    op("SEP", Register), // 0xD7
    op("SEP", Register), // 0xD8
    op("SEP", Register), // 0xD9
    op("SEP", Register), // 0xDA
    op("SEP", Register), // 0xDB
    op("SEP", Register), // 0xDC
    op("SEP", Register), // 0xDD
    op("SEP", Register), // 0xDE
    op("SEP", Register), // 0xDF
    // 0xE0-0xEF
    op("SEX", Register), // 0xE0
    op("SEX", Register), // 0xE1
    op("SEX", Register), // 0xE2
    op("SEX", Register), // 0xE3
    op("SEX", Register), // 0xE4
    op("SEX", Register), // 0xE5
    op("SEX", Register), // 0xE6
    op("SEX", Register), // 0xE7
    op("SEX", Register), // 0xE8
    op("SEX", Register), // 0xE9
    op("SEX", Register), // 0xEA
    op("SEX", Register), // 0xEB
    op("SEX", Register), // 0xEC
    op("SEX", Register), // 0xED
    op("SEX", Register), // 0xEE
    op("SEX", Register), // 0xEF
    // 0xF0-0xFF
    op("LDX", Implied), // 0xF0
    op("OR", Implied), // 0xF1
    op("AND", Implied), // 0xF2
    op("XOR", Implied), // 0xF3
    op("ADD", Implied), // 0xF4
    op("SD", Implied), // 0xF5
    op("SHR", Implied), // 0xF6
    op("SM", Implied), // 0xF7
    op("LDI", Immediate), // 0xF8
    op("ORI", Immediate), // 0xF9
    op("ANI", Immediate), // 0xFA
    op("XRI", Immediate), // 0xFB
    op("ADI", Immediate), // 0xFC
    op("SDI", Immediate), // 0xFD
    op("SHL", Implied), // 0xFE
    op("SMI", Immediate), // 0xFF
];
