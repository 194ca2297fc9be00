//! # Addressing
//!
//! The 1802 reaches memory in two ways: through the register selected by `P`
//! (the program counter, used for the instruction stream and immediate operands)
//! and through the register selected by `X` (the data pointer, the implicit
//! operand of most ALU instructions). Both are views into the register file,
//! never separate storage.
//!
//! This module also defines `OperandKind`, which describes how an opcode encodes
//! its operand.

use crate::{MemoryBus, CPU};

/// How an opcode encodes its operand.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Register, Port
/// - **1 byte**: Immediate, ShortBranch
/// - **2 bytes**: LongBranch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// No operand.
    ///
    /// Examples: IDL, SHR, SEQ, LSZ
    Implied,

    /// Register number in the low nibble of the opcode.
    ///
    /// Example: GLO 5 (0x85, copy low byte of R5 into D)
    Register,

    /// I/O port number in the low three bits of the opcode.
    ///
    /// Example: OUT 4 (0x64), INP 4 (0x6C)
    Port,

    /// 8-bit constant following the opcode.
    ///
    /// Example: LDI 05 (0xF8 0x05)
    Immediate,

    /// Low byte of a target address within the current page.
    ///
    /// Example: BZ 34 (0x32 0x34)
    ShortBranch,

    /// Full 16-bit target address, high byte first.
    ///
    /// Example: LBR 5678 (0xC0 0x56 0x78)
    LongBranch,
}

impl OperandKind {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            OperandKind::Implied | OperandKind::Register | OperandKind::Port => 0,
            OperandKind::Immediate | OperandKind::ShortBranch => 1,
            OperandKind::LongBranch => 2,
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Returns the byte at the program counter without advancing it.
    pub(crate) fn program_counter_read(&self) -> u8 {
        self.memory.read(self.pc())
    }

    /// Writes a byte at the program counter address.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib1802::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_pc(0x0040);
    /// cpu.program_counter_write(0x7B); // SEQ
    /// cpu.step().unwrap();
    ///
    /// assert!(cpu.q());
    /// assert_eq!(cpu.memory().read(0x0040), 0x7B);
    /// ```
    pub fn program_counter_write(&mut self, value: u8) {
        let addr = self.pc();
        self.memory.write(addr, value);
    }

    /// Moves the program counter to the next byte.
    pub(crate) fn advance_program_counter(&mut self) {
        let p = self.p as usize;
        self.r[p] = self.r[p].wrapping_add(1);
    }

    /// Reads the byte addressed by the data pointer `R(X)`.
    pub(crate) fn pointer_read(&self) -> u8 {
        self.memory.read(self.r[self.x as usize])
    }

    /// Writes the byte addressed by the data pointer `R(X)`.
    pub(crate) fn pointer_write(&mut self, value: u8) {
        let addr = self.r[self.x as usize];
        self.memory.write(addr, value);
    }

    /// Reads the immediate operand and steps past it.
    pub(crate) fn fetch_immediate(&mut self) -> u8 {
        let value = self.program_counter_read();
        self.advance_program_counter();
        value
    }
}
