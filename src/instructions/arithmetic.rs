//! # Arithmetic Instructions
//!
//! This module implements addition and the 1802's two subtraction directions:
//! - ADD, ADI, ADC, ADCI: `D = operand + D (+ DF)`
//! - SD, SDI, SDB, SDBI: `D = operand - D`, "subtract D"
//! - SM, SMI, SMB, SMBI: `D = D - operand`, "subtract memory"
//!
//! The operand is `M(R(X))`, or the byte after the opcode for the immediate forms.
//!
//! Subtraction adds the ones' complement of the subtrahend plus a carry-in. The
//! carry-in is 1 for the plain forms and the incoming DF for the borrow forms. DF
//! receives bit 8 of the 9-bit sum, so DF = 1 means no borrow occurred.

use crate::{MemoryBus, CPU};

/// Adds three values as a 9-bit quantity, returning the low byte and bit 8.
fn add_with_carry(lhs: u8, rhs: u8, carry_in: bool) -> (u8, bool) {
    let sum = lhs as u16 + rhs as u16 + carry_in as u16;
    (sum as u8, sum > 0xFF)
}

/// ADD (0xF4): `DF, D = M(R(X)) + D`.
pub(crate) fn execute_add<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.pointer_read();
    (cpu.d, cpu.df) = add_with_carry(cpu.d, operand, false);
}

/// ADI (0xFC bb): `DF, D = M(R(P)) + D`, `R(P) += 1`.
pub(crate) fn execute_adi<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.fetch_immediate();
    (cpu.d, cpu.df) = add_with_carry(cpu.d, operand, false);
}

/// ADC (0x74): `DF, D = M(R(X)) + D + DF`.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.pointer_read();
    (cpu.d, cpu.df) = add_with_carry(cpu.d, operand, cpu.df);
}

/// ADCI (0x7C bb): `DF, D = M(R(P)) + D + DF`, `R(P) += 1`.
pub(crate) fn execute_adci<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.fetch_immediate();
    (cpu.d, cpu.df) = add_with_carry(cpu.d, operand, cpu.df);
}

/// SD (0xF5): `DF, D = M(R(X)) - D`.
pub(crate) fn execute_sd<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.pointer_read();
    (cpu.d, cpu.df) = add_with_carry(operand, !cpu.d, true);
}

/// SDI (0xFD bb): `DF, D = M(R(P)) - D`, `R(P) += 1`.
pub(crate) fn execute_sdi<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.fetch_immediate();
    (cpu.d, cpu.df) = add_with_carry(operand, !cpu.d, true);
}

/// SDB (0x75): `DF, D = M(R(X)) - D - (not DF)`.
pub(crate) fn execute_sdb<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.pointer_read();
    (cpu.d, cpu.df) = add_with_carry(operand, !cpu.d, cpu.df);
}

/// SDBI (0x7D bb): `DF, D = M(R(P)) - D - (not DF)`, `R(P) += 1`.
pub(crate) fn execute_sdbi<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.fetch_immediate();
    (cpu.d, cpu.df) = add_with_carry(operand, !cpu.d, cpu.df);
}

/// SM (0xF7): `DF, D = D - M(R(X))`.
pub(crate) fn execute_sm<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.pointer_read();
    (cpu.d, cpu.df) = add_with_carry(cpu.d, !operand, true);
}

/// SMI (0xFF bb): `DF, D = D - M(R(P))`, `R(P) += 1`.
pub(crate) fn execute_smi<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.fetch_immediate();
    (cpu.d, cpu.df) = add_with_carry(cpu.d, !operand, true);
}

/// SMB (0x77): `DF, D = D - M(R(X)) - (not DF)`.
pub(crate) fn execute_smb<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.pointer_read();
    (cpu.d, cpu.df) = add_with_carry(cpu.d, !operand, cpu.df);
}

/// SMBI (0x7F bb): `DF, D = D - M(R(P)) - (not DF)`, `R(P) += 1`.
pub(crate) fn execute_smbi<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.fetch_immediate();
    (cpu.d, cpu.df) = add_with_carry(cpu.d, !operand, cpu.df);
}
