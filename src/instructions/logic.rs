//! # Logic and Shift Instructions
//!
//! This module implements bitwise operations and shifts:
//! - OR, AND, XOR: Combine D with `M(R(X))`
//! - ORI, ANI, XRI: Combine D with the immediate byte
//! - SHR, SHL: Shift D, the bit shifted out goes to DF
//! - SHRC, SHLC: Same, the previous DF is shifted in (also known as RSHR / RSHL)
//!
//! The bitwise operations leave DF untouched.

use crate::{MemoryBus, CPU};

/// OR (0xF1): `D = M(R(X)) | D`.
pub(crate) fn execute_or<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.pointer_read();
    cpu.d |= operand;
}

/// ORI (0xF9 bb): `D = M(R(P)) | D`, `R(P) += 1`.
pub(crate) fn execute_ori<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.fetch_immediate();
    cpu.d |= operand;
}

/// AND (0xF2): `D = M(R(X)) & D`.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.pointer_read();
    cpu.d &= operand;
}

/// ANI (0xFA bb): `D = M(R(P)) & D`, `R(P) += 1`.
pub(crate) fn execute_ani<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.fetch_immediate();
    cpu.d &= operand;
}

/// XOR (0xF3): `D = M(R(X)) ^ D`.
pub(crate) fn execute_xor<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.pointer_read();
    cpu.d ^= operand;
}

/// XRI (0xFB bb): `D = M(R(P)) ^ D`, `R(P) += 1`.
pub(crate) fn execute_xri<M: MemoryBus>(cpu: &mut CPU<M>) {
    let operand = cpu.fetch_immediate();
    cpu.d ^= operand;
}

/// SHR (0xF6): bit 0 of D into DF, zero into bit 7.
pub(crate) fn execute_shr<M: MemoryBus>(cpu: &mut CPU<M>) {
    shift_right(cpu, false);
}

/// SHRC (0x76): bit 0 of D into DF, previous DF into bit 7.
pub(crate) fn execute_shrc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let carry_in = cpu.df;
    shift_right(cpu, carry_in);
}

/// SHL (0xFE): bit 7 of D into DF, zero into bit 0.
pub(crate) fn execute_shl<M: MemoryBus>(cpu: &mut CPU<M>) {
    shift_left(cpu, false);
}

/// SHLC (0x7E): bit 7 of D into DF, previous DF into bit 0.
pub(crate) fn execute_shlc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let carry_in = cpu.df;
    shift_left(cpu, carry_in);
}

fn shift_right<M: MemoryBus>(cpu: &mut CPU<M>, fill: bool) {
    cpu.df = cpu.d & 0x01 != 0;
    cpu.d = (cpu.d >> 1) | if fill { 0x80 } else { 0x00 };
}

fn shift_left<M: MemoryBus>(cpu: &mut CPU<M>, fill: bool) {
    cpu.df = cpu.d & 0x80 != 0;
    cpu.d = (cpu.d << 1) | fill as u8;
}
