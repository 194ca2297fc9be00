//! # Register Instructions
//!
//! This module implements operations on the scratchpad registers:
//! - INC / DEC: Increment or decrement `R(N)`
//! - IRX: Increment `R(X)`
//! - GLO / GHI: Copy the low or high byte of `R(N)` into D
//! - PLO / PHI: Replace the low or high byte of `R(N)` with D
//!
//! Register arithmetic wraps at 16 bits and never touches DF.

use crate::{MemoryBus, CPU};

/// INC r (0x1N): `R(N) += 1`.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, n: u8) {
    let r = &mut cpu.r[n as usize];
    *r = r.wrapping_add(1);
}

/// DEC r (0x2N): `R(N) -= 1`.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, n: u8) {
    let r = &mut cpu.r[n as usize];
    *r = r.wrapping_sub(1);
}

/// IRX (0x60): `R(X) += 1`.
pub(crate) fn execute_irx<M: MemoryBus>(cpu: &mut CPU<M>) {
    let x = cpu.x;
    execute_inc(cpu, x);
}

/// GLO r (0x8N): `D = R(N).0`.
pub(crate) fn execute_glo<M: MemoryBus>(cpu: &mut CPU<M>, n: u8) {
    cpu.d = cpu.r[n as usize] as u8;
}

/// GHI r (0x9N): `D = R(N).1`.
pub(crate) fn execute_ghi<M: MemoryBus>(cpu: &mut CPU<M>, n: u8) {
    cpu.d = (cpu.r[n as usize] >> 8) as u8;
}

/// PLO r (0xAN): `R(N).0 = D`.
pub(crate) fn execute_plo<M: MemoryBus>(cpu: &mut CPU<M>, n: u8) {
    let r = &mut cpu.r[n as usize];
    *r = (*r & 0xFF00) | cpu.d as u16;
}

/// PHI r (0xBN): `R(N).1 = D`.
pub(crate) fn execute_phi<M: MemoryBus>(cpu: &mut CPU<M>, n: u8) {
    let r = &mut cpu.r[n as usize];
    *r = ((cpu.d as u16) << 8) | (*r & 0x00FF);
}
