//! # Memory Reference Instructions
//!
//! This module implements loads and stores:
//! - LDN / LDA: Load D via `R(N)`, LDA then advances `R(N)`
//! - LDX / LDXA: Load D via `R(X)`, LDXA then advances `R(X)`
//! - LDI: Load D with the byte following the opcode
//! - STR: Store D via `R(N)`
//! - STXD: Store D via `R(X)`, then decrement `R(X)`
//!
//! Opcode 0x00 would be `LDN 0`; the 1802 decodes it as IDL instead.

use crate::{MemoryBus, CPU};

/// LDN r (0x01-0x0F): `D = M(R(N))`.
pub(crate) fn execute_ldn<M: MemoryBus>(cpu: &mut CPU<M>, n: u8) {
    cpu.d = cpu.memory.read(cpu.r[n as usize]);
}

/// LDA r (0x4N): `D = M(R(N))`, then `R(N) += 1`.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, n: u8) {
    execute_ldn(cpu, n);
    let r = &mut cpu.r[n as usize];
    *r = r.wrapping_add(1);
}

/// LDX (0xF0): `D = M(R(X))`.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.d = cpu.pointer_read();
}

/// LDXA (0x72): `D = M(R(X))`, then `R(X) += 1`.
pub(crate) fn execute_ldxa<M: MemoryBus>(cpu: &mut CPU<M>) {
    let x = cpu.x;
    execute_lda(cpu, x);
}

/// LDI (0xF8 bb): `D = M(R(P))`, then `R(P) += 1`.
pub(crate) fn execute_ldi<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.d = cpu.fetch_immediate();
}

/// STR r (0x5N): `M(R(N)) = D`.
pub(crate) fn execute_str<M: MemoryBus>(cpu: &mut CPU<M>, n: u8) {
    let addr = cpu.r[n as usize];
    cpu.memory.write(addr, cpu.d);
}

/// STXD (0x73): `M(R(X)) = D`, then `R(X) -= 1`.
pub(crate) fn execute_stxd<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pointer_write(cpu.d);
    let x = cpu.x as usize;
    cpu.r[x] = cpu.r[x].wrapping_sub(1);
}
