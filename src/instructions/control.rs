//! # Control Instructions
//!
//! This module implements:
//! - IDL: Wait on the idle opcode
//! - SEP / SEX: Select the program counter / data pointer register
//! - RET / DIS: Restore X and P from `M(R(X))`, enabling / disabling interrupts
//! - REQ / SEQ: Reset / set Q
//! - SAV / MARK: Interrupt context saves, reported as unsupported
//!
//! SEP is how the 1802 calls and returns: switching P to a register that already
//! holds a subroutine address transfers control there, while the old program
//! counter keeps its value as the return point.

use crate::{ExecutionError, MemoryBus, CPU, OPCODE_TABLE};

/// IDL (0x00): stay on the idle opcode.
///
/// The hardware stops fetching until an interrupt or DMA request arrives. Neither
/// exists here, so `R(P)` is moved back onto the IDL byte and every later step
/// idles again.
pub(crate) fn execute_idl<M: MemoryBus>(cpu: &mut CPU<M>) {
    let pc = cpu.pc();
    cpu.set_pc(pc.wrapping_sub(1));
}

/// SEP r (0xDN): `P = N`.
pub(crate) fn execute_sep<M: MemoryBus>(cpu: &mut CPU<M>, n: u8) {
    cpu.p = n;
}

/// SEX r (0xEN): `X = N`.
pub(crate) fn execute_sex<M: MemoryBus>(cpu: &mut CPU<M>, n: u8) {
    cpu.x = n;
}

/// Pops the `(X, P)` byte at `M(R(X))` and sets IE.
fn restore_context<M: MemoryBus>(cpu: &mut CPU<M>, ie: bool) {
    let saved = cpu.pointer_read();
    let x = cpu.x as usize;
    cpu.r[x] = cpu.r[x].wrapping_add(1);

    cpu.x = saved >> 4;
    cpu.p = saved & 0x0F;
    cpu.ie = ie;
}

/// RET (0x70): `X, P = M(R(X))`, `R(X) += 1`, `IE = 1`.
pub(crate) fn execute_ret<M: MemoryBus>(cpu: &mut CPU<M>) {
    restore_context(cpu, true);
}

/// DIS (0x71): `X, P = M(R(X))`, `R(X) += 1`, `IE = 0`.
pub(crate) fn execute_dis<M: MemoryBus>(cpu: &mut CPU<M>) {
    restore_context(cpu, false);
}

/// REQ (0x7A): `Q = 0`.
pub(crate) fn execute_req<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.q = false;
}

/// SEQ (0x7B): `Q = 1`.
pub(crate) fn execute_seq<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.q = true;
}

/// SAV (0x78) and MARK (0x79).
///
/// Both save interrupt context through T, which is not modelled. Continuing would
/// leave the stack the firmware expects half built, so the step fails instead.
pub(crate) fn execute_unsupported<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let mnemonic = OPCODE_TABLE[opcode as usize].mnemonic;
    log::warn!(
        "unsupported instruction {} at 0x{:04X}",
        mnemonic,
        cpu.pc().wrapping_sub(1)
    );

    Err(ExecutionError::UnsupportedInstruction { opcode, mnemonic })
}
