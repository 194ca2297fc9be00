//! # Input/Output Byte Transfer
//!
//! The 1802 moves bytes between memory and the data bus with the port number on
//! its N lines. What sits on a port is up to the environment, which reads and
//! drives the bus latch between steps.
//!
//! - OUT p (0x61-0x67): `BUS = M(R(X))`, `R(X) += 1`
//! - INP p (0x69-0x6F): `M(R(X)) = BUS`, `D = BUS`

use crate::{MemoryBus, CPU};

/// OUT p: put `M(R(X))` on the bus and advance `R(X)`.
pub(crate) fn execute_out<M: MemoryBus>(cpu: &mut CPU<M>, port: u8) {
    cpu.bus = cpu.pointer_read();
    log::trace!("OUT {}: bus=0x{:02X}", port, cpu.bus);

    let x = cpu.x as usize;
    cpu.r[x] = cpu.r[x].wrapping_add(1);
}

/// INP p: store the bus value at `M(R(X))` and in D.
pub(crate) fn execute_inp<M: MemoryBus>(cpu: &mut CPU<M>, port: u8) {
    let value = cpu.bus;
    log::trace!("INP {}: bus=0x{:02X}", port, value);

    cpu.pointer_write(value);
    cpu.d = value;
}
