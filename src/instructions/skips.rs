//! # Skip Instructions
//!
//! Long skips test a condition and, when it holds, step `R(P)` over the next two
//! bytes. They have no operand and never touch memory.
//!
//! - LSKP (0xC8): unconditional
//! - LSZ / LSNZ, LSDF / LSNF, LSQ / LSNQ: D zero, DF, Q and their negations
//! - LSIE (0xCC): interrupts enabled
//! - NOP (0xC4): sits in the same opcode row and does nothing

use super::Condition;
use crate::{MemoryBus, CPU};

/// Condition and sense selected by a long-skip opcode.
fn long_skip_condition(opcode: u8) -> (Condition, bool) {
    match opcode {
        0xC5 => (Condition::Q, true),
        0xC6 => (Condition::Zero, true),
        0xC7 => (Condition::DataFlag, true),
        0xCC => (Condition::InterruptsEnabled, false),
        0xCD => (Condition::Q, false),
        0xCE => (Condition::Zero, false),
        0xCF => (Condition::DataFlag, false),
        _ => (Condition::Always, false),
    }
}

/// Executes LSKP, LSNQ, LSNZ, LSNF, LSIE, LSQ, LSZ, LSDF.
pub(crate) fn execute_long_skip<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let (condition, inverted) = long_skip_condition(opcode);

    if condition.holds(cpu) != inverted {
        cpu.advance_program_counter();
        cpu.advance_program_counter();
    }
}

/// NOP (0xC4).
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>) {}
