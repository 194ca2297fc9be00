//! # Branch Instructions
//!
//! This module implements the two branch encodings:
//! - Short branches (0x30-0x3F): one operand byte replacing the low byte of `R(P)`,
//!   so the target always lies in the page holding the operand byte
//! - Long branches (0xC0-0xC3, 0xC9-0xCB): two operand bytes, high byte first,
//!   replacing all of `R(P)`
//!
//! In both groups the low three opcode bits choose the condition and bit 3 inverts it.
//! A branch that is not taken steps over its operand bytes. `SKP` (0x38) is the
//! inverted form of `BR`, so it never branches and just skips its one operand byte.

use super::Condition;
use crate::{ExternalFlag, MemoryBus, CPU};

/// Condition and sense selected by a short-branch opcode.
fn short_branch_condition(opcode: u8) -> (Condition, bool) {
    let condition = match opcode & 0x07 {
        0x0 => Condition::Always,
        0x1 => Condition::Q,
        0x2 => Condition::Zero,
        0x3 => Condition::DataFlag,
        _ => Condition::ExternalFlag(ExternalFlag::from_branch_opcode(opcode)),
    };
    (condition, opcode & 0x08 != 0)
}

/// Condition and sense selected by a long-branch opcode.
fn long_branch_condition(opcode: u8) -> (Condition, bool) {
    let condition = match opcode & 0x03 {
        0x0 => Condition::Always,
        0x1 => Condition::Q,
        0x2 => Condition::Zero,
        _ => Condition::DataFlag,
    };
    (condition, opcode & 0x08 != 0)
}

/// Executes BR, BQ, BZ, BDF, B1-B4, SKP, BNQ, BNZ, BNF, BN1-BN4.
///
/// Taken: `R(P).0 = M(R(P))`. Not taken: `R(P) += 1`.
///
/// Note the page is that of the operand byte, not of the opcode: a branch whose
/// opcode sits at 0x12FF reads its operand from 0x1300 and lands in page 0x13.
pub(crate) fn execute_short_branch<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let (condition, inverted) = short_branch_condition(opcode);

    if condition.holds(cpu) != inverted {
        let target = cpu.program_counter_read();
        let pc = cpu.pc();
        cpu.set_pc((pc & 0xFF00) | target as u16);
    } else {
        cpu.advance_program_counter();
    }
}

/// Executes LBR, LBQ, LBZ, LBDF, LBNQ, LBNZ, LBNF.
///
/// Taken: `R(P).1 = M(R(P))`, `R(P).0 = M(R(P) + 1)`. Not taken: `R(P) += 2`.
pub(crate) fn execute_long_branch<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    let (condition, inverted) = long_branch_condition(opcode);

    if condition.holds(cpu) != inverted {
        let high = cpu.fetch_immediate();
        let low = cpu.program_counter_read();
        cpu.set_pc(u16::from_be_bytes([high, low]));
    } else {
        cpu.advance_program_counter();
        cpu.advance_program_counter();
    }
}
