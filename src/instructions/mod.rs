//! # 1802 Instruction Implementations
//!
//! This module contains the implementations of all 1802 instructions, organized by category.
//! Each instruction is a standalone function taking a mutable reference to the CPU. By the
//! time a handler runs, the opcode has been fetched and `R(P)` points at the byte after it.
//!
//! ## Categories
//!
//! - **register**: Register operations (INC, DEC, IRX, GLO, GHI, PLO, PHI)
//! - **memory_ref**: Memory reference (LDN, LDA, LDX, LDXA, LDI, STR, STXD)
//! - **logic**: Logic and shift operations (OR, AND, XOR, their immediates, SHR, SHRC, SHL, SHLC)
//! - **arithmetic**: Addition and subtraction (ADD, ADC, SD, SDB, SM, SMB and immediates)
//! - **branches**: Short and long branches (BR, BZ, ..., SKP, LBR, LBZ, ...)
//! - **skips**: Long skips (LSKP, LSZ, ..., NOP)
//! - **control**: Control instructions (IDL, SEP, SEX, RET, DIS, SAV, MARK, REQ, SEQ)
//! - **io**: Input/output byte transfer (OUT, INP)

pub mod arithmetic;
pub mod branches;
pub mod control;
pub mod io;
pub mod logic;
pub mod memory_ref;
pub mod register;
pub mod skips;

use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the instruction identified by `opcode`.
///
/// The match covers all 256 byte values without a wildcard arm, so the compiler
/// rejects any gap in the decoding.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> Result<(), ExecutionError> {
    let n = opcode & 0x0F;

    match opcode {
        0x00 => control::execute_idl(cpu),
        0x01..=0x0F => memory_ref::execute_ldn(cpu, n),
        0x10..=0x1F => register::execute_inc(cpu, n),
        0x20..=0x2F => register::execute_dec(cpu, n),
        0x30..=0x3F => branches::execute_short_branch(cpu, opcode),
        0x40..=0x4F => memory_ref::execute_lda(cpu, n),
        0x50..=0x5F => memory_ref::execute_str(cpu, n),
        0x60 => register::execute_irx(cpu),
        0x61..=0x67 => io::execute_out(cpu, n),
        0x68 => {}
        0x69..=0x6F => io::execute_inp(cpu, n & 0x07),
        0x70 => control::execute_ret(cpu),
        0x71 => control::execute_dis(cpu),
        0x72 => memory_ref::execute_ldxa(cpu),
        0x73 => memory_ref::execute_stxd(cpu),
        0x74 => arithmetic::execute_adc(cpu),
        0x75 => arithmetic::execute_sdb(cpu),
        0x76 => logic::execute_shrc(cpu),
        0x77 => arithmetic::execute_smb(cpu),
        0x78 | 0x79 => return control::execute_unsupported(cpu, opcode),
        0x7A => control::execute_req(cpu),
        0x7B => control::execute_seq(cpu),
        0x7C => arithmetic::execute_adci(cpu),
        0x7D => arithmetic::execute_sdbi(cpu),
        0x7E => logic::execute_shlc(cpu),
        0x7F => arithmetic::execute_smbi(cpu),
        0x80..=0x8F => register::execute_glo(cpu, n),
        0x90..=0x9F => register::execute_ghi(cpu, n),
        0xA0..=0xAF => register::execute_plo(cpu, n),
        0xB0..=0xBF => register::execute_phi(cpu, n),
        0xC0..=0xC3 | 0xC9..=0xCB => branches::execute_long_branch(cpu, opcode),
        0xC4 => skips::execute_nop(cpu),
        0xC5..=0xC8 | 0xCC..=0xCF => skips::execute_long_skip(cpu, opcode),
        0xD0..=0xDF => control::execute_sep(cpu, n),
        0xE0..=0xEF => control::execute_sex(cpu, n),
        0xF0 => memory_ref::execute_ldx(cpu),
        0xF1 => logic::execute_or(cpu),
        0xF2 => logic::execute_and(cpu),
        0xF3 => logic::execute_xor(cpu),
        0xF4 => arithmetic::execute_add(cpu),
        0xF5 => arithmetic::execute_sd(cpu),
        0xF6 => logic::execute_shr(cpu),
        0xF7 => arithmetic::execute_sm(cpu),
        0xF8 => memory_ref::execute_ldi(cpu),
        0xF9 => logic::execute_ori(cpu),
        0xFA => logic::execute_ani(cpu),
        0xFB => logic::execute_xri(cpu),
        0xFC => arithmetic::execute_adi(cpu),
        0xFD => arithmetic::execute_sdi(cpu),
        0xFE => logic::execute_shl(cpu),
        0xFF => arithmetic::execute_smi(cpu),
    }

    Ok(())
}

/// Conditions tested by branch and skip instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Condition {
    Always,
    Q,
    Zero,
    DataFlag,
    ExternalFlag(crate::ExternalFlag),
    InterruptsEnabled,
}

impl Condition {
    pub(crate) fn holds<M: MemoryBus>(self, cpu: &CPU<M>) -> bool {
        match self {
            Condition::Always => true,
            Condition::Q => cpu.q,
            Condition::Zero => cpu.d == 0,
            Condition::DataFlag => cpu.df,
            Condition::ExternalFlag(flag) => cpu.ef(flag),
            Condition::InterruptsEnabled => cpu.ie,
        }
    }
}
