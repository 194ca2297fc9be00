//! # RCA 1802 CPU Emulator Core
//!
//! An instruction-level emulator of the RCA CDP1802 (COSMAC) 8-bit microprocessor,
//! precise enough to run unmodified firmware images one instruction at a time.
//!
//! This crate provides the processor state model, a trait-based memory bus
//! abstraction, the complete 256-opcode instruction set and a table-driven
//! opcode metadata system used by the disassembler.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib1802::{CPU, FlatMemory};
//!
//! // LDI 05 ; IDL
//! let memory = FlatMemory::from_image(&[0xF8, 0x05, 0x00]).unwrap();
//! let mut cpu = CPU::new(memory);
//!
//! cpu.step().unwrap();
//! assert_eq!(cpu.d(), 0x05);
//! assert_eq!(cpu.pc(), 0x0002);
//!
//! // IDL keeps the program counter on itself
//! cpu.step().unwrap();
//! assert_eq!(cpu.pc(), 0x0002);
//! ```
//!
//! ## Architecture
//!
//! - **Register file**: sixteen 16-bit registers; `P` selects the one acting as
//!   program counter and `X` the one acting as data pointer
//! - **Exhaustive dispatch**: every opcode byte maps to a handler, there is no
//!   invalid-opcode outcome
//! - **No output side effects**: execution is observed through `log` records and an
//!   optional per-step observer, never printed
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-execute cycle
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `addressing` - Program-counter and data-pointer access helpers
//! - `opcodes` - Opcode metadata table
//! - `disassembler` - Machine code to assembly text

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::OperandKind;
pub use cpu::{ExternalFlag, Registers, TraceEvent, CPU};
pub use disassembler::{disassemble, DisassemblyOptions, Instruction};
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{OpcodeMetadata, OPCODE_TABLE};

#[cfg(feature = "wasm")]
pub use wasm::Emulator1802;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The instruction saves interrupt context (`SAV`, `MARK`), which this
    /// emulator does not model.
    ///
    /// The program counter has already moved past the opcode byte; no other
    /// state was touched.
    #[error("instruction {mnemonic} (0x{opcode:02X}) is not supported")]
    UnsupportedInstruction {
        /// Opcode byte value
        opcode: u8,
        /// Instruction mnemonic
        mnemonic: &'static str,
    },
}

/// Errors that can occur while loading an image into memory.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The image does not fit between `start` and the end of the address space.
    #[error("image of {len} bytes does not fit at address 0x{start:04X}")]
    ImageTooLarge {
        /// Load address
        start: u16,
        /// Image length in bytes
        len: usize,
    },

    /// The image file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
