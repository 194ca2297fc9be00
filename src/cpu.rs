//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 1802 processor state and
//! the fetch-execute cycle.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **D**: 8-bit accumulator
//! - **DF**: carry / not-borrow / shifted-out bit
//! - **R0-RF**: sixteen 16-bit scratchpad registers
//! - **P, X**: 4-bit selectors naming the program counter and data pointer registers
//! - **N, I**: low and high nibble of the last fetched opcode
//! - **B, T**: holding registers kept for completeness, unused by the instruction set
//!   implemented here
//! - **IE, Q**: interrupt-enable latch and output flip-flop
//! - **EF1-EF4, bus**: external flag inputs and data-bus latch shared with the
//!   environment
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction
//! - `run()`: Execute up to a number of instructions
//!
//! There is no intrinsic halt. `IDL` parks the program counter on itself, so a
//! driver keeps calling `step()` until it decides to stop.

use crate::{instructions, ExecutionError, LoadError, MemoryBus, OPCODE_TABLE};

/// One of the four external flag inputs tested by `B1`-`B4` / `BN1`-`BN4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalFlag {
    /// EF1, tested by `B1` / `BN1`
    Ef1,
    /// EF2, tested by `B2` / `BN2`
    Ef2,
    /// EF3, tested by `B3` / `BN3`
    Ef3,
    /// EF4, tested by `B4` / `BN4`
    Ef4,
}

impl ExternalFlag {
    /// Flag tested by a short-branch opcode `0x34`-`0x37` / `0x3C`-`0x3F`.
    pub(crate) fn from_branch_opcode(opcode: u8) -> Self {
        match opcode & 0x03 {
            0 => ExternalFlag::Ef1,
            1 => ExternalFlag::Ef2,
            2 => ExternalFlag::Ef3,
            _ => ExternalFlag::Ef4,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Snapshot of the processor registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Data register
    pub d: u8,
    /// Data flag
    pub df: bool,
    /// Auxiliary holding register
    pub b: u8,
    /// Scratchpad registers R0-RF
    pub r: [u16; 16],
    /// Program counter selector
    pub p: u8,
    /// Data pointer selector
    pub x: u8,
    /// Low nibble of the last opcode
    pub n: u8,
    /// High nibble of the last opcode
    pub i: u8,
    /// Saved X and P
    pub t: u8,
    /// Interrupt enable
    pub ie: bool,
    /// Output flip-flop
    pub q: bool,
}

/// Passed to the observer after every executed instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent {
    /// Address the opcode was fetched from
    pub address: u16,
    /// Opcode byte
    pub opcode: u8,
    /// Register state after the instruction completed
    pub registers: Registers,
    /// Data bus latch after the instruction completed
    pub bus: u8,
}

type Observer = Box<dyn FnMut(&TraceEvent)>;

/// 1802 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use lib1802::{CPU, FlatMemory};
///
/// let cpu = CPU::new(FlatMemory::new());
///
/// assert_eq!(cpu.pc(), 0x0000);
/// assert_eq!(cpu.p(), 0);
/// assert_eq!(cpu.x(), 0);
/// assert!(cpu.ie());
/// assert!(!cpu.q());
/// ```
pub struct CPU<M: MemoryBus> {
    /// Data register (accumulator)
    pub(crate) d: u8,

    /// Data flag (ALU carry)
    pub(crate) df: bool,

    /// Auxiliary holding register
    pub(crate) b: u8,

    /// Scratchpad registers
    pub(crate) r: [u16; 16],

    /// Selects the program counter register
    pub(crate) p: u8,

    /// Selects the data pointer register
    pub(crate) x: u8,

    /// Low-order instruction digit
    pub(crate) n: u8,

    /// High-order instruction digit
    pub(crate) i: u8,

    /// Old X, P after interrupt (X is high nibble)
    pub(crate) t: u8,

    /// Interrupt enable
    pub(crate) ie: bool,

    /// Output flip-flop
    pub(crate) q: bool,

    /// External flags EF1-EF4, driven by the environment
    pub(crate) ef: [bool; 4],

    /// Data bus latch
    pub(crate) bus: u8,

    /// Instructions executed since construction
    pub(crate) instructions: u64,

    /// Memory bus implementation
    pub(crate) memory: M,

    observer: Option<Observer>,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and applies `reset()`.
    ///
    /// Registers not touched by reset start at zero.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            d: 0x00,
            df: false,
            b: 0x00,
            r: [0; 16],
            p: 0,
            x: 0,
            n: 0,
            i: 0,
            t: 0x00,
            ie: false,
            q: false,
            ef: [false; 4],
            bus: 0x00,
            instructions: 0,
            memory,
            observer: None,
        };
        cpu.reset();
        cpu
    }

    /// Puts the processor into its power-on state.
    ///
    /// `I`, `N`, `Q`, `X`, `P` and `R0` are cleared, interrupts are enabled and
    /// the bus latch is zeroed. Memory and the remaining registers are left
    /// alone, so execution restarts at 0x0000 with `R0` as program counter.
    pub fn reset(&mut self) {
        self.i = 0;
        self.n = 0;
        self.q = false;
        self.ie = true;
        self.bus = 0x00;
        self.x = 0;
        self.p = 0;
        self.r[0] = 0x0000;
    }

    /// Executes one instruction.
    ///
    /// 1. Fetch the opcode at `R(P)`
    /// 2. Advance `R(P)`
    /// 3. Latch the opcode nibbles into `I` and `N`
    /// 4. Run the handler, which may consume operand bytes or replace `R(P)`
    /// 5. Notify the observer, if any
    ///
    /// # Returns
    ///
    /// - `Ok(())` after the instruction completed
    /// - `Err(ExecutionError::UnsupportedInstruction { .. })` for `SAV` / `MARK`
    ///
    /// # Examples
    ///
    /// ```
    /// use lib1802::{CPU, FlatMemory};
    ///
    /// // SEQ
    /// let mut cpu = CPU::new(FlatMemory::from_image(&[0x7B]).unwrap());
    /// cpu.step().unwrap();
    /// assert!(cpu.q());
    /// assert_eq!(cpu.pc(), 0x0001);
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let address = self.pc();
        let opcode = self.program_counter_read();
        self.advance_program_counter();

        self.i = opcode >> 4;
        self.n = opcode & 0x0F;

        log::trace!(
            "{:04X}: {:02X} {}",
            address,
            opcode,
            OPCODE_TABLE[opcode as usize].mnemonic
        );

        instructions::execute(self, opcode)?;
        self.instructions += 1;

        if self.observer.is_some() {
            let event = TraceEvent {
                address,
                opcode,
                registers: self.registers(),
                bus: self.bus,
            };
            if let Some(observer) = self.observer.as_mut() {
                observer(&event);
            }
        }

        Ok(())
    }

    /// Executes up to `max_instructions` instructions.
    ///
    /// Stops early on the first error. Returns the number of instructions executed.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib1802::{CPU, FlatMemory};
    ///
    /// // INC 1 ; BR 00
    /// let mut cpu = CPU::new(FlatMemory::from_image(&[0x11, 0x30, 0x00]).unwrap());
    /// assert_eq!(cpu.run(10).unwrap(), 10);
    /// assert_eq!(cpu.register(1), 5);
    /// ```
    pub fn run(&mut self, max_instructions: u64) -> Result<u64, ExecutionError> {
        for executed in 0..max_instructions {
            if let Err(e) = self.step() {
                log::debug!("run stopped after {} instructions: {}", executed, e);
                return Err(e);
            }
        }

        Ok(max_instructions)
    }

    /// Copies a firmware image to address 0x0000.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.memory.load(0x0000, image)
    }

    /// Installs a callback invoked after every successfully executed instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use lib1802::{CPU, FlatMemory};
    ///
    /// let seen = Rc::new(RefCell::new(Vec::new()));
    /// let sink = Rc::clone(&seen);
    ///
    /// let mut cpu = CPU::new(FlatMemory::from_image(&[0xF8, 0x2A, 0xC4]).unwrap());
    /// cpu.set_observer(Box::new(move |event| {
    ///     sink.borrow_mut().push((event.address, event.opcode, event.registers.d));
    /// }));
    /// cpu.run(2).unwrap();
    ///
    /// assert_eq!(*seen.borrow(), vec![(0x0000, 0xF8, 0x2A), (0x0002, 0xC4, 0x2A)]);
    /// ```
    pub fn set_observer(&mut self, observer: Box<dyn FnMut(&TraceEvent)>) {
        self.observer = Some(observer);
    }

    /// Removes the observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Captures the current register state.
    pub fn registers(&self) -> Registers {
        Registers {
            d: self.d,
            df: self.df,
            b: self.b,
            r: self.r,
            p: self.p,
            x: self.x,
            n: self.n,
            i: self.i,
            t: self.t,
            ie: self.ie,
            q: self.q,
        }
    }

    // ========== Memory Access ==========

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Register Getters ==========

    /// Returns the data register.
    pub fn d(&self) -> u8 {
        self.d
    }

    /// Returns the data flag.
    pub fn df(&self) -> bool {
        self.df
    }

    /// Returns the auxiliary holding register.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Returns scratchpad register `R(index)`. Only the low nibble of `index` is used.
    pub fn register(&self, index: u8) -> u16 {
        self.r[(index & 0x0F) as usize]
    }

    /// Returns the program counter, i.e. `R(P)`.
    pub fn pc(&self) -> u16 {
        self.r[self.p as usize]
    }

    /// Returns the data pointer, i.e. `R(X)`.
    pub fn data_pointer(&self) -> u16 {
        self.r[self.x as usize]
    }

    /// Returns the program counter selector.
    pub fn p(&self) -> u8 {
        self.p
    }

    /// Returns the data pointer selector.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the low nibble of the last fetched opcode.
    pub fn n(&self) -> u8 {
        self.n
    }

    /// Returns the high nibble of the last fetched opcode.
    pub fn i(&self) -> u8 {
        self.i
    }

    /// Returns the saved X/P byte (X in the high nibble).
    pub fn t(&self) -> u8 {
        self.t
    }

    /// Returns true if interrupts are enabled.
    pub fn ie(&self) -> bool {
        self.ie
    }

    /// Returns the output flip-flop.
    pub fn q(&self) -> bool {
        self.q
    }

    /// Returns the level of an external flag input.
    pub fn ef(&self, flag: ExternalFlag) -> bool {
        self.ef[flag.index()]
    }

    /// Returns the data bus latch, i.e. the last byte put there by `OUT` or the
    /// environment.
    pub fn bus(&self) -> u8 {
        self.bus
    }

    /// Returns the number of instructions executed since construction.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    // ========== Register Setters ==========

    /// Sets the data register.
    pub fn set_d(&mut self, value: u8) {
        self.d = value;
    }

    /// Sets the data flag.
    pub fn set_df(&mut self, value: bool) {
        self.df = value;
    }

    /// Sets the auxiliary holding register.
    pub fn set_b(&mut self, value: u8) {
        self.b = value;
    }

    /// Sets scratchpad register `R(index)`. Only the low nibble of `index` is used.
    pub fn set_register(&mut self, index: u8, value: u16) {
        self.r[(index & 0x0F) as usize] = value;
    }

    /// Sets `R(P)`.
    pub fn set_pc(&mut self, value: u16) {
        self.r[self.p as usize] = value;
    }

    /// Selects the program counter register. Only the low nibble is used.
    pub fn set_p(&mut self, value: u8) {
        self.p = value & 0x0F;
    }

    /// Selects the data pointer register. Only the low nibble is used.
    pub fn set_x(&mut self, value: u8) {
        self.x = value & 0x0F;
    }

    /// Sets the saved X/P byte.
    pub fn set_t(&mut self, value: u8) {
        self.t = value;
    }

    /// Enables or disables interrupts.
    pub fn set_ie(&mut self, value: bool) {
        self.ie = value;
    }

    /// Sets the output flip-flop.
    pub fn set_q(&mut self, value: bool) {
        self.q = value;
    }

    /// Drives an external flag input. The environment sets these between steps.
    pub fn set_ef(&mut self, flag: ExternalFlag, level: bool) {
        self.ef[flag.index()] = level;
    }

    /// Places a byte on the data bus for the next `INP`.
    pub fn set_bus(&mut self, value: u8) {
        self.bus = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_cpu_initialization() {
        let cpu = CPU::new(FlatMemory::new());

        assert_eq!(cpu.pc(), 0x0000);
        assert_eq!(cpu.p(), 0);
        assert_eq!(cpu.x(), 0);
        assert_eq!(cpu.n(), 0);
        assert_eq!(cpu.i(), 0);
        assert_eq!(cpu.d(), 0x00);
        assert_eq!(cpu.bus(), 0x00);
        assert_eq!(cpu.instructions(), 0);
        assert!(cpu.ie());
        assert!(!cpu.q());
        assert!(!cpu.df());
    }

    #[test]
    fn test_reset_preserves_memory_and_other_registers() {
        let mut cpu = CPU::new(FlatMemory::from_image(&[0x7B]).unwrap());
        cpu.set_register(0, 0x1234);
        cpu.set_register(5, 0xBEEF);
        cpu.set_p(5);
        cpu.set_x(7);
        cpu.set_q(true);
        cpu.set_ie(false);
        cpu.set_bus(0x99);
        cpu.set_d(0x42);

        cpu.reset();

        assert_eq!(cpu.p(), 0);
        assert_eq!(cpu.x(), 0);
        assert_eq!(cpu.register(0), 0x0000);
        assert_eq!(cpu.register(5), 0xBEEF);
        assert_eq!(cpu.d(), 0x42);
        assert_eq!(cpu.bus(), 0x00);
        assert!(cpu.ie());
        assert!(!cpu.q());
        assert_eq!(cpu.memory().read(0x0000), 0x7B);
    }

    #[test]
    fn test_step_latches_opcode_nibbles() {
        // GLO A
        let mut cpu = CPU::new(FlatMemory::from_image(&[0x8A]).unwrap());
        cpu.step().unwrap();
        assert_eq!(cpu.i(), 0x8);
        assert_eq!(cpu.n(), 0xA);
    }

    #[test]
    fn test_pc_is_view_of_selected_register() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_register(3, 0x0300);
        cpu.set_p(3);
        assert_eq!(cpu.pc(), 0x0300);

        cpu.set_pc(0x0310);
        assert_eq!(cpu.register(3), 0x0310);
        assert_eq!(cpu.register(0), 0x0000);
    }

    #[test]
    fn test_selectors_are_four_bits() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_p(0x1F);
        cpu.set_x(0x23);
        assert_eq!(cpu.p(), 0x0F);
        assert_eq!(cpu.x(), 0x03);
    }

    #[test]
    fn test_run_counts_instructions() {
        let mut cpu = CPU::new(FlatMemory::new()); // all IDL
        assert_eq!(cpu.run(25).unwrap(), 25);
        assert_eq!(cpu.instructions(), 25);
        assert_eq!(cpu.pc(), 0x0000);
    }

    #[test]
    fn test_run_stops_on_unsupported_instruction() {
        // NOP ; NOP ; SAV
        let mut cpu = CPU::new(FlatMemory::from_image(&[0xC4, 0xC4, 0x78]).unwrap());
        let result = cpu.run(10);

        assert_eq!(
            result,
            Err(ExecutionError::UnsupportedInstruction {
                opcode: 0x78,
                mnemonic: "SAV"
            })
        );
        assert_eq!(cpu.instructions(), 2);
        assert_eq!(cpu.pc(), 0x0003);
    }

    #[test]
    fn test_external_flags() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_ef(ExternalFlag::Ef3, true);
        assert!(cpu.ef(ExternalFlag::Ef3));
        assert!(!cpu.ef(ExternalFlag::Ef1));
        assert_eq!(ExternalFlag::from_branch_opcode(0x36), ExternalFlag::Ef3);
        assert_eq!(ExternalFlag::from_branch_opcode(0x3F), ExternalFlag::Ef4);
    }
}
