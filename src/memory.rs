//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations, and `FlatMemory`, a plain 64KB array covering the whole
//! 1802 address space.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 1802 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Addresses are `u16`, so the address space wraps by construction
//! - Images are copied in before execution starts

use std::path::Path;

use crate::LoadError;

/// Number of addressable bytes (the full 16-bit address space).
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: the 1802 has no bus error mechanism
///
/// # Examples
///
/// ```
/// use lib1802::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use lib1802::MemoryBus;
///
/// /// 16KB of ROM mirrored over the low half, RAM above it.
/// struct WordProcessorMemory {
///     rom: Vec<u8>,
///     ram: [u8; 0x8000],
/// }
///
/// impl MemoryBus for WordProcessorMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.rom[addr as usize % self.rom.len()]
///         } else {
///             self.ram[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr >= 0x8000 {
///             self.ram[(addr - 0x8000) as usize] = value;
///         }
///         // Writes to ROM are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Copies `image` into memory starting at `start`.
    ///
    /// Fails without writing anything if the image would run past the end of
    /// the address space.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib1802::{MemoryBus, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x0100, &[0xF8, 0x05]).unwrap();
    /// assert_eq!(mem.read(0x0101), 0x05);
    ///
    /// assert!(mem.load(0xFFFF, &[0x00, 0x00]).is_err());
    /// ```
    fn load(&mut self, start: u16, image: &[u8]) -> Result<(), LoadError> {
        if start as usize + image.len() > MEMORY_SIZE {
            return Err(LoadError::ImageTooLarge {
                start,
                len: image.len(),
            });
        }

        for (offset, &byte) in image.iter().enumerate() {
            self.write(start.wrapping_add(offset as u16), byte);
        }

        log::debug!("loaded {} byte image at 0x{:04X}", image.len(), start);
        Ok(())
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
/// Firmware images go to the bottom of the address space.
///
/// # Examples
///
/// ```
/// use lib1802::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0000, 0xC4); // NOP
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x0000);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Creates memory holding `image` at address 0x0000.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib1802::{FlatMemory, MemoryBus};
    ///
    /// let mem = FlatMemory::from_image(&[0x7B, 0x00]).unwrap();
    /// assert_eq!(mem.read(0x0000), 0x7B);
    /// assert_eq!(mem.read(0x0002), 0x00);
    /// ```
    pub fn from_image(image: &[u8]) -> Result<Self, LoadError> {
        let mut memory = Self::new();
        memory.load(0x0000, image)?;
        Ok(memory)
    }

    /// Reads a ROM image file and places it at address 0x0000.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let image = std::fs::read(path.as_ref())?;
        log::info!(
            "read ROM image {} ({} bytes)",
            path.as_ref().display(),
            image.len()
        );
        Self::from_image(&image)
    }

    /// Returns the whole address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn load(&mut self, start: u16, image: &[u8]) -> Result<(), LoadError> {
        let begin = start as usize;
        let end = begin + image.len();
        if end > MEMORY_SIZE {
            return Err(LoadError::ImageTooLarge {
                start,
                len: image.len(),
            });
        }

        self.data[begin..end].copy_from_slice(image);
        log::debug!("loaded {} byte image at 0x{:04X}", image.len(), start);
        Ok(())
    }
}
