//! WASM API for the 1802 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection,
//! external flag and bus access, and disassembly.

use crate::disassembler::disassembly_window;
use crate::disassembler::formatter::format_instruction;
use crate::{disassemble, DisassemblyOptions, ExternalFlag, FlatMemory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Result of disassembly operation
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator1802 {
    cpu: CPU<FlatMemory>,
}

fn external_flag(flag: u8) -> Result<ExternalFlag, JsError> {
    match flag {
        1 => Ok(ExternalFlag::Ef1),
        2 => Ok(ExternalFlag::Ef2),
        3 => Ok(ExternalFlag::Ef3),
        4 => Ok(ExternalFlag::Ef4),
        _ => Err(JsError::new(&format!("no external flag EF{}", flag))),
    }
}

#[wasm_bindgen]
impl Emulator1802 {
    /// Create a new emulator with 64KB of RAM.
    ///
    /// `on_output` is called as `on_output(port, byte)` after every OUT instruction.
    #[wasm_bindgen(constructor)]
    pub fn new(on_output: js_sys::Function) -> Self {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_observer(Box::new(move |event| {
            if (0x61..=0x67).contains(&event.opcode) {
                let port = JsValue::from(event.opcode & 0x07);
                let byte = JsValue::from(event.bus);
                let _ = on_output.call2(&JsValue::NULL, &port, &byte);
            }
        }));

        Emulator1802 { cpu }
    }

    /// Copy a firmware image to address 0x0000
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), JsError> {
        self.cpu
            .load_image(image)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu.step().map_err(|e| JsError::new(&e.to_string()))
    }

    /// Execute up to `count` instructions and return how many ran
    pub fn run(&mut self, count: u32) -> Result<u32, JsError> {
        self.cpu
            .run(count as u64)
            .map(|n| n as u32)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Reset the CPU, keeping memory
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn d(&self) -> u8 {
        self.cpu.d()
    }

    #[wasm_bindgen(getter)]
    pub fn df(&self) -> bool {
        self.cpu.df()
    }

    #[wasm_bindgen(getter)]
    pub fn p(&self) -> u8 {
        self.cpu.p()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn q(&self) -> bool {
        self.cpu.q()
    }

    #[wasm_bindgen(getter)]
    pub fn ie(&self) -> bool {
        self.cpu.ie()
    }

    #[wasm_bindgen(getter)]
    pub fn instructions(&self) -> f64 {
        self.cpu.instructions() as f64 // Convert u64 to f64 for JavaScript
    }

    /// Read scratchpad register R(index)
    pub fn register(&self, index: u8) -> u16 {
        self.cpu.register(index)
    }

    // External interface

    /// Drive external flag EF1-EF4
    pub fn set_ef(&mut self, flag: u8, level: bool) -> Result<(), JsError> {
        self.cpu.set_ef(external_flag(flag)?, level);
        Ok(())
    }

    /// Current data bus latch
    #[wasm_bindgen(getter)]
    pub fn bus(&self) -> u8 {
        self.cpu.bus()
    }

    /// Place a byte on the data bus for the next INP
    pub fn set_bus(&mut self, value: u8) {
        self.cpu.set_bus(value);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as usize) << 8;
        self.cpu.memory().as_slice()[start..start + 256].to_vec()
    }

    /// Disassemble memory starting at an address
    pub fn disassemble(&self, start_addr: u16, num_instructions: u32) -> Vec<JsValue> {
        let window = disassembly_window(start_addr, num_instructions);
        let memory = &self.cpu.memory().as_slice()[window];

        let opts = DisassemblyOptions {
            start_address: start_addr,
            hex_dump: false,
        };

        disassemble(memory, opts)
            .iter()
            .take(num_instructions as usize)
            .map(|instr| {
                let mut bytes = vec![instr.opcode];
                if instr.mnemonic != ".byte" {
                    bytes.extend_from_slice(&instr.operand_bytes);
                }

                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes,
                    text: format_instruction(instr),
                })
            })
            .collect()
    }
}
