//! WebAssembly bindings for the lib1802 emulator.
//!
//! This module provides JavaScript-callable interfaces to the 1802 CPU emulator,
//! enabling browser-based execution of 1802 firmware images.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator1802;
