//! Intel 8080 CPU core.
//!
//! [`Cpu`] owns the register file, the flags, SP/PC and the full 64 KiB
//! address space. Callers load a program with [`Cpu::load`] (or byte by byte
//! with [`Cpu::write`]) and then drive execution one instruction at a time
//! with [`Cpu::step`], which returns the instruction's cycle cost.
//!
//! Interrupt and I/O instructions are routed to the [`PortBank`] and
//! [`InterruptController`] capabilities. The default [`Detached`] devices
//! ignore them, so EI/DI/IN/OUT/RST/HLT only consume their cycles.

pub mod cpu;
pub mod devices;
pub mod error;
pub mod memory;

pub use cpu::{Cpu, Flags, Psw, Reg, RegPair, Registers};
pub use devices::{Detached, InterruptController, PortBank};
pub use error::{Error, Result};
pub use memory::Memory;

/// Size of the 8080 address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Program counter after reset. CP/M-style images are loaded here.
pub const RESET_PC: u16 = 0x0100;
