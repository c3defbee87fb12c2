//! Capabilities the instruction engine calls into for I/O and interrupts.
//!
//! The core does not model any 8080 peripheral. IN/OUT are forwarded to a
//! [`PortBank`]; EI/DI/HLT/RST are forwarded to an [`InterruptController`].
//! Both traits have no-op defaults so a machine only overrides what it wires.

/// I/O port space reached through the IN and OUT instructions.
pub trait PortBank {
    /// Value driven onto the data bus by `IN port`.
    ///
    /// `None` means nothing answers on that port and A is left untouched.
    fn input(&mut self, _port: u8) -> Option<u8> {
        None
    }

    /// Called by `OUT port` with the current accumulator.
    fn output(&mut self, _port: u8, _value: u8) {}
}

/// Interrupt-related side of the CPU: the INTE flip-flop, HLT and RST.
pub trait InterruptController {
    /// EI (`true`) or DI (`false`).
    fn set_enabled(&mut self, _enabled: bool) {}

    /// HLT was executed.
    fn halt(&mut self) {}

    /// `RST n` was executed; `vector` is `n` (0..=7).
    fn restart(&mut self, _vector: u8) {}
}

/// No devices attached. Every I/O and interrupt instruction is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct Detached;

impl PortBank for Detached {}

impl InterruptController for Detached {}
