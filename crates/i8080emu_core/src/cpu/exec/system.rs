use crate::cpu::Cpu;
use crate::devices::{InterruptController, PortBank};

// Instructions that only talk to the attached devices. The CPU state itself
// is left alone, apart from IN writing A when a port answers.

impl<P: PortBank, I: InterruptController> Cpu<P, I> {
    pub(super) fn exec_hlt(&mut self) -> u8 {
        log::trace!("HLT at 0x{:04x}", self.regs.pc.wrapping_sub(1));
        self.interrupts.halt();
        7
    }

    pub(super) fn exec_ei(&mut self) -> u8 {
        self.interrupts.set_enabled(true);
        4
    }

    pub(super) fn exec_di(&mut self) -> u8 {
        self.interrupts.set_enabled(false);
        4
    }

    /// RST n. The restart itself is left to the interrupt controller.
    pub(super) fn exec_rst(&mut self, opcode: u8) -> u8 {
        let vector = (opcode >> 3) & 0x07;
        log::trace!("RST {vector} at 0x{:04x}", self.regs.pc.wrapping_sub(1));
        self.interrupts.restart(vector);
        11
    }

    pub(super) fn exec_out(&mut self) -> u8 {
        let port = self.fetch8();
        self.ports.output(port, self.regs.a);
        10
    }

    pub(super) fn exec_in(&mut self) -> u8 {
        let port = self.fetch8();
        match self.ports.input(port) {
            Some(value) => self.regs.a = value,
            None => log::trace!("IN {port:#04x}: no device, A unchanged"),
        }
        10
    }
}
