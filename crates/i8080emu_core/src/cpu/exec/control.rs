use crate::cpu::Cpu;

impl<P, I> Cpu<P, I> {
    pub(super) fn exec_jmp(&mut self) -> u8 {
        let addr = self.fetch16();
        self.regs.pc = addr;
        10
    }

    /// Jcc a16. Costs 10 cycles whether or not the jump is taken.
    pub(super) fn exec_jcc(&mut self, opcode: u8) -> u8 {
        let addr = self.fetch16();
        if self.flags.condition(opcode) {
            self.regs.pc = addr;
        }
        10
    }

    pub(super) fn exec_call(&mut self) -> u8 {
        let addr = self.fetch16();
        self.call(addr);
        17
    }

    pub(super) fn exec_ccc(&mut self, opcode: u8) -> u8 {
        let addr = self.fetch16();
        if self.flags.condition(opcode) {
            self.call(addr);
            17
        } else {
            11
        }
    }

    pub(super) fn exec_ret(&mut self) -> u8 {
        self.regs.pc = self.pop16();
        10
    }

    pub(super) fn exec_rcc(&mut self, opcode: u8) -> u8 {
        if self.flags.condition(opcode) {
            self.regs.pc = self.pop16();
            11
        } else {
            5
        }
    }

    pub(super) fn exec_pchl(&mut self) -> u8 {
        self.regs.pc = self.regs.hl();
        5
    }

    /// PC already points past the operand, so it is the return address.
    fn call(&mut self, addr: u16) {
        self.push16(self.regs.pc);
        self.regs.pc = addr;
    }
}
