use crate::cpu::{Cpu, Flags, RegPair};

impl<P, I> Cpu<P, I> {
    /// PUSH B/D/H/PSW. For PSW, A goes to SP-1 and the flag byte to SP-2.
    pub(super) fn exec_push(&mut self, opcode: u8) -> u8 {
        let value = match opcode {
            0xF5 => u16::from_be_bytes([self.regs.a, self.flags.to_psw()]),
            _ => self.regs.pair(RegPair::from_opcode(opcode)),
        };
        self.push16(value);
        11
    }

    /// POP B/D/H/PSW.
    pub(super) fn exec_pop(&mut self, opcode: u8) -> u8 {
        let value = self.pop16();
        match opcode {
            0xF1 => {
                let [a, psw] = value.to_be_bytes();
                self.regs.a = a;
                self.flags = Flags::from_psw(psw);
            }
            _ => self.regs.set_pair(RegPair::from_opcode(opcode), value),
        }
        10
    }

    /// XTHL: exchange HL with the word on top of the stack. SP is unchanged.
    pub(super) fn exec_xthl(&mut self) -> u8 {
        let sp = self.regs.sp;
        let top = self.memory.read_word(sp);
        self.memory.write_word(sp, self.regs.hl());
        self.regs.set_hl(top);
        18
    }

    pub(super) fn exec_sphl(&mut self) -> u8 {
        self.regs.sp = self.regs.hl();
        5
    }
}
