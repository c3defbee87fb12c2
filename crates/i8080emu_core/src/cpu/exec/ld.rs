use crate::cpu::{Cpu, RegPair};

impl<P, I> Cpu<P, I> {
    /// MOV dst, src. Opcodes 0x40-0x7F except 0x76 (HLT).
    pub(super) fn exec_mov(&mut self, opcode: u8) -> u8 {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);
        let dst = self.location(opcode >> 3);
        let src = self.location(opcode);
        let value = self.read_loc(src);
        self.write_loc(dst, value);

        if dst.is_memory() || src.is_memory() {
            7
        } else {
            5
        }
    }

    pub(super) fn exec_mvi(&mut self, opcode: u8) -> u8 {
        let dst = self.location(opcode >> 3);
        let value = self.fetch8();
        self.write_loc(dst, value);
        if dst.is_memory() {
            10
        } else {
            7
        }
    }

    pub(super) fn exec_lxi(&mut self, opcode: u8) -> u8 {
        let value = self.fetch16();
        self.regs.set_pair(RegPair::from_opcode(opcode), value);
        10
    }

    pub(super) fn exec_sta(&mut self) -> u8 {
        let addr = self.fetch16();
        self.memory.write(addr, self.regs.a);
        13
    }

    pub(super) fn exec_lda(&mut self) -> u8 {
        let addr = self.fetch16();
        self.regs.a = self.memory.read(addr);
        13
    }

    /// STAX B / STAX D.
    pub(super) fn exec_stax(&mut self, opcode: u8) -> u8 {
        debug_assert!(matches!(opcode, 0x02 | 0x12));
        let addr = self.regs.pair(RegPair::from_opcode(opcode));
        self.memory.write(addr, self.regs.a);
        7
    }

    /// LDAX B / LDAX D.
    pub(super) fn exec_ldax(&mut self, opcode: u8) -> u8 {
        debug_assert!(matches!(opcode, 0x0A | 0x1A));
        let addr = self.regs.pair(RegPair::from_opcode(opcode));
        self.regs.a = self.memory.read(addr);
        7
    }

    /// SHLD a16: L to a16, H to a16+1.
    pub(super) fn exec_shld(&mut self) -> u8 {
        let addr = self.fetch16();
        self.memory.write_word(addr, self.regs.hl());
        16
    }

    /// LHLD a16: L from a16, H from a16+1.
    pub(super) fn exec_lhld(&mut self) -> u8 {
        let addr = self.fetch16();
        let value = self.memory.read_word(addr);
        self.regs.set_hl(value);
        16
    }

    pub(super) fn exec_xchg(&mut self) -> u8 {
        let hl = self.regs.hl();
        let de = self.regs.de();
        self.regs.set_hl(de);
        self.regs.set_de(hl);
        5
    }
}
