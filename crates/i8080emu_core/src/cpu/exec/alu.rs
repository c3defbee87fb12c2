use crate::cpu::{Cpu, RegPair};

impl<P, I> Cpu<P, I> {
    pub(super) fn exec_alu_reg_group(&mut self, opcode: u8) -> u8 {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let src = self.location(opcode);
        let value = self.read_loc(src);
        self.alu_dispatch(opcode, value);

        if src.is_memory() {
            7
        } else {
            4
        }
    }

    pub(super) fn exec_alu_imm(&mut self, opcode: u8) -> u8 {
        let value = self.fetch8();
        self.alu_dispatch(opcode, value);
        7
    }

    /// Bits 3-5 select the operation in both the register and the
    /// immediate ALU groups.
    fn alu_dispatch(&mut self, opcode: u8, value: u8) {
        match (opcode >> 3) & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cmp(value),
        }
    }

    pub(super) fn exec_rotate_a(&mut self, opcode: u8) -> u8 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));
        let a = self.regs.a;

        match opcode {
            0x07 => {
                // RLC: bit 7 to CY and bit 0.
                self.regs.a = a.rotate_left(1);
                self.flags.cy = a & 0x80 != 0;
            }
            0x0F => {
                // RRC: bit 0 to CY and bit 7.
                self.regs.a = a.rotate_right(1);
                self.flags.cy = a & 0x01 != 0;
            }
            0x17 => {
                // RAL: rotate left through CY.
                self.regs.a = (a << 1) | u8::from(self.flags.cy);
                self.flags.cy = a & 0x80 != 0;
            }
            _ => {
                // RAR: rotate right through CY.
                self.regs.a = (a >> 1) | (u8::from(self.flags.cy) << 7);
                self.flags.cy = a & 0x01 != 0;
            }
        }

        4
    }

    pub(super) fn exec_dad(&mut self, opcode: u8) -> u8 {
        let value = self.regs.pair(RegPair::from_opcode(opcode));
        self.alu_dad(value);
        10
    }

    pub(super) fn exec_daa(&mut self) -> u8 {
        self.alu_daa();
        4
    }

    pub(super) fn exec_cma(&mut self) -> u8 {
        self.regs.a = !self.regs.a;
        4
    }

    pub(super) fn exec_stc(&mut self) -> u8 {
        self.flags.cy = true;
        4
    }

    pub(super) fn exec_cmc(&mut self) -> u8 {
        self.flags.cy = !self.flags.cy;
        4
    }
}
