use crate::cpu::{Cpu, RegPair};

impl<P, I> Cpu<P, I> {
    pub(super) fn exec_inr(&mut self, opcode: u8) -> u8 {
        let loc = self.location(opcode >> 3);
        let value = self.read_loc(loc);
        let result = self.alu_inr(value);
        self.write_loc(loc, result);
        if loc.is_memory() {
            10
        } else {
            5
        }
    }

    pub(super) fn exec_dcr(&mut self, opcode: u8) -> u8 {
        let loc = self.location(opcode >> 3);
        let value = self.read_loc(loc);
        let result = self.alu_dcr(value);
        self.write_loc(loc, result);
        if loc.is_memory() {
            10
        } else {
            5
        }
    }

    // INX/DCX leave every flag alone.

    pub(super) fn exec_inx(&mut self, opcode: u8) -> u8 {
        let pair = RegPair::from_opcode(opcode);
        let value = self.regs.pair(pair).wrapping_add(1);
        self.regs.set_pair(pair, value);
        5
    }

    pub(super) fn exec_dcx(&mut self, opcode: u8) -> u8 {
        let pair = RegPair::from_opcode(opcode);
        let value = self.regs.pair(pair).wrapping_sub(1);
        self.regs.set_pair(pair, value);
        5
    }
}
