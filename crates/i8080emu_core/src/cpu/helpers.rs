use super::regs::{Location, Reg};
use super::Cpu;

impl<P, I> Cpu<P, I> {
    /// Resolve a 3-bit operand field to a location.
    ///
    /// The encoding is the standard 8080 order used by opcode tables:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=M (byte at HL), 7=A.
    #[inline]
    pub(super) fn location(&self, code: u8) -> Location {
        match code & 0x07 {
            0 => Location::Reg(Reg::B),
            1 => Location::Reg(Reg::C),
            2 => Location::Reg(Reg::D),
            3 => Location::Reg(Reg::E),
            4 => Location::Reg(Reg::H),
            5 => Location::Reg(Reg::L),
            6 => Location::Mem(self.regs.hl()),
            _ => Location::Reg(Reg::A),
        }
    }

    #[inline]
    pub(super) fn read_loc(&self, loc: Location) -> u8 {
        match loc {
            Location::Reg(reg) => self.regs.get(reg),
            Location::Mem(addr) => self.memory.read(addr),
        }
    }

    #[inline]
    pub(super) fn write_loc(&mut self, loc: Location, value: u8) {
        match loc {
            Location::Reg(reg) => self.regs.set(reg, value),
            Location::Mem(addr) => self.memory.write(addr, value),
        }
    }

    #[inline]
    pub(super) fn fetch8(&mut self) -> u8 {
        let value = self.memory.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    #[inline]
    pub(super) fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8();
        let hi = self.fetch8();
        u16::from_le_bytes([lo, hi])
    }

    /// Push a word: high byte at SP-1, low byte at SP-2.
    #[inline]
    pub(super) fn push16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop16(&mut self) -> u16 {
        let lo = self.memory.read(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = self.memory.read(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_le_bytes([lo, hi])
    }
}
