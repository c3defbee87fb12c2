use bitflags::bitflags;

bitflags! {
    /// Bit layout of the flag byte pushed by `PUSH PSW`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Psw: u8 {
        const SIGN = 0x80;
        const ZERO = 0x40;
        const AUX_CARRY = 0x10;
        const PARITY = 0x04;
        /// Bit 1 always reads as 1 on the 8080. Bits 3 and 5 are always 0.
        const ALWAYS_ONE = 0x02;
        const CARRY = 0x01;
    }
}

/// Condition flags of the 8080.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// Zero.
    pub z: bool,
    /// Sign, bit 7 of the result.
    pub s: bool,
    /// Parity, set when the result has an even number of 1 bits.
    pub p: bool,
    /// Carry (or borrow) out of bit 7.
    pub cy: bool,
    /// Auxiliary carry (or borrow) out of bit 3.
    pub ac: bool,
}

impl Flags {
    /// Pack into the PSW byte layout.
    pub fn to_psw(self) -> u8 {
        let mut psw = Psw::ALWAYS_ONE;
        psw.set(Psw::SIGN, self.s);
        psw.set(Psw::ZERO, self.z);
        psw.set(Psw::AUX_CARRY, self.ac);
        psw.set(Psw::PARITY, self.p);
        psw.set(Psw::CARRY, self.cy);
        psw.bits()
    }

    /// Unpack a PSW byte. Unused bits are ignored.
    pub fn from_psw(value: u8) -> Self {
        let psw = Psw::from_bits_truncate(value);
        Self {
            z: psw.contains(Psw::ZERO),
            s: psw.contains(Psw::SIGN),
            p: psw.contains(Psw::PARITY),
            cy: psw.contains(Psw::CARRY),
            ac: psw.contains(Psw::AUX_CARRY),
        }
    }

    /// Update Z, S and P from an 8-bit result.
    #[inline]
    pub(crate) fn set_zsp(&mut self, value: u8) {
        self.z = value == 0;
        self.s = value & 0x80 != 0;
        self.p = value.count_ones() % 2 == 0;
    }

    /// Evaluate the condition encoded in bits 3-5 of a Jcc/Ccc/Rcc opcode.
    ///
    /// 0=NZ 1=Z 2=NC 3=C 4=PO 5=PE 6=P 7=M.
    #[inline]
    pub fn condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x07 {
            0 => !self.z,
            1 => self.z,
            2 => !self.cy,
            3 => self.cy,
            4 => !self.p,
            5 => self.p,
            6 => !self.s,
            _ => self.s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn psw_layout() {
        let flags = Flags {
            z: true,
            s: true,
            p: true,
            cy: true,
            ac: true,
        };
        assert_eq!(flags.to_psw(), 0xD7);
        assert_eq!(Flags::default().to_psw(), 0x02);
        assert_eq!(Flags::from_psw(0xD7), flags);
        assert_eq!(Flags::from_psw(0x28), Flags::default());
    }

    #[test]
    fn zsp_from_result() {
        let mut flags = Flags::default();
        flags.set_zsp(0x00);
        assert!(flags.z && !flags.s && flags.p);
        flags.set_zsp(0x80);
        assert!(!flags.z && flags.s && !flags.p);
        flags.set_zsp(0x03);
        assert!(!flags.z && !flags.s && flags.p);
        flags.set_zsp(0x07);
        assert!(!flags.p);
    }

    #[test]
    fn condition_codes() {
        let flags = Flags {
            z: true,
            s: false,
            p: true,
            cy: false,
            ac: false,
        };
        // JNZ, JZ, JNC, JC, JPO, JPE, JP, JM
        let taken: Vec<bool> = [0xC2u8, 0xCA, 0xD2, 0xDA, 0xE2, 0xEA, 0xF2, 0xFA]
            .iter()
            .map(|&op| flags.condition(op))
            .collect();
        assert_eq!(taken, [false, true, true, false, false, true, true, false]);
    }
}
