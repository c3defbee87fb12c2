//! Flag rules, one per instruction category.
//!
//! - ADD/ADC/SUB/SBB/CMP: Z, S, P from the result; CY is the carry (borrow)
//!   out of bit 7; AC is the carry (borrow) out of bit 3.
//! - ANA/XRA/ORA: Z, S, P from the result; CY and AC cleared.
//! - INR/DCR: Z, S, P and AC as for ADD/SUB by one; CY untouched.
//! - DAD: CY is the carry out of bit 15; nothing else changes.
//! - DAA: Z, S, P from the result; AC from the low correction; CY set by
//!   the high correction, otherwise unchanged.

use super::Cpu;

impl<P, I> Cpu<P, I> {
    /// ADD/ADC: `A <- A + value (+ CY)`.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.flags.cy);

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = a as u16 + value as u16 + carry_in as u16;
        let result = full as u8;

        self.flags.set_zsp(result);
        self.flags.cy = full > 0xFF;
        self.flags.ac = half > 0x0F;
        self.regs.a = result;
    }

    /// SUB/SBB: `A <- A - value (- CY)`.
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        self.regs.a = self.subtract(value, use_carry);
    }

    /// CMP: flags of `A - value`, A unchanged.
    #[inline]
    pub(super) fn alu_cmp(&mut self, value: u8) {
        self.subtract(value, false);
    }

    /// AC is the borrow out of bit 3, the inverse of the 8080's `A + !B + 1` carry.
    fn subtract(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let borrow_in = i16::from(use_carry && self.flags.cy);

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow_in;
        let full = a as i16 - value as i16 - borrow_in;
        let result = full as u8;

        self.flags.set_zsp(result);
        self.flags.cy = full < 0;
        self.flags.ac = half < 0;
        result
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        self.logical(self.regs.a & value);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        self.logical(self.regs.a ^ value);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        self.logical(self.regs.a | value);
    }

    fn logical(&mut self, result: u8) {
        self.flags.set_zsp(result);
        self.flags.cy = false;
        self.flags.ac = false;
        self.regs.a = result;
    }

    /// INR helper. CY is not affected.
    #[inline]
    pub(super) fn alu_inr(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.flags.set_zsp(result);
        self.flags.ac = value & 0x0F == 0x0F;
        result
    }

    /// DCR helper. CY is not affected.
    #[inline]
    pub(super) fn alu_dcr(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.flags.set_zsp(result);
        self.flags.ac = value & 0x0F == 0x00;
        result
    }

    /// DAD helper: `HL <- HL + value`, only CY is affected.
    #[inline]
    pub(super) fn alu_dad(&mut self, value: u16) {
        let full = self.regs.hl() as u32 + value as u32;
        self.flags.cy = full > 0xFFFF;
        self.regs.set_hl(full as u16);
    }

    /// Decimal adjust the accumulator.
    ///
    /// Adds 0x06 when the low nibble exceeds 9 or AC is set, and 0x60 when
    /// the high nibble exceeds 9 (before or after the low correction) or CY
    /// is set.
    pub(super) fn alu_daa(&mut self) {
        let a = self.regs.a;
        let low = a & 0x0F;
        let high = a >> 4;

        let mut correction = 0u8;
        if low > 9 || self.flags.ac {
            correction |= 0x06;
        }
        if high > 9 || self.flags.cy || (high >= 9 && low > 9) {
            correction |= 0x60;
        }

        let result = a.wrapping_add(correction);
        self.flags.ac = low + (correction & 0x0F) > 0x0F;
        if correction & 0x60 != 0 {
            self.flags.cy = true;
        }
        self.flags.set_zsp(result);
        self.regs.a = result;
    }
}
