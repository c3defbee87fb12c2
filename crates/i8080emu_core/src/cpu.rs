mod alu;
mod exec;
mod flags;
mod helpers;
mod regs;


use std::fmt;

use crate::devices::{Detached, InterruptController, PortBank};
use crate::{Error, Memory, Result, RESET_PC};

pub use flags::{Flags, Psw};
pub use regs::{Reg, RegPair, Registers};

/// An Intel 8080 together with the 64 KiB address space it executes from.
///
/// `P` and `I` are the devices reached by IN/OUT and EI/DI/HLT/RST. With the
/// default [`Detached`] devices those instructions have no effect beyond
/// their cycle cost and length.
pub struct Cpu<P = Detached, I = Detached> {
    regs: Registers,
    flags: Flags,
    memory: Memory,
    ports: P,
    interrupts: I,
}

impl Cpu {
    /// Create a CPU in its reset state with no devices attached.
    ///
    /// All registers and flags are zero, SP is 0x0000, PC is 0x0100 and
    /// memory is zero-filled.
    pub fn new() -> Result<Self> {
        Self::with_devices(Detached, Detached)
    }
}

impl<P, I> Cpu<P, I> {
    /// Create a CPU in its reset state wired to the given devices.
    pub fn with_devices(ports: P, interrupts: I) -> Result<Self> {
        let memory = Memory::new()?;
        log::debug!("8080 initialised: PC=0x{:04x}", RESET_PC);
        Ok(Self {
            regs: Registers {
                pc: RESET_PC,
                ..Registers::default()
            },
            flags: Flags::default(),
            memory,
            ports,
            interrupts,
        })
    }

    /// Return registers, flags and memory to the reset state.
    ///
    /// Attached devices are left as they are.
    pub fn reset(&mut self) {
        self.regs = Registers {
            pc: RESET_PC,
            ..Registers::default()
        };
        self.flags = Flags::default();
        self.memory.clear();
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Little-endian word at `addr`.
    pub fn read_word(&self, addr: u16) -> u16 {
        self.memory.read_word(addr)
    }

    /// Copy a program image into memory at `origin`. PC is not changed.
    pub fn load(&mut self, origin: u16, image: &[u8]) -> Result<()> {
        self.memory.load(origin, image)
    }

    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    pub fn flags_mut(&mut self) -> &mut Flags {
        &mut self.flags
    }

    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.regs.pc = pc;
    }

    pub fn sp(&self) -> u16 {
        self.regs.sp
    }

    pub fn ports(&self) -> &P {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut P {
        &mut self.ports
    }

    pub fn interrupts(&self) -> &I {
        &self.interrupts
    }

    pub fn interrupts_mut(&mut self) -> &mut I {
        &mut self.interrupts
    }
}

impl<P: PortBank, I: InterruptController> Cpu<P, I> {
    /// Execute the instruction at PC and return its cycle cost.
    ///
    /// An undecodable byte is logged, skipped, and costs 0 cycles. Use
    /// [`Cpu::try_step`] to observe it as an error instead.
    pub fn step(&mut self) -> u8 {
        match self.try_step() {
            Ok(cycles) => cycles,
            Err(err) => {
                log::warn!("{err}; skipping one byte");
                0
            }
        }
    }

    /// Execute the instruction at PC and return its cycle cost.
    ///
    /// On [`Error::UnknownOpcode`] PC has already moved past the offending
    /// byte and nothing else changed, so the caller may keep stepping.
    pub fn try_step(&mut self) -> Result<u8> {
        let address = self.regs.pc;
        let opcode = self.fetch8();
        self.exec_opcode(opcode)
            .ok_or(Error::UnknownOpcode { opcode, address })
    }
}

impl<P, I> fmt::Display for Cpu<P, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.regs;
        writeln!(f, "A: 0x{:02x}", r.a)?;
        writeln!(f, "B: 0x{:02x}", r.b)?;
        writeln!(f, "C: 0x{:02x}", r.c)?;
        writeln!(f, "D: 0x{:02x}", r.d)?;
        writeln!(f, "E: 0x{:02x}", r.e)?;
        writeln!(f, "H: 0x{:02x}", r.h)?;
        writeln!(f, "L: 0x{:02x}", r.l)?;
        writeln!(f, "SP: 0x{:04x}", r.sp)?;
        writeln!(f, "PC: 0x{:04x}", r.pc)?;
        write!(
            f,
            "Flags: Z:{} S:{} P:{} CY:{} AC:{}",
            u8::from(self.flags.z),
            u8::from(self.flags.s),
            u8::from(self.flags.p),
            u8::from(self.flags.cy),
            u8::from(self.flags.ac),
        )
    }
}

impl<P, I> fmt::Debug for Cpu<P, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
