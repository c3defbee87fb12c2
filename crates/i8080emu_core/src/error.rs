use thiserror::Error;

/// Errors reported by the CPU core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The address space could not be allocated.
    #[error("failed to allocate {size} bytes of 8080 memory")]
    MemoryAllocation { size: usize },

    /// The byte at `address` does not decode to any 8080 instruction.
    ///
    /// The engine has already skipped the byte when this is returned.
    #[error("unknown opcode 0x{opcode:02x} at 0x{address:04x}")]
    UnknownOpcode { opcode: u8, address: u16 },

    /// A program image does not fit between `origin` and the top of memory.
    #[error("image of {len} bytes does not fit at origin 0x{origin:04x}")]
    ImageTooLarge { origin: u16, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
