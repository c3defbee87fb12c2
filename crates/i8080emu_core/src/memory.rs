use crate::{Error, Result, MEMORY_SIZE};

/// The flat 64 KiB 8080 address space.
///
/// Every `u16` is a valid address, so reads and writes cannot fail. There is
/// no banking, no write protection and no memory-mapped I/O.
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Memory {
    /// Allocate a zero-filled address space.
    ///
    /// Allocation failure is reported instead of aborting the process.
    pub fn new() -> Result<Self> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(MEMORY_SIZE)
            .map_err(|_| Error::MemoryAllocation { size: MEMORY_SIZE })?;
        bytes.resize(MEMORY_SIZE, 0);
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
        })
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }

    /// Little-endian 16-bit read. The high byte address wraps at 0xFFFF.
    pub fn read_word(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read(addr), self.read(addr.wrapping_add(1))])
    }

    /// Little-endian 16-bit write. The high byte address wraps at 0xFFFF.
    pub fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
    }

    /// Copy a program image into memory starting at `origin`.
    pub fn load(&mut self, origin: u16, image: &[u8]) -> Result<()> {
        let start = origin as usize;
        let end = start + image.len();
        if end > MEMORY_SIZE {
            return Err(Error::ImageTooLarge {
                origin,
                len: image.len(),
            });
        }
        self.bytes[start..end].copy_from_slice(image);
        Ok(())
    }

    /// Zero the whole address space.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &self.bytes.len())
            .finish()
    }
}
