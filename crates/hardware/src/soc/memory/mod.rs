//! Guest Physical Memory.
//!
//! This module implements the flat memory window every engine talks to. It provides:
//! 1. **Buffer:** `RamBuffer`, the zero-initialized backing store.
//! 2. **Window:** `Memory`, which maps the buffer at a base address and bounds-checks
//!    every access.
//! 3. **Access:** Little-endian fetch, read and write at 1/2/4/8-byte widths.
//!
//! Accesses outside `[base, base + size)` never abort the run: reads log a warning
//! and return 0, writes log a warning and are dropped.

/// Guest RAM backing store (mmap or heap).
pub mod buffer;

use tracing::{info, warn};

use self::buffer::RamBuffer;
use crate::common::SimError;
use crate::core::units::lsu::MemWidth;

/// Bounds-checked guest memory window.
#[derive(Debug)]
pub struct Memory {
    ram: RamBuffer,
    base: u64,
}

impl Memory {
    /// Creates a zeroed window of `size` bytes mapped at `base`.
    ///
    /// # Errors
    ///
    /// Returns `SimError::RamAllocation` if the backing store cannot be allocated.
    pub fn new(base: u64, size: usize) -> Result<Self, SimError> {
        let ram = RamBuffer::new(size)?;
        info!(base = format_args!("{base:#x}"), size, "guest memory window");
        Ok(Self { ram, base })
    }

    /// Base address of the window.
    pub const fn base(&self) -> u64 {
        self.base
    }

    /// Size of the window in bytes.
    pub const fn size(&self) -> usize {
        self.ram.len()
    }

    /// Returns `true` if `[addr, addr + len)` lies inside the window.
    pub fn contains(&self, addr: u64, len: usize) -> bool {
        self.offset(addr, len).is_some()
    }

    fn offset(&self, addr: u64, len: usize) -> Option<usize> {
        let off = usize::try_from(addr.checked_sub(self.base)?).ok()?;
        let end = off.checked_add(len)?;
        (end <= self.ram.len()).then_some(off)
    }

    /// Copies `data` to the start of the window.
    ///
    /// # Errors
    ///
    /// Returns `SimError::ImageTooLarge` if `data` does not fit.
    pub fn load_image(&mut self, data: &[u8]) -> Result<(), SimError> {
        let capacity = self.ram.len();
        let dest = self
            .ram
            .as_mut_slice()
            .get_mut(..data.len())
            .ok_or(SimError::ImageTooLarge {
                size: data.len(),
                capacity,
            })?;
        dest.copy_from_slice(data);
        Ok(())
    }

    /// Fetches the 32-bit instruction word at `pc`.
    pub fn fetch(&self, pc: u64) -> u32 {
        self.read(pc, MemWidth::Word) as u32
    }

    /// Reads `width` bytes at `addr`, zero-extended to 64 bits.
    pub fn read(&self, addr: u64, width: MemWidth) -> u64 {
        let len = width.bytes();
        let Some(off) = self.offset(addr, len) else {
            warn!(
                addr = format_args!("{addr:#x}"),
                len, "read outside guest memory, returning 0"
            );
            return 0;
        };
        let mut buf = [0u8; 8];
        buf[..len].copy_from_slice(&self.ram.as_slice()[off..off + len]);
        u64::from_le_bytes(buf)
    }

    /// Writes the low `width` bytes of `value` at `addr`.
    pub fn write(&mut self, addr: u64, width: MemWidth, value: u64) {
        let len = width.bytes();
        let Some(off) = self.offset(addr, len) else {
            warn!(
                addr = format_args!("{addr:#x}"),
                len,
                value = format_args!("{value:#x}"),
                "write outside guest memory dropped"
            );
            return;
        };
        self.ram.as_mut_slice()[off..off + len].copy_from_slice(&value.to_le_bytes()[..len]);
    }

    /// Borrows `len` bytes at `addr`, or `None` if the range leaves the window.
    pub fn bytes(&self, addr: u64, len: usize) -> Option<&[u8]> {
        let off = self.offset(addr, len)?;
        self.ram.as_slice().get(off..off + len)
    }
}
