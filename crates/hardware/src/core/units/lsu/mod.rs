//! Load/Store Unit (LSU).
//!
//! This module provides the memory-access half of instruction semantics. It includes:
//! 1. **Widths:** `MemWidth`, the 1/2/4/8-byte access sizes of RV64I.
//! 2. **Requests:** `MemOp`, the access an instruction asks for after execute.
//! 3. **Execution:** `Lsu::perform`, which runs a request against guest memory and
//!    applies sign or zero extension to loaded values.

use crate::soc::memory::Memory;

/// Memory access width for load and store operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// 8-bit byte access.
    Byte,
    /// 16-bit half-word access.
    Half,
    /// 32-bit word access.
    Word,
    /// 64-bit double-word access.
    #[default]
    Double,
}

impl MemWidth {
    /// Returns the access size in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
            Self::Double => 8,
        }
    }

    /// Returns the width for a byte count, or `None` for unsupported sizes.
    pub const fn from_bytes(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::Byte),
            2 => Some(Self::Half),
            4 => Some(Self::Word),
            8 => Some(Self::Double),
            _ => None,
        }
    }

    /// Sign-extends the low `self.bytes()` bytes of `raw`.
    pub const fn sign_extend(self, raw: u64) -> u64 {
        match self {
            Self::Byte => raw as i8 as i64 as u64,
            Self::Half => raw as i16 as i64 as u64,
            Self::Word => raw as i32 as i64 as u64,
            Self::Double => raw,
        }
    }
}

/// Memory access requested by an executed instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemOp {
    /// The instruction does not touch data memory.
    #[default]
    None,
    /// Read `width` bytes at `addr`.
    Load {
        /// Effective address.
        addr: u64,
        /// Access width.
        width: MemWidth,
        /// Sign-extend (`lb`/`lh`/`lw`) instead of zero-extend.
        signed: bool,
    },
    /// Write the low `width` bytes of `data` at `addr`.
    Store {
        /// Effective address.
        addr: u64,
        /// Access width.
        width: MemWidth,
        /// Value taken from rs2.
        data: u64,
    },
}

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Performs a memory request against guest memory.
    ///
    /// # Arguments
    ///
    /// * `mem` - Guest memory.
    /// * `op`  - The request produced by execute.
    ///
    /// # Returns
    ///
    /// The extended load value for loads, and 0 for stores or no-ops.
    pub fn perform(mem: &mut Memory, op: MemOp) -> u64 {
        match op {
            MemOp::None => 0,
            MemOp::Load {
                addr,
                width,
                signed,
            } => {
                let raw = mem.read(addr, width);
                if signed { width.sign_extend(raw) } else { raw }
            }
            MemOp::Store { addr, width, data } => {
                mem.write(addr, width, data);
                0
            }
        }
    }
}
