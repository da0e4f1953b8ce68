//! Control and Status Register bank.
//!
//! The simulated machine has no trap or privilege model, so the bank is plain
//! storage: a flat array indexed by the 12-bit CSR address.

use crate::common::constants::NUM_CSRS;

/// Machine trap vector base address register CSR address.
pub const MTVEC: u16 = 0x305;

/// Machine exception program counter CSR address.
pub const MEPC: u16 = 0x341;

/// Flat 4096-entry CSR storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Csrs {
    regs: Box<[u64; NUM_CSRS]>,
}

impl Default for Csrs {
    fn default() -> Self {
        Self {
            regs: Box::new([0; NUM_CSRS]),
        }
    }
}

impl Csrs {
    /// Reads a CSR. Addresses wrap to 12 bits.
    pub fn read(&self, addr: u16) -> u64 {
        self.regs[usize::from(addr) & (NUM_CSRS - 1)]
    }

    /// Writes a CSR. Addresses wrap to 12 bits.
    pub fn write(&mut self, addr: u16, val: u64) {
        self.regs[usize::from(addr) & (NUM_CSRS - 1)] = val;
    }
}
