//! RISC-V General-Purpose Register File.
//!
//! This module implements the integer register file shared by every engine. It performs:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Register `x0` reads as zero and ignores writes.
//! 3. **Debugging:** Renders the register state with ABI names for `info r`.

use std::fmt;

use crate::common::constants::NUM_GPRS;
use crate::isa::abi::REG_NAMES;

/// General-Purpose Register file.
///
/// Register `x0` is hardwired to zero: writes to it are discarded and reads
/// always return 0, so no engine has to reset it after the fact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u64; NUM_GPRS],
}

impl Gpr {
    /// Creates a register file with every register cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Only the low five bits are used.
    ///
    /// # Returns
    ///
    /// The 64-bit register value. Register `x0` always returns 0.
    pub const fn read(&self, idx: usize) -> u64 {
        let idx = idx & (NUM_GPRS - 1);
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Only the low five bits are used.
    /// * `val` - The 64-bit value to write. Ignored for `x0`.
    pub const fn write(&mut self, idx: usize, val: u64) {
        let idx = idx & (NUM_GPRS - 1);
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a snapshot of all 32 registers, `x0` included.
    pub const fn snapshot(&self) -> [u64; NUM_GPRS] {
        let mut out = self.regs;
        out[0] = 0;
        out
    }

    /// Prints all registers to stdout, two per line.
    pub fn dump(&self) {
        print!("{self}");
    }
}

impl fmt::Display for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_GPRS).step_by(2) {
            writeln!(
                f,
                "{:>4} (x{:<2}) = {:#018x}   {:>4} (x{:<2}) = {:#018x}",
                REG_NAMES[i],
                i,
                self.read(i),
                REG_NAMES[i + 1],
                i + 1,
                self.read(i + 1)
            )?;
        }
        Ok(())
    }
}
