//! RISC-V architectural state.
//!
//! This module contains the state every engine mutates at retirement:
//! 1. **GPRs:** The 32-entry integer register file with `x0` hardwired to zero.
//! 2. **CSRs:** A flat 4096-entry control/status register bank.

/// Control and Status Register storage.
pub mod csr;

/// General-Purpose Register file implementation.
pub mod gpr;
