//! Global Simulator Constants.
//!
//! This module defines constants shared across the engines. It includes:
//! 1. **Instruction Constants:** Instruction width and the static next-PC step.
//! 2. **Architectural Sizes:** Register file and CSR bank dimensions.
//! 3. **Halt Codes:** Exit codes raised by the simulator itself rather than the guest.

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE: u64 = 4;

/// Number of integer general-purpose registers.
pub const NUM_GPRS: usize = 32;

/// Number of addressable control/status registers (12-bit CSR address space).
pub const NUM_CSRS: usize = 4096;

/// Exit code raised for an unrecognized instruction or an unknown syscall.
pub const HALT_FATAL: i64 = -1;
