//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Register indices used by the syscall shim and the function tracer, and the
//! ABI names used when printing registers or disassembly.

/// Register x1 (return address, ra).
pub const REG_RA: usize = 1;
/// Register x10 (first argument/return value, a0).
pub const REG_A0: usize = 10;
/// Register x11 (second argument, a1).
pub const REG_A1: usize = 11;
/// Register x12 (third argument, a2).
pub const REG_A2: usize = 12;
/// Register x17 (system call number, a7).
pub const REG_A7: usize = 17;

/// ABI names indexed by register number.
pub const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];
