//! Environment-call and breakpoint encodings.
//!
//! The simulated machine has no trap model. `ebreak` stops the run with the
//! exit code in `a0`; `ecall` is serviced by the host as a Linux-style syscall.

/// Environment Call (`ecall`).
pub const ECALL: u32 = 0x0000_0073;

/// Environment Break (`ebreak`).
pub const EBREAK: u32 = 0x0010_0073;

/// Syscall numbers understood by the `ecall` shim (passed in `a7`).
pub mod syscall {
    /// `write(fd, buf, count)`.
    pub const WRITE: u64 = 64;

    /// `exit(code)`.
    pub const EXIT: u64 = 93;
}
