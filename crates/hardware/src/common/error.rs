//! Error and halt definitions.
//!
//! This module defines the two ways a simulation can stop short of running forever. It provides:
//! 1. **Host Errors:** `SimError` for failures of the host side (image I/O, ELF parsing, config).
//! 2. **Guest Halts:** `ExitStatus`, the value recorded when the guest program stops.
//!
//! Guest faults are never Rust errors. An unrecognized instruction or an exit
//! syscall becomes an `ExitStatus`; only the host-side plumbing returns `SimError`.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised by host-side simulator plumbing.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The image path was empty.
    #[error("image file path is empty")]
    EmptyImagePath,

    /// The image (or ELF) file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ImageRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The image does not fit in the configured memory window.
    #[error("image of {size} bytes does not fit in a {capacity}-byte memory window")]
    ImageTooLarge {
        /// Image size in bytes.
        size: usize,
        /// Memory window size in bytes.
        capacity: usize,
    },

    /// The ELF file could not be parsed.
    #[error("malformed ELF file: {0}")]
    Elf(#[from] object::read::Error),

    /// Guest RAM could not be allocated on the host.
    #[error("failed to allocate {size} bytes of guest RAM")]
    RamAllocation {
        /// Requested size in bytes.
        size: usize,
    },

    /// The JSON configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Final status of a halted guest program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExitStatus {
    /// PC of the instruction that raised the halt.
    pub pc: u64,
    /// Exit code: 0 is a good trap, anything else a bad trap.
    pub code: i64,
}

impl ExitStatus {
    /// Returns `true` when the program ended with exit code 0.
    pub const fn is_good(&self) -> bool {
        self.code == 0
    }

    /// Converts the exit code into a process exit status.
    ///
    /// Only the low byte survives on Unix hosts, so a code of `-1` becomes 255.
    pub const fn process_code(&self) -> i32 {
        (self.code & 0xFF) as i32
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_good() { "GOOD" } else { "BAD" };
        write!(
            f,
            "HIT {verdict} TRAP at pc {:#010x} with exit code {}",
            self.pc, self.code
        )
    }
}
