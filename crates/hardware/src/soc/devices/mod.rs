//! Host-side devices.
//!
//! The only device is the console that receives bytes written by the `write`
//! syscall.

/// Console output sink.
pub mod console;

pub use console::Console;
