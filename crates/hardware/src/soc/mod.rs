//! System-on-chip side of the simulator.
//!
//! Provides the collaborators the engines talk to outside the core:
//! 1. **Memory:** The bounds-checked guest physical window.
//! 2. **Devices:** The console that backs the `write` syscall.

/// Host-side devices.
pub mod devices;

/// Guest physical memory.
pub mod memory;

pub use devices::Console;
pub use memory::Memory;
