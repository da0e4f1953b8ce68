//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every engine. It includes:
//! 1. **Constants:** Instruction width, register counts, and simulator-raised halt codes.
//! 2. **Error Handling:** Host-side `SimError` and the guest `ExitStatus`.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and halt status definitions.
pub mod error;

pub use error::{ExitStatus, SimError};
