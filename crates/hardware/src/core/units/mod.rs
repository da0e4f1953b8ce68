//! Execution units.
//!
//! Functional units shared by every timing model:
//! 1. **ALU:** Integer arithmetic, logic, shifts, and the M extension.
//! 2. **LSU:** Width handling and execution of load/store requests.
//! 3. **Divider:** Divide latency and result-reuse timing.

/// Arithmetic Logic Unit.
pub mod alu;

/// Divider timing.
pub mod divider;

/// Load/Store Unit.
pub mod lsu;
