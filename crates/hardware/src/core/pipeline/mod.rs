//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Engine:** The latches and coupling flags, advanced once per cycle.
//! 2. **Hazards:** Detection of read-after-write hazards.
//! 3. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 4. **Signals:** Control signals generated during instruction decoding.
//! 5. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//! 6. **Traits:** Common interface for pipeline latches.

/// Pipeline engine and per-cycle stage ordering.
pub mod engine;

/// Pipeline hazard detection logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline latches.
pub mod traits;

pub use engine::PipelineEngine;
