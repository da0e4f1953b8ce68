//! Core processor implementation.
//!
//! This module contains the simulator context, the functional units and
//! architectural state it is built from, and the three timing models that
//! drive it.

/// Architecture-specific components (register file, CSR bank).
pub mod arch;

/// CPU context and the execution primitives shared by every engine.
pub mod cpu;

/// Engine trait and run-time model selection.
pub mod engine;

/// Functional instruction-set simulator.
pub mod iss;

/// Multi-cycle FSM timing model.
pub mod multicycle;

/// Five-stage pipeline timing model (stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU, LSU, divider).
pub mod units;

pub use self::cpu::Cpu;
pub use self::engine::{EngineDispatch, ExecutionEngine};
