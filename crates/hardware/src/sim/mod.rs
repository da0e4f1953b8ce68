//! Simulation driver and host-side collaborators.
//!
//! Provides program loading, the symbol table, trace hooks and the
//! `Simulator` that ties a CPU context to a timing model.

/// Image and ELF symbol loading.
pub mod loader;

/// Top-level run control.
pub mod simulator;

/// Address-sorted function symbols.
pub mod symbols;

/// itrace and ftrace hooks.
pub mod trace;

pub use simulator::Simulator;
