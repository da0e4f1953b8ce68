//! RV64IM simulator library.
//!
//! This crate implements a RISC-V RV64IM simulator with three timing models that
//! share one instruction table:
//! 1. **ISA:** Decoding, immediates, the ordered pattern table, semantics and a disassembler.
//! 2. **Core:** The CPU context plus the functional, multi-cycle and pipelined engines.
//! 3. **SoC:** Bounds-checked guest memory and the console behind the `write` syscall.
//! 4. **Simulation:** Loader, symbol table, tracing, configuration and statistics.
//!
//! # Example
//!
//! ```
//! use rv64im_core::{Config, Simulator};
//! use rv64im_core::sim::symbols::SymbolTable;
//!
//! let mut config = Config::default();
//! config.memory.ram_size = 4096;
//! let mut sim = Simulator::new(&config, SymbolTable::default()).unwrap();
//! // addi a0, zero, 0 ; ebreak
//! let program = [0x0000_0513u32, 0x0010_0073];
//! let image: Vec<u8> = program.iter().flat_map(|w| w.to_le_bytes()).collect();
//! sim.load_bytes(&image).unwrap();
//! let status = sim.run();
//! assert!(status.is_good());
//! assert_eq!(sim.cpu.stats.instructions_retired, 2);
//! ```

/// Common types and constants (errors, halt status, sizes).
pub mod common;
/// Simulator configuration (defaults, model selection, JSON parsing).
pub mod config;
/// CPU context, execution units and the three timing models.
pub mod core;
/// Instruction set (encoding, decode, pattern table, semantics, disassembly).
pub mod isa;
/// Loader, symbol table, tracing and the top-level simulator.
pub mod sim;
/// Guest memory and host devices.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Simulator context shared by the engines.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
