//! CPU Core Definition and Initialization.
//!
//! This module defines the `Cpu` structure, the explicit simulator context every
//! engine receives by exclusive reference. It holds:
//! 1. **Architectural State:** Registers, program counter and the CSR bank.
//! 2. **Collaborators:** Guest memory, the console and the trace hooks.
//! 3. **Bookkeeping:** Performance counters and the halt status of the run.
//!
//! Switching timing models means building a fresh `Cpu`; engines never share one.

/// Shared fetch, execute, memory and writeback primitives.
pub mod execution;

/// Host-side servicing of `ecall`.
pub mod syscall;

use crate::common::{ExitStatus, SimError};
use crate::config::Config;
use crate::core::arch::csr::Csrs;
use crate::core::arch::gpr::Gpr;
use crate::sim::trace::Tracer;
use crate::soc::{Console, Memory};
use crate::stats::SimStats;

/// Simulator context: architectural state plus the collaborators it touches.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Program counter.
    pub pc: u64,
    /// Control and Status Registers.
    pub csrs: Csrs,
    /// Guest physical memory.
    pub mem: Memory,
    /// Output device behind the `write` syscall.
    pub console: Console,
    /// Instruction and function trace hooks.
    pub tracer: Tracer,
    /// Performance statistics.
    pub stats: SimStats,
    /// Halt status once the program has stopped.
    pub exit: Option<ExitStatus>,
}

impl Cpu {
    /// Creates a CPU with zeroed registers and memory, PC at the configured start.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Errors
    ///
    /// Returns `SimError::RamAllocation` if guest memory cannot be allocated.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        Ok(Self {
            regs: Gpr::new(),
            pc: config.start_pc(),
            csrs: Csrs::default(),
            mem: Memory::new(config.memory.ram_base, config.memory.ram_size)?,
            console: Console::stdout(),
            tracer: Tracer::disabled(),
            stats: SimStats::default(),
            exit: None,
        })
    }

    /// Returns `true` once a halt has been raised.
    pub const fn halted(&self) -> bool {
        self.exit.is_some()
    }

    /// Dumps the current CPU state (PC and registers) to stdout.
    pub fn dump_state(&self) {
        println!("  pc = {:#018x}", self.pc);
        self.regs.dump();
    }
}
