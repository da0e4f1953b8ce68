//! Simulator: owns the CPU context and the engine that drives it.
//!
//! The two live side by side so each tick can lend the engine exclusive
//! access to the CPU. The simulator adds run control (run to halt, step a
//! number of instructions) and the halt report.

use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use crate::common::constants::HALT_FATAL;
use crate::common::{ExitStatus, SimError};
use crate::config::{Config, Model};
use crate::core::{Cpu, EngineDispatch, ExecutionEngine};
use crate::sim::loader;
use crate::sim::symbols::SymbolTable;
use crate::sim::trace::Tracer;

/// Top-level simulator: CPU context + timing model.
#[derive(Debug)]
pub struct Simulator {
    /// CPU context (registers, memory, console, stats).
    pub cpu: Cpu,
    /// Timing model.
    pub engine: EngineDispatch,
    model: Model,
}

impl Simulator {
    /// Creates a simulator for `config.model` with fresh architectural state.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration.
    /// * `symbols` - Function symbols for ftrace (may be empty).
    ///
    /// # Errors
    ///
    /// Fails if guest memory cannot be allocated.
    pub fn new(config: &Config, symbols: SymbolTable) -> Result<Self, SimError> {
        let mut cpu = Cpu::new(config)?;
        cpu.tracer = Tracer::new(
            config.general.trace_instructions,
            config.general.trace_functions,
            symbols,
        );
        info!(
            model = ?config.model,
            base = format_args!("{:#010x}", config.memory.ram_base),
            size = config.memory.ram_size,
            "simulator created"
        );
        Ok(Self {
            cpu,
            engine: EngineDispatch::new(config),
            model: config.model,
        })
    }

    /// Loads a raw image at the base of guest memory.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not fit.
    pub fn load_image(&mut self, path: &Path) -> Result<usize, SimError> {
        loader::load_image(&mut self.cpu.mem, path)
    }

    /// Copies `image` to the base of guest memory.
    ///
    /// # Errors
    ///
    /// Fails if the image does not fit.
    pub fn load_bytes(&mut self, image: &[u8]) -> Result<(), SimError> {
        self.cpu.mem.load_image(image)
    }

    /// Timing model this simulator runs.
    pub const fn model(&self) -> Model {
        self.model
    }

    /// Returns `true` once the run is over.
    pub fn is_halted(&self) -> bool {
        self.engine.halted(&self.cpu)
    }

    /// Halt status, once the program has stopped.
    pub const fn exit_status(&self) -> Option<ExitStatus> {
        self.cpu.exit
    }

    /// Advances the engine by one step unless the run is over.
    pub fn tick(&mut self) {
        if !self.is_halted() {
            self.engine.tick(&mut self.cpu);
        }
    }

    /// Executes `n` more instructions, or until the run is over.
    ///
    /// A halt raised within the budget is always carried through to the end of
    /// the run, so the pipeline finishes draining.
    ///
    /// # Returns
    ///
    /// The halt status if the run is over.
    pub fn step(&mut self, n: u64) -> Option<ExitStatus> {
        let target = self.cpu.stats.instructions_retired.saturating_add(n);
        while !self.is_halted()
            && (self.cpu.stats.instructions_retired < target || self.cpu.halted())
        {
            self.engine.tick(&mut self.cpu);
        }
        self.is_halted().then_some(self.cpu.exit).flatten()
    }

    /// Runs until the program halts.
    pub fn run(&mut self) -> ExitStatus {
        while !self.is_halted() {
            self.engine.tick(&mut self.cpu);
        }
        self.cpu.exit.unwrap_or(ExitStatus {
            pc: self.cpu.pc,
            code: HALT_FATAL,
        })
    }

    /// Renders the halt verdict and performance block.
    ///
    /// The pipeline model also reports its hazard counters.
    pub fn report(&self) -> String {
        let stats = &self.cpu.stats;
        let mut out = String::new();
        if let Some(status) = self.cpu.exit {
            let _ = writeln!(out, "{status}");
        }
        out.push_str(&stats.performance_report());
        if self.model == Model::Pipeline {
            let _ = writeln!(out, "\tRAW STALL = {:4}", stats.stalls_data);
            let _ = writeln!(out, "\tCTRL HAZ  = {:4}", stats.stalls_control);
        }
        out
    }

    /// Logs the halt and prints the report to stdout.
    pub fn print_report(&self) {
        if let Some(status) = self.cpu.exit {
            info!(
                pc = format_args!("{:#010x}", status.pc),
                code = status.code,
                "program ended"
            );
        }
        print!("{}", self.report());
    }
}
