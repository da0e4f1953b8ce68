use rv64im_core::Simulator;
use rv64im_core::common::ExitStatus;
use rv64im_core::config::{Config, Model};
use rv64im_core::core::Cpu;
use rv64im_core::sim::symbols::SymbolTable;
use rv64im_core::soc::Console;

use super::builder;

/// Memory window used by the harness (64 KiB).
pub const TEST_RAM_SIZE: usize = 64 * 1024;

/// Memory base used by the harness.
pub const TEST_RAM_BASE: u64 = 0x8000_0000;

/// Upper bound on engine steps before a test run is considered hung.
const STEP_LIMIT: u64 = 100_000;

pub struct TestContext {
    pub sim: Simulator,
}

impl TestContext {
    /// Creates a simulator for `model` with a small window and a capturing console.
    pub fn new(model: Model) -> Self {
        let mut config = Config::default();
        config.model = model;
        Self::with_config(config)
    }

    /// Creates a simulator from `config`, shrinking the window to the test size.
    pub fn with_config(mut config: Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();

        config.memory.ram_base = TEST_RAM_BASE;
        config.memory.ram_size = TEST_RAM_SIZE;
        config.general.start_pc = None;
        let mut sim = Simulator::new(&config, SymbolTable::default()).unwrap();
        sim.cpu.console = Console::capture();
        Self { sim }
    }

    /// Loads a sequence of 32-bit instructions at the memory base.
    pub fn load_program(mut self, instructions: &[u32]) -> Self {
        let image: Vec<u8> = instructions.iter().flat_map(|w| w.to_le_bytes()).collect();
        self.sim.load_bytes(&image).unwrap();
        self
    }

    /// Loads `instructions` followed by `ebreak`.
    pub fn load_halting(self, instructions: &[u32]) -> Self {
        let mut program = instructions.to_vec();
        program.push(builder::ebreak());
        self.load_program(&program)
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u64) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u64 {
        self.sim.cpu.regs.read(reg)
    }

    /// Runs to halt, panicking if the program does not halt within the step limit.
    pub fn run(&mut self) -> ExitStatus {
        for _ in 0..STEP_LIMIT {
            if self.sim.is_halted() {
                return self.sim.exit_status().unwrap();
            }
            self.sim.tick();
        }
        panic!("program did not halt within {STEP_LIMIT} steps");
    }

    /// Advances the engine by `n` steps (cycles for the pipeline).
    pub fn tick(&mut self, n: u64) {
        for _ in 0..n {
            self.sim.tick();
        }
    }

    /// Text written to the console by the program.
    pub fn console_output(&self) -> String {
        String::from_utf8_lossy(self.sim.cpu.console.captured()).into_owned()
    }
}
