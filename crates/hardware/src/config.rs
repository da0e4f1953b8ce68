//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline constants for the memory window and divider timing.
//! 2. **Structures:** Hierarchical config for general, memory, and timing settings.
//! 3. **Model Selection:** The `Model` enum naming the three timing fidelities.
//!
//! Configuration is either `Config::default()` or JSON parsed with [`Config::from_json`].

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline machine when not explicitly overridden
/// in a JSON configuration file.
mod defaults {
    /// Base address of guest physical memory (2 GiB).
    ///
    /// Images are loaded here and execution starts here unless `start_pc` overrides it.
    pub const RAM_BASE: u64 = 0x8000_0000;

    /// Size of the guest memory window (128 MiB).
    ///
    /// Accesses outside `[RAM_BASE, RAM_BASE + RAM_SIZE)` are logged and degrade
    /// to a zero read or a dropped write.
    pub const RAM_SIZE: usize = 128 * 1024 * 1024;

    /// Extra execute-stage cycles charged for a divide or remainder.
    pub const DIV_LATENCY: u64 = 39;
}

/// Timing model selection.
///
/// All three models compute identical architectural results; they differ only
/// in how many simulated cycles a program takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    /// Functional instruction-set simulator, one cycle per instruction.
    #[default]
    Iss,
    /// Per-instruction IF/ID/EX/MEM/WB finite state machine.
    #[serde(alias = "mc")]
    MultiCycle,
    /// Five-stage pipeline with hazard detection and late branch resolution.
    #[serde(alias = "pl")]
    Pipeline,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use rv64im_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.memory.ram_base, 0x8000_0000);
/// assert_eq!(config.timing.div_latency, 39);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use rv64im_core::config::{Config, Model};
///
/// let json = r#"{
///     "model": "pipeline",
///     "general": { "trace_instructions": true },
///     "memory": { "ram_size": 1048576 },
///     "timing": { "fusion": false }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.model, Model::Pipeline);
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.memory.ram_size, 1 << 20);
/// assert_eq!(config.memory.ram_base, 0x8000_0000);
/// assert!(!config.timing.fusion);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Timing model to run
    #[serde(default)]
    pub model: Model,
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Guest memory window
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Multi-cycle and pipeline timing parameters
    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing sections and fields fall back to their defaults. If `general.start_pc`
    /// is absent it follows `memory.ram_base`.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON text to parse.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or `SimError::Config` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let mut config: Self = serde_json::from_str(json)?;
        if config.general.start_pc.is_none() {
            config.general.start_pc = Some(config.memory.ram_base);
        }
        Ok(config)
    }

    /// Returns the PC execution starts at.
    pub fn start_pc(&self) -> u64 {
        self.general.start_pc.unwrap_or(self.memory.ram_base)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit one `itrace` event per executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Emit `ftrace` call/return events (needs an ELF symbol table).
    #[serde(default)]
    pub trace_functions: bool,

    /// Initial PC value (defaults to the memory base).
    #[serde(default)]
    pub start_pc: Option<u64>,
}

/// Guest memory window configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Base physical address of guest memory
    #[serde(default = "MemoryConfig::default_ram_base")]
    pub ram_base: u64,

    /// Size of guest memory in bytes
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: usize,
}

impl MemoryConfig {
    /// Returns the default base address of guest memory.
    fn default_ram_base() -> u64 {
        defaults::RAM_BASE
    }

    /// Returns the default size of guest memory.
    fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
        }
    }
}

/// Divider timing shared by the multi-cycle and pipeline models.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    /// Extra cycles a divide/remainder spends in execute
    #[serde(default = "TimingConfig::default_div_latency")]
    pub div_latency: u64,

    /// Waive the divide latency for back-to-back identical divide-family operands
    #[serde(default = "TimingConfig::default_fusion")]
    pub fusion: bool,
}

impl TimingConfig {
    /// Returns the default divide latency.
    fn default_div_latency() -> u64 {
        defaults::DIV_LATENCY
    }

    /// Fusion is on unless a config turns it off.
    fn default_fusion() -> bool {
        true
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            div_latency: defaults::DIV_LATENCY,
            fusion: true,
        }
    }
}
