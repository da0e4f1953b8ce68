//! Execution engine trait and model dispatch.
//!
//! This module defines the seam between the simulator and its timing models:
//! 1. **`ExecutionEngine`:** Advances a `Cpu` by one step of its schedule.
//! 2. **`EngineDispatch`:** Enum dispatch over the three models, selected by
//!    [`Model`].

use crate::config::{Config, Model};
use crate::core::Cpu;
use crate::core::iss::IssEngine;
use crate::core::multicycle::MultiCycleEngine;
use crate::core::pipeline::PipelineEngine;

/// A timing model.
///
/// Every implementation drives the same shared semantics, so architectural
/// results are identical across engines; only the cycle accounting differs.
pub trait ExecutionEngine {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Advances the model by one step.
    ///
    /// For the ISS and multi-cycle models a step is one whole instruction; for
    /// the pipeline it is one clock cycle.
    fn tick(&mut self, cpu: &mut Cpu);

    /// Returns `true` once the run is over and `cpu.pc` holds the final PC.
    fn halted(&self, cpu: &Cpu) -> bool;
}

/// Type-erased engine selected at run time.
#[derive(Debug)]
pub enum EngineDispatch {
    /// Functional model.
    Iss(IssEngine),
    /// Multi-cycle FSM.
    MultiCycle(MultiCycleEngine),
    /// Five-stage pipeline.
    Pipeline(Box<PipelineEngine>),
}

impl EngineDispatch {
    /// Builds the engine for `config.model`.
    pub fn new(config: &Config) -> Self {
        Self::for_model(config.model, config)
    }

    /// Builds the engine for `model`, taking timing parameters from `config`.
    pub fn for_model(model: Model, config: &Config) -> Self {
        match model {
            Model::Iss => Self::Iss(IssEngine),
            Model::MultiCycle => Self::MultiCycle(MultiCycleEngine::new(config)),
            Model::Pipeline => Self::Pipeline(Box::new(PipelineEngine::new(config))),
        }
    }
}

impl ExecutionEngine for EngineDispatch {
    fn name(&self) -> &'static str {
        match self {
            Self::Iss(e) => e.name(),
            Self::MultiCycle(e) => e.name(),
            Self::Pipeline(e) => e.name(),
        }
    }

    fn tick(&mut self, cpu: &mut Cpu) {
        match self {
            Self::Iss(e) => e.tick(cpu),
            Self::MultiCycle(e) => e.tick(cpu),
            Self::Pipeline(e) => e.tick(cpu),
        }
    }

    fn halted(&self, cpu: &Cpu) -> bool {
        match self {
            Self::Iss(e) => e.halted(cpu),
            Self::MultiCycle(e) => e.halted(cpu),
            Self::Pipeline(e) => e.halted(cpu),
        }
    }
}
