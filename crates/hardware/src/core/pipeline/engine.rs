//! Five-stage pipeline engine.
//!
//! Owns the four latches and the flags that couple the stages:
//! 1. **Write enables:** Decode holds fetch while it stalls or squashes.
//! 2. **Prediction:** Execute clears `predict_right` on a redirect; memory sets
//!    it again one cycle later.
//! 3. **Divider reuse:** Memory records whether the instruction ahead of execute
//!    was a divide.
//! 4. **Drain:** After a halt in execute, writeback and memory keep running
//!    until both remaining latches are empty.

use tracing::debug;

use crate::config::Config;
use crate::core::Cpu;
use crate::core::engine::ExecutionEngine;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::units::divider::Divider;

/// The pipelined timing model.
#[derive(Debug)]
pub struct PipelineEngine {
    /// IF/ID latch.
    pub if_id: IfId,
    /// ID/EX latch.
    pub id_ex: IdEx,
    /// EX/MEM latch.
    pub ex_mem: ExMem,
    /// MEM/WB latch.
    pub mem_wb: MemWb,
    /// Fetch may advance the PC.
    pub pc_write_enable: bool,
    /// Fetch may overwrite the IF/ID latch.
    pub if_id_write_enable: bool,
    /// No redirect is pending from execute.
    pub predict_right: bool,
    /// The instruction that last left memory was a divide.
    pub last_inst_is_div: bool,
    /// Decode is inside a RAW stall episode.
    pub stalling: bool,
    /// Dynamic next PC of the halting instruction, once one has executed.
    pub halt_pc: Option<u64>,
    /// Divider timing.
    pub divider: Divider,
}

impl PipelineEngine {
    /// Creates an empty pipeline.
    pub const fn new(config: &Config) -> Self {
        Self {
            if_id: IfId::new(),
            id_ex: IdEx::new(),
            ex_mem: ExMem::new(),
            mem_wb: MemWb::new(),
            pc_write_enable: true,
            if_id_write_enable: true,
            predict_right: true,
            last_inst_is_div: false,
            stalling: false,
            halt_pc: None,
            divider: Divider::new(&config.timing),
        }
    }

    /// Sets both fetch write enables.
    pub const fn set_fetch_enabled(&mut self, enabled: bool) {
        self.pc_write_enable = enabled;
        self.if_id_write_enable = enabled;
    }

    /// Returns `true` while any latch holds an instruction.
    pub fn in_flight(&self) -> bool {
        !(self.if_id.is_empty()
            && self.id_ex.is_empty()
            && self.ex_mem.is_empty()
            && self.mem_wb.is_empty())
    }
}

impl ExecutionEngine for PipelineEngine {
    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn tick(&mut self, cpu: &mut Cpu) {
        cpu.stats.cycles += 1;
        wb_stage(self, cpu);
        mem_stage(self, cpu);
        if self.halt_pc.is_none() {
            execute_stage(self, cpu);
        }
        if self.halt_pc.is_none() {
            decode_stage(self, cpu);
            fetch_stage(self, cpu);
        }
        if let Some(pc) = self.halt_pc.filter(|_| !self.in_flight()) {
            cpu.pc = pc;
            debug!(cycles = cpu.stats.cycles, "pipeline drained");
        }
    }

    fn halted(&self, _cpu: &Cpu) -> bool {
        self.halt_pc.is_some() && !self.in_flight()
    }
}
