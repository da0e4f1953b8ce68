//! Instruction Fetch (IF) Stage.
//!
//! Fetches the word at the current PC into the IF/ID latch and advances the PC
//! speculatively to `pc + 4`. A misprediction resolved in execute this cycle
//! squashes the latch instead.

use crate::core::Cpu;
use crate::core::pipeline::PipelineEngine;
use crate::core::pipeline::latches::IfIdEntry;
use crate::core::pipeline::traits::PipelineLatch;

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `pl` - Pipeline latches and flags.
/// * `cpu` - Mutable reference to the CPU state.
pub fn fetch_stage(pl: &mut PipelineEngine, cpu: &mut Cpu) {
    if !pl.predict_right {
        pl.if_id.flush();
        return;
    }
    if pl.pc_write_enable && pl.if_id_write_enable {
        let inst = cpu.fetch(cpu.pc);
        pl.if_id.set(IfIdEntry {
            inst,
            predict_pc: inst.snpc,
        });
        cpu.pc = inst.snpc;
    }
}
