//! Memory Access (MEM) Stage.
//!
//! Performs the load or store of the EX/MEM entry. Reaching this stage also
//! ends the squash window of a misprediction and records whether the
//! instruction is a divide, for result reuse by the next one.

use crate::core::Cpu;
use crate::core::pipeline::PipelineEngine;
use crate::core::pipeline::latches::MemWbEntry;
use crate::core::pipeline::traits::PipelineLatch;

/// Executes the memory stage.
///
/// # Arguments
///
/// * `pl` - Pipeline latches and flags.
/// * `cpu` - Mutable reference to the CPU state.
pub fn mem_stage(pl: &mut PipelineEngine, cpu: &mut Cpu) {
    let Some(entry) = pl.ex_mem.take() else {
        pl.last_inst_is_div = false;
        pl.mem_wb.flush();
        return;
    };

    pl.predict_right = true;
    pl.last_inst_is_div = entry.effect.divide;

    let mem_result = if entry.ctrl.mem_read || entry.ctrl.mem_write {
        cpu.access_memory(entry.effect.mem)
    } else {
        0
    };

    pl.mem_wb.set(MemWbEntry {
        inst: entry.inst,
        ctrl: entry.ctrl,
        alu: entry.effect.alu,
        mem_result,
    });
}
