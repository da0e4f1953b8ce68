//! Instruction Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Execution:** Runs the shared pattern table on the ID/EX entry.
//! 2. **Divider Timing:** Charges divide latency unless the divider result is reused.
//! 3. **Branch Resolution:** Redirects the PC when a branch or jump resolves to a
//!    next PC other than the fetch-time prediction.
//! 4. **Halt:** Squashes younger instructions and starts draining the pipeline.

use tracing::debug;

use crate::core::Cpu;
use crate::core::pipeline::PipelineEngine;
use crate::core::pipeline::latches::ExMemEntry;
use crate::core::pipeline::traits::PipelineLatch;

/// Executes the instruction execute stage.
///
/// # Arguments
///
/// * `pl` - Pipeline latches and flags.
/// * `cpu` - Mutable reference to the CPU state.
pub fn execute_stage(pl: &mut PipelineEngine, cpu: &mut Cpu) {
    let Some(entry) = pl.id_ex.take() else {
        pl.ex_mem.flush();
        return;
    };

    let mut inst = entry.inst;
    let effect = cpu.execute(&mut inst);

    if effect.divide {
        let ahead = pl
            .mem_wb
            .get()
            .filter(|_| pl.last_inst_is_div)
            .map(|e| e.inst.inst);
        pl.divider.charge(&mut cpu.stats, ahead, inst.inst);
    }

    if effect.halt.is_some() {
        debug!(pc = format_args!("{:#010x}", inst.pc), "halt in execute, draining");
        pl.if_id.flush();
        pl.id_ex.flush();
        pl.ex_mem.flush();
        pl.halt_pc = Some(inst.dnpc);
        return;
    }

    let transfers = entry.ctrl.branch || entry.ctrl.jump;
    if transfers && inst.dnpc != entry.predict_pc {
        cpu.stats.stalls_control += 1;
        pl.predict_right = false;
        cpu.pc = inst.dnpc;
        debug!(
            pc = format_args!("{:#010x}", inst.pc),
            target = format_args!("{:#010x}", inst.dnpc),
            "control hazard, redirecting fetch"
        );
    }

    pl.ex_mem.set(ExMemEntry {
        inst,
        ctrl: entry.ctrl,
        effect,
    });
}
