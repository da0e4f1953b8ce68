//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Squash:** After a misprediction, holds fetch and emits a bubble.
//! 2. **Control Generation:** Looks the word up in the pattern table and derives
//!    its control signals.
//! 3. **Hazard Detection:** Stalls while a register the signals say is read has a
//!    pending write in the EX/MEM or MEM/WB latch.

use tracing::debug;

use crate::core::Cpu;
use crate::core::pipeline::PipelineEngine;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::IdExEntry;
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::table;

/// Executes the instruction decode stage.
///
/// The IF/ID entry is read, not consumed: a stalled instruction stays in the
/// latch because fetch is write-disabled for the cycle.
///
/// # Arguments
///
/// * `pl` - Pipeline latches and flags.
/// * `cpu` - Mutable reference to the CPU state.
pub fn decode_stage(pl: &mut PipelineEngine, cpu: &mut Cpu) {
    if !pl.predict_right {
        pl.set_fetch_enabled(false);
        pl.id_ex.flush();
        return;
    }

    let Some(&entry) = pl.if_id.get() else {
        pl.set_fetch_enabled(true);
        pl.id_ex.flush();
        return;
    };

    let ctrl = ControlSignals::from_pattern(table::lookup(entry.inst.inst), entry.inst.inst);
    let sources = hazards::source_regs(&ctrl, entry.inst.inst);
    let writers = [
        pl.ex_mem.get().map(|e| &e.ctrl),
        pl.mem_wb.get().map(|e| &e.ctrl),
    ];
    if hazards::raw_hazard(&sources, &writers) {
        if !pl.stalling {
            pl.stalling = true;
            cpu.stats.stalls_data += 1;
            debug!(pc = format_args!("{:#010x}", entry.inst.pc), "RAW hazard stall");
        }
        cpu.stats.raw_stall_cycles += 1;
        pl.set_fetch_enabled(false);
        pl.id_ex.flush();
        return;
    }

    pl.stalling = false;
    pl.set_fetch_enabled(true);
    let mut inst = entry.inst;
    inst.decode();
    pl.id_ex.set(IdExEntry {
        inst,
        predict_pc: entry.predict_pc,
        ctrl,
    });
}
