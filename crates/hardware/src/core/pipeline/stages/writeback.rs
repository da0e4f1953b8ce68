//! Writeback (WB) Stage.
//!
//! Retires the MEM/WB entry by writing its selected result to the register file.

use crate::core::Cpu;
use crate::core::pipeline::PipelineEngine;
use crate::isa::semantics::RegWrite;

/// Executes the writeback stage.
///
/// # Arguments
///
/// * `pl` - Pipeline latches and flags.
/// * `cpu` - Mutable reference to the CPU state.
pub fn wb_stage(pl: &mut PipelineEngine, cpu: &mut Cpu) {
    let Some(entry) = pl.mem_wb.take() else {
        return;
    };
    let write = entry.ctrl.reg_write.then_some(RegWrite {
        rd: entry.ctrl.rd,
        src: entry.ctrl.wb_src,
    });
    cpu.write_back(write, &entry.inst, entry.alu, entry.mem_result);
}
