//! Data Hazard Detection.
//!
//! The pipeline has no forwarding network. An instruction in decode whose
//! source register is the pending destination of an instruction in the EX/MEM
//! or MEM/WB latch must wait until that instruction has written back.
//! 1. **Register Use:** Which registers an instruction reads, from its control signals.
//! 2. **Hazard Detection:** Comparison against the in-flight writers.

use crate::core::pipeline::signals::{ControlSignals, OpASrc, OpBSrc};
use crate::isa::abi::{REG_A0, REG_A1, REG_A2, REG_A7};
use crate::isa::instruction::InstructionBits;

/// Returns the registers `inst` reads, given its decoded control signals.
///
/// `rs1` is read when it feeds ALU operand A, `rs2` when it feeds operand B or
/// supplies store data. System instructions read fixed ABI registers: `ecall`
/// (the one that writes `a0`) reads `a0`-`a2` and `a7`, `ebreak` reads `a0`.
pub fn source_regs(ctrl: &ControlSignals, inst: u32) -> [Option<usize>; 4] {
    if ctrl.is_system {
        return if ctrl.reg_write {
            [Some(REG_A0), Some(REG_A1), Some(REG_A2), Some(REG_A7)]
        } else {
            [Some(REG_A0), None, None, None]
        };
    }
    let rs1 = (ctrl.a_src == OpASrc::Reg1).then_some(inst.rs1());
    let rs2 = (ctrl.b_src == OpBSrc::Reg2 || ctrl.mem_write).then_some(inst.rs2());
    [rs1, rs2, None, None]
}

/// Returns the register an in-flight instruction will write, ignoring `x0`.
const fn pending_write(ctrl: &ControlSignals) -> Option<usize> {
    if ctrl.reg_write && ctrl.rd != 0 {
        Some(ctrl.rd)
    } else {
        None
    }
}

/// Checks whether a decode-stage instruction must stall.
///
/// # Arguments
///
/// * `sources` - Registers the decoding instruction reads.
/// * `writers` - Control signals of the EX/MEM and MEM/WB entries, `None` for bubbles.
///
/// # Returns
///
/// `true` if any source is the pending destination of a writer.
pub fn raw_hazard(sources: &[Option<usize>], writers: &[Option<&ControlSignals>]) -> bool {
    writers
        .iter()
        .flatten()
        .filter_map(|ctrl| pending_write(ctrl))
        .any(|rd| sources.iter().flatten().any(|&rs| rs == rd))
}
