//! Functional instruction-set simulator.
//!
//! Each step fetches, executes, performs the memory access and writes back one
//! whole instruction, then moves the PC to its dynamic next PC. One cycle is
//! charged per instruction.

use crate::core::Cpu;
use crate::core::engine::ExecutionEngine;

/// The functional timing model. Holds no state of its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct IssEngine;

impl ExecutionEngine for IssEngine {
    fn name(&self) -> &'static str {
        "iss"
    }

    fn tick(&mut self, cpu: &mut Cpu) {
        let mut inst = cpu.fetch(cpu.pc);
        inst.decode();
        let effect = cpu.execute(&mut inst);
        let mem = cpu.access_memory(effect.mem);
        cpu.write_back(effect.write, &inst, effect.alu, mem);
        cpu.pc = inst.dnpc;
        cpu.stats.cycles += 1;
    }

    fn halted(&self, cpu: &Cpu) -> bool {
        cpu.halted()
    }
}
