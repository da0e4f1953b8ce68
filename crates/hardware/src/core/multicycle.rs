//! Multi-cycle timing model.
//!
//! Each instruction walks an explicit state machine, skipping the phases it
//! does not need:
//!
//! | from | to |
//! |------|----|
//! | IF   | ID |
//! | ID   | EX for R/I/S/B/U, WB for J, DONE otherwise |
//! | EX   | WB for R/U and non-load I, MEM for loads and S, DONE for B |
//! | MEM  | WB for loads, DONE for stores |
//! | WB   | DONE |
//!
//! The semantics run in EX, except for `jal`, whose target is known in ID, and
//! unrecognized words, which halt in ID. One cycle is charged per fetch, plus
//! the divider latency. The PC is committed at DONE.

use tracing::trace;

use crate::config::Config;
use crate::core::Cpu;
use crate::core::engine::ExecutionEngine;
use crate::core::units::divider::Divider;
use crate::isa::instruction::{Format, Instruction};
use crate::isa::semantics::Effect;

/// Per-instruction state of the multi-cycle FSM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Instruction fetch.
    If,
    /// Decode.
    Id,
    /// Execute.
    Ex,
    /// Memory access.
    Mem,
    /// Register writeback.
    Wb,
    /// Instruction complete.
    Done,
}

impl Phase {
    /// Returns the phase that follows `self` for an instruction of `format`.
    pub const fn next(self, format: Format, is_load: bool) -> Self {
        match (self, format) {
            (Self::If, _) => Self::Id,
            (Self::Id, Format::R | Format::I | Format::S | Format::B | Format::U) => Self::Ex,
            (Self::Id, Format::J) => Self::Wb,
            (Self::Ex, Format::I) if is_load => Self::Mem,
            (Self::Ex, Format::S) => Self::Mem,
            (Self::Ex, Format::R | Format::I | Format::U) | (Self::Mem, Format::I) => Self::Wb,
            _ => Self::Done,
        }
    }
}

/// The multi-cycle timing model.
#[derive(Clone, Copy, Debug)]
pub struct MultiCycleEngine {
    divider: Divider,
    /// Encoding of the previous instruction if it was a divide.
    last_div: Option<u32>,
}

impl MultiCycleEngine {
    /// Creates the engine with the configured divider timing.
    pub const fn new(config: &Config) -> Self {
        Self {
            divider: Divider::new(&config.timing),
            last_div: None,
        }
    }

    fn execute(&self, cpu: &mut Cpu, inst: &mut Instruction) -> Effect {
        let effect = cpu.execute(inst);
        if effect.divide {
            self.divider.charge(&mut cpu.stats, self.last_div, inst.inst);
        }
        effect
    }
}

impl ExecutionEngine for MultiCycleEngine {
    fn name(&self) -> &'static str {
        "multi-cycle"
    }

    fn tick(&mut self, cpu: &mut Cpu) {
        let mut inst = Instruction::default();
        let mut effect = Effect::default();
        let mut mem = 0;
        let mut phase = Phase::If;

        while phase != Phase::Done {
            match phase {
                Phase::If => {
                    inst = cpu.fetch(cpu.pc);
                    cpu.stats.cycles += 1;
                }
                Phase::Id => {
                    inst.decode();
                    if matches!(inst.format, Format::J | Format::N) {
                        effect = self.execute(cpu, &mut inst);
                    }
                }
                Phase::Ex => effect = self.execute(cpu, &mut inst),
                Phase::Mem => mem = cpu.access_memory(effect.mem),
                Phase::Wb => cpu.write_back(effect.write, &inst, effect.alu, mem),
                Phase::Done => {}
            }
            let next = phase.next(inst.format, inst.is_load);
            trace!(pc = format_args!("{:#010x}", inst.pc), ?phase, ?next, "phase");
            phase = next;
        }

        self.last_div = effect.divide.then_some(inst.inst);
        cpu.pc = inst.dnpc;
    }

    fn halted(&self, cpu: &Cpu) -> bool {
        cpu.halted()
    }
}
