//! Instruction and function-call tracing.
//!
//! The CPU hands every executed instruction to its [`Tracer`]:
//! 1. **itrace:** One event per instruction on target `itrace` with the PC,
//!    raw word and disassembly.
//! 2. **ftrace:** Calls (`jal`/`jalr` linking through `ra`) and returns
//!    (`jalr x0, 0(ra)`) on target `ftrace`, indented by call depth and named
//!    from the ELF symbol table.

use tracing::info;

use crate::isa::abi::REG_RA;
use crate::isa::disasm::disassemble_bytes;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::semantics::Semantics;
use crate::isa::table::Pattern;
use crate::sim::symbols::SymbolTable;

/// Encoding of `ret` (`jalr x0, 0(ra)`).
const RET: u32 = 0x0000_8067;

/// Columns of indentation per call level.
const INDENT: usize = 2;

/// Trace hooks attached to a CPU.
#[derive(Clone, Debug, Default)]
pub struct Tracer {
    itrace: bool,
    ftrace: bool,
    symbols: SymbolTable,
    depth: usize,
}

impl Tracer {
    /// A tracer that emits nothing.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Creates a tracer.
    ///
    /// # Arguments
    ///
    /// * `itrace` - Emit one event per executed instruction.
    /// * `ftrace` - Emit call/return events.
    /// * `symbols` - Function names for ftrace.
    pub const fn new(itrace: bool, ftrace: bool, symbols: SymbolTable) -> Self {
        Self {
            itrace,
            ftrace,
            symbols,
            depth: 0,
        }
    }

    /// Current call depth seen by ftrace.
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Observes one executed instruction whose `dnpc` has been resolved.
    pub fn observe(&mut self, inst: &Instruction, pattern: &Pattern) {
        if self.itrace {
            let text = disassemble_bytes(&inst.inst.to_le_bytes(), inst.pc).unwrap_or_default();
            info!(target: "itrace", "{:#010x}: {:08x}  {text}", inst.pc, inst.inst);
        }
        if self.ftrace {
            self.function_event(inst, pattern);
        }
    }

    fn function_event(&mut self, inst: &Instruction, pattern: &Pattern) {
        if inst.inst == RET {
            self.depth = self.depth.saturating_sub(1);
            info!(
                target: "ftrace",
                "{:#010x}: {:indent$}ret  [{}]",
                inst.pc,
                "",
                self.symbols.name_of(inst.pc),
                indent = self.depth * INDENT
            );
        } else if matches!(pattern.semantics, Semantics::Jal | Semantics::Jalr)
            && inst.inst.rd() == REG_RA
        {
            info!(
                target: "ftrace",
                "{:#010x}: {:indent$}call [{}@{:#010x}]",
                inst.pc,
                "",
                self.symbols.name_of(inst.dnpc),
                inst.dnpc,
                indent = self.depth * INDENT
            );
            self.depth += 1;
        }
    }
}
