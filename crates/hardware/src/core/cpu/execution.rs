//! Shared instruction primitives.
//!
//! Every timing model is built from the same four steps, applied in whatever
//! order and cycle its schedule dictates:
//! 1. **Fetch:** Read the word at a PC into a fresh `Instruction`.
//! 2. **Execute:** Dispatch through the pattern table and resolve `ecall`.
//! 3. **Memory:** Perform the load or store the effect requested.
//! 4. **Writeback:** Retire a register write.

use tracing::info;

use super::Cpu;
use crate::common::ExitStatus;
use crate::core::units::lsu::{Lsu, MemOp};
use crate::isa::decode::decode_operands;
use crate::isa::instruction::Instruction;
use crate::isa::semantics::{Effect, RegWrite, WbSource};
use crate::isa::table;

impl Cpu {
    /// Fetches the instruction at `pc`.
    pub fn fetch(&self, pc: u64) -> Instruction {
        Instruction::fetched(pc, self.mem.fetch(pc))
    }

    /// Executes one instruction through the pattern table.
    ///
    /// Resolves `inst.dnpc`, services any environment call, counts the
    /// instruction and raises the halt if the instruction requested one. The
    /// returned effect still carries the memory access and register write.
    pub fn execute(&mut self, inst: &mut Instruction) -> Effect {
        let pattern = table::lookup(inst.inst);
        let ops = decode_operands(inst, pattern.format, &self.regs);
        let mut effect = pattern.semantics.execute(&ops, &self.regs);
        if let Some(call) = effect.env_call {
            self.service_env_call(inst.pc, call, &mut effect);
        }
        inst.dnpc = effect.dnpc;
        self.stats.record(pattern.semantics);
        self.tracer.observe(inst, pattern);
        if let Some(code) = effect.halt {
            self.raise_halt(inst.pc, code);
        }
        effect
    }

    /// Performs the memory access of an executed instruction.
    ///
    /// # Returns
    ///
    /// The extended load value, or 0 for stores and non-memory instructions.
    pub fn access_memory(&mut self, op: MemOp) -> u64 {
        Lsu::perform(&mut self.mem, op)
    }

    /// Retires a register write, selecting the value by its source.
    pub fn write_back(&mut self, write: Option<RegWrite>, inst: &Instruction, alu: u64, mem: u64) {
        let Some(RegWrite { rd, src }) = write else {
            return;
        };
        let value = match src {
            WbSource::Alu => alu,
            WbSource::Mem => mem,
            WbSource::PcPlus4 => inst.snpc,
        };
        self.write_reg(rd, value);
    }

    /// Writes a general-purpose register at retirement.
    pub fn write_reg(&mut self, rd: usize, value: u64) {
        #[cfg(feature = "commit-log")]
        tracing::debug!(
            target: "commit",
            rd,
            value = format_args!("{value:#018x}"),
            "register write"
        );
        self.regs.write(rd, value);
    }

    /// Records that the program stopped at `pc` with `code`.
    ///
    /// The first halt wins; the console is flushed so guest output precedes the
    /// halt report.
    pub fn raise_halt(&mut self, pc: u64, code: i64) {
        if self.exit.is_some() {
            return;
        }
        self.console.flush();
        let status = ExitStatus { pc, code };
        info!(pc = format_args!("{pc:#010x}"), code, "program halted");
        self.exit = Some(status);
    }
}
