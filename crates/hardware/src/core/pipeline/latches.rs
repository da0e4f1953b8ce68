//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Validity:** A [`Latch`] either holds one entry or is a bubble.
//! 2. **Instruction Flow:** Every entry carries the `Instruction` record it was
//!    created for, so the record lives exactly as long as the instruction is in flight.
//! 3. **Control:** Entries past decode carry the [`ControlSignals`] generated for them.

use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::instruction::Instruction;
use crate::isa::semantics::Effect;

/// Single-entry inter-stage buffer.
#[derive(Clone, Debug)]
pub struct Latch<T> {
    entry: Option<T>,
}

impl<T> Default for Latch<T> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<T> Latch<T> {
    /// Creates an empty latch.
    pub const fn new() -> Self {
        Self { entry: None }
    }

    /// Stores a valid entry, replacing the previous contents.
    pub fn set(&mut self, entry: T) {
        self.entry = Some(entry);
    }

    /// Removes and returns the entry, leaving a bubble.
    pub fn take(&mut self) -> Option<T> {
        self.entry.take()
    }

    /// Returns the entry without consuming it.
    pub const fn get(&self) -> Option<&T> {
        self.entry.as_ref()
    }
}

impl<T> PipelineLatch for Latch<T> {
    fn flush(&mut self) {
        self.entry = None;
    }

    fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Debug, Default)]
pub struct IfIdEntry {
    /// The fetched instruction.
    pub inst: Instruction,
    /// Next PC predicted at fetch (always `pc + 4`).
    pub predict_pc: u64,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
#[derive(Clone, Copy, Debug, Default)]
pub struct IdExEntry {
    /// The decoded instruction.
    pub inst: Instruction,
    /// Next PC predicted at fetch.
    pub predict_pc: u64,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Debug, Default)]
pub struct ExMemEntry {
    /// The executed instruction, `dnpc` resolved.
    pub inst: Instruction,
    /// Control signals for the memory and writeback stages.
    pub ctrl: ControlSignals,
    /// Outcome of execute, including the pending memory access.
    pub effect: Effect,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Debug, Default)]
pub struct MemWbEntry {
    /// The instruction awaiting retirement.
    pub inst: Instruction,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
    /// ALU computation result.
    pub alu: u64,
    /// Data loaded from memory (for load instructions).
    pub mem_result: u64,
}

/// IF/ID latch.
pub type IfId = Latch<IfIdEntry>;
/// ID/EX latch.
pub type IdEx = Latch<IdExEntry>;
/// EX/MEM latch.
pub type ExMem = Latch<ExMemEntry>;
/// MEM/WB latch.
pub type MemWb = Latch<MemWbEntry>;
