//! Instruction encoding and the per-instruction record.
//!
//! Provides field extraction for 32-bit RISC-V encodings and the `Instruction`
//! record every engine creates at fetch and discards after writeback.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::isa::decode;
use crate::isa::rv64i::opcodes;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for a 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Field extraction for raw instruction words.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}

/// Encoding format of an instruction, derived from its opcode alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register-register (`rs1`, `rs2`, `rd`).
    R,
    /// Register-immediate, loads, `jalr` and system instructions.
    I,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// `lui` and `auipc`.
    U,
    /// `jal`.
    J,
    /// Unrecognized opcode.
    #[default]
    N,
}

/// One in-flight instruction.
///
/// Created at fetch with `dnpc == snpc`; execute overrides `dnpc` for taken
/// branches and jumps. `format` and `is_load` are filled in by [`Instruction::decode`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Address the instruction was fetched from.
    pub pc: u64,
    /// Static next PC (`pc + 4`).
    pub snpc: u64,
    /// Dynamic next PC, resolved by execute.
    pub dnpc: u64,
    /// Raw 32-bit encoding.
    pub inst: u32,
    /// Decoded format.
    pub format: Format,
    /// Instruction reads data memory.
    pub is_load: bool,
}

impl Instruction {
    /// Creates the record for a freshly fetched word.
    pub const fn fetched(pc: u64, inst: u32) -> Self {
        let snpc = pc.wrapping_add(INSTRUCTION_SIZE);
        Self {
            pc,
            snpc,
            dnpc: snpc,
            inst,
            format: Format::N,
            is_load: false,
        }
    }

    /// Classifies the format and load flag from the opcode.
    pub fn decode(&mut self) {
        let opcode = self.inst.opcode();
        self.format = decode::classify(opcode);
        self.is_load = opcode == opcodes::OP_LOAD;
    }
}
