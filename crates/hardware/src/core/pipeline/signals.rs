//! Pipeline control signals.
//!
//! This module defines the signals decode attaches to an instruction. It provides:
//! 1. **Operand Selection:** Sources for the ALU inputs (register, PC, zero, immediate).
//! 2. **Memory Control:** Read and write enables for the memory stage.
//! 3. **Writeback Control:** Destination register, write enable and value source.
//!
//! Signals are derived from the semantics of the matched table pattern, so they
//! agree with the register write `Semantics::execute` reports for the same word.
//! The hazard unit reads the operand selectors to learn which registers an
//! instruction consumes; execute reads `branch`/`jump` to gate redirects.

use crate::isa::abi::REG_A0;
use crate::isa::instruction::InstructionBits;
use crate::isa::semantics::{Semantics, WbSource};
use crate::isa::table::Pattern;

/// Source for ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// Use `rs1` register value.
    #[default]
    Reg1,

    /// Use program counter value.
    Pc,

    /// Use zero.
    Zero,
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Use sign-extended immediate value.
    #[default]
    Imm,

    /// Use `rs2` register value.
    Reg2,
}

/// Control signals for pipeline stage execution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Destination register index.
    pub rd: usize,
    /// Value written back when `reg_write` is set.
    pub wb_src: WbSource,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Instruction is an unconditional jump (`JAL`/`JALR`).
    pub jump: bool,
    /// Source selection for ALU operand A.
    pub a_src: OpASrc,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
    /// Instruction is `ecall` or `ebreak`.
    pub is_system: bool,
}

impl ControlSignals {
    /// Generates the signals for `inst`, which matched `pattern`.
    pub fn from_pattern(pattern: &Pattern, inst: u32) -> Self {
        let base = Self {
            rd: inst.rd(),
            ..Self::default()
        };
        let write = Self {
            reg_write: true,
            ..base
        };
        match pattern.semantics {
            Semantics::Lui => Self {
                a_src: OpASrc::Zero,
                ..write
            },
            Semantics::Auipc => Self {
                a_src: OpASrc::Pc,
                ..write
            },
            Semantics::Jal => Self {
                jump: true,
                wb_src: WbSource::PcPlus4,
                a_src: OpASrc::Pc,
                ..write
            },
            Semantics::Jalr => Self {
                jump: true,
                wb_src: WbSource::PcPlus4,
                ..write
            },
            Semantics::Branch(_) => Self {
                branch: true,
                b_src: OpBSrc::Reg2,
                ..base
            },
            Semantics::Load { .. } => Self {
                mem_read: true,
                wb_src: WbSource::Mem,
                ..write
            },
            Semantics::Store(_) => Self {
                mem_write: true,
                ..base
            },
            Semantics::AluImm { .. } => write,
            Semantics::AluReg { .. } => Self {
                b_src: OpBSrc::Reg2,
                ..write
            },
            Semantics::Ecall => Self {
                rd: REG_A0,
                is_system: true,
                ..write
            },
            Semantics::Ebreak => Self {
                is_system: true,
                ..base
            },
            Semantics::Fence | Semantics::Unknown => Self {
                a_src: OpASrc::Zero,
                ..base
            },
        }
    }
}
