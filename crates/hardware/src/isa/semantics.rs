//! Instruction semantics shared by every timing model.
//!
//! This module computes what an instruction does, independent of when it does it:
//! 1. **Kinds:** [`Semantics`] names the behaviour attached to each table pattern.
//! 2. **Effects:** [`Effect`] is the architectural outcome of executing one
//!    instruction: ALU result, next PC, pending memory access, register write,
//!    halt request and environment call.
//!
//! Nothing here touches memory or the register file. Engines apply an `Effect`
//! in whatever phase their timing model dictates.

use tracing::error;

use crate::common::constants::HALT_FATAL;
use crate::core::arch::gpr::Gpr;
use crate::core::units::alu::{Alu, AluOp};
use crate::core::units::lsu::{MemOp, MemWidth};
use crate::isa::abi::{REG_A0, REG_A1, REG_A2, REG_A7};
use crate::isa::decode::Operands;

/// Branch comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// `beq`
    Eq,
    /// `bne`
    Ne,
    /// `blt`
    Lt,
    /// `bge`
    Ge,
    /// `bltu`
    Ltu,
    /// `bgeu`
    Geu,
}

impl BranchCond {
    /// Evaluates the comparison on two register values.
    pub const fn taken(self, a: u64, b: u64) -> bool {
        match self {
            Self::Eq => a == b,
            Self::Ne => a != b,
            Self::Lt => (a as i64) < (b as i64),
            Self::Ge => (a as i64) >= (b as i64),
            Self::Ltu => a < b,
            Self::Geu => a >= b,
        }
    }
}

/// Behaviour attached to an instruction pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Semantics {
    /// Load upper immediate.
    Lui,
    /// Add upper immediate to PC.
    Auipc,
    /// Jump and link.
    Jal,
    /// Jump and link register.
    Jalr,
    /// Conditional branch.
    Branch(BranchCond),
    /// Load from memory into `rd`.
    Load {
        /// Access width.
        width: MemWidth,
        /// Sign-extend the loaded value.
        signed: bool,
    },
    /// Store the low bytes of `rs2`.
    Store(MemWidth),
    /// ALU operation with an immediate second operand.
    AluImm {
        /// Operation.
        op: AluOp,
        /// 32-bit `w` variant.
        word: bool,
    },
    /// ALU operation with two register operands.
    AluReg {
        /// Operation.
        op: AluOp,
        /// 32-bit `w` variant.
        word: bool,
    },
    /// `fence` / `fence.i`; a no-op on a single in-order hart.
    Fence,
    /// Stop the run with the exit code in `a0`.
    Ebreak,
    /// Host-serviced system call.
    Ecall,
    /// Catch-all for encodings no other pattern matches.
    Unknown,
}

/// Source of the value written back to `rd`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WbSource {
    /// The ALU result.
    #[default]
    Alu,
    /// The value loaded by the memory phase.
    Mem,
    /// The static next PC (link address of jumps).
    PcPlus4,
}

/// Pending register write of an executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegWrite {
    /// Destination register.
    pub rd: usize,
    /// Which value to write.
    pub src: WbSource,
}

/// System call requested by `ecall`, resolved by the CPU against memory and console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvCall {
    /// Syscall number (`a7`).
    pub number: u64,
    /// Arguments (`a0`, `a1`, `a2`).
    pub args: [u64; 3],
}

/// Architectural outcome of executing one instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Effect {
    /// ALU result, effective address for memory operations, or jump target.
    pub alu: u64,
    /// Resolved next PC.
    pub dnpc: u64,
    /// Memory access still to be performed.
    pub mem: MemOp,
    /// Register write still to be performed.
    pub write: Option<RegWrite>,
    /// Halt with this exit code once the instruction retires.
    pub halt: Option<i64>,
    /// Pending environment call.
    pub env_call: Option<EnvCall>,
    /// Instruction belongs to the divide/remainder family.
    pub divide: bool,
}

impl Effect {
    /// An effect that only falls through to the next instruction.
    const fn fall_through(ops: &Operands) -> Self {
        Self {
            alu: 0,
            dnpc: ops.snpc,
            mem: MemOp::None,
            write: None,
            halt: None,
            env_call: None,
            divide: false,
        }
    }

    /// Sets the ALU result and a register write from `src`.
    const fn writing(mut self, rd: usize, alu: u64, src: WbSource) -> Self {
        self.alu = alu;
        self.write = Some(RegWrite { rd, src });
        self
    }
}

impl Semantics {
    /// Computes the effect of this instruction.
    ///
    /// # Arguments
    ///
    /// * `ops` - Operands decoded for the instruction's format.
    /// * `regs` - Register file, read directly by `ebreak` and `ecall`.
    pub fn execute(self, ops: &Operands, regs: &Gpr) -> Effect {
        let base = Effect::fall_through(ops);
        match self {
            Self::Lui => base.writing(ops.rd, ops.imm, WbSource::Alu),
            Self::Auipc => base.writing(ops.rd, ops.pc.wrapping_add(ops.imm), WbSource::Alu),
            Self::Jal => {
                let target = ops.pc.wrapping_add(ops.imm);
                Effect {
                    dnpc: target,
                    ..base.writing(ops.rd, target, WbSource::PcPlus4)
                }
            }
            Self::Jalr => {
                let target = ops.src1.wrapping_add(ops.imm) & !1;
                Effect {
                    dnpc: target,
                    ..base.writing(ops.rd, target, WbSource::PcPlus4)
                }
            }
            Self::Branch(cond) => {
                let taken = cond.taken(ops.src1, ops.src2);
                Effect {
                    alu: u64::from(taken),
                    dnpc: if taken { ops.pc.wrapping_add(ops.imm) } else { ops.snpc },
                    ..base
                }
            }
            Self::Load { width, signed } => {
                let addr = ops.src1.wrapping_add(ops.imm);
                Effect {
                    mem: MemOp::Load {
                        addr,
                        width,
                        signed,
                    },
                    ..base.writing(ops.rd, addr, WbSource::Mem)
                }
            }
            Self::Store(width) => {
                let addr = ops.src1.wrapping_add(ops.imm);
                Effect {
                    alu: addr,
                    mem: MemOp::Store {
                        addr,
                        width,
                        data: ops.src2,
                    },
                    ..base
                }
            }
            Self::AluImm { op, word } => {
                base.writing(ops.rd, Alu::execute(op, ops.src1, ops.imm, word), WbSource::Alu)
            }
            Self::AluReg { op, word } => Effect {
                divide: op.is_divide(),
                ..base.writing(ops.rd, Alu::execute(op, ops.src1, ops.src2, word), WbSource::Alu)
            },
            Self::Fence => base,
            Self::Ebreak => Effect {
                halt: Some(regs.read(REG_A0) as i64),
                ..base
            },
            Self::Ecall => Effect {
                env_call: Some(EnvCall {
                    number: regs.read(REG_A7),
                    args: [regs.read(REG_A0), regs.read(REG_A1), regs.read(REG_A2)],
                }),
                ..base.writing(REG_A0, regs.read(REG_A0), WbSource::Alu)
            },
            Self::Unknown => {
                error!(
                    pc = format_args!("{:#010x}", ops.pc),
                    inst = format_args!("{:#010x}", ops.inst),
                    "invalid instruction"
                );
                Effect {
                    halt: Some(HALT_FATAL),
                    ..base
                }
            }
        }
    }
}
