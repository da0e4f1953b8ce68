//! RISC-V Instruction Decoder.
//!
//! This module turns a raw word into the operands its semantics consume. It performs:
//! 1. **Format Classification:** Maps the 7-bit opcode to a [`Format`].
//! 2. **Immediate Extraction:** One pure function per immediate layout (I, S, B, U, J).
//! 3. **Operand Read:** Builds an [`Operands`] bundle, reading only the registers
//!    the format names.

use crate::core::arch::gpr::Gpr;
use crate::isa::instruction::{Format, Instruction, InstructionBits};
use crate::isa::rv64i::opcodes;

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// I-Type immediate occupies bits 31:20.
const I_IMM_SHIFT: u32 = 20;

/// S-Type immediate low field (imm[4:0]) starts at bit 7.
const S_IMM_LOW_SHIFT: u32 = 7;

/// S-Type immediate high field (imm[11:5]) starts at bit 25.
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Width of the S-Type and I-Type immediates.
const IMM12_BITS: u32 = 12;

/// Width of the B-Type immediate.
const B_IMM_BITS: u32 = 13;

/// U-Type immediate occupies bits 31:12 in place.
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Width of the J-Type immediate.
const J_IMM_BITS: u32 = 21;

/// Extracts bits `hi..=lo` of `inst`.
#[inline(always)]
const fn bits(inst: u32, hi: u32, lo: u32) -> u32 {
    (inst >> lo) & ((1 << (hi - lo + 1)) - 1)
}

/// Sign-extends the low `width` bits of `val` to 64 bits.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `width` - The number of valid bits in `val` (1-32).
pub const fn sign_extend(val: u32, width: u32) -> u64 {
    let shift = INSTRUCTION_WIDTH - width;
    (((val << shift) as i32) >> shift) as i64 as u64
}

/// Maps a major opcode to its encoding format.
///
/// Unknown opcodes classify as [`Format::N`]; they are not rejected here but
/// dispatched to the catch-all pattern, which halts the run.
pub const fn classify(opcode: u32) -> Format {
    match opcode {
        opcodes::OP_REG | opcodes::OP_REG_32 => Format::R,
        opcodes::OP_IMM
        | opcodes::OP_IMM_32
        | opcodes::OP_LOAD
        | opcodes::OP_JALR
        | opcodes::OP_SYSTEM
        | opcodes::OP_MISC_MEM => Format::I,
        opcodes::OP_STORE => Format::S,
        opcodes::OP_BRANCH => Format::B,
        opcodes::OP_LUI | opcodes::OP_AUIPC => Format::U,
        opcodes::OP_JAL => Format::J,
        _ => Format::N,
    }
}

/// I-Type immediate: `imm[11:0]` from bits 31:20, sign-extended.
pub const fn imm_i(inst: u32) -> u64 {
    ((inst as i32) >> I_IMM_SHIFT) as i64 as u64
}

/// S-Type immediate: `imm[11:5]` from bits 31:25 and `imm[4:0]` from bits 11:7.
pub const fn imm_s(inst: u32) -> u64 {
    let high = bits(inst, 31, S_IMM_HIGH_SHIFT);
    let low = bits(inst, 11, S_IMM_LOW_SHIFT);
    sign_extend((high << 5) | low, IMM12_BITS)
}

/// B-Type immediate: a 13-bit even byte offset assembled from four fields.
pub const fn imm_b(inst: u32) -> u64 {
    let combined = (bits(inst, 31, 31) << 12)
        | (bits(inst, 7, 7) << 11)
        | (bits(inst, 30, 25) << 5)
        | (bits(inst, 11, 8) << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// U-Type immediate: bits 31:12 in place with the low 12 bits clear.
///
/// RV64 sign-extends the 32-bit result, so `lui` with bit 31 set yields a
/// negative value.
pub const fn imm_u(inst: u32) -> u64 {
    (inst & U_IMM_MASK) as i32 as i64 as u64
}

/// J-Type immediate: a 21-bit even byte offset assembled from four fields.
pub const fn imm_j(inst: u32) -> u64 {
    let combined = (bits(inst, 31, 31) << 20)
        | (bits(inst, 19, 12) << 12)
        | (bits(inst, 20, 20) << 11)
        | (bits(inst, 30, 21) << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Operand bundle handed to an instruction's semantic handler.
///
/// Register values the format does not read are left at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    /// PC of the instruction.
    pub pc: u64,
    /// Static next PC.
    pub snpc: u64,
    /// Raw encoding.
    pub inst: u32,
    /// Destination register index.
    pub rd: usize,
    /// Value of `rs1`.
    pub src1: u64,
    /// Value of `rs2`.
    pub src2: u64,
    /// Sign-extended immediate for the format.
    pub imm: u64,
}

/// Extracts the operands of `inst` for the format of the pattern it matched.
///
/// The format comes from the matched pattern rather than the opcode so that the
/// catch-all reads nothing.
///
/// # Arguments
///
/// * `inst` - The instruction record.
/// * `format` - Format of the matched table pattern.
/// * `regs` - Register file to read source values from.
pub fn decode_operands(inst: &Instruction, format: Format, regs: &Gpr) -> Operands {
    let raw = inst.inst;
    let mut ops = Operands {
        pc: inst.pc,
        snpc: inst.snpc,
        inst: raw,
        rd: raw.rd(),
        ..Operands::default()
    };
    match format {
        Format::R => {
            ops.src1 = regs.read(raw.rs1());
            ops.src2 = regs.read(raw.rs2());
        }
        Format::I => {
            ops.src1 = regs.read(raw.rs1());
            ops.imm = imm_i(raw);
        }
        Format::S => {
            ops.src1 = regs.read(raw.rs1());
            ops.src2 = regs.read(raw.rs2());
            ops.imm = imm_s(raw);
        }
        Format::B => {
            ops.src1 = regs.read(raw.rs1());
            ops.src2 = regs.read(raw.rs2());
            ops.imm = imm_b(raw);
        }
        Format::U => ops.imm = imm_u(raw),
        Format::J => ops.imm = imm_j(raw),
        Format::N => {}
    }
    ops
}
