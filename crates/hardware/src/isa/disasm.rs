//! Instruction Disassembler for RV64IM.
//!
//! Converts an instruction word into a mnemonic string for the instruction
//! trace, the debugger and test diagnostics. Mnemonics come from the same
//! pattern table execution uses, so the printed name is always the one that ran.
//!
//! # Usage
//!
//! ```
//! use rv64im_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x00A0_0513), "addi a0, zero, 10");
//! ```

use crate::isa::abi::REG_NAMES;
use crate::isa::decode::{imm_b, imm_i, imm_j, imm_s, imm_u};
use crate::isa::instruction::InstructionBits;
use crate::isa::semantics::Semantics;
use crate::isa::table::lookup;

/// Mask selecting the shift amount of a 64-bit shift immediate.
const SHAMT_MASK: u64 = 0x3F;

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Disassembles a 32-bit instruction word.
///
/// Branch and jump targets are printed as signed PC-relative offsets.
/// Unrecognized encodings print as `inv`.
pub fn disassemble(inst: u32) -> String {
    render(inst, None)
}

/// Disassembles the little-endian word at the start of `bytes` fetched from `pc`.
///
/// Branch and jump targets are printed as absolute addresses. Fewer than four
/// bytes yield `None`.
pub fn disassemble_bytes(bytes: &[u8], pc: u64) -> Option<String> {
    let word: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
    Some(render(u32::from_le_bytes(word), Some(pc)))
}

/// Formats a control-transfer target as an absolute address or a signed offset.
fn target(pc: Option<u64>, offset: u64) -> String {
    match pc {
        Some(pc) => format!("{:#x}", pc.wrapping_add(offset)),
        None => format!("{}", offset as i64),
    }
}

fn render(inst: u32, pc: Option<u64>) -> String {
    let pattern = lookup(inst);
    let mn = pattern.name;
    let (rd, rs1, rs2) = (xreg(inst.rd()), xreg(inst.rs1()), xreg(inst.rs2()));

    match pattern.semantics {
        Semantics::Lui | Semantics::Auipc => {
            format!("{mn} {rd}, {:#x}", (imm_u(inst) >> 12) & 0xF_FFFF)
        }
        Semantics::Jal => format!("{mn} {rd}, {}", target(pc, imm_j(inst))),
        Semantics::Jalr | Semantics::Load { .. } => {
            format!("{mn} {rd}, {}({rs1})", imm_i(inst) as i64)
        }
        Semantics::Branch(_) => format!("{mn} {rs1}, {rs2}, {}", target(pc, imm_b(inst))),
        Semantics::Store(_) => format!("{mn} {rs2}, {}({rs1})", imm_s(inst) as i64),
        Semantics::AluImm { op, .. } if op.is_shift() => {
            format!("{mn} {rd}, {rs1}, {}", imm_i(inst) & SHAMT_MASK)
        }
        Semantics::AluImm { .. } => format!("{mn} {rd}, {rs1}, {}", imm_i(inst) as i64),
        Semantics::AluReg { .. } => format!("{mn} {rd}, {rs1}, {rs2}"),
        Semantics::Fence | Semantics::Ebreak | Semantics::Ecall => mn.to_string(),
        Semantics::Unknown => format!("{mn} ({inst:#010x})"),
    }
}
