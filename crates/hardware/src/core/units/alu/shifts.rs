//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA) for 64-bit and W-suffixed variants.
//!
//! Shift amounts are masked to 6 bits for 64-bit shifts and 5 bits for the
//! W forms, whose results are sign-extended from bit 31.

use super::AluOp;

/// Shift amount mask for 64-bit shifts.
const SHAMT_MASK_64: u64 = 0x3f;

/// Shift amount mask for W-suffixed shifts.
const SHAMT_MASK_32: u64 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op`   - The ALU operation to perform (must be a shift variant).
/// * `a`    - The value to be shifted.
/// * `b`    - The shift amount; only the low 5 or 6 bits are used.
/// * `is32` - If true, perform the W-suffixed variant.
pub fn execute(op: AluOp, a: u64, b: u64, is32: bool) -> u64 {
    if is32 {
        let sh = (b & SHAMT_MASK_32) as u32;
        let word = a as u32;
        let out = match op {
            AluOp::Sll => word << sh,
            AluOp::Srl => word >> sh,
            AluOp::Sra => ((word as i32) >> sh) as u32,
            _ => return 0,
        };
        out as i32 as i64 as u64
    } else {
        let sh = (b & SHAMT_MASK_64) as u32;
        match op {
            AluOp::Sll => a << sh,
            AluOp::Srl => a >> sh,
            AluOp::Sra => ((a as i64) >> sh) as u64,
            _ => 0,
        }
    }
}
