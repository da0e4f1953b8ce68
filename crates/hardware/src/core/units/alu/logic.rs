//! ALU logical and comparison operations.
//!
//! Bitwise OR, AND, XOR, and set-less-than. RV64IM has no W forms of these,
//! so `is32` only narrows the comparisons.

use super::AluOp;

/// Executes a logical or comparison operation; comparisons return 0 or 1.
pub fn execute(op: AluOp, a: u64, b: u64, is32: bool) -> u64 {
    let (a, b) = if is32 {
        (a as i32 as i64 as u64, b as i32 as i64 as u64)
    } else {
        (a, b)
    };
    match op {
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Slt => u64::from((a as i64) < (b as i64)),
        AluOp::Sltu => u64::from(a < b),
        _ => 0,
    }
}
