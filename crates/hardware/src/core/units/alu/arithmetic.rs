//! ALU arithmetic operations.
//!
//! Implements integer addition, subtraction, multiplication, and division
//! for both RV64 and W-suffixed 32-bit variants, including the M-extension
//! multiply/divide family.
//!
//! Division never faults: a zero divisor yields an all-ones quotient and
//! leaves the dividend as the remainder. W results are sign-extended from bit 31.

use super::AluOp;

/// Number of bits in XLEN for RV64 (used for high-multiply shift).
const XLEN_BITS: u32 = 64;

/// Quotient produced by a division by zero.
const DIV_BY_ZERO: u64 = u64::MAX;

/// Sign-extends the low 32 bits of `v` to 64 bits.
#[inline]
const fn sext32(v: u64) -> u64 {
    v as i32 as i64 as u64
}

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op`   - The ALU operation to perform (must be an arithmetic variant).
/// * `a`    - First operand (64-bit value).
/// * `b`    - Second operand (64-bit value).
/// * `is32` - If true, perform the 32-bit (W-suffix) variant.
///
/// # Returns
///
/// The 64-bit result. Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u64, b: u64, is32: bool) -> u64 {
    match (op, is32) {
        (AluOp::Add, false) => a.wrapping_add(b),
        (AluOp::Add, true) => sext32(a.wrapping_add(b)),
        (AluOp::Sub, false) => a.wrapping_sub(b),
        (AluOp::Sub, true) => sext32(a.wrapping_sub(b)),
        (AluOp::Mul, false) => a.wrapping_mul(b),
        (AluOp::Mul, true) => sext32(a.wrapping_mul(b)),

        // High halves need the full 128-bit product; sign-extend through i64
        // for signed operands, zero-extend through u128 for unsigned ones.
        (AluOp::Mulh, _) => (((a as i64 as i128) * (b as i64 as i128)) >> XLEN_BITS) as u64,
        (AluOp::Mulhsu, _) => (((a as i64 as i128) * (b as u128 as i128)) >> XLEN_BITS) as u64,
        (AluOp::Mulhu, _) => (((a as u128) * (b as u128)) >> XLEN_BITS) as u64,

        (AluOp::Div, false) => {
            if b == 0 {
                DIV_BY_ZERO
            } else {
                (a as i64).wrapping_div(b as i64) as u64
            }
        }
        (AluOp::Div, true) => {
            if b as i32 == 0 {
                DIV_BY_ZERO
            } else {
                (a as i32).wrapping_div(b as i32) as i64 as u64
            }
        }
        (AluOp::Divu, false) => a.checked_div(b).unwrap_or(DIV_BY_ZERO),
        (AluOp::Divu, true) => (a as u32)
            .checked_div(b as u32)
            .map_or(DIV_BY_ZERO, |q| sext32(q as u64)),
        (AluOp::Rem, false) => {
            if b == 0 {
                a
            } else {
                (a as i64).wrapping_rem(b as i64) as u64
            }
        }
        (AluOp::Rem, true) => {
            if b as i32 == 0 {
                sext32(a)
            } else {
                (a as i32).wrapping_rem(b as i32) as i64 as u64
            }
        }
        (AluOp::Remu, false) => a.checked_rem(b).unwrap_or(a),
        (AluOp::Remu, true) => sext32(
            (a as u32)
                .checked_rem(b as u32)
                .map_or(a, |r| r as u64),
        ),
        _ => 0,
    }
}
