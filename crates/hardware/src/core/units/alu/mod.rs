//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU behind every arithmetic handler of the
//! instruction table. It handles arithmetic, logical operations, and shifts for
//! both 32-bit and 64-bit operands, plus the Multiply/Divide (M) extension.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Mulh, Mulhsu, Mulhu, Div, Divu, Rem, Remu
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

/// Integer ALU operation selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition.
    #[default]
    Add,
    /// Integer subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
    /// Integer multiply (low bits).
    Mul,
    /// Integer multiply (high bits, signed × signed).
    Mulh,
    /// Integer multiply (high bits, signed × unsigned).
    Mulhsu,
    /// Integer multiply (high bits, unsigned × unsigned).
    Mulhu,
    /// Integer divide (signed).
    Div,
    /// Integer divide (unsigned).
    Divu,
    /// Integer remainder (signed).
    Rem,
    /// Integer remainder (unsigned).
    Remu,
}

impl AluOp {
    /// Returns `true` for the operations that occupy the iterative divider.
    pub const fn is_divide(self) -> bool {
        matches!(self, Self::Div | Self::Divu | Self::Rem | Self::Remu)
    }

    /// Returns `true` for M-extension operations.
    pub const fn is_muldiv(self) -> bool {
        matches!(self, Self::Mul | Self::Mulh | Self::Mulhsu | Self::Mulhu) || self.is_divide()
    }

    /// Returns `true` for the shift operations.
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::Sll | Self::Srl | Self::Sra)
    }
}

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Stateless: every handler in the instruction table funnels through
/// [`Alu::execute`], so all three timing models share one implementation.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op`   - The ALU operation to perform
    /// * `a`    - First operand (64-bit value)
    /// * `b`    - Second operand (64-bit value, also used as shift amount)
    /// * `is32` - If true, perform the W-suffixed 32-bit variant
    ///
    /// # Returns
    ///
    /// The 64-bit result. For 32-bit operations the result is sign-extended
    /// from bit 31.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv64im_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8, false), 50);
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1, true), 0);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i64 as u64, 10, false), 1);
    /// assert_eq!(Alu::execute(AluOp::Div, 7, 0, false), u64::MAX);
    /// assert_eq!(Alu::execute(AluOp::Rem, 7, 0, false), 7);
    /// ```
    pub fn execute(op: AluOp, a: u64, b: u64, is32: bool) -> u64 {
        match op {
            AluOp::Add
            | AluOp::Sub
            | AluOp::Mul
            | AluOp::Mulh
            | AluOp::Mulhsu
            | AluOp::Mulhu
            | AluOp::Div
            | AluOp::Divu
            | AluOp::Rem
            | AluOp::Remu => arithmetic::execute(op, a, b, is32),

            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b, is32)
            }

            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b, is32),
        }
    }
}
