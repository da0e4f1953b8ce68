//! RISC-V Base Integer Instruction Set (I).
//!
//! Only the major opcodes are named here; individual instructions are matched
//! by the bit templates in [`crate::isa::table`].

/// Base integer instruction set opcodes.
pub mod opcodes;
