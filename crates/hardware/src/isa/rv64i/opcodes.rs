//! RISC-V Base Integer (I) Opcodes.
//!
//! Major opcodes (bits 6-0) recognized by the format classifier and the
//! pipeline's control-signal generator.

/// Loads (`lb` .. `ld`).
pub const OP_LOAD: u32 = 0b000_0011;

/// `fence` and `fence.i`.
pub const OP_MISC_MEM: u32 = 0b000_1111;

/// Register-immediate ALU operations.
pub const OP_IMM: u32 = 0b001_0011;

/// `auipc`.
pub const OP_AUIPC: u32 = 0b001_0111;

/// 32-bit register-immediate ALU operations (RV64 only).
pub const OP_IMM_32: u32 = 0b001_1011;

/// Stores (`sb` .. `sd`).
pub const OP_STORE: u32 = 0b010_0011;

/// Register-register ALU operations, including the M extension.
pub const OP_REG: u32 = 0b011_0011;

/// `lui`.
pub const OP_LUI: u32 = 0b011_0111;

/// 32-bit register-register ALU operations (RV64 only).
pub const OP_REG_32: u32 = 0b011_1011;

/// Conditional branches.
pub const OP_BRANCH: u32 = 0b110_0011;

/// `jalr`.
pub const OP_JALR: u32 = 0b110_0111;

/// `jal`.
pub const OP_JAL: u32 = 0b110_1111;

/// `ecall`, `ebreak` and CSR instructions.
pub const OP_SYSTEM: u32 = 0b111_0011;
