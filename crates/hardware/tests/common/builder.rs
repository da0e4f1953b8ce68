//! Instruction encoders.
//!
//! Raw-format encoders plus one helper per mnemonic the tests use. Register
//! arguments are plain indices; immediates are signed byte values.

use rv64im_core::isa::rv64i::opcodes::*;
use rv64im_core::isa::system::{EBREAK, ECALL};

/// Encode an R-type instruction.
pub fn r_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, rs2: u32, funct7: u32) -> u32 {
    (funct7 & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode an I-type instruction.
pub fn i_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, imm: i32) -> u32 {
    let imm_bits = (imm as u32) & 0xFFF;
    imm_bits << 20 | (rs1 & 0x1F) << 15 | (funct3 & 0x7) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Encode an S-type instruction.
pub fn s_type(funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let hi = (v >> 5) & 0x7F;
    let lo = v & 0x1F;
    hi << 25 | (rs2 & 0x1F) << 20 | (rs1 & 0x1F) << 15 | (funct3 & 0x7) << 12 | lo << 7 | OP_STORE
}

/// Encode a B-type instruction.
pub fn b_type(funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let bit12 = (v >> 12) & 1;
    let bits10_5 = (v >> 5) & 0x3F;
    let bits4_1 = (v >> 1) & 0xF;
    let bit11 = (v >> 11) & 1;
    bit12 << 31
        | bits10_5 << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | bits4_1 << 8
        | bit11 << 7
        | OP_BRANCH
}

/// Encode a U-type instruction from the 20-bit upper immediate.
pub fn u_type(opcode: u32, rd: u32, imm20: u32) -> u32 {
    (imm20 & 0xF_FFFF) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Encode a J-type instruction.
pub fn j_type(rd: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let bit20 = (v >> 20) & 1;
    let bits10_1 = (v >> 1) & 0x3FF;
    let bit11 = (v >> 11) & 1;
    let bits19_12 = (v >> 12) & 0xFF;
    bit20 << 31 | bits10_1 << 21 | bit11 << 20 | bits19_12 << 12 | (rd & 0x1F) << 7 | OP_JAL
}

// --- Helpers for Common Instructions ---

pub fn nop() -> u32 {
    addi(0, 0, 0)
}

pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_IMM, rd, 0b000, rs1, imm)
}

pub fn addiw(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_IMM_32, rd, 0b000, rs1, imm)
}

pub fn slli(rd: u32, rs1: u32, shamt: u32) -> u32 {
    i_type(OP_IMM, rd, 0b001, rs1, (shamt & 0x3F) as i32)
}

pub fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b000, rs1, rs2, 0)
}

pub fn sub(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b000, rs1, rs2, 0b010_0000)
}

pub fn xor(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b100, rs1, rs2, 0)
}

pub fn sltu(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b011, rs1, rs2, 0)
}

pub fn mul(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b000, rs1, rs2, 1)
}

pub fn mulhu(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b011, rs1, rs2, 1)
}

pub fn div(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b100, rs1, rs2, 1)
}

pub fn divu(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b101, rs1, rs2, 1)
}

pub fn rem(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b110, rs1, rs2, 1)
}

pub fn divw(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG_32, rd, 0b100, rs1, rs2, 1)
}

pub fn lw(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, rd, 0b010, rs1, imm)
}

pub fn lbu(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, rd, 0b100, rs1, imm)
}

pub fn ld(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, rd, 0b011, rs1, imm)
}

pub fn sb(rs1: u32, rs2: u32, imm: i32) -> u32 {
    s_type(0b000, rs1, rs2, imm)
}

pub fn sw(rs1: u32, rs2: u32, imm: i32) -> u32 {
    s_type(0b010, rs1, rs2, imm)
}

pub fn sd(rs1: u32, rs2: u32, imm: i32) -> u32 {
    s_type(0b011, rs1, rs2, imm)
}

pub fn beq(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(0b000, rs1, rs2, imm)
}

pub fn bne(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(0b001, rs1, rs2, imm)
}

pub fn blt(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(0b100, rs1, rs2, imm)
}

pub fn jal(rd: u32, imm: i32) -> u32 {
    j_type(rd, imm)
}

pub fn jalr(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_JALR, rd, 0b000, rs1, imm)
}

pub fn lui(rd: u32, imm20: u32) -> u32 {
    u_type(OP_LUI, rd, imm20)
}

pub fn auipc(rd: u32, imm20: u32) -> u32 {
    u_type(OP_AUIPC, rd, imm20)
}

pub fn ebreak() -> u32 {
    EBREAK
}

pub fn ecall() -> u32 {
    ECALL
}
