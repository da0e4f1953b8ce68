//! Disassembler output.

use rstest::rstest;

use rv64im_core::isa::disasm::{disassemble, disassemble_bytes};

use crate::common::builder::*;

#[rstest]
#[case(addi(10, 0, 10), "addi a0, zero, 10")]
#[case(addi(2, 2, -16), "addi sp, sp, -16")]
#[case(add(5, 6, 7), "add t0, t1, t2")]
#[case(mulhu(10, 11, 12), "mulhu a0, a1, a2")]
#[case(slli(5, 5, 3), "slli t0, t0, 3")]
#[case(lw(10, 2, 8), "lw a0, 8(sp)")]
#[case(sd(2, 1, -8), "sd ra, -8(sp)")]
#[case(lui(5, 0x12345), "lui t0, 0x12345")]
#[case(beq(10, 0, -8), "beq a0, zero, -8")]
#[case(jal(1, 16), "jal ra, 16")]
#[case(jalr(0, 1, 0), "jalr zero, 0(ra)")]
#[case(ecall(), "ecall")]
#[case(ebreak(), "ebreak")]
fn renders_mnemonics(#[case] word: u32, #[case] text: &str) {
    assert_eq!(disassemble(word), text);
}

#[test]
fn unknown_words_render_as_inv() {
    assert!(disassemble(0xFFFF_FFFF).starts_with("inv"));
}

#[test]
fn byte_form_prints_absolute_targets() {
    let bytes = jal(1, 16).to_le_bytes();
    assert_eq!(
        disassemble_bytes(&bytes, 0x8000_0000).as_deref(),
        Some("jal ra, 0x80000010")
    );
}

#[test]
fn byte_form_needs_a_full_word() {
    assert_eq!(disassemble_bytes(&[0x13, 0x00], 0x8000_0000), None);
}
