//! Functional engine.

use pretty_assertions::assert_eq;

use rv64im_core::config::Model;

use crate::common::TestContext;
use crate::common::builder::*;
use crate::common::harness::TEST_RAM_BASE;

#[test]
fn one_cycle_per_instruction() {
    let mut ctx = TestContext::new(Model::Iss).load_halting(&[
        addi(1, 0, 5),
        addi(2, 0, 7),
        mul(3, 1, 2),
        divu(4, 3, 1),
    ]);
    let status = ctx.run();

    assert!(status.is_good());
    assert_eq!(ctx.get_reg(3), 35);
    assert_eq!(ctx.get_reg(4), 7);
    assert_eq!(ctx.cpu().stats.instructions_retired, 5);
    assert_eq!(ctx.cpu().stats.cycles, 5);
    assert_eq!(ctx.cpu().stats.div_ops, 0);
}

#[test]
fn jal_links_and_jumps() {
    let mut ctx = TestContext::new(Model::Iss).load_halting(&[
        jal(1, 8),
        addi(5, 0, 99),
        addi(6, 0, 1),
    ]);
    let _ = ctx.run();

    assert_eq!(ctx.get_reg(1), TEST_RAM_BASE + 4);
    assert_eq!(ctx.get_reg(5), 0);
    assert_eq!(ctx.get_reg(6), 1);
}

#[test]
fn jalr_clears_the_low_target_bit() {
    let mut ctx = TestContext::new(Model::Iss).load_halting(&[
        auipc(1, 0),
        jalr(2, 1, 13),
        addi(5, 0, 99),
        addi(6, 0, 1),
    ]);
    let _ = ctx.run();

    assert_eq!(ctx.get_reg(2), TEST_RAM_BASE + 8);
    assert_eq!(ctx.get_reg(5), 0);
    assert_eq!(ctx.get_reg(6), 1);
}

#[test]
fn ebreak_halts_with_a0() {
    let mut ctx = TestContext::new(Model::Iss).load_halting(&[addi(10, 0, 3)]);
    let status = ctx.run();

    assert_eq!(status.code, 3);
    assert_eq!(status.pc, TEST_RAM_BASE + 4);
    assert!(!status.is_good());
    assert_eq!(ctx.cpu().pc, TEST_RAM_BASE + 8);
}

#[test]
fn unknown_instruction_is_a_bad_trap() {
    let mut ctx = TestContext::new(Model::Iss).load_program(&[addi(1, 0, 1), 0xFFFF_FFFF]);
    let status = ctx.run();

    assert_eq!(status.code, -1);
    assert_eq!(status.pc, TEST_RAM_BASE + 4);
}
