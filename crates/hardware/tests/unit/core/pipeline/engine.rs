//! Five-stage pipeline timing.

use rstest::rstest;

use rv64im_core::config::{Config, Model};
use rv64im_core::core::EngineDispatch;

use crate::common::TestContext;
use crate::common::builder::*;
use crate::common::harness::TEST_RAM_BASE;

/// Destination offset for generated straight-line programs (`x11` upwards).
const DEST_BASE: u32 = 10;

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(12)]
fn straight_line_takes_n_plus_4_cycles(#[case] n: u32) {
    // Destinations start above a0 so the halting ebreak still reports 0.
    let program: Vec<u32> = (1..=n).map(|i| addi(DEST_BASE + i, 0, i as i32)).collect();
    let mut ctx = TestContext::new(Model::Pipeline).load_halting(&program);
    let status = ctx.run();

    assert!(status.is_good());
    assert_eq!(ctx.cpu().stats.cycles, u64::from(n) + 4);
    assert_eq!(ctx.cpu().stats.instructions_retired, u64::from(n) + 1);
    assert_eq!(ctx.get_reg((DEST_BASE + n) as usize), u64::from(n));
    assert_eq!(ctx.cpu().stats.stalls_data, 0);
}

#[test]
fn load_use_stalls_one_episode() {
    let mut ctx = TestContext::new(Model::Pipeline).load_halting(&[
        auipc(1, 0),
        nop(),
        nop(),
        lw(2, 1, 0),
        add(3, 2, 2),
    ]);
    let _ = ctx.run();

    let loaded = u64::from(auipc(1, 0));
    assert_eq!(ctx.get_reg(2), loaded);
    assert_eq!(ctx.get_reg(3), loaded * 2);
    assert_eq!(ctx.cpu().stats.stalls_data, 1);
    assert_eq!(ctx.cpu().stats.raw_stall_cycles, 2);
    assert_eq!(ctx.cpu().stats.cycles, 5 + 4 + 2);
}

#[test]
fn adjacent_dependency_waits_for_writeback() {
    let mut ctx = TestContext::new(Model::Pipeline).load_halting(&[
        addi(1, 0, 5),
        addi(2, 1, 1),
        addi(3, 2, 1),
    ]);
    let _ = ctx.run();

    assert_eq!(ctx.get_reg(3), 7);
    assert_eq!(ctx.cpu().stats.stalls_data, 2);
    assert_eq!(ctx.cpu().stats.raw_stall_cycles, 4);
}

#[test]
fn taken_jump_squashes_the_wrong_path() {
    let mut ctx = TestContext::new(Model::Pipeline).load_halting(&[
        jal(0, 8),
        addi(5, 0, 99),
        addi(6, 0, 1),
    ]);
    let status = ctx.run();

    assert!(status.is_good());
    assert_eq!(ctx.get_reg(5), 0);
    assert_eq!(ctx.get_reg(6), 1);
    assert_eq!(ctx.cpu().stats.stalls_control, 1);
    assert_eq!(ctx.cpu().stats.instructions_retired, 3);
    assert_eq!(ctx.cpu().stats.cycles, 8);
}

#[rstest]
#[case::register_write(addi(5, 0, 99))]
#[case::invalid_word(0xFFFF_FFFF)]
fn taken_branch_discards_the_fall_through(#[case] fall_through: u32) {
    let mut ctx = TestContext::new(Model::Pipeline).load_halting(&[
        beq(0, 0, 8),
        fall_through,
        addi(6, 0, 1),
    ]);
    let status = ctx.run();

    assert!(status.is_good());
    assert_eq!(status.pc, TEST_RAM_BASE + 12);
    assert_eq!(ctx.get_reg(5), 0);
    assert_eq!(ctx.get_reg(6), 1);
    assert_eq!(ctx.cpu().stats.stalls_control, 1);
    assert_eq!(ctx.cpu().stats.inst_branch, 1);
    assert_eq!(ctx.cpu().stats.instructions_retired, 3);
    assert_eq!(ctx.cpu().stats.cycles, 8);
}

#[test]
fn not_taken_branch_costs_nothing() {
    let mut ctx = TestContext::new(Model::Pipeline).load_halting(&[
        bne(0, 0, 8),
        addi(5, 0, 1),
    ]);
    let _ = ctx.run();

    assert_eq!(ctx.get_reg(5), 1);
    assert_eq!(ctx.cpu().stats.stalls_control, 0);
    assert_eq!(ctx.cpu().stats.cycles, 2 + 4);
}

#[test]
fn halt_drains_older_instructions() {
    let mut ctx = TestContext::new(Model::Pipeline).load_halting(&[addi(7, 0, 42)]);
    let status = ctx.run();

    assert_eq!(status.pc, TEST_RAM_BASE + 4);
    assert_eq!(ctx.get_reg(7), 42);
    assert_eq!(ctx.cpu().pc, TEST_RAM_BASE + 8);
    match &ctx.sim.engine {
        EngineDispatch::Pipeline(pl) => assert!(!pl.in_flight()),
        other => panic!("expected the pipeline engine, got {other:?}"),
    }
}

#[test]
fn instructions_behind_a_halt_never_execute() {
    let mut ctx = TestContext::new(Model::Pipeline).load_program(&[
        ebreak(),
        addi(5, 0, 1),
        addi(6, 0, 1),
    ]);
    let _ = ctx.run();

    assert_eq!(ctx.get_reg(5), 0);
    assert_eq!(ctx.get_reg(6), 0);
    assert_eq!(ctx.cpu().stats.instructions_retired, 1);
}

#[test]
fn back_to_back_identical_divides_fuse() {
    let mut ctx = TestContext::new(Model::Pipeline).load_halting(&[
        addi(1, 0, 100),
        addi(2, 0, 7),
        nop(),
        nop(),
        div(3, 1, 2),
        div(3, 1, 2),
    ]);
    let _ = ctx.run();

    let stats = &ctx.cpu().stats;
    assert_eq!(ctx.get_reg(3), 14);
    assert_eq!(stats.div_ops, 2);
    assert_eq!(stats.div_fused, 1);
    assert_eq!(stats.div_penalty_cycles, 39);
    assert_eq!(stats.cycles, 6 + 4 + 39);
}

#[test]
fn stall_bubble_clears_fusion_eligibility() {
    let mut ctx = TestContext::new(Model::Pipeline).load_halting(&[
        addi(1, 0, 100),
        addi(2, 0, 7),
        nop(),
        nop(),
        div(1, 1, 2),
        div(1, 1, 2),
    ]);
    let _ = ctx.run();

    let stats = &ctx.cpu().stats;
    assert_eq!(ctx.get_reg(1), 2);
    assert_eq!(stats.stalls_data, 1);
    assert_eq!(stats.div_fused, 0);
    assert_eq!(stats.div_penalty_cycles, 78);
}

#[test]
fn fusion_can_be_disabled() {
    let mut config = Config::default();
    config.model = Model::Pipeline;
    config.timing.fusion = false;
    let mut ctx = TestContext::with_config(config).load_halting(&[
        addi(1, 0, 100),
        addi(2, 0, 7),
        nop(),
        nop(),
        div(3, 1, 2),
        div(3, 1, 2),
    ]);
    let _ = ctx.run();

    assert_eq!(ctx.cpu().stats.div_fused, 0);
    assert_eq!(ctx.cpu().stats.div_penalty_cycles, 78);
}
