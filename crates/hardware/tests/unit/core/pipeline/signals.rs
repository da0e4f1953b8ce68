//! Control signals agree with the semantics they steer.

use rv64im_core::core::arch::gpr::Gpr;
use rv64im_core::core::pipeline::signals::{ControlSignals, OpASrc, OpBSrc};
use rv64im_core::core::units::lsu::MemOp;
use rv64im_core::isa::abi::REG_A0;
use rv64im_core::isa::decode::decode_operands;
use rv64im_core::isa::instruction::Instruction;
use rv64im_core::isa::semantics::{RegWrite, WbSource};
use rv64im_core::isa::table::{self, PATTERNS};

use crate::common::builder::*;

/// Destination field used for patterns that leave `rd` free.
const RD_BITS: u32 = 5 << 7;

#[test]
fn register_write_matches_semantics_for_every_pattern() {
    let regs = Gpr::new();
    for pattern in PATTERNS {
        let word = pattern.bits | (RD_BITS & !pattern.mask);
        let inst = Instruction::fetched(0x8000_0000, word);
        let ops = decode_operands(&inst, pattern.format, &regs);
        let effect = pattern.semantics.execute(&ops, &regs);
        let ctrl = ControlSignals::from_pattern(pattern, word);

        let expected = ctrl.reg_write.then_some(RegWrite {
            rd: ctrl.rd,
            src: ctrl.wb_src,
        });
        assert_eq!(effect.write, expected, "{}", pattern.name);
        assert_eq!(ctrl.mem_read, matches!(effect.mem, MemOp::Load { .. }), "{}", pattern.name);
        assert_eq!(ctrl.mem_write, matches!(effect.mem, MemOp::Store { .. }), "{}", pattern.name);
    }
}

#[test]
fn upper_immediates_select_distinct_a_sources() {
    let lui_word = lui(1, 0x10);
    let auipc_word = auipc(1, 0x10);
    let lui_ctrl = ControlSignals::from_pattern(table::lookup(lui_word), lui_word);
    let auipc_ctrl = ControlSignals::from_pattern(table::lookup(auipc_word), auipc_word);
    assert_eq!(lui_ctrl.a_src, OpASrc::Zero);
    assert_eq!(auipc_ctrl.a_src, OpASrc::Pc);
    assert_eq!(lui_ctrl.b_src, OpBSrc::Imm);
}

#[test]
fn jumps_link_through_pc_plus_4() {
    for word in [jal(1, 8), jalr(1, 2, 0)] {
        let ctrl = ControlSignals::from_pattern(table::lookup(word), word);
        assert!(ctrl.jump);
        assert!(ctrl.reg_write);
        assert_eq!(ctrl.wb_src, WbSource::PcPlus4);
    }
}

#[test]
fn ecall_writes_a0_and_ebreak_writes_nothing() {
    let ecall_ctrl = ControlSignals::from_pattern(table::lookup(ecall()), ecall());
    assert!(ecall_ctrl.is_system);
    assert!(ecall_ctrl.reg_write);
    assert_eq!(ecall_ctrl.rd, REG_A0);

    let ebreak_ctrl = ControlSignals::from_pattern(table::lookup(ebreak()), ebreak());
    assert!(ebreak_ctrl.is_system);
    assert!(!ebreak_ctrl.reg_write);
}

#[test]
fn branches_and_stores_compare_or_store_rs2() {
    let branch = bne(1, 2, 8);
    let ctrl = ControlSignals::from_pattern(table::lookup(branch), branch);
    assert!(ctrl.branch);
    assert_eq!(ctrl.b_src, OpBSrc::Reg2);
    assert!(!ctrl.reg_write);

    let store = sd(1, 2, 0);
    let ctrl = ControlSignals::from_pattern(table::lookup(store), store);
    assert!(ctrl.mem_write);
    assert!(!ctrl.mem_read);
    assert!(!ctrl.reg_write);
}
