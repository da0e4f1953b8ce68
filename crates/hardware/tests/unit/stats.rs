use rv64im_core::core::units::alu::AluOp;
use rv64im_core::core::units::lsu::MemWidth;
use rv64im_core::isa::semantics::{BranchCond, Semantics};
use rv64im_core::stats::{STATS_SECTIONS, SimStats};

#[test]
fn record_classifies_the_instruction_mix() {
    let mut stats = SimStats::default();
    for semantics in [
        Semantics::Lui,
        Semantics::AluImm {
            op: AluOp::Add,
            word: false,
        },
        Semantics::AluReg {
            op: AluOp::Mul,
            word: false,
        },
        Semantics::AluReg {
            op: AluOp::Div,
            word: true,
        },
        Semantics::Load {
            width: MemWidth::Word,
            signed: true,
        },
        Semantics::Store(MemWidth::Byte),
        Semantics::Branch(BranchCond::Eq),
        Semantics::Jal,
        Semantics::Ebreak,
    ] {
        stats.record(semantics);
    }

    assert_eq!(stats.instructions_retired, 9);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_muldiv, 2);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_branch, 1);
    assert_eq!(stats.inst_jump, 1);
    assert_eq!(stats.inst_system, 1);
}

#[test]
fn cpi_is_zero_before_any_instruction() {
    assert!(SimStats::default().cpi().abs() < f64::EPSILON);
}

#[test]
fn performance_block_format() {
    let mut stats = SimStats::default();
    stats.cycles = 15;
    stats.instructions_retired = 6;
    assert_eq!(
        stats.performance_report(),
        "Performance:\n\tINST NUM  =    6\n\tCYCLE NUM =   15\n\tCPI       = 2.500\n"
    );
}

#[test]
fn sections_can_be_selected() {
    let mut stats = SimStats::default();
    stats.div_ops = 3;
    let only_divider = stats.render_sections(&["divider".to_string()]);
    assert!(
        only_divider
            .lines()
            .any(|l| l.trim_start().starts_with("div.ops") && l.ends_with(" 3"))
    );
    assert!(!only_divider.contains("INSTRUCTION MIX"));

    let all = stats.render_sections(&[]);
    assert!(all.contains("INSTRUCTION MIX"));
    assert!(all.contains("HAZARDS"));
    assert_eq!(STATS_SECTIONS.len(), 4);
}
