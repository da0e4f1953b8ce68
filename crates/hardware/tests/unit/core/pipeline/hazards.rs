//! Register-use and RAW detection.

use rstest::rstest;

use rv64im_core::core::pipeline::hazards::{raw_hazard, source_regs};
use rv64im_core::core::pipeline::signals::ControlSignals;
use rv64im_core::isa::abi::{REG_A0, REG_A1, REG_A2, REG_A7};
use rv64im_core::isa::table;

use crate::common::builder::*;

fn sources(word: u32) -> [Option<usize>; 4] {
    let ctrl = ControlSignals::from_pattern(table::lookup(word), word);
    source_regs(&ctrl, word)
}

fn writer(rd: usize) -> ControlSignals {
    ControlSignals {
        reg_write: true,
        rd,
        ..ControlSignals::default()
    }
}

#[rstest]
#[case(add(3, 1, 2), [Some(1), Some(2), None, None])]
#[case(sd(4, 5, 0), [Some(4), Some(5), None, None])]
#[case(beq(6, 7, 8), [Some(6), Some(7), None, None])]
#[case(addi(3, 8, 1), [Some(8), None, None, None])]
#[case(lw(3, 9, 0), [Some(9), None, None, None])]
#[case(lui(3, 1), [None; 4])]
#[case(jal(1, 8), [None; 4])]
#[case(ebreak(), [Some(REG_A0), None, None, None])]
#[case(ecall(), [Some(REG_A0), Some(REG_A1), Some(REG_A2), Some(REG_A7)])]
#[case(jalr(0, 1, 0), [Some(1), None, None, None])]
#[case(auipc(3, 1), [None; 4])]
#[case(0x0FF0_000F, [None; 4])]
#[case(0xFFFF_FFFF, [None; 4])]
fn register_use_by_format(#[case] word: u32, #[case] expected: [Option<usize>; 4]) {
    assert_eq!(sources(word), expected);
}

#[test]
fn pending_write_to_a_source_is_a_hazard() {
    let w = writer(2);
    assert!(raw_hazard(&sources(add(3, 1, 2)), &[Some(&w), None]));
    assert!(raw_hazard(&sources(add(3, 1, 2)), &[None, Some(&w)]));
    assert!(!raw_hazard(&sources(add(3, 1, 4)), &[Some(&w), Some(&w)]));
}

#[test]
fn x0_and_bubbles_never_stall() {
    let zero = writer(0);
    assert!(!raw_hazard(&sources(add(3, 0, 0)), &[Some(&zero), Some(&zero)]));
    assert!(!raw_hazard(&sources(add(3, 1, 2)), &[None, None]));
}

#[test]
fn non_writing_instructions_never_stall() {
    let store = ControlSignals {
        rd: 1,
        mem_write: true,
        ..ControlSignals::default()
    };
    assert!(!raw_hazard(&sources(add(3, 1, 2)), &[Some(&store), None]));
}
