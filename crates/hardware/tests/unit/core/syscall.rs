//! Environment calls on every engine.

use rstest::rstest;

use rv64im_core::config::Model;
use rv64im_core::isa::abi::{REG_A0, REG_A1, REG_A2, REG_A7};
use rv64im_core::isa::system::syscall::{EXIT, WRITE};

use crate::common::TestContext;
use crate::common::builder::*;
use crate::common::harness::TEST_RAM_BASE;

const A0: u32 = REG_A0 as u32;
const A1: u32 = REG_A1 as u32;
const A2: u32 = REG_A2 as u32;
const A7: u32 = REG_A7 as u32;

/// Offset of the message from the start of the image.
const MSG_OFFSET: i32 = 48;

/// Writes `msg` to fd 1, then exits with the value `write` returned.
fn hello_program() -> Vec<u32> {
    let mut program = vec![
        auipc(A1, 0),
        addi(A1, A1, MSG_OFFSET),
        addi(A0, 0, 1),
        addi(A2, 0, 3),
        addi(A7, 0, WRITE as i32),
        ecall(),
        addi(A7, 0, EXIT as i32),
        ecall(),
    ];
    program.resize((MSG_OFFSET / 4) as usize, 0);
    program.push(u32::from_le_bytes(*b"hi\n\0"));
    program
}

#[rstest]
#[case(Model::Iss)]
#[case(Model::MultiCycle)]
#[case(Model::Pipeline)]
fn write_reaches_the_console(#[case] model: Model) {
    let mut ctx = TestContext::new(model).load_program(&hello_program());
    let status = ctx.run();

    assert_eq!(ctx.console_output(), "hi\nSyscall: exit with code 3\n");
    assert_eq!(status.code, 3);
    assert_eq!(status.pc, TEST_RAM_BASE + 28);
}

#[rstest]
#[case(Model::Iss)]
#[case(Model::MultiCycle)]
#[case(Model::Pipeline)]
fn exit_reports_a0(#[case] model: Model) {
    let mut ctx = TestContext::new(model).load_program(&[
        addi(A0, 0, 7),
        addi(A7, 0, EXIT as i32),
        ecall(),
        addi(5, 0, 1),
    ]);
    let status = ctx.run();

    assert_eq!(status.code, 7);
    assert_eq!(status.pc, TEST_RAM_BASE + 8);
    assert_eq!(ctx.get_reg(5), 0);
    assert_eq!(ctx.console_output(), "Syscall: exit with code 7\n");
}

#[rstest]
#[case(Model::Iss)]
#[case(Model::Pipeline)]
fn write_to_other_fd_returns_minus_one(#[case] model: Model) {
    let mut ctx = TestContext::new(model).load_halting(&[
        addi(A0, 0, 2),
        addi(A7, 0, WRITE as i32),
        ecall(),
    ]);
    let status = ctx.run();

    assert_eq!(ctx.get_reg(REG_A0), u64::MAX);
    assert_eq!(status.code, -1);
    assert!(ctx.console_output().is_empty());
}

#[rstest]
#[case(Model::Iss)]
#[case(Model::MultiCycle)]
fn unknown_syscall_halts_with_minus_one(#[case] model: Model) {
    let mut ctx = TestContext::new(model).load_program(&[addi(A7, 0, 1), ecall()]);
    let status = ctx.run();

    assert_eq!(status.code, -1);
    assert!(!status.is_good());
}
