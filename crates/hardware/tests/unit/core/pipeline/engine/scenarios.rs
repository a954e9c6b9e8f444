//! Program Scenarios.
//!
//! Small programs run to halt, checking architectural results along with the
//! stall, flush, and retire counters.

use crate::common::builder::instruction::inst;
use crate::common::harness::TestContext;
use rvpipe_core::common::SimError;
use rvpipe_core::config::Config;

#[test]
fn back_to_back_alu_forwarding() {
    let program = [
        inst().addi(1, 0, 10).build(),
        inst().addi(2, 1, 5).build(),
        inst().add(3, 0, 1).build(),
        inst().add(4, 2, 3).build(),
        inst().ecall().build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    let ticks = ctx.run_to_halt();

    assert_eq!(ctx.reg(1), 10);
    assert_eq!(ctx.reg(2), 15);
    assert_eq!(ctx.reg(3), 10);
    assert_eq!(ctx.reg(4), 25);
    assert_eq!(ticks, 8);
    let stats = ctx.sim.core.stats();
    assert_eq!(stats.instructions_retired, 5);
    assert_eq!(stats.load_use_stalls, 0);
    assert_eq!(stats.control_flushes, 0);
}

#[test]
fn load_use_stall_program() {
    let program = [
        inst().addi(1, 0, 255).build(),
        inst().addi(5, 0, 256).build(),
        inst().sw(1, 5, 0).build(),
        inst().lw(2, 5, 0).build(),
        inst().addi(3, 2, 1).build(),
        inst().ecall().build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    let ticks = ctx.run_to_halt();

    assert_eq!(ctx.reg(3), 256);
    assert_eq!(ticks, 10);
    assert_eq!(ctx.sim.core.stats().load_use_stalls, 1);
    assert_eq!(ctx.sim.core.stats().instructions_retired, 6);
}

#[test]
fn branch_flush_program() {
    let program = [
        inst().addi(1, 0, 1).build(),
        inst().addi(2, 0, 1).build(),
        inst().beq(1, 2, 12).build(),
        inst().addi(3, 0, 0xBAD).build(),
        inst().addi(3, 0, 0xDAD).build(),
        inst().addi(4, 0, 0xACE).build(),
        inst().ecall().build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run_to_halt();

    assert_eq!(ctx.reg(3), 0);
    assert_eq!(ctx.reg(4), 0xFFFF_FACE);
}

#[test]
fn words_after_ecall_never_execute() {
    let program = [
        inst().addi(1, 0, 1).build(),
        inst().ecall().build(),
        inst().addi(1, 0, 99).build(),
        inst().addi(2, 0, 7).build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run_to_halt();
    ctx.run(20);

    assert_eq!(ctx.reg(1), 1);
    assert_eq!(ctx.reg(2), 0);
}

#[test]
fn x0_stays_zero() {
    let program = [
        inst().addi(0, 0, 5).build(),
        inst().add(1, 0, 0).build(),
        inst().addi(0, 0, 9).build(),
        inst().addi(2, 0, 0).build(),
        inst().ecall().build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run_to_halt();
    assert_eq!(ctx.reg(0), 0);
    assert_eq!(ctx.reg(1), 0);
    assert_eq!(ctx.reg(2), 0);
}

#[test]
fn upper_immediates() {
    let program = [
        inst().lui(1, 0x12345).build(),
        inst().auipc(2, 1).build(),
        inst().addi(3, 1, 0x678).build(),
        inst().ecall().build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run_to_halt();
    assert_eq!(ctx.reg(1), 0x1234_5000);
    assert_eq!(ctx.reg(2), 0x1004);
    assert_eq!(ctx.reg(3), 0x1234_5678);
}

#[test]
fn sub_word_loads_and_stores() {
    let program = [
        inst().lb(1, 0, 0).build(),
        inst().lb(2, 0, 3).build(),
        inst().lbu(3, 0, 3).build(),
        inst().lh(4, 0, 2).build(),
        inst().lhu(5, 0, 2).build(),
        inst().addi(6, 0, 0xAB).build(),
        inst().sb(6, 0, 5).build(),
        inst().sh(5, 0, 6).build(),
        inst().lw(7, 0, 4).build(),
        inst().ecall().build(),
    ];
    let mut ctx = TestContext::new()
        .load_program(&program)
        .load_data(&[0x80FF_7F01, 0]);
    ctx.run_to_halt();

    assert_eq!(ctx.reg(1), 0x0000_0001);
    assert_eq!(ctx.reg(2), 0xFFFF_FF80);
    assert_eq!(ctx.reg(3), 0x0000_0080);
    assert_eq!(ctx.reg(4), 0xFFFF_80FF);
    assert_eq!(ctx.reg(5), 0x0000_80FF);
    assert_eq!(ctx.reg(7), 0x80FF_AB00);
    assert_eq!(ctx.sim.memory.data_word(0), 0x80FF_7F01);
    assert_eq!(ctx.sim.memory.data_word(4), 0x80FF_AB00);
}

#[test]
fn shifts_and_compares_through_pipeline() {
    let program = [
        inst().addi(1, 0, -16).build(),
        inst().addi(2, 0, 2).build(),
        inst().sra(3, 1, 2).build(),
        inst().srl(4, 1, 2).build(),
        inst().srai(5, 1, 4).build(),
        inst().slt(6, 1, 2).build(),
        inst().sltu(7, 1, 2).build(),
        inst().ecall().build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run_to_halt();
    assert_eq!(ctx.reg(3), (-4i32) as u32);
    assert_eq!(ctx.reg(4), 0xFFFF_FFF0 >> 2);
    assert_eq!(ctx.reg(5), u32::MAX);
    assert_eq!(ctx.reg(6), 1);
    assert_eq!(ctx.reg(7), 0);
}

#[test]
fn program_without_ecall_hits_cycle_limit() {
    let mut config = Config::default();
    config.general.max_cycles = 50;
    let mut ctx = TestContext::with_config(config).load_program(&[inst().addi(1, 1, 1).build()]);

    let err = ctx.sim.run_until_halt().unwrap_err();
    assert!(matches!(err, SimError::CycleLimitExceeded { limit: 50 }));
    assert_eq!(ctx.sim.core.stats().cycles, 50);
}
