//! Execute Stage Tests.

use rvpipe_core::core::pipeline::latches::IdEx;
use rvpipe_core::core::pipeline::stages::decode::controller;
use rvpipe_core::core::pipeline::stages::execute_stage;
use rvpipe_core::isa::rv32i::opcodes::*;

#[test]
fn r_type_uses_both_registers() {
    let id_ex = IdEx {
        ctrl: controller(OP_REG),
        rs1_data: 10,
        rs2_data: 3,
        funct7: 0b010_0000,
        rd: 4,
        ..IdEx::default()
    };
    let out = execute_stage(&id_ex);
    assert_eq!(out.alu_result, 7);
    assert_eq!(out.rd, 4);
    assert!(out.ctrl.reg_write);
}

#[test]
fn store_computes_address_and_carries_data() {
    let id_ex = IdEx {
        ctrl: controller(OP_STORE),
        rs1_data: 0x100,
        rs2_data: 0xCAFE,
        imm: 8,
        funct3: 0b010,
        ..IdEx::default()
    };
    let out = execute_stage(&id_ex);
    assert_eq!(out.alu_result, 0x108);
    assert_eq!(out.store_data, 0xCAFE);
    assert!(out.ctrl.mem_write);
    assert_eq!(out.funct3, 0b010);
}

#[test]
fn lui_ignores_rs1() {
    let id_ex = IdEx {
        ctrl: controller(OP_LUI),
        rs1_data: 0xFFFF,
        imm: 0x1234_5000,
        ..IdEx::default()
    };
    assert_eq!(execute_stage(&id_ex).alu_result, 0x1234_5000);
}

#[test]
fn auipc_adds_pc() {
    let id_ex = IdEx {
        ctrl: controller(OP_AUIPC),
        pc: 0x40,
        rs1_data: 0xFFFF,
        imm: 0x1000,
        ..IdEx::default()
    };
    assert_eq!(execute_stage(&id_ex).alu_result, 0x1040);
}

#[test]
fn jal_result_is_return_address() {
    let id_ex = IdEx {
        ctrl: controller(OP_JAL),
        pc: 0x20,
        imm: 0x100,
        ..IdEx::default()
    };
    assert_eq!(execute_stage(&id_ex).alu_result, 0x24);
}

#[test]
fn bubble_executes_to_bubble() {
    let out = execute_stage(&IdEx::default());
    assert!(!out.ctrl.reg_write && !out.ctrl.mem_write && !out.ctrl.is_halt);
    assert_eq!(out.inst, 0);
}
