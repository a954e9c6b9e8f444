//! Decoder and Immediate Unit Tests.
//!
//! Checks positional field extraction and every immediate format against
//! encodings produced by the instruction builder.

use crate::common::builder::instruction::inst;
use proptest::prelude::*;
use rstest::rstest;
use rvpipe_core::isa::decode::{decode, immediate, sign_extend};
use rvpipe_core::isa::rv32i::opcodes;

#[test]
fn fields_are_positional() {
    // sub x3, x1, x2
    let f = decode(inst().sub(3, 1, 2).build());
    assert_eq!(f.opcode, opcodes::OP_REG);
    assert_eq!(f.rd, 3);
    assert_eq!(f.rs1, 1);
    assert_eq!(f.rs2, 2);
    assert_eq!(f.funct3, 0);
    assert_eq!(f.funct7, 0b010_0000);
}

#[test]
fn unused_fields_still_decode() {
    // The rs2 slot of an I-type holds immediate bits; decode does not care.
    let f = decode(inst().addi(1, 0, 7).build());
    assert_eq!(f.rs2, 7);
}

#[rstest]
#[case::addi_neg(inst().addi(1, 0, -1).build(), 0xFFFF_FFFF)]
#[case::addi_max(inst().addi(1, 0, 2047).build(), 2047)]
#[case::addi_min(inst().addi(1, 0, -2048).build(), 0xFFFF_F800)]
#[case::lw_offset(inst().lw(1, 2, 12).build(), 12)]
#[case::sw_neg(inst().sw(1, 2, -4).build(), 0xFFFF_FFFC)]
#[case::beq_back(inst().beq(1, 2, -8).build(), 0xFFFF_FFF8)]
#[case::bne_fwd(inst().bne(1, 2, 4094).build(), 4094)]
#[case::lui(inst().lui(1, 0x12345).build(), 0x1234_5000)]
#[case::auipc_top(inst().auipc(1, 0xFFFFF).build(), 0xFFFF_F000)]
#[case::jal_fwd(inst().jal(1, 2048).build(), 2048)]
#[case::jal_back(inst().jal(0, -4).build(), 0xFFFF_FFFC)]
#[case::jalr(inst().jalr(1, 5, -3).build(), 0xFFFF_FFFD)]
#[case::ecall(inst().ecall().build(), 0)]
fn immediate_formats(#[case] word: u32, #[case] expected: u32) {
    assert_eq!(immediate(word), expected);
}

#[test]
fn sign_extend_edges() {
    assert_eq!(sign_extend(0x800, 12), 0xFFFF_F800);
    assert_eq!(sign_extend(0x7FF, 12), 0x7FF);
    assert_eq!(sign_extend(0xFFFF_FFFF, 32), 0xFFFF_FFFF);
}

proptest! {
    #[test]
    fn i_type_immediate_round_trips(imm in -2048i32..2048, rd in 0u32..32, rs1 in 0u32..32) {
        prop_assert_eq!(immediate(inst().addi(rd, rs1, imm).build()), imm as u32);
    }

    #[test]
    fn s_type_immediate_round_trips(imm in -2048i32..2048) {
        prop_assert_eq!(immediate(inst().sw(3, 4, imm).build()), imm as u32);
    }

    #[test]
    fn b_type_immediate_is_even(half in -2048i32..2048) {
        let imm = half * 2;
        let got = immediate(inst().beq(1, 2, imm).build());
        prop_assert_eq!(got, imm as u32);
        prop_assert_eq!(got & 1, 0);
    }

    #[test]
    fn j_type_immediate_is_even(half in -(1i32 << 19)..(1i32 << 19)) {
        let imm = half * 2;
        prop_assert_eq!(immediate(inst().jal(1, imm).build()), imm as u32);
    }

    #[test]
    fn u_type_low_bits_are_zero(upper in 0i32..(1 << 20)) {
        let got = immediate(inst().lui(1, upper).build());
        prop_assert_eq!(got & 0xFFF, 0);
        prop_assert_eq!(got >> 12, upper as u32);
    }

    #[test]
    fn decode_never_exceeds_field_widths(word in any::<u32>()) {
        let f = decode(word);
        prop_assert!(f.rd < 32 && f.rs1 < 32 && f.rs2 < 32);
        prop_assert!(f.funct3 < 8 && f.funct7 < 128 && f.opcode < 128);
        prop_assert_eq!(f.raw, word);
    }
}
