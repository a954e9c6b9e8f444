//! RV32I Instruction Decoder and Immediate Unit.
//!
//! This module turns a 32-bit instruction word into its component fields and
//! reconstructs the format-dependent immediate. It provides:
//! 1. **Decoder:** `decode` slices opcode, rd, rs1, rs2, funct3, and funct7.
//! 2. **Immediate Unit:** `immediate` rebuilds I/S/B/U/J immediates with sign extension.
//!
//! Both functions are total; unrecognized opcodes produce a zero immediate.

use crate::isa::instruction::{DecodedFields, InstructionBits};
use crate::isa::rv32i::opcodes;

/// Bit shift for extracting the I-Type immediate (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for the S-Type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for the S-Type immediate low field (imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit shift for the S-Type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Width of the S-Type immediate.
const S_IMM_BITS: u32 = 12;

/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
const B_IMM_11_SHIFT: u32 = 7;
const B_IMM_4_1_SHIFT: u32 = 8;
const B_IMM_4_1_MASK: u32 = 0xF;
const B_IMM_10_5_SHIFT: u32 = 25;
const B_IMM_10_5_MASK: u32 = 0x3F;
const B_IMM_12_SHIFT: u32 = 31;

/// Width of the B-Type immediate, including the implicit zero bit.
const B_IMM_BITS: u32 = 13;

/// Bit mask for the U-Type immediate (bits 12-31). The low 12 bits stay zero.
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
const J_IMM_19_12_SHIFT: u32 = 12;
const J_IMM_19_12_MASK: u32 = 0xFF;
const J_IMM_11_SHIFT: u32 = 20;
const J_IMM_10_1_SHIFT: u32 = 21;
const J_IMM_10_1_MASK: u32 = 0x3FF;
const J_IMM_20_SHIFT: u32 = 31;

/// Width of the J-Type immediate, including the implicit zero bit.
const J_IMM_BITS: u32 = 21;

/// Decodes an instruction word into its positional fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding.
///
/// # Returns
///
/// A `DecodedFields` record. Never fails.
pub fn decode(inst: u32) -> DecodedFields {
    DecodedFields {
        raw: inst,
        opcode: inst.opcode(),
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
    }
}

/// Reconstructs the sign-extended immediate for an instruction word.
///
/// The format is chosen from the opcode:
/// - I-Type for OP-IMM, LOAD, and JALR.
/// - S-Type for STORE.
/// - B-Type for BRANCH (bit 0 is always zero).
/// - U-Type for LUI and AUIPC (low 12 bits zero, no sign extension needed).
/// - J-Type for JAL (bit 0 is always zero).
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding.
///
/// # Returns
///
/// The 32-bit immediate, or 0 for opcodes that carry none.
pub fn immediate(inst: u32) -> u32 {
    match inst.opcode() {
        opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => decode_i_type_imm(inst),
        opcodes::OP_STORE => decode_s_type_imm(inst),
        opcodes::OP_BRANCH => decode_b_type_imm(inst),
        opcodes::OP_LUI | opcodes::OP_AUIPC => inst & U_IMM_MASK,
        opcodes::OP_JAL => decode_j_type_imm(inst),
        _ => 0,
    }
}

fn decode_i_type_imm(inst: u32) -> u32 {
    ((inst as i32) >> I_IMM_SHIFT) as u32
}

fn decode_s_type_imm(inst: u32) -> u32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = inst >> S_IMM_HIGH_SHIFT;
    sign_extend((high << 5) | low, S_IMM_BITS)
}

fn decode_b_type_imm(inst: u32) -> u32 {
    let bit_11 = (inst >> B_IMM_11_SHIFT) & 1;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = inst >> B_IMM_12_SHIFT;
    let raw = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(raw, B_IMM_BITS)
}

fn decode_j_type_imm(inst: u32) -> u32 {
    let bits_19_12 = (inst >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & 1;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = inst >> J_IMM_20_SHIFT;
    let raw = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(raw, J_IMM_BITS)
}

/// Sign-extends the low `bits` bits of `val` to 32 bits.
///
/// # Arguments
///
/// * `val` - Value whose low `bits` bits hold a two's-complement number.
/// * `bits` - Width of that number (1-32).
#[inline]
pub const fn sign_extend(val: u32, bits: u32) -> u32 {
    let shift = 32 - bits;
    (((val << shift) as i32) >> shift) as u32
}
