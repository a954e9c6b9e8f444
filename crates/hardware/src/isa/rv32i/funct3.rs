//! RV32I Function Codes (funct3).
//!
//! The `funct3` field (bits 14-12) selects the operation within a major opcode.

/// Load Byte (sign-extended).
pub const LB: u32 = 0b000;
/// Load Halfword (sign-extended).
pub const LH: u32 = 0b001;
/// Load Word.
pub const LW: u32 = 0b010;
/// Load Byte Unsigned (zero-extended).
pub const LBU: u32 = 0b100;
/// Load Halfword Unsigned (zero-extended).
pub const LHU: u32 = 0b101;

/// Store Byte.
pub const SB: u32 = 0b000;
/// Store Halfword.
pub const SH: u32 = 0b001;
/// Store Word.
pub const SW: u32 = 0b010;

/// Branch if Equal.
pub const BEQ: u32 = 0b000;
/// Branch if Not Equal.
pub const BNE: u32 = 0b001;

/// ADD, ADDI, or SUB (with `funct7` alternate bit).
pub const ADD_SUB: u32 = 0b000;
/// Shift Left Logical.
pub const SLL: u32 = 0b001;
/// Set Less Than (signed).
pub const SLT: u32 = 0b010;
/// Set Less Than Unsigned.
pub const SLTU: u32 = 0b011;
/// Bitwise XOR.
pub const XOR: u32 = 0b100;
/// Shift Right Logical or Arithmetic (with `funct7` alternate bit).
pub const SRL_SRA: u32 = 0b101;
/// Bitwise OR.
pub const OR: u32 = 0b110;
/// Bitwise AND.
pub const AND: u32 = 0b111;

/// JALR requires `funct3 == 0`; the controller does not check it.
pub const JALR: u32 = 0b000;
