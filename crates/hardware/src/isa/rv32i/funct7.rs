//! RV32I Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) distinguishes operations that share the same
//! `funct3` (ADD vs SUB, SRL vs SRA). Only bit 5 of the field (instruction bit 30)
//! is consulted by the ALU-operation selector.

/// Default operation (ADD, SRL, etc.).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA).
pub const ALT: u32 = 0b0100000;

/// Bit within `funct7` that selects the alternate operation.
pub const ALT_BIT: u32 = 5;
