//! ALU shift operations.
//!
//! The shift amount is the low five bits of operand B.

use super::AluOp;

/// Mask selecting the shift amount from operand B.
const SHAMT_MASK: u32 = 0x1F;

/// Executes a shift operation.
///
/// # Returns
///
/// The shifted value. Returns `0` for non-shift operations.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let shamt = b & SHAMT_MASK;
    match op {
        AluOp::Sll => a << shamt,
        AluOp::Srl => a >> shamt,
        AluOp::Sra => ((a as i32) >> shamt) as u32,
        _ => 0,
    }
}
