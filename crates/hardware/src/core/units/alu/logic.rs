//! ALU logical and comparison operations.
//!
//! Implements bitwise OR, AND, XOR, and set-less-than. `Slt` reinterprets both
//! operands as `i32`; `Sltu` compares them as `u32`. The result of a comparison
//! is always 0 or 1.

use super::AluOp;

/// Executes a logical or comparison operation.
///
/// # Returns
///
/// The 32-bit result. Returns `0` for non-logic operations.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        AluOp::Sltu => (a < b) as u32,
        _ => 0,
    }
}
