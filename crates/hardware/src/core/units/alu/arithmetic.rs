//! ALU arithmetic operations.
//!
//! Addition and subtraction wrap modulo 2^32, matching two's-complement hardware.

use super::AluOp;

/// Executes an arithmetic operation.
///
/// # Returns
///
/// The wrapped 32-bit result. Returns `0` for non-arithmetic operations.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
