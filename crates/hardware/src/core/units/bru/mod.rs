//! Branch Resolution Unit (BRU).
//!
//! Resolves branches and jumps in decode, one stage earlier than execute-based
//! resolution, so a taken branch costs a single flushed fetch. It provides:
//! 1. **Comparator:** `zero = (rs1 - rs2) == 0` on forwarded operands.
//! 2. **Condition:** `zero XOR funct3[0]` covers BEQ and BNE.
//! 3. **Target Adder:** `pc + imm`, or `(rs1 + imm) & !1` for JALR.

use serde::Serialize;

use crate::common::constants::JALR_TARGET_MASK;
use crate::core::pipeline::signals::ControlBundle;

/// Result of flow resolution for the instruction in decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FlowOutcome {
    /// PC must be redirected and IF/ID flushed this tick.
    pub redirect: bool,
    /// Output of the target adder; meaningful only when `redirect` is set.
    pub target: u32,
}

/// Evaluates the branch condition from the comparator.
///
/// # Arguments
///
/// * `funct3` - Branch funct3; bit 0 inverts the equality test.
/// * `rs1` - Forwarded first operand.
/// * `rs2` - Forwarded second operand.
#[inline]
pub const fn branch_taken(funct3: u32, rs1: u32, rs2: u32) -> bool {
    let zero = rs1.wrapping_sub(rs2) == 0;
    zero ^ (funct3 & 1 == 1)
}

/// Resolves control flow for the instruction in decode.
///
/// Redirect is asserted for `is_jal || is_jalr || (is_branch && taken)`.
///
/// # Arguments
///
/// * `ctrl` - Control bundle of the instruction in decode (a bubble never redirects).
/// * `funct3` - The instruction's funct3 field.
/// * `pc` - The instruction's PC.
/// * `imm` - Its sign-extended immediate.
/// * `rs1` - Forwarded rs1 value.
/// * `rs2` - Forwarded rs2 value.
///
/// # Examples
///
/// ```
/// use rvpipe_core::core::pipeline::signals::ControlBundle;
/// use rvpipe_core::core::units::bru::resolve_flow;
///
/// let jalr = ControlBundle { is_jalr: true, reg_write: true, ..ControlBundle::NOP };
/// let out = resolve_flow(&jalr, 0, 0x40, 3, 0x100, 0);
/// assert!(out.redirect);
/// assert_eq!(out.target, 0x102);
/// ```
pub const fn resolve_flow(
    ctrl: &ControlBundle,
    funct3: u32,
    pc: u32,
    imm: u32,
    rs1: u32,
    rs2: u32,
) -> FlowOutcome {
    let redirect =
        ctrl.is_jal || ctrl.is_jalr || (ctrl.is_branch && branch_taken(funct3, rs1, rs2));
    let base = if ctrl.is_jalr { rs1 } else { pc };
    let raw = base.wrapping_add(imm);
    let target = if ctrl.is_jalr {
        raw & JALR_TARGET_MASK
    } else {
        raw
    };
    FlowOutcome { redirect, target }
}
