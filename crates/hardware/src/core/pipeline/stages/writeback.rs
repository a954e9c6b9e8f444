//! Writeback (WB) Stage.
//!
//! Chooses the value and destination for the register file's single write port.

use crate::core::pipeline::latches::MemWb;

/// Evaluates the writeback stage for the instruction in MEM/WB.
///
/// # Returns
///
/// `Some((rd, value))` if the instruction writes a nonzero register, else `None`.
pub const fn wb_stage(mem_wb: &MemWb) -> Option<(usize, u32)> {
    if mem_wb.ctrl.reg_write && mem_wb.rd != 0 {
        Some((mem_wb.rd, mem_wb.rd_value()))
    } else {
        None
    }
}
