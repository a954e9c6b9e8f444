//! Instruction Fetch (IF) Stage.
//!
//! Reads the word at the current PC and forms the IF/ID payload. Redirects and
//! holds are applied by the engine, not here.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::pipeline::latches::IfId;
use crate::soc::traits::MemoryPort;

/// Fetches the instruction at `pc`.
///
/// # Arguments
///
/// * `pc` - Current program counter.
/// * `mem` - Instruction memory port.
///
/// # Returns
///
/// The IF/ID payload `{pc, inst, pc + 4}`.
pub fn fetch_stage<M: MemoryPort + ?Sized>(pc: u32, mem: &M) -> IfId {
    IfId {
        pc,
        inst: mem.fetch(pc),
        pc_plus4: pc.wrapping_add(INSTRUCTION_SIZE),
    }
}
