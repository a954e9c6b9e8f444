//! Memory Access (MEM) Stage.
//!
//! Performs the data access of the instruction held in EX/MEM:
//! 1. **Loads:** Reads the containing word and extracts the addressed lane.
//! 2. **Stores:** Prepares the byte mask and lane-aligned data; the engine applies
//!    the write at commit so no state changes mid-tick.

use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::core::units::lsu::{MemWidth, StoreLane, is_signed_load, load_extract, store_lane};
use crate::soc::traits::MemoryPort;

/// A data-memory write requested by the memory stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreRequest {
    /// Byte address issued by the store.
    pub addr: u32,
    /// Mask and aligned data.
    pub lane: StoreLane,
}

/// Output of the memory stage for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemOutput {
    /// Payload for the MEM/WB latch. Its `rd_value()` is the MEM-stage forwarding value.
    pub mem_wb: MemWb,
    /// The write to apply at commit, if this is a store.
    pub store: Option<StoreRequest>,
}

/// Evaluates the memory stage for the instruction in EX/MEM.
///
/// # Arguments
///
/// * `ex_mem` - The EX/MEM latch as committed last tick.
/// * `mem` - Data memory port (read only here).
pub fn mem_stage<M: MemoryPort + ?Sized>(ex_mem: &ExMem, mem: &M) -> MemOutput {
    let ctrl = &ex_mem.ctrl;
    let addr = ex_mem.alu_result;
    let width = MemWidth::from_funct3(ex_mem.funct3);

    let mem_data = if ctrl.mem_read {
        load_extract(width, is_signed_load(ex_mem.funct3), addr, mem.data_read(addr))
    } else {
        0
    };

    let store = ctrl.mem_write.then(|| StoreRequest {
        addr,
        lane: store_lane(width, addr, ex_mem.store_data),
    });

    MemOutput {
        mem_wb: MemWb {
            ctrl: ctrl.wb_ctrl(),
            pc: ex_mem.pc,
            inst: ex_mem.inst,
            exec_data: ex_mem.alu_result,
            mem_data,
            rd: ex_mem.rd,
        },
        store,
    }
}
