//! Data Hazard Detection and Forwarding.
//!
//! This module keeps decode's operand values consistent with in-flight producers.
//! It provides:
//! 1. **Forwarding Resolver:** Chooses, per operand, between the register file and
//!    the EX, MEM, or WB stage result, with fixed priority EX > MEM > WB.
//! 2. **Load-Use Detection:** Flags the one case forwarding cannot cover, a load in
//!    EX whose data does not exist yet.
//!
//! Both are pure functions of register indices and stage write ports.

use serde::Serialize;

/// Where a decode operand takes its value from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ForwardSource {
    /// The register file read port.
    #[default]
    RegFile,
    /// The result computed this tick by the instruction in execute.
    Ex,
    /// The result leaving the memory stage this tick.
    Mem,
    /// The value being written back this tick.
    Wb,
}

impl ForwardSource {
    /// Two-bit mux select used in the hazard status word.
    pub const fn code(self) -> u32 {
        match self {
            Self::RegFile => 0,
            Self::Ex => 1,
            Self::Mem => 2,
            Self::Wb => 3,
        }
    }

    /// Inverse of [`ForwardSource::code`]; only the low two bits are consulted.
    pub const fn from_code(code: u32) -> Self {
        match code & 0b11 {
            0 => Self::RegFile,
            1 => Self::Ex,
            2 => Self::Mem,
            _ => Self::Wb,
        }
    }
}

/// The register write port of one downstream stage, as seen by decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageWrite {
    /// Destination register index.
    pub rd: usize,
    /// The instruction will write `rd`.
    pub reg_write: bool,
    /// The instruction is a load (its EX-stage result is an address).
    pub is_load: bool,
}

impl StageWrite {
    /// Returns `true` if this stage will produce a value for register `rs`.
    #[inline]
    const fn writes(&self, rs: usize) -> bool {
        self.reg_write && self.rd != 0 && self.rd == rs
    }
}

/// Selects the forwarding source for one decode operand.
///
/// A load in EX is never selected: its latch holds an address, not data. That
/// case is handled by [`need_stall_load_use`] instead.
///
/// # Arguments
///
/// * `rs` - Source register index of the operand.
/// * `ex` - Write port of the instruction in execute (the ID/EX latch).
/// * `mem` - Write port of the instruction in memory (the EX/MEM latch).
/// * `wb` - Write port of the instruction in writeback (the MEM/WB latch).
///
/// # Returns
///
/// The highest-priority stage that writes `rs`, or `RegFile` if none does.
///
/// # Examples
///
/// ```
/// use rvpipe_core::core::pipeline::hazards::{ForwardSource, StageWrite, resolve_forward};
///
/// let writer = StageWrite { rd: 5, reg_write: true, is_load: false };
/// assert_eq!(resolve_forward(5, writer, writer, writer), ForwardSource::Ex);
/// assert_eq!(resolve_forward(0, writer, writer, writer), ForwardSource::RegFile);
/// ```
pub const fn resolve_forward(
    rs: usize,
    ex: StageWrite,
    mem: StageWrite,
    wb: StageWrite,
) -> ForwardSource {
    if ex.writes(rs) && !ex.is_load {
        ForwardSource::Ex
    } else if mem.writes(rs) {
        ForwardSource::Mem
    } else if wb.writes(rs) {
        ForwardSource::Wb
    } else {
        ForwardSource::RegFile
    }
}

/// Checks if decode must stall one tick for a load-use hazard.
///
/// The condition is `EX.isLoad && EX.rd != 0 && (EX.rd == rs1 || EX.rd == rs2)`.
/// Register fields are compared positionally even for formats that do not read
/// them, which can cost a spurious stall but never a wrong result.
///
/// # Arguments
///
/// * `ex` - Write port of the instruction in execute.
/// * `rs1` - First source register index of the instruction in decode.
/// * `rs2` - Second source register index of the instruction in decode.
pub const fn need_stall_load_use(ex: StageWrite, rs1: usize, rs2: usize) -> bool {
    ex.is_load && ex.rd != 0 && (ex.rd == rs1 || ex.rd == rs2)
}

/// Per-tick summary of hazard handling, as exposed to debug tooling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HazardStatus {
    /// The PC advanced (to PC+4 or a redirect target) this tick.
    pub pc_write_enable: bool,
    /// IF/ID was loaded or flushed rather than held.
    pub if_id_write_enable: bool,
    /// Decode asserted a redirect and flushed IF/ID.
    pub control_hazard: bool,
    /// Decode stalled on a load-use dependency.
    pub load_use_hazard: bool,
    /// Forwarding choice for decode's rs1.
    pub rs1_source: ForwardSource,
    /// Forwarding choice for decode's rs2.
    pub rs2_source: ForwardSource,
    /// The halt flag has reached MEM/WB.
    pub halted: bool,
}

impl HazardStatus {
    /// Packs the status into the debug hazard word.
    ///
    /// Bit 11 PC write, bit 10 IF/ID write, bit 9 control hazard, bit 8 load-use,
    /// bits 7:6 rs2 source, bits 5:4 rs1 source, bit 0 halted.
    pub const fn to_word(&self) -> u32 {
        ((self.pc_write_enable as u32) << 11)
            | ((self.if_id_write_enable as u32) << 10)
            | ((self.control_hazard as u32) << 9)
            | ((self.load_use_hazard as u32) << 8)
            | (self.rs2_source.code() << 6)
            | (self.rs1_source.code() << 4)
            | (self.halted as u32)
    }

    /// Unpacks a debug hazard word.
    pub const fn from_word(word: u32) -> Self {
        Self {
            pc_write_enable: (word >> 11) & 1 == 1,
            if_id_write_enable: (word >> 10) & 1 == 1,
            control_hazard: (word >> 9) & 1 == 1,
            load_use_hazard: (word >> 8) & 1 == 1,
            rs2_source: ForwardSource::from_code(word >> 6),
            rs1_source: ForwardSource::from_code(word >> 4),
            halted: word & 1 == 1,
        }
    }
}
