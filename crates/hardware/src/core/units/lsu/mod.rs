//! Load/Store Unit (LSU).
//!
//! This module is the memory access shim between the pipeline and a
//! word-addressed data memory. It provides:
//! 1. **Width Decoding:** funct3 → byte, half, or word access with signedness.
//! 2. **Store Lanes:** A byte-enable mask and a lane-aligned data word.
//! 3. **Load Extraction:** The addressed lane shifted down and sign- or zero-extended.
//!
//! All functions are pure. Only the low two address bits are consulted; the
//! word part of the address belongs to the memory.

use serde::Serialize;

use crate::common::constants::{FULL_WORD_MASK, LANE_MASK};

/// Width of a data memory access.
///
/// Only three widths exist, so every match over this enum is exhaustive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum MemWidth {
    /// 8-bit access.
    Byte,
    /// 16-bit access.
    Half,
    /// 32-bit access.
    #[default]
    Word,
}

impl MemWidth {
    /// Decodes the access width from a load/store funct3.
    ///
    /// The low two bits select the width; the reserved value 3 (a doubleword
    /// on RV64) is treated as a word.
    pub const fn from_funct3(funct3: u32) -> Self {
        match funct3 & 0b11 {
            0 => Self::Byte,
            1 => Self::Half,
            _ => Self::Word,
        }
    }
}

/// Returns `true` if a load with this funct3 sign-extends (LB, LH).
#[inline]
pub const fn is_signed_load(funct3: u32) -> bool {
    funct3 & 0b100 == 0
}

/// Byte-enable mask and aligned data for one store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StoreLane {
    /// Byte enables, bit `i` for byte lane `i`.
    pub mask: u8,
    /// Store data shifted into the enabled lanes.
    pub data: u32,
}

/// Places store data into the addressed lane.
///
/// Halfword lanes are chosen by address bit 1; a halfword store at an odd
/// address lands in the lane that contains it rather than faulting.
///
/// # Arguments
///
/// * `width` - Access width.
/// * `addr` - Byte address; only bits 1:0 are used.
/// * `value` - Register value to store; only the low bytes of the width are used.
///
/// # Examples
///
/// ```
/// use rvpipe_core::core::units::lsu::{MemWidth, store_lane};
///
/// let lane = store_lane(MemWidth::Byte, 0x103, 0xAB);
/// assert_eq!(lane.mask, 0b1000);
/// assert_eq!(lane.data, 0xAB00_0000);
/// ```
pub const fn store_lane(width: MemWidth, addr: u32, value: u32) -> StoreLane {
    let lsb = addr & LANE_MASK;
    match width {
        MemWidth::Byte => StoreLane {
            mask: 1 << lsb,
            data: (value & 0xFF) << (8 * lsb),
        },
        MemWidth::Half => {
            let half = lsb >> 1;
            StoreLane {
                mask: 0b0011 << (2 * half),
                data: (value & 0xFFFF) << (16 * half),
            }
        }
        MemWidth::Word => StoreLane {
            mask: FULL_WORD_MASK,
            data: value,
        },
    }
}

/// Extracts a load result from the addressed word.
///
/// # Arguments
///
/// * `width` - Access width.
/// * `signed` - Sign-extend (LB, LH) rather than zero-extend (LBU, LHU).
/// * `addr` - Byte address; only bits 1:0 are used.
/// * `word` - The full word read from data memory.
///
/// # Examples
///
/// ```
/// use rvpipe_core::core::units::lsu::{MemWidth, load_extract};
///
/// assert_eq!(load_extract(MemWidth::Byte, true, 1, 0x0000_8000), 0xFFFF_FF80);
/// assert_eq!(load_extract(MemWidth::Byte, false, 1, 0x0000_8000), 0x80);
/// ```
pub const fn load_extract(width: MemWidth, signed: bool, addr: u32, word: u32) -> u32 {
    let lsb = addr & LANE_MASK;
    match width {
        MemWidth::Byte => {
            let byte = (word >> (8 * lsb)) as u8;
            if signed { byte as i8 as i32 as u32 } else { byte as u32 }
        }
        MemWidth::Half => {
            let half = (word >> (16 * (lsb >> 1))) as u16;
            if signed { half as i16 as i32 as u32 } else { half as u32 }
        }
        MemWidth::Word => word,
    }
}

/// Merges lane-aligned store data into an existing word under a byte mask.
///
/// Used by word-addressed memories to apply a [`StoreLane`].
pub const fn merge_bytes(old: u32, data: u32, mask: u8) -> u32 {
    let mut expanded = 0u32;
    let mut i = 0;
    while i < 4 {
        if (mask >> i) & 1 == 1 {
            expanded |= 0xFF << (8 * i);
        }
        i += 1;
    }
    (old & !expanded) | (data & expanded)
}
