//! Global Constants.
//!
//! This module defines constants shared across the pipeline. It includes:
//! 1. **Architectural Constants:** Register count, word size, and instruction size.
//! 2. **Memory Constants:** Word-alignment masks and lane widths.
//! 3. **Debug Constants:** Sizes of the flat snapshot layout.

/// Number of general-purpose integer registers.
pub const NUM_REGS: usize = 32;

/// Size of an RV32I instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Size of a data word in bytes.
pub const WORD_BYTES: usize = 4;

/// Shift converting a byte address to a word index.
pub const WORD_SHIFT: u32 = 2;

/// Mask selecting the byte lane within a word (the low two address bits).
pub const LANE_MASK: u32 = 0b11;

/// Mask clearing bit 0 of a JALR target.
pub const JALR_TARGET_MASK: u32 = !1;

/// Byte-enable mask covering all four lanes.
pub const FULL_WORD_MASK: u8 = 0b1111;

/// Number of 32-bit words in a serialized pipeline snapshot.
///
/// 32 registers, 1 hazard word, 3 IF/ID, 6 ID/EX, 4 EX/MEM, 4 MEM/WB.
pub const SNAPSHOT_WORDS: usize = 50;
