//! RV32I General-Purpose Register File.
//!
//! This module implements the 32 x 32-bit integer register file. It performs the following:
//! 1. **Storage:** Maintains registers `x0`-`x31`.
//! 2. **Invariant Enforcement:** `x0` reads as zero and ignores writes.
//! 3. **Debug Port:** A third read port independent of the two operand ports.
//!
//! The file has one write port, driven only by the writeback commit at the end
//! of a tick. Decode reads after that commit in the same tick, which models the
//! split-cycle write-before-read of the hardware register file.

use crate::common::constants::NUM_REGS;

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a register file with every register zeroed.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register through an operand port.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index. Only the low five bits are used.
    ///
    /// # Returns
    ///
    /// The stored value, or 0 for `x0`.
    #[inline]
    pub const fn read(&self, idx: usize) -> u32 {
        let idx = idx & (NUM_REGS - 1);
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register. Writes to `x0` are dropped.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index. Only the low five bits are used.
    /// * `val` - The value to store.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u32) {
        let idx = idx & (NUM_REGS - 1);
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Reads a register through the debug port.
    ///
    /// Same result as [`Gpr::read`]; kept separate so debug tooling never
    /// shares an operand port with decode.
    pub const fn debug_read(&self, idx: usize) -> u32 {
        self.read(idx)
    }

    /// Returns a copy of all 32 registers, `x0` included.
    pub const fn snapshot(&self) -> [u32; NUM_REGS] {
        let mut out = self.regs;
        out[0] = 0;
        out
    }

    /// Dumps all registers to the `debug` log, four per line.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(4) {
            tracing::debug!(
                "x{:<2}={:#010x} x{:<2}={:#010x} x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1),
                i + 2,
                self.read(i + 2),
                i + 3,
                self.read(i + 3)
            );
        }
    }
}
