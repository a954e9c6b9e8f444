//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and cycles per instruction.
//! 2. **Stalls:** Load-use bubbles inserted by decode.
//! 3. **Control Flow:** Redirects that flushed a fetched instruction.
//! 4. **External Control:** Ticks spent frozen by the debug collaborator.

use std::fmt;

use serde::Serialize;

/// Simulation statistics structure tracking pipeline metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Ticks that advanced the pipeline (excludes frozen and post-halt ticks).
    pub cycles: u64,
    /// Non-bubble instructions that entered the writeback stage.
    pub instructions_retired: u64,
    /// Bubbles inserted for load-use hazards.
    pub load_use_stalls: u64,
    /// Taken branches and jumps that flushed IF/ID.
    pub control_flushes: u64,
    /// Ticks suppressed by a freeze request.
    pub frozen_cycles: u64,
}

impl SimStats {
    /// Cycles per retired instruction, or 0.0 before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints the summary to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "RV32I PIPELINE STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "stalls.load_use          {}", self.load_use_stalls)?;
        writeln!(f, "flushes.control          {}", self.control_flushes)?;
        write!(f, "cycles.frozen            {}", self.frozen_cycles)
    }
}
