//! Execution units and functional components.
//!
//! This module contains the combinational units the pipeline stages compose:
//! the ALU and its operation selector, the branch resolution unit, and the
//! load/store lane shim.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit: comparator, condition, and target adder.
pub mod bru;

/// Load/Store Unit: byte masks, lane alignment, and extension.
pub mod lsu;
