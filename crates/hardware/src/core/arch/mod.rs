//! Architectural state.
//!
//! The only architectural state of an RV32I core without CSRs is the integer
//! register file and the program counter; the PC lives in the engine.

/// General-purpose register file (x0-x31).
pub mod gpr;
