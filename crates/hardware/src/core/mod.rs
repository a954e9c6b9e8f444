//! Core processor implementation.
//!
//! This module contains the register file, the five-stage pipeline, and the
//! combinational units (ALU, branch unit, load/store lane logic) the stages use.

/// Architectural state (general-purpose register file).
pub mod arch;

/// Instruction pipeline implementation (engine, stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU, branch resolution, load/store lanes).
pub mod units;

pub use self::pipeline::engine::{Core, HaltState, TickControl};
