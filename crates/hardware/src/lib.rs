//! Cycle-accurate RV32I pipeline engine.
//!
//! This crate models a classic five-stage in-order RV32I core at tick level:
//! 1. **Core:** Fetch, decode, execute, memory, and writeback with atomic per-tick commit.
//! 2. **Hazards:** EX > MEM > WB forwarding, load-use stalls, and branches resolved in decode.
//! 3. **ISA:** Field decoding, immediate reconstruction, and a small disassembler.
//! 4. **Memory:** Word-addressed instruction and data memory behind a byte-lane shim.
//! 5. **Simulation:** Loader, configuration, snapshots, and statistics.

/// Common constants and error types.
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (pipeline, register file, execution units).
pub mod core;
/// Instruction set (field decode, immediates, RV32I encodings, disassembly).
pub mod isa;
/// Program loader and simulation driver.
pub mod sim;
/// Memory port trait and word memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Pipeline core; advance it with `Core::tick`.
pub use crate::core::{Core, HaltState, TickControl};
/// Core-plus-memory driver.
pub use crate::sim::Simulator;
/// Instruction and data memory.
pub use crate::soc::WordMemory;
