//! Simulation driver and program loading.
//!
//! Provides the byte-image loader and the `Simulator` that pairs a core with
//! its memories.

/// Program image validation and decoding.
pub mod loader;

/// Core-plus-memory driver.
pub mod simulator;

pub use self::simulator::Simulator;
