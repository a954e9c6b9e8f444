//! Common types and constants used throughout the pipeline simulator.
//!
//! It includes:
//! 1. **Constants:** Register count, word geometry, and snapshot layout sizes.
//! 2. **Error Handling:** Loader, configuration, and simulation error enums.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for loading, configuration, and simulation.
pub mod error;

pub use error::{ConfigError, LoaderError, SimError};
