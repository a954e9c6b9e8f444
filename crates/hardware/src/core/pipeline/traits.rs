//! Pipeline Latch Interface.
//!
//! This module defines the common trait for inter-stage latches. It provides:
//! 1. **Bubble Construction:** The all-zero payload inserted on flush.
//! 2. **Status Checks:** Bubble and halt-flag queries used by the engine.

/// Represents a pipeline latch payload (inter-stage buffer).
///
/// Every latch is created at reset as a bubble and, on each tick, either holds,
/// becomes a bubble, or loads a new payload.
pub trait PipelineLatch: Clone + Default {
    /// Returns the all-zero bubble payload.
    fn bubble() -> Self {
        Self::default()
    }

    /// Checks if the latch holds no instruction.
    fn is_bubble(&self) -> bool;

    /// Checks if the latch carries the sticky halt flag.
    fn is_halt(&self) -> bool;
}
