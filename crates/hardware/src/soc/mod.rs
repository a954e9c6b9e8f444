//! Memory subsystem around the core.
//!
//! This module contains the collaborator side of the engine's memory contract:
//! 1. **Traits:** `MemoryPort`, the fetch/read/write interface the engine consumes.
//! 2. **Memory:** `WordMemory`, a word-addressed instruction and data store.

/// Word-addressed instruction and data memory.
pub mod memory;

/// Memory port trait.
pub mod traits;

pub use memory::WordMemory;
pub use traits::MemoryPort;
