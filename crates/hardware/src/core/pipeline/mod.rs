//! Instruction pipeline implementation.
//!
//! This module contains the five-stage in-order pipeline. It includes:
//! 1. **Engine:** The `Core` and its tick, which evaluates every stage and commits atomically.
//! 2. **Hazards:** Forwarding-source selection, load-use detection, and the hazard status word.
//! 3. **Latches:** IF/ID, ID/EX, EX/MEM, and MEM/WB payloads and their hold/flush/load rule.
//! 4. **Signals:** Control bundle produced by decode and its per-latch projections.
//! 5. **Snapshot:** Fixed 50-word image of registers, hazards, and latches.
//! 6. **Stages:** Fetch, Decode, Execute, Memory, and Writeback.

/// Core state and the tick engine.
pub mod engine;

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline state snapshot for debug consumers.
pub mod snapshot;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits shared by pipeline latches.
pub mod traits;
