//! Pipeline stage implementations.
//!
//! Each stage is a pure function from last tick's latch contents to the payload
//! it would latch next. The engine evaluates all five against the same snapshot,
//! then commits. It includes:
//! 1. **Fetch:** Reads the instruction at the PC.
//! 2. **Decode:** Controller, immediate unit, forwarding, load-use check, and flow resolution.
//! 3. **Execute:** ALU-operation selection, operand routing, and the ALU.
//! 4. **Memory:** Data loads through the lane shim and store-lane preparation.
//! 5. **Writeback:** Selects the value and destination for the register file port.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
