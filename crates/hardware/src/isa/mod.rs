//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains encoding constants, field extraction, the decoder and immediate unit,
//! and a disassembler for the RV32I subset executed by the pipeline.

/// Instruction decoding and immediate reconstruction.
pub mod decode;

/// Instruction disassembler for trace events and diagnostics.
pub mod disasm;

/// Instruction field extraction and the decoded-fields record.
pub mod instruction;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;
