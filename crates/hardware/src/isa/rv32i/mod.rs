//! RV32I Base Integer Instruction Set.
//!
//! Encoding constants for the subset of the base ISA that the pipeline executes.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (Load, Store, Branch, Jal, Jalr, OpImm, OpReg, Lui, Auipc, System).
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: Alternate-encoding bit for R-type instructions.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcodes.
pub mod opcodes;
