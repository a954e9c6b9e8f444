//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used in the Execute stage and
//! the selector that turns the controller's coarse intent into a 4-bit operation.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra
//! - [`control`]:    intent + funct3 + funct7 → operation selector

/// Integer addition and subtraction.
pub mod arithmetic;

/// ALU-operation selector.
pub mod control;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use serde::Serialize;

/// ALU operations, each tagged with its 4-bit selector code.
///
/// The low three bits of a code equal the RV32I funct3 of the operation; bit 3
/// marks the alternate (funct7 bit 5) encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum AluOp {
    /// Addition.
    #[default]
    Add = 0x0,
    /// Shift left logical.
    Sll = 0x1,
    /// Set less than (signed).
    Slt = 0x2,
    /// Set less than unsigned.
    Sltu = 0x3,
    /// Bitwise XOR.
    Xor = 0x4,
    /// Shift right logical.
    Srl = 0x5,
    /// Bitwise OR.
    Or = 0x6,
    /// Bitwise AND.
    And = 0x7,
    /// Subtraction.
    Sub = 0x8,
    /// Shift right arithmetic.
    Sra = 0xD,
}

impl AluOp {
    /// Selector code reserved for "no ALU result needed" (branches).
    pub const NOT_USED: u8 = 0xF;

    /// Returns the 4-bit selector code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Maps a selector code to an operation.
    ///
    /// # Returns
    ///
    /// `None` for the six codes the ALU does not implement, including
    /// [`AluOp::NOT_USED`].
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code & 0xF {
            0x0 => Self::Add,
            0x1 => Self::Sll,
            0x2 => Self::Slt,
            0x3 => Self::Sltu,
            0x4 => Self::Xor,
            0x5 => Self::Srl,
            0x6 => Self::Or,
            0x7 => Self::And,
            0x8 => Self::Sub,
            0xD => Self::Sra,
            _ => return None,
        })
    }
}

/// Arithmetic Logic Unit for 32-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes the operation named by a 4-bit selector.
    ///
    /// # Arguments
    ///
    /// * `sel` - Operation selector; only the low four bits are used.
    /// * `a`   - First operand.
    /// * `b`   - Second operand (also the shift amount, of which only bits 4:0 count).
    ///
    /// # Returns
    ///
    /// The 32-bit result, or 0 for selector codes without an operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvpipe_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add.code(), 42, 8), 50);
    /// assert_eq!(Alu::execute(AluOp::Slt.code(), -5_i32 as u32, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Sltu.code(), -5_i32 as u32, 10), 0);
    /// assert_eq!(Alu::execute(AluOp::NOT_USED, 1, 2), 0);
    /// ```
    pub const fn execute(sel: u8, a: u32, b: u32) -> u32 {
        match AluOp::from_code(sel) {
            Some(op) => Self::execute_op(op, a, b),
            None => 0,
        }
    }

    /// Executes a decoded operation.
    pub const fn execute_op(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }
}
