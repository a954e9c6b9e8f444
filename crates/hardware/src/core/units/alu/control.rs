//! ALU-operation selector.
//!
//! Refines the controller's `AluIntent` into a 4-bit ALU selector using the
//! instruction's funct3 and funct7 fields:
//! - `Add` always selects addition (address and offset arithmetic).
//! - `Sub` (branches) selects [`AluOp::NOT_USED`]; branches resolve in decode.
//! - `RType`/`IType` select by funct3. Only `RType` distinguishes SUB from ADD,
//!   since bit 30 of an ADDI word belongs to the immediate. Both distinguish
//!   SRA from SRL.

use super::AluOp;
use crate::core::pipeline::signals::AluIntent;
use crate::isa::rv32i::{funct3, funct7};

/// Computes the ALU selector for an instruction in execute.
///
/// # Arguments
///
/// * `intent` - Coarse intent from the controller.
/// * `f3` - The instruction's funct3 field.
/// * `f7` - The instruction's funct7 field.
///
/// # Returns
///
/// A 4-bit selector for [`super::Alu::execute`].
pub const fn alu_control(intent: AluIntent, f3: u32, f7: u32) -> u8 {
    let alt = (f7 >> funct7::ALT_BIT) & 1 == 1;
    let op = match intent {
        AluIntent::Add => AluOp::Add,
        AluIntent::Sub => return AluOp::NOT_USED,
        AluIntent::RType | AluIntent::IType => match f3 {
            funct3::ADD_SUB => {
                if alt && matches!(intent, AluIntent::RType) {
                    AluOp::Sub
                } else {
                    AluOp::Add
                }
            }
            funct3::SLL => AluOp::Sll,
            funct3::SLT => AluOp::Slt,
            funct3::SLTU => AluOp::Sltu,
            funct3::XOR => AluOp::Xor,
            funct3::SRL_SRA => {
                if alt {
                    AluOp::Sra
                } else {
                    AluOp::Srl
                }
            }
            funct3::OR => AluOp::Or,
            _ => AluOp::And,
        },
    };
    op.code()
}
