//! Instruction Disassembler for RV32I.
//!
//! Converts a 32-bit instruction encoding into a mnemonic string for pipeline
//! trace events and test diagnostics. Covers exactly the subset the pipeline
//! executes; anything else renders as `unknown`.
//!
//! # Usage
//!
//! ```
//! use rvpipe_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x00A00093), "addi x1, x0, 10");
//! ```

use crate::isa::decode::immediate;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3 as f3, funct7 as f7, opcodes as op};

/// Disassembles a 32-bit instruction word.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
///
/// # Returns
///
/// A mnemonic like `"add x3, x1, x2"`, or `"unknown"` for encodings outside RV32I.
pub fn disassemble(inst: u32) -> String {
    let rd = inst.rd();
    let rs1 = inst.rs1();
    let rs2 = inst.rs2();
    let funct3 = inst.funct3();
    let alt = inst.funct7() == f7::ALT;
    let imm = immediate(inst) as i32;

    match inst.opcode() {
        op::OP_REG => {
            let mn = match (funct3, alt) {
                (f3::ADD_SUB, false) => "add",
                (f3::ADD_SUB, true) => "sub",
                (f3::SLL, _) => "sll",
                (f3::SLT, _) => "slt",
                (f3::SLTU, _) => "sltu",
                (f3::XOR, _) => "xor",
                (f3::SRL_SRA, false) => "srl",
                (f3::SRL_SRA, true) => "sra",
                (f3::OR, _) => "or",
                _ => "and",
            };
            format!("{mn} x{rd}, x{rs1}, x{rs2}")
        }
        op::OP_IMM => match funct3 {
            f3::SLL => format!("slli x{rd}, x{rs1}, {rs2}"),
            f3::SRL_SRA => {
                let mn = if alt { "srai" } else { "srli" };
                format!("{mn} x{rd}, x{rs1}, {rs2}")
            }
            _ => {
                let mn = match funct3 {
                    f3::ADD_SUB => "addi",
                    f3::SLT => "slti",
                    f3::SLTU => "sltiu",
                    f3::XOR => "xori",
                    f3::OR => "ori",
                    _ => "andi",
                };
                format!("{mn} x{rd}, x{rs1}, {imm}")
            }
        },
        op::OP_LOAD => {
            let mn = match funct3 {
                f3::LB => "lb",
                f3::LH => "lh",
                f3::LW => "lw",
                f3::LBU => "lbu",
                f3::LHU => "lhu",
                _ => "l??",
            };
            format!("{mn} x{rd}, {imm}(x{rs1})")
        }
        op::OP_STORE => {
            let mn = match funct3 {
                f3::SB => "sb",
                f3::SH => "sh",
                f3::SW => "sw",
                _ => "s??",
            };
            format!("{mn} x{rs2}, {imm}(x{rs1})")
        }
        op::OP_BRANCH => {
            let mn = match funct3 {
                f3::BEQ => "beq",
                f3::BNE => "bne",
                _ => "b??",
            };
            format!("{mn} x{rs1}, x{rs2}, {imm}")
        }
        op::OP_LUI => format!("lui x{rd}, {:#x}", inst >> 12),
        op::OP_AUIPC => format!("auipc x{rd}, {:#x}", inst >> 12),
        op::OP_JAL => format!("jal x{rd}, {imm}"),
        op::OP_JALR => format!("jalr x{rd}, {imm}(x{rs1})"),
        op::OP_SYSTEM => {
            if inst == op::ECALL {
                "ecall".to_string()
            } else {
                "system".to_string()
            }
        }
        _ => "unknown".to_string(),
    }
}
