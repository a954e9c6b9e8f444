//! Execute (EX) Stage.
//!
//! Computes the result of the instruction held in ID/EX. It performs the following:
//! 1. **Operation Selection:** Refines the ALU intent with funct3/funct7.
//! 2. **Operand Routing:** Operand A from rs1, PC, or zero; operand B from rs2 or the immediate.
//! 3. **Result Selection:** JAL/JALR produce `pc + 4`; everything else the ALU output.
//!
//! Branch outcome is not computed here; it was resolved in decode.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::pipeline::latches::{ExMem, IdEx};
use crate::core::pipeline::signals::{AluSrc, OpASrc, RdSource};
use crate::core::units::alu::Alu;
use crate::core::units::alu::control::alu_control;

/// Evaluates the execute stage for the instruction in ID/EX.
///
/// The returned payload's `alu_result` is also the EX-stage forwarding value.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch as committed last tick.
pub fn execute_stage(id_ex: &IdEx) -> ExMem {
    let ctrl = &id_ex.ctrl;

    let a = match ctrl.a_src {
        OpASrc::Reg => id_ex.rs1_data,
        OpASrc::Pc => id_ex.pc,
        OpASrc::Zero => 0,
    };
    let b = match ctrl.alu_src {
        AluSrc::Reg => id_ex.rs2_data,
        AluSrc::Imm => id_ex.imm,
    };

    let sel = alu_control(ctrl.alu_intent, id_ex.funct3, id_ex.funct7);
    let alu_out = Alu::execute(sel, a, b);

    let result = match ctrl.rd_src {
        RdSource::PcPlus4 => id_ex.pc.wrapping_add(INSTRUCTION_SIZE),
        RdSource::Alu | RdSource::Mem => alu_out,
    };

    ExMem {
        ctrl: ctrl.mem_ctrl(),
        pc: id_ex.pc,
        inst: id_ex.inst,
        store_data: id_ex.rs2_data,
        alu_result: result,
        rd: id_ex.rd,
        funct3: id_ex.funct3,
    }
}
