//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Control Generation:** The controller maps the opcode to a `ControlBundle`.
//! 2. **Register Read:** Reads rs1 and rs2, then overrides them through the forwarding resolver.
//! 3. **Hazard Detection:** Checks for a load-use dependency on the instruction in execute.
//! 4. **Flow Resolution:** Computes branch/jump redirects on the forwarded operands.
//!
//! On a load-use stall the decoded bundle is replaced by a bubble, which also
//! suppresses the redirect; the same instruction decodes again next tick.

use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::hazards::{
    ForwardSource, StageWrite, need_stall_load_use, resolve_forward,
};
use crate::core::pipeline::latches::{IdEx, IfId};
use crate::core::pipeline::signals::{AluIntent, AluSrc, ControlBundle, OpASrc, RdSource};
use crate::core::units::bru::{FlowOutcome, resolve_flow};
use crate::isa::decode::{decode, immediate};
use crate::isa::rv32i::opcodes;

/// Maps an opcode to its control bundle.
///
/// Exactly one row matches each recognized opcode. Anything else, including
/// reserved and custom opcodes, yields [`ControlBundle::NOP`].
///
/// # Examples
///
/// ```
/// use rvpipe_core::core::pipeline::stages::decode::controller;
/// use rvpipe_core::core::pipeline::signals::ControlBundle;
///
/// assert!(controller(0x03).mem_read);
/// assert_eq!(controller(0x7F), ControlBundle::NOP);
/// ```
pub const fn controller(opcode: u32) -> ControlBundle {
    let nop = ControlBundle::NOP;
    match opcode {
        opcodes::OP_REG => ControlBundle {
            reg_write: true,
            alu_intent: AluIntent::RType,
            alu_src: AluSrc::Reg,
            ..nop
        },
        opcodes::OP_IMM => ControlBundle {
            reg_write: true,
            alu_intent: AluIntent::IType,
            alu_src: AluSrc::Imm,
            ..nop
        },
        opcodes::OP_LOAD => ControlBundle {
            reg_write: true,
            mem_read: true,
            rd_src: RdSource::Mem,
            alu_intent: AluIntent::Add,
            alu_src: AluSrc::Imm,
            ..nop
        },
        opcodes::OP_STORE => ControlBundle {
            mem_write: true,
            alu_intent: AluIntent::Add,
            alu_src: AluSrc::Imm,
            ..nop
        },
        opcodes::OP_BRANCH => ControlBundle {
            is_branch: true,
            alu_intent: AluIntent::Sub,
            alu_src: AluSrc::Reg,
            ..nop
        },
        opcodes::OP_JAL => ControlBundle {
            is_jal: true,
            reg_write: true,
            rd_src: RdSource::PcPlus4,
            ..nop
        },
        opcodes::OP_JALR => ControlBundle {
            is_jalr: true,
            reg_write: true,
            rd_src: RdSource::PcPlus4,
            alu_intent: AluIntent::Add,
            alu_src: AluSrc::Imm,
            ..nop
        },
        opcodes::OP_LUI => ControlBundle {
            reg_write: true,
            alu_intent: AluIntent::Add,
            alu_src: AluSrc::Imm,
            a_src: OpASrc::Zero,
            ..nop
        },
        opcodes::OP_AUIPC => ControlBundle {
            reg_write: true,
            alu_intent: AluIntent::Add,
            alu_src: AluSrc::Imm,
            a_src: OpASrc::Pc,
            ..nop
        },
        opcodes::OP_SYSTEM => ControlBundle {
            is_halt: true,
            ..nop
        },
        _ => nop,
    }
}

/// Write ports of the three stages downstream of decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BypassPorts {
    /// The instruction in execute (ID/EX).
    pub ex: StageWrite,
    /// The instruction in memory (EX/MEM).
    pub mem: StageWrite,
    /// The instruction in writeback (MEM/WB).
    pub wb: StageWrite,
}

/// Values on the three bypass buses this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BypassValues {
    /// Execute result of the instruction in ID/EX.
    pub ex: u32,
    /// Load data or execute result leaving the memory stage.
    pub mem: u32,
    /// Value being written back from MEM/WB.
    pub wb: u32,
}

impl BypassValues {
    const fn select(&self, src: ForwardSource, reg: u32) -> u32 {
        match src {
            ForwardSource::RegFile => reg,
            ForwardSource::Ex => self.ex,
            ForwardSource::Mem => self.mem,
            ForwardSource::Wb => self.wb,
        }
    }
}

/// Output of the decode stage for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOutput {
    /// Payload for ID/EX: the decoded instruction, or a bubble on a load-use stall.
    pub id_ex: IdEx,
    /// Redirect request from flow resolution (never set while stalling).
    pub flow: FlowOutcome,
    /// A load-use stall is required this tick.
    pub load_use: bool,
    /// Forwarding choice for rs1.
    pub rs1_source: ForwardSource,
    /// Forwarding choice for rs2.
    pub rs2_source: ForwardSource,
}

/// Evaluates the decode stage for the instruction in IF/ID.
///
/// # Arguments
///
/// * `if_id` - The IF/ID latch as committed last tick.
/// * `regs` - Register file, read before this tick's writeback commit.
/// * `ports` - Destination/write-enable of the EX, MEM, and WB instructions.
/// * `values` - The bypass bus values computed this tick.
pub fn decode_stage(
    if_id: &IfId,
    regs: &Gpr,
    ports: BypassPorts,
    values: BypassValues,
) -> DecodeOutput {
    let fields = decode(if_id.inst);
    let imm = immediate(if_id.inst);
    let load_use = need_stall_load_use(ports.ex, fields.rs1, fields.rs2);

    let rs1_source = resolve_forward(fields.rs1, ports.ex, ports.mem, ports.wb);
    let rs2_source = resolve_forward(fields.rs2, ports.ex, ports.mem, ports.wb);
    let rs1_data = values.select(rs1_source, regs.read(fields.rs1));
    let rs2_data = values.select(rs2_source, regs.read(fields.rs2));

    let decoded = controller(fields.opcode);

    if load_use {
        return DecodeOutput {
            id_ex: IdEx {
                ctrl: decoded.to_bubble(),
                ..IdEx::default()
            },
            flow: FlowOutcome::default(),
            load_use,
            rs1_source,
            rs2_source,
        };
    }

    let flow = resolve_flow(&decoded, fields.funct3, if_id.pc, imm, rs1_data, rs2_data);

    DecodeOutput {
        id_ex: IdEx {
            ctrl: decoded,
            pc: if_id.pc,
            inst: if_id.inst,
            rs1_data,
            rs2_data,
            imm,
            rs1: fields.rs1,
            rs2: fields.rs2,
            rd: fields.rd,
            funct3: fields.funct3,
            funct7: fields.funct7,
        },
        flow,
        load_use,
        rs1_source,
        rs2_source,
    }
}
