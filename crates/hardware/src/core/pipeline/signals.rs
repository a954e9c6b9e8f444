//! Pipeline control signals.
//!
//! This module defines the control bundle produced by the controller in decode
//! and the narrower projections of it carried by later latches. It provides:
//! 1. **Mode Selectors:** ALU intent, operand sources, and destination source.
//! 2. **Control Bundle:** The full set of flags for one instruction.
//! 3. **Projections:** `MemCtrl` and `WbCtrl`, the subsets that survive past execute.

use serde::Serialize;

/// Coarse ALU intent chosen by the controller; refined by funct3/funct7 in execute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum AluIntent {
    /// Address or offset addition (loads, stores, JALR, LUI, AUIPC).
    #[default]
    Add,
    /// Branch comparison; the ALU result is unused.
    Sub,
    /// Register-register operation selected by funct3 and funct7.
    RType,
    /// Register-immediate operation selected by funct3 (and funct7 for shifts).
    IType,
}

impl AluIntent {
    /// Two-bit encoding used in the debug snapshot.
    pub const fn code(self) -> u32 {
        match self {
            Self::Add => 0,
            Self::Sub => 1,
            Self::RType => 2,
            Self::IType => 3,
        }
    }

    /// Inverse of [`AluIntent::code`]; only the low two bits are consulted.
    pub const fn from_code(code: u32) -> Self {
        match code & 0b11 {
            0 => Self::Add,
            1 => Self::Sub,
            2 => Self::RType,
            _ => Self::IType,
        }
    }
}

/// Source of ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum AluSrc {
    /// Forwarded rs2 value.
    #[default]
    Reg,
    /// Sign-extended immediate.
    Imm,
}

/// Source of ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum OpASrc {
    /// Forwarded rs1 value.
    #[default]
    Reg,
    /// The instruction's own PC (AUIPC).
    Pc,
    /// Constant zero (LUI).
    Zero,
}

impl OpASrc {
    /// Two-bit encoding used in the debug snapshot.
    pub const fn code(self) -> u32 {
        match self {
            Self::Reg => 0,
            Self::Pc => 1,
            Self::Zero => 2,
        }
    }

    /// Inverse of [`OpASrc::code`]; the unused code 3 maps to `Reg`.
    pub const fn from_code(code: u32) -> Self {
        match code & 0b11 {
            1 => Self::Pc,
            2 => Self::Zero,
            _ => Self::Reg,
        }
    }
}

/// Value written to `rd` at writeback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum RdSource {
    /// ALU result.
    #[default]
    Alu,
    /// Return address (JAL, JALR).
    PcPlus4,
    /// Loaded data.
    Mem,
}

/// Control bundle for one instruction, derived from its opcode alone.
///
/// The all-false default is the bubble: no register write, no memory access,
/// no flow change. Unrecognized opcodes decode to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ControlBundle {
    /// Halt-class instruction; sticky once decoded.
    pub is_halt: bool,
    /// Conditional branch.
    pub is_branch: bool,
    /// JAL.
    pub is_jal: bool,
    /// JALR.
    pub is_jalr: bool,
    /// Store to data memory.
    pub mem_write: bool,
    /// Load from data memory.
    pub mem_read: bool,
    /// Write `rd` at writeback.
    pub reg_write: bool,
    /// Writeback value selector.
    pub rd_src: RdSource,
    /// Coarse ALU operation.
    pub alu_intent: AluIntent,
    /// ALU operand B selector.
    pub alu_src: AluSrc,
    /// ALU operand A selector.
    pub a_src: OpASrc,
}

impl ControlBundle {
    /// The no-op bundle inserted as a bubble.
    pub const NOP: Self = Self {
        is_halt: false,
        is_branch: false,
        is_jal: false,
        is_jalr: false,
        mem_write: false,
        mem_read: false,
        reg_write: false,
        rd_src: RdSource::Alu,
        alu_intent: AluIntent::Add,
        alu_src: AluSrc::Reg,
        a_src: OpASrc::Reg,
    };

    /// A bubble that keeps this bundle's halt flag and nothing else.
    ///
    /// Stalls replace the decoded bundle with a bubble, but a halt flag that has
    /// entered the pipeline is never dropped.
    #[must_use]
    pub const fn to_bubble(self) -> Self {
        Self {
            is_halt: self.is_halt,
            ..Self::NOP
        }
    }

    /// Returns `true` if this bundle changes no architectural state.
    pub const fn is_nop(&self) -> bool {
        !(self.reg_write
            || self.mem_write
            || self.mem_read
            || self.is_branch
            || self.is_jal
            || self.is_jalr
            || self.is_halt)
    }

    /// The subset of signals carried into EX/MEM.
    pub const fn mem_ctrl(&self) -> MemCtrl {
        MemCtrl {
            is_halt: self.is_halt,
            rd_from_mem: matches!(self.rd_src, RdSource::Mem),
            mem_read: self.mem_read,
            mem_write: self.mem_write,
            reg_write: self.reg_write,
        }
    }
}

/// Control signals carried by the EX/MEM latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemCtrl {
    /// Halt flag, carried unchanged.
    pub is_halt: bool,
    /// Writeback selects loaded data instead of the execute result.
    pub rd_from_mem: bool,
    /// Load from data memory in this stage.
    pub mem_read: bool,
    /// Store to data memory in this stage.
    pub mem_write: bool,
    /// Write `rd` at writeback.
    pub reg_write: bool,
}

impl MemCtrl {
    /// The subset of signals carried into MEM/WB.
    pub const fn wb_ctrl(&self) -> WbCtrl {
        WbCtrl {
            is_halt: self.is_halt,
            rd_from_mem: self.rd_from_mem,
            reg_write: self.reg_write,
        }
    }
}

/// Control signals carried by the MEM/WB latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WbCtrl {
    /// Halt flag; reaching this latch means the core has halted.
    pub is_halt: bool,
    /// Write back the loaded data instead of the execute result.
    pub rd_from_mem: bool,
    /// Write `rd` at writeback.
    pub reg_write: bool,
}
