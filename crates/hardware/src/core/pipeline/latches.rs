//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the payloads carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** One record per latch with typed data and metadata fields.
//! 2. **Update Rule:** `LatchAction` resolves flush > stall > load for each tick.
//! 3. **Halt Propagation:** Every latch past IF/ID carries the sticky halt flag.

use serde::Serialize;

use crate::core::pipeline::signals::{ControlBundle, MemCtrl, WbCtrl};
use crate::core::pipeline::traits::PipelineLatch;

/// IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct IfId {
    /// Program counter of the fetched instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Sequential successor address.
    pub pc_plus4: u32,
}

/// ID/EX latch (Decode to Execute).
///
/// Operand values were resolved through forwarding at decode time, so execute
/// consumes them without further bypassing.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct IdEx {
    /// Control bundle from the controller, or a bubble.
    pub ctrl: ControlBundle,
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding (0 for a bubble).
    pub inst: u32,
    /// Forwarded rs1 value.
    pub rs1_data: u32,
    /// Forwarded rs2 value.
    pub rs2_data: u32,
    /// Sign-extended immediate.
    pub imm: u32,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Destination register index.
    pub rd: usize,
    /// Minor opcode.
    pub funct3: u32,
    /// Function code.
    pub funct7: u32,
}

/// EX/MEM latch (Execute to Memory).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct ExMem {
    /// Memory-stage control signals.
    pub ctrl: MemCtrl,
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding (0 for a bubble).
    pub inst: u32,
    /// rs2 value to store.
    pub store_data: u32,
    /// Execute result: ALU output, or the return address for jumps.
    pub alu_result: u32,
    /// Destination register index.
    pub rd: usize,
    /// Access width and signedness selector.
    pub funct3: u32,
}

/// MEM/WB latch (Memory to Writeback).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct MemWb {
    /// Writeback control signals.
    pub ctrl: WbCtrl,
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding (0 for a bubble).
    pub inst: u32,
    /// Execute result passed through memory.
    pub exec_data: u32,
    /// Data returned by a load.
    pub mem_data: u32,
    /// Destination register index.
    pub rd: usize,
}

impl MemWb {
    /// Value that writeback commits to `rd`.
    #[inline]
    pub const fn rd_value(&self) -> u32 {
        if self.ctrl.rd_from_mem {
            self.mem_data
        } else {
            self.exec_data
        }
    }
}

impl PipelineLatch for IfId {
    fn is_bubble(&self) -> bool {
        self.inst == 0
    }

    fn is_halt(&self) -> bool {
        false
    }
}

impl PipelineLatch for IdEx {
    fn is_bubble(&self) -> bool {
        self.inst == 0 && self.ctrl.is_nop()
    }

    fn is_halt(&self) -> bool {
        self.ctrl.is_halt
    }
}

impl PipelineLatch for ExMem {
    fn is_bubble(&self) -> bool {
        self.inst == 0 && self.ctrl == MemCtrl::default()
    }

    fn is_halt(&self) -> bool {
        self.ctrl.is_halt
    }
}

impl PipelineLatch for MemWb {
    fn is_bubble(&self) -> bool {
        self.inst == 0 && self.ctrl == WbCtrl::default()
    }

    fn is_halt(&self) -> bool {
        self.ctrl.is_halt
    }
}

/// What a latch does on one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatchAction {
    /// Keep the current payload.
    Hold,
    /// Replace with a bubble.
    Flush,
    /// Take the newly computed payload.
    Load,
}

impl LatchAction {
    /// Resolves the action from the flush and stall requests, flush first.
    pub const fn resolve(flush: bool, stall: bool) -> Self {
        if flush {
            Self::Flush
        } else if stall {
            Self::Hold
        } else {
            Self::Load
        }
    }

    /// Computes the latch's next payload.
    ///
    /// # Arguments
    ///
    /// * `current` - The payload latched last tick.
    /// * `next` - The payload computed this tick by the upstream stage.
    pub fn apply<L: PipelineLatch>(self, current: &L, next: L) -> L {
        match self {
            Self::Hold => current.clone(),
            Self::Flush => L::bubble(),
            Self::Load => next,
        }
    }
}
