//! Pipeline state snapshots for debug tooling.
//!
//! A `PipelineSnapshot` is an immutable copy of the register file, the four
//! latches, and the last tick's hazard status. It serializes to a flat layout of
//! 50 little-endian words, in this order:
//!
//! | Words  | Content                                             |
//! |--------|-----------------------------------------------------|
//! | 0-31   | `x0`-`x31`                                          |
//! | 32     | hazard status word                                  |
//! | 33-35  | IF/ID: pc, inst, pc+4                               |
//! | 36-41  | ID/EX: control, pc, rs1 data, rs2 data, imm, fields |
//! | 42-45  | EX/MEM: control, pc, store data, alu result         |
//! | 46-49  | MEM/WB: control, pc, exec data, mem data            |
//!
//! Instruction words past IF/ID are not part of the layout; a snapshot rebuilt
//! from words has `inst == 0` in ID/EX, EX/MEM, and MEM/WB.

use serde::Serialize;

use crate::common::constants::{NUM_REGS, SNAPSHOT_WORDS};
use crate::core::pipeline::hazards::HazardStatus;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::signals::{
    AluIntent, AluSrc, ControlBundle, MemCtrl, OpASrc, RdSource, WbCtrl,
};
use crate::isa::instruction::{FUNCT3_MASK, FUNCT7_MASK, REG_MASK};

const HAZARD_WORD: usize = NUM_REGS;
const IF_ID_BASE: usize = HAZARD_WORD + 1;
const ID_EX_BASE: usize = IF_ID_BASE + 3;
const EX_MEM_BASE: usize = ID_EX_BASE + 6;
const MEM_WB_BASE: usize = EX_MEM_BASE + 4;

#[inline]
const fn bit(word: u32, n: u32) -> bool {
    (word >> n) & 1 == 1
}

#[inline]
const fn reg_field(word: u32, shift: u32) -> usize {
    ((word >> shift) & REG_MASK) as usize
}

/// Copy of the whole pipeline state at a tick boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PipelineSnapshot {
    /// Register file contents, `x0` included.
    pub regs: [u32; NUM_REGS],
    /// Hazard handling of the most recent tick.
    pub hazard: HazardStatus,
    /// IF/ID latch.
    pub if_id: IfId,
    /// ID/EX latch.
    pub id_ex: IdEx,
    /// EX/MEM latch.
    pub ex_mem: ExMem,
    /// MEM/WB latch.
    pub mem_wb: MemWb,
}

impl PipelineSnapshot {
    /// Serializes to the flat word layout.
    pub fn to_words(&self) -> [u32; SNAPSHOT_WORDS] {
        let mut w = [0u32; SNAPSHOT_WORDS];
        w[..NUM_REGS].copy_from_slice(&self.regs);
        w[HAZARD_WORD] = self.hazard.to_word();

        w[IF_ID_BASE] = self.if_id.pc;
        w[IF_ID_BASE + 1] = self.if_id.inst;
        w[IF_ID_BASE + 2] = self.if_id.pc_plus4;

        let id_ex = &self.id_ex;
        w[ID_EX_BASE] = pack_id_ex_ctrl(&id_ex.ctrl);
        w[ID_EX_BASE + 1] = id_ex.pc;
        w[ID_EX_BASE + 2] = id_ex.rs1_data;
        w[ID_EX_BASE + 3] = id_ex.rs2_data;
        w[ID_EX_BASE + 4] = id_ex.imm;
        w[ID_EX_BASE + 5] = (id_ex.funct7 & FUNCT7_MASK)
            | ((id_ex.funct3 & FUNCT3_MASK) << 7)
            | ((id_ex.rd as u32 & REG_MASK) << 10)
            | ((id_ex.rs2 as u32 & REG_MASK) << 15)
            | ((id_ex.rs1 as u32 & REG_MASK) << 20);

        let ex_mem = &self.ex_mem;
        let c = &ex_mem.ctrl;
        w[EX_MEM_BASE] = (ex_mem.funct3 & FUNCT3_MASK)
            | ((ex_mem.rd as u32 & REG_MASK) << 3)
            | ((c.is_halt as u32) << 8)
            | ((c.rd_from_mem as u32) << 9)
            | ((c.mem_read as u32) << 10)
            | ((c.mem_write as u32) << 11)
            | ((c.reg_write as u32) << 12);
        w[EX_MEM_BASE + 1] = ex_mem.pc;
        w[EX_MEM_BASE + 2] = ex_mem.store_data;
        w[EX_MEM_BASE + 3] = ex_mem.alu_result;

        let mem_wb = &self.mem_wb;
        let c = &mem_wb.ctrl;
        w[MEM_WB_BASE] = (mem_wb.rd as u32 & REG_MASK)
            | ((c.is_halt as u32) << 5)
            | ((c.rd_from_mem as u32) << 6)
            | ((c.reg_write as u32) << 7);
        w[MEM_WB_BASE + 1] = mem_wb.pc;
        w[MEM_WB_BASE + 2] = mem_wb.exec_data;
        w[MEM_WB_BASE + 3] = mem_wb.mem_data;
        w
    }

    /// Serializes to little-endian bytes (200 bytes).
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_words()
            .iter()
            .flat_map(|word| word.to_le_bytes())
            .collect()
    }

    /// Rebuilds a snapshot from the flat word layout.
    pub fn from_words(w: &[u32; SNAPSHOT_WORDS]) -> Self {
        let mut regs = [0u32; NUM_REGS];
        regs.copy_from_slice(&w[..NUM_REGS]);

        let meta = w[ID_EX_BASE + 5];
        let id_ex = IdEx {
            ctrl: unpack_id_ex_ctrl(w[ID_EX_BASE]),
            pc: w[ID_EX_BASE + 1],
            inst: 0,
            rs1_data: w[ID_EX_BASE + 2],
            rs2_data: w[ID_EX_BASE + 3],
            imm: w[ID_EX_BASE + 4],
            rs1: reg_field(meta, 20),
            rs2: reg_field(meta, 15),
            rd: reg_field(meta, 10),
            funct3: (meta >> 7) & FUNCT3_MASK,
            funct7: meta & FUNCT7_MASK,
        };

        let c = w[EX_MEM_BASE];
        let ex_mem = ExMem {
            ctrl: MemCtrl {
                is_halt: bit(c, 8),
                rd_from_mem: bit(c, 9),
                mem_read: bit(c, 10),
                mem_write: bit(c, 11),
                reg_write: bit(c, 12),
            },
            pc: w[EX_MEM_BASE + 1],
            inst: 0,
            store_data: w[EX_MEM_BASE + 2],
            alu_result: w[EX_MEM_BASE + 3],
            rd: reg_field(c, 3),
            funct3: c & FUNCT3_MASK,
        };

        let c = w[MEM_WB_BASE];
        let mem_wb = MemWb {
            ctrl: WbCtrl {
                is_halt: bit(c, 5),
                rd_from_mem: bit(c, 6),
                reg_write: bit(c, 7),
            },
            pc: w[MEM_WB_BASE + 1],
            inst: 0,
            exec_data: w[MEM_WB_BASE + 2],
            mem_data: w[MEM_WB_BASE + 3],
            rd: reg_field(c, 0),
        };

        Self {
            regs,
            hazard: HazardStatus::from_word(w[HAZARD_WORD]),
            if_id: IfId {
                pc: w[IF_ID_BASE],
                inst: w[IF_ID_BASE + 1],
                pc_plus4: w[IF_ID_BASE + 2],
            },
            id_ex,
            ex_mem,
            mem_wb,
        }
    }

    /// Rebuilds a snapshot from little-endian bytes.
    ///
    /// # Returns
    ///
    /// `None` unless `bytes` is exactly 200 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != SNAPSHOT_WORDS * 4 {
            return None;
        }
        let mut words = [0u32; SNAPSHOT_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Some(Self::from_words(&words))
    }
}

/// Bit 0 halt, 1 jalr, 2 jal, 3 branch, 4 rd from memory, 6:5 ALU intent,
/// 7 operand B immediate, 8 mem read, 9 mem write, 10 reg write, 12:11 operand A source.
const fn pack_id_ex_ctrl(c: &ControlBundle) -> u32 {
    (c.is_halt as u32)
        | ((c.is_jalr as u32) << 1)
        | ((c.is_jal as u32) << 2)
        | ((c.is_branch as u32) << 3)
        | ((matches!(c.rd_src, RdSource::Mem) as u32) << 4)
        | (c.alu_intent.code() << 5)
        | ((matches!(c.alu_src, AluSrc::Imm) as u32) << 7)
        | ((c.mem_read as u32) << 8)
        | ((c.mem_write as u32) << 9)
        | ((c.reg_write as u32) << 10)
        | (c.a_src.code() << 11)
}

const fn unpack_id_ex_ctrl(w: u32) -> ControlBundle {
    let is_jalr = bit(w, 1);
    let is_jal = bit(w, 2);
    let rd_src = if bit(w, 4) {
        RdSource::Mem
    } else if is_jal || is_jalr {
        RdSource::PcPlus4
    } else {
        RdSource::Alu
    };
    ControlBundle {
        is_halt: bit(w, 0),
        is_branch: bit(w, 3),
        is_jal,
        is_jalr,
        mem_write: bit(w, 9),
        mem_read: bit(w, 8),
        reg_write: bit(w, 10),
        rd_src,
        alu_intent: AluIntent::from_code(w >> 5),
        alu_src: if bit(w, 7) { AluSrc::Imm } else { AluSrc::Reg },
        a_src: OpASrc::from_code(w >> 11),
    }
}
