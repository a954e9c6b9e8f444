//! Core tick engine.
//!
//! This module owns the architectural and pipeline state and advances it one
//! tick at a time. It performs:
//! 1. **Evaluation:** Every stage runs against last tick's latches; nothing is mutated.
//! 2. **Next-State Selection:** PC and IF/ID hold, flush, or load by flush > stall > load.
//! 3. **Commit:** Register write, data-memory write, then all latches and the PC at once.
//! 4. **External Control:** `Freeze` suppresses a tick; `Reset` zeroes PC and latches.
//!
//! Halt is sticky. Once a halt-class instruction is decoded, the PC and IF/ID
//! hold forever while older instructions drain; when the flag reaches MEM/WB the
//! core is halted and further `Run` ticks change nothing.

use serde::Serialize;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::hazards::{HazardStatus, StageWrite};
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, LatchAction, MemWb};
use crate::core::pipeline::snapshot::PipelineSnapshot;
use crate::core::pipeline::stages::decode::{BypassPorts, BypassValues};
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::disasm::disassemble;
use crate::soc::traits::MemoryPort;
use crate::stats::SimStats;

/// External control applied to one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TickControl {
    /// Advance the pipeline normally.
    #[default]
    Run,
    /// Leave all state untouched (the memory bus belongs to someone else).
    Freeze,
    /// Zero the PC and every latch and leave the halted state. Registers are kept.
    Reset,
}

/// Position of the core in the halt state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HaltState {
    /// No halt flag anywhere in the pipeline.
    Running,
    /// A halt flag is in flight; fetch is frozen while older instructions drain.
    Draining,
    /// The halt flag has reached MEM/WB. Terminal until reset.
    Halted,
}

/// A single in-order RV32I core with a five-stage pipeline.
#[derive(Clone, Debug, Default)]
pub struct Core {
    pc: u32,
    regs: Gpr,
    if_id: IfId,
    id_ex: IdEx,
    ex_mem: ExMem,
    mem_wb: MemWb,
    hazard: HazardStatus,
    stats: SimStats,
    trace: bool,
}

impl Core {
    /// Creates a core at reset: PC 0, zeroed registers, all latches bubbles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a core with tracing taken from the configuration.
    pub fn with_config(config: &Config) -> Self {
        Self {
            trace: config.general.trace_pipeline,
            ..Self::default()
        }
    }

    /// Advances the core by one tick.
    ///
    /// # Arguments
    ///
    /// * `mem` - Instruction and data memory, borrowed for this tick only.
    /// * `control` - External run/freeze/reset request.
    pub fn tick<M: MemoryPort + ?Sized>(&mut self, mem: &mut M, control: TickControl) {
        match control {
            TickControl::Run => self.step(mem),
            TickControl::Freeze => self.stats.frozen_cycles += 1,
            TickControl::Reset => self.reset(),
        }
    }

    fn reset(&mut self) {
        self.pc = 0;
        self.if_id = IfId::bubble();
        self.id_ex = IdEx::bubble();
        self.ex_mem = ExMem::bubble();
        self.mem_wb = MemWb::bubble();
        self.hazard = HazardStatus::default();
        tracing::debug!("pipeline reset");
    }

    fn step<M: MemoryPort + ?Sized>(&mut self, mem: &mut M) {
        if self.halted() {
            return;
        }

        // Back half of the pipeline: each stage reads only last tick's latch.
        let ex_next = execute_stage(&self.id_ex);
        let mem_out = mem_stage(&self.ex_mem, mem);
        let wb = wb_stage(&self.mem_wb);

        let ports = BypassPorts {
            ex: StageWrite {
                rd: self.id_ex.rd,
                reg_write: self.id_ex.ctrl.reg_write,
                is_load: self.id_ex.ctrl.mem_read,
            },
            mem: StageWrite {
                rd: self.ex_mem.rd,
                reg_write: self.ex_mem.ctrl.reg_write,
                is_load: self.ex_mem.ctrl.mem_read,
            },
            wb: StageWrite {
                rd: self.mem_wb.rd,
                reg_write: self.mem_wb.ctrl.reg_write,
                is_load: self.mem_wb.ctrl.rd_from_mem,
            },
        };
        let values = BypassValues {
            ex: ex_next.alu_result,
            mem: mem_out.mem_wb.rd_value(),
            wb: self.mem_wb.rd_value(),
        };
        let dec = decode_stage(&self.if_id, &self.regs, ports, values);

        let halt_active = dec.id_ex.is_halt()
            || self.id_ex.is_halt()
            || self.ex_mem.is_halt()
            || self.mem_wb.is_halt();
        let redirect = dec.flow.redirect;
        let hold_front = dec.load_use || halt_active;

        let next_pc = if hold_front {
            self.pc
        } else if redirect {
            dec.flow.target
        } else {
            self.pc.wrapping_add(INSTRUCTION_SIZE)
        };
        let fetched = fetch_stage(self.pc, mem);
        let if_id_action = LatchAction::resolve(redirect, hold_front);
        let next_if_id = if_id_action.apply(&self.if_id, fetched);

        if self.tracing() {
            tracing::trace!(
                pc = format_args!("{:#010x}", self.if_id.pc),
                inst = %disassemble(self.if_id.inst),
                load_use = dec.load_use,
                redirect,
                target = format_args!("{:#010x}", dec.flow.target),
                halt_active,
                rs1 = ?dec.rs1_source,
                rs2 = ?dec.rs2_source,
                "decode"
            );
        }

        // Commit. Register and memory writes first, then every latch together.
        if let Some((rd, value)) = wb {
            self.regs.write(rd, value);
            tracing::debug!(rd, value = format_args!("{value:#010x}"), "writeback");
        }
        if let Some(store) = mem_out.store {
            mem.data_write(store.addr, store.lane.mask, store.lane.data);
        }

        self.hazard = HazardStatus {
            pc_write_enable: !hold_front,
            if_id_write_enable: if_id_action != LatchAction::Hold,
            control_hazard: redirect,
            load_use_hazard: dec.load_use,
            rs1_source: dec.rs1_source,
            rs2_source: dec.rs2_source,
            halted: mem_out.mem_wb.is_halt(),
        };

        self.stats.cycles += 1;
        self.stats.load_use_stalls += u64::from(dec.load_use);
        self.stats.control_flushes += u64::from(redirect);
        self.stats.instructions_retired += u64::from(mem_out.mem_wb.inst != 0);

        self.pc = next_pc;
        self.if_id = next_if_id;
        self.id_ex = dec.id_ex;
        self.ex_mem = ex_next;
        self.mem_wb = mem_out.mem_wb;

        if self.halted() {
            tracing::info!(
                cycles = self.stats.cycles,
                retired = self.stats.instructions_retired,
                "core halted"
            );
        }
    }

    #[inline]
    const fn tracing(&self) -> bool {
        cfg!(feature = "always-trace") || self.trace
    }

    /// Returns `true` once the halt flag has reached MEM/WB.
    pub const fn halted(&self) -> bool {
        self.mem_wb.ctrl.is_halt
    }

    /// Current position in the halt state machine.
    pub const fn halt_state(&self) -> HaltState {
        if self.halted() {
            HaltState::Halted
        } else if self.id_ex.ctrl.is_halt || self.ex_mem.ctrl.is_halt {
            HaltState::Draining
        } else {
            HaltState::Running
        }
    }

    /// Reads a register through the debug port.
    pub const fn debug_read(&self, idx: usize) -> u32 {
        self.regs.debug_read(idx)
    }

    /// Current program counter.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// The register file.
    pub const fn regs(&self) -> &Gpr {
        &self.regs
    }

    /// IF/ID latch contents.
    pub const fn if_id(&self) -> &IfId {
        &self.if_id
    }

    /// ID/EX latch contents.
    pub const fn id_ex(&self) -> &IdEx {
        &self.id_ex
    }

    /// EX/MEM latch contents.
    pub const fn ex_mem(&self) -> &ExMem {
        &self.ex_mem
    }

    /// MEM/WB latch contents.
    pub const fn mem_wb(&self) -> &MemWb {
        &self.mem_wb
    }

    /// Hazard status recorded by the most recent `Run` tick.
    pub const fn hazard(&self) -> &HazardStatus {
        &self.hazard
    }

    /// Accumulated statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Copies the full pipeline state.
    pub fn snapshot(&self) -> PipelineSnapshot {
        PipelineSnapshot {
            regs: self.regs.snapshot(),
            hazard: self.hazard,
            if_id: self.if_id,
            id_ex: self.id_ex,
            ex_mem: self.ex_mem,
            mem_wb: self.mem_wb,
        }
    }
}
