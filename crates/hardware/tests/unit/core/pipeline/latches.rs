//! Latch Tests.
//!
//! Verifies flush > stall > load resolution, bubble identity, and that halt
//! survives conversion to a bubble.

use rvpipe_core::core::pipeline::latches::{ExMem, IdEx, IfId, LatchAction, MemWb};
use rvpipe_core::core::pipeline::signals::{ControlBundle, RdSource, WbCtrl};
use rvpipe_core::core::pipeline::traits::PipelineLatch;

fn payload(pc: u32) -> IfId {
    IfId {
        pc,
        inst: 0x0000_0013,
        pc_plus4: pc + 4,
    }
}

#[test]
fn resolution_priority() {
    assert_eq!(LatchAction::resolve(true, true), LatchAction::Flush);
    assert_eq!(LatchAction::resolve(true, false), LatchAction::Flush);
    assert_eq!(LatchAction::resolve(false, true), LatchAction::Hold);
    assert_eq!(LatchAction::resolve(false, false), LatchAction::Load);
}

#[test]
fn apply_each_action() {
    let current = payload(8);
    let next = payload(12);
    assert_eq!(LatchAction::Hold.apply(&current, next), current);
    assert_eq!(LatchAction::Load.apply(&current, next), next);
    assert_eq!(LatchAction::Flush.apply(&current, next), IfId::bubble());
}

#[test]
fn default_latches_are_bubbles() {
    assert!(IfId::bubble().is_bubble());
    assert!(IdEx::bubble().is_bubble());
    assert!(ExMem::bubble().is_bubble());
    assert!(MemWb::bubble().is_bubble());
    assert!(!IdEx::bubble().is_halt());
}

#[test]
fn bubble_keeps_halt_flag() {
    let ecall = ControlBundle {
        is_halt: true,
        ..ControlBundle::NOP
    };
    let load = ControlBundle {
        reg_write: true,
        mem_read: true,
        rd_src: RdSource::Mem,
        ..ControlBundle::NOP
    };
    assert!(ecall.to_bubble().is_halt);
    assert!(load.to_bubble().is_nop());
    assert_eq!(load.to_bubble(), ControlBundle::NOP);
}

#[test]
fn control_projects_through_latches() {
    let load = ControlBundle {
        reg_write: true,
        mem_read: true,
        rd_src: RdSource::Mem,
        ..ControlBundle::NOP
    };
    let mem = load.mem_ctrl();
    assert!(mem.mem_read && mem.rd_from_mem && mem.reg_write && !mem.mem_write);
    assert_eq!(
        mem.wb_ctrl(),
        WbCtrl {
            is_halt: false,
            rd_from_mem: true,
            reg_write: true
        }
    );
}

#[test]
fn writeback_value_selects_by_source() {
    let mut wb = MemWb {
        exec_data: 1,
        mem_data: 2,
        ..MemWb::default()
    };
    assert_eq!(wb.rd_value(), 1);
    wb.ctrl.rd_from_mem = true;
    assert_eq!(wb.rd_value(), 2);
}
