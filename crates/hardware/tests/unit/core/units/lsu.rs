//! Load/Store Lane Tests.
//!
//! Verifies byte-enable masks, lane alignment of store data, and sign/zero
//! extension of loaded lanes.

use rstest::rstest;
use rvpipe_core::core::units::lsu::{
    MemWidth, StoreLane, is_signed_load, load_extract, merge_bytes, store_lane,
};

#[rstest]
#[case(0b000, MemWidth::Byte, true)]
#[case(0b001, MemWidth::Half, true)]
#[case(0b010, MemWidth::Word, true)]
#[case(0b100, MemWidth::Byte, false)]
#[case(0b101, MemWidth::Half, false)]
fn funct3_width_and_sign(#[case] f3: u32, #[case] width: MemWidth, #[case] signed: bool) {
    assert_eq!(MemWidth::from_funct3(f3), width);
    assert_eq!(is_signed_load(f3), signed);
}

#[rstest]
#[case(0, 0b0001, 0x0000_00AB)]
#[case(1, 0b0010, 0x0000_AB00)]
#[case(2, 0b0100, 0x00AB_0000)]
#[case(3, 0b1000, 0xAB00_0000)]
fn byte_store_lanes(#[case] addr: u32, #[case] mask: u8, #[case] data: u32) {
    assert_eq!(
        store_lane(MemWidth::Byte, addr, 0x1234_56AB),
        StoreLane { mask, data }
    );
}

#[test]
fn half_and_word_store_lanes() {
    assert_eq!(
        store_lane(MemWidth::Half, 2, 0xFFFF_BEEF),
        StoreLane {
            mask: 0b1100,
            data: 0xBEEF_0000
        }
    );
    assert_eq!(
        store_lane(MemWidth::Word, 0, 0xDEAD_BEEF),
        StoreLane {
            mask: 0b1111,
            data: 0xDEAD_BEEF
        }
    );
}

#[rstest]
#[case(MemWidth::Byte, true, 3, 0xFFFF_FF80)]
#[case(MemWidth::Byte, false, 3, 0x0000_0080)]
#[case(MemWidth::Byte, true, 0, 0x0000_0001)]
#[case(MemWidth::Half, true, 2, 0xFFFF_80FF)]
#[case(MemWidth::Half, false, 2, 0x0000_80FF)]
#[case(MemWidth::Half, true, 0, 0x0000_7F01)]
#[case(MemWidth::Word, true, 0, 0x80FF_7F01)]
fn load_lanes(#[case] width: MemWidth, #[case] signed: bool, #[case] addr: u32, #[case] expected: u32) {
    assert_eq!(load_extract(width, signed, addr, 0x80FF_7F01), expected);
}

#[test]
fn merge_with_empty_mask_is_identity() {
    assert_eq!(merge_bytes(0x1234_5678, 0xFFFF_FFFF, 0), 0x1234_5678);
    assert_eq!(merge_bytes(0x1234_5678, 0xAABB_CCDD, 0b1111), 0xAABB_CCDD);
}
