//! FPSCR transfer and control instruction tests.

use ppcsim_core::config::ProcessorModel;
use ppcsim_core::core::arch::fpscr;
use ppcsim_core::core::units::fpu::RoundingMode;
use ppcsim_core::isa::ppcfp::xo;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::{InstructionBuilder, x_form};
use crate::common::harness::{TestContext, ops};

/// `mtfsf FM, frB`.
fn mtfsf(fm: u8, rb: u32) -> u32 {
    (63 << 26) | (u32::from(fm) << 17) | (rb << 11) | (xo::MTFSF << 1)
}

/// `mtfsfi crfD, IMM`.
fn mtfsfi(crfd: u32, imm: u32) -> u32 {
    (63 << 26) | (crfd << 23) | (imm << 12) | (xo::MTFSFI << 1)
}

/// `mcrfs crfD, crfS`.
fn mcrfs(crfd: u32, crfs: u32) -> u32 {
    InstructionBuilder::new()
        .opcode(63)
        .rd(crfd << 2)
        .ra(crfs << 2)
        .xo10(xo::MCRFS)
        .build()
}

// ══════════════════════════════════════════════════════════
// 1. mffs
// ══════════════════════════════════════════════════════════

#[test]
fn mffs_boxes_fpscr() {
    let bits = fpscr::ZX | fpscr::FPCC_POS | fpscr::NI | 0b10;
    let mut ctx = TestContext::new().with_fpscr(bits);
    ctx.run(x_form(xo::MFFS, 5, 0, 0)).unwrap();
    assert_eq!(ctx.get_bits(5), 0xFFF8_0000_0000_0000 | u64::from(bits));
}

#[test]
fn mffs_on_601_pads_with_ones() {
    let mut ctx = TestContext::new().with_fpscr(fpscr::XE | fpscr::FX);
    ctx.cpu.model = ProcessorModel::Mpc601;
    ctx.run(x_form(xo::MFFS, 5, 0, 0)).unwrap();
    assert_eq!(ctx.get_bits(5), 0xFFFF_FFFF_8000_0008);
}

#[test]
fn mffs_leaves_fpscr_unchanged() {
    let mut ctx = TestContext::new().with_fpscr(fpscr::VXSNAN | fpscr::VX);
    ctx.cpu.mffs(&ops(1, 0, 0, 0)).unwrap();
    assert_eq!(ctx.fpscr(), fpscr::VXSNAN | fpscr::VX);
}

// ══════════════════════════════════════════════════════════
// 2. mtfsf
// ══════════════════════════════════════════════════════════

#[test]
fn mtfsf_all_fields() {
    let mut ctx = TestContext::new();
    ctx.set_bits(2, 0xFFF8_0000_0000_0000 | u64::from(fpscr::ZX | fpscr::ZE | 0b11));
    ctx.run(mtfsf(0xFF, 2)).unwrap();

    assert_eq!(
        ctx.fpscr(),
        fpscr::ZX | fpscr::ZE | 0b11 | fpscr::FEX,
        "FEX derived from ZX & ZE"
    );
    assert_eq!(ctx.cpu.fpscr.host_rounding_mode(), RoundingMode::TowardNegInf);
}

#[test]
fn mtfsf_cannot_force_summaries() {
    let mut ctx = TestContext::new();
    ctx.set_bits(2, u64::from(fpscr::FEX | fpscr::VX));
    ctx.cpu.mtfsf(&{
        let mut o = ops(0, 0, 2, 0);
        o.fm = 0xFF;
        o
    })
    .unwrap();
    assert_eq!(ctx.fpscr(), 0);
}

#[test]
fn mtfsf_derives_vx_from_causes() {
    let mut ctx = TestContext::new();
    ctx.set_bits(2, u64::from(fpscr::VXSNAN | fpscr::VE));
    ctx.run(mtfsf(0xFF, 2)).unwrap();
    assert!(ctx.cpu.fpscr.test(fpscr::VX));
    assert!(ctx.cpu.fpscr.test(fpscr::FEX));
}

#[test]
fn mtfsf_masks_unselected_fields() {
    let mut ctx = TestContext::new().with_fpscr(fpscr::OX | fpscr::VE);
    ctx.set_bits(2, u64::from(u32::MAX));
    // Field 7 only: XE, NI, RN.
    ctx.run(mtfsf(0x01, 2)).unwrap();

    assert_eq!(ctx.fpscr(), fpscr::OX | fpscr::VE | 0xF);
    assert_eq!(ctx.cpu.fpscr.host_rounding_mode(), RoundingMode::TowardNegInf);
}

#[test]
fn mtfsf_record_updates_cr1() {
    let mut ctx = TestContext::new();
    ctx.set_bits(2, u64::from(fpscr::FX | fpscr::OX));
    let inst = mtfsf(0x80, 2) | 1;
    ctx.run(inst).unwrap();
    assert_eq!(ctx.cpu.cr.field(1), 0b1001);
}

// ══════════════════════════════════════════════════════════
// 3. mtfsfi
// ══════════════════════════════════════════════════════════

#[test]
fn mtfsfi_field_zero_is_ignored() {
    let mut ctx = TestContext::new().with_fpscr(fpscr::XX);
    ctx.run(mtfsfi(0, 0xF)).unwrap();
    assert_eq!(ctx.fpscr(), fpscr::XX);
}

#[rstest]
#[case(0b00, RoundingMode::Nearest)]
#[case(0b01, RoundingMode::TowardZero)]
#[case(0b10, RoundingMode::TowardPosInf)]
#[case(0b11, RoundingMode::TowardNegInf)]
fn mtfsfi_field_seven_sets_rn(#[case] imm: u32, #[case] mode: RoundingMode) {
    let mut ctx = TestContext::new().with_fpscr(0b01);
    ctx.run(mtfsfi(7, imm)).unwrap();
    assert_eq!(ctx.cpu.fpscr.rounding_mode(), mode);
    assert_eq!(ctx.cpu.fpscr.host_rounding_mode(), mode);
}

#[test]
fn mtfsfi_places_nibble_in_its_field() {
    let mut ctx = TestContext::new();
    // Field 6 holds VE, OE, UE, ZE.
    ctx.run(mtfsfi(6, 0b1000)).unwrap();
    assert_eq!(ctx.fpscr(), fpscr::VE);
}

#[test]
fn mtfsfi_recomputes_fex() {
    let mut ctx = TestContext::new().with_fpscr(fpscr::ZX);
    ctx.run(mtfsfi(6, 0b0001)).unwrap();
    assert!(ctx.cpu.fpscr.test(fpscr::ZE | fpscr::FEX));
    assert_eq!(ctx.fpscr(), fpscr::ZX | fpscr::ZE | fpscr::FEX);
}

// ══════════════════════════════════════════════════════════
// 4. mtfsb0 / mtfsb1
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::fex(1)]
#[case::vx(2)]
fn mtfsb1_ignores_summary_bits(#[case] bit: u32) {
    let mut ctx = TestContext::new();
    ctx.run(x_form(xo::MTFSB1, bit, 0, 0)).unwrap();
    assert_eq!(ctx.fpscr(), 0);
}

#[test]
fn mtfsb0_ignores_summary_bits() {
    let mut ctx = TestContext::new().with_fpscr(fpscr::VXCVI | fpscr::VX | fpscr::VE | fpscr::FEX);
    ctx.run(x_form(xo::MTFSB0, 1, 0, 0)).unwrap();
    ctx.run(x_form(xo::MTFSB0, 2, 0, 0)).unwrap();
    assert!(ctx.cpu.fpscr.test(fpscr::VX));
    assert!(ctx.cpu.fpscr.test(fpscr::FEX));
}

#[test]
fn mtfsb1_enable_raises_fex() {
    let mut ctx = TestContext::new().with_fpscr(fpscr::VXCVI | fpscr::VX);
    // Bit 24 is VE.
    ctx.run(x_form(xo::MTFSB1, 24, 0, 0)).unwrap();
    assert!(ctx.cpu.fpscr.test(fpscr::VE));
    assert!(ctx.cpu.fpscr.test(fpscr::FEX));
}

#[test]
fn mtfsb_rounding_bits_reach_host() {
    let mut ctx = TestContext::new();
    ctx.run(x_form(xo::MTFSB1, 31, 0, 0)).unwrap();
    assert_eq!(ctx.cpu.fpscr.host_rounding_mode(), RoundingMode::TowardZero);
    ctx.run(x_form(xo::MTFSB1, 30, 0, 0)).unwrap();
    assert_eq!(ctx.cpu.fpscr.host_rounding_mode(), RoundingMode::TowardNegInf);
    ctx.run(x_form(xo::MTFSB0, 31, 0, 0)).unwrap();
    assert_eq!(ctx.cpu.fpscr.host_rounding_mode(), RoundingMode::TowardPosInf);
}

#[test]
fn mtfsb1_record_mirrors_ox() {
    let mut ctx = TestContext::new();
    let inst = x_form(xo::MTFSB1, 3, 0, 0) | 1;
    ctx.run(inst).unwrap();
    assert_eq!(ctx.fpscr(), fpscr::OX);
    assert_eq!(ctx.cpu.cr.field(1), 0b0001);
}

// ══════════════════════════════════════════════════════════
// 5. mcrfs
// ══════════════════════════════════════════════════════════

#[test]
fn mcrfs_copies_and_clears_exceptions() {
    let mut ctx = TestContext::new().with_fpscr(fpscr::ZX | fpscr::VXSNAN | fpscr::VX);
    ctx.run(mcrfs(4, 1)).unwrap();

    assert_eq!(ctx.cpu.cr.field(4), 0b0101);
    assert_eq!(ctx.fpscr(), 0, "VX recomputed after VXSNAN cleared");
}

#[test]
fn mcrfs_field_zero_keeps_derived_summaries() {
    let mut ctx = TestContext::new().with_fpscr(fpscr::FX | fpscr::OX | fpscr::VXCVI | fpscr::VE);
    ctx.cpu.fpscr.update_summaries();
    ctx.run(mcrfs(2, 0)).unwrap();

    assert_eq!(ctx.cpu.cr.field(2), 0xF);
    assert!(!ctx.cpu.fpscr.test(fpscr::FX | fpscr::OX));
    assert!(ctx.cpu.fpscr.test(fpscr::VX), "VXCVI still set");
    assert!(ctx.cpu.fpscr.test(fpscr::FEX));
}

#[test]
fn mcrfs_control_field_is_not_cleared() {
    let bits = fpscr::XE | fpscr::NI | 0b10;
    let mut ctx = TestContext::new().with_fpscr(bits);
    ctx.run(mcrfs(0, 7)).unwrap();

    assert_eq!(ctx.cpu.cr.field(0), 0xE);
    assert_eq!(ctx.fpscr(), bits);
}

proptest! {
    #[test]
    fn summaries_consistent_after_mtfsf(src in any::<u32>(), fm in any::<u8>(), start in any::<u32>()) {
        let mut ctx = TestContext::new().with_fpscr(start);
        ctx.cpu.fpscr.update_summaries();
        ctx.set_bits(2, u64::from(src));
        let mut o = ops(0, 0, 2, 0);
        o.fm = fm;
        ctx.cpu.mtfsf(&o).unwrap();

        let bits = ctx.fpscr();
        prop_assert_eq!(bits & fpscr::VX != 0, bits & fpscr::VX_CAUSES != 0);
        prop_assert_eq!(bits & fpscr::FEX != 0, bits & (bits << 22) & 0x3E00_0000 != 0);
    }
}
