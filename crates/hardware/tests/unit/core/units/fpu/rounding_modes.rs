//! Rounding-mode decoding and host rounding tests.
//!
//! The host-rounding tests use `TestContext::native()`, which drives the real FPU of
//! the test thread for the duration of each instruction.

use std::hint::black_box;

use ppcsim_core::core::arch::fpscr;
use ppcsim_core::core::units::fpu::RoundingMode;
use ppcsim_core::isa::ppcfp::xo;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::a_form;
use crate::common::harness::TestContext;

const ONE_PLUS_ULP: u64 = 0x3FF0_0000_0000_0001;
const ONE_MINUS_ULP: u64 = 0x3FEF_FFFF_FFFF_FFFF;

// ══════════════════════════════════════════════════════════
// 1. RN encoding
// ══════════════════════════════════════════════════════════

#[test]
fn encoding_round_trips() {
    for mode in RoundingMode::ALL {
        assert_eq!(RoundingMode::from_bits(mode.bits()), mode);
    }
}

#[test]
fn from_bits_reads_only_rn() {
    assert_eq!(
        RoundingMode::from_bits(fpscr::FX | fpscr::VE | 0b10),
        RoundingMode::TowardPosInf
    );
}

proptest! {
    #[test]
    fn directed_modes_bracket_the_value(x in -1.0e9f64..1.0e9) {
        let down = RoundingMode::TowardNegInf.round_to_i32(x);
        let up = RoundingMode::TowardPosInf.round_to_i32(x);
        let zero = RoundingMode::TowardZero.round_to_i32(x);
        let near = RoundingMode::Nearest.round_to_i32(x);

        prop_assert!(f64::from(down) <= x && x <= f64::from(up));
        prop_assert!(up - down <= 1);
        prop_assert!(zero == down || zero == up);
        prop_assert!(near == down || near == up);
    }
}

// ══════════════════════════════════════════════════════════
// 2. Host arithmetic follows RN
// ══════════════════════════════════════════════════════════

fn add_tiny(rn: u32, tiny: f64) -> u64 {
    let mut ctx = TestContext::native().with_fpscr(rn);
    ctx.set_f64(1, black_box(1.0));
    ctx.set_f64(2, black_box(tiny));
    ctx.run(a_form(xo::FADD, 3, 1, 0, 2)).unwrap();
    ctx.get_bits(3)
}

#[rstest]
#[case::nearest_up(0b00, 2f64.powi(-60), 1.0f64.to_bits())]
#[case::nearest_down(0b00, -(2f64.powi(-60)), 1.0f64.to_bits())]
#[case::toward_zero(0b01, 2f64.powi(-60), 1.0f64.to_bits())]
#[case::toward_zero_neg(0b01, -(2f64.powi(-60)), ONE_MINUS_ULP)]
#[case::upward(0b10, 2f64.powi(-60), ONE_PLUS_ULP)]
#[case::upward_neg(0b10, -(2f64.powi(-60)), 1.0f64.to_bits())]
#[case::downward(0b11, -(2f64.powi(-60)), ONE_MINUS_ULP)]
#[case::downward_pos(0b11, 2f64.powi(-60), 1.0f64.to_bits())]
fn fadd_rounds_in_guest_mode(#[case] rn: u32, #[case] tiny: f64, #[case] expected: u64) {
    assert_eq!(add_tiny(rn, tiny), expected);
}

#[test]
fn nearest_is_the_ieee_default() {
    let mut ctx = TestContext::native();
    ctx.set_f64(1, black_box(0.1));
    ctx.set_f64(2, black_box(0.2));
    ctx.run(a_form(xo::FADD, 3, 1, 0, 2)).unwrap();
    assert_eq!(ctx.get_f64(3), 0.300_000_000_000_000_04);
}

#[test]
fn mode_change_mid_stream_takes_effect() {
    let mut ctx = TestContext::native();
    ctx.set_f64(1, black_box(1.0));
    ctx.set_f64(2, black_box(2f64.powi(-60)));

    ctx.run(a_form(xo::FADD, 3, 1, 0, 2)).unwrap();
    assert_eq!(ctx.get_bits(3), 1.0f64.to_bits());

    // mtfsfi 7, 2: round toward +infinity
    ctx.run((63 << 26) | (7 << 23) | (2 << 12) | (xo::MTFSFI << 1)).unwrap();
    ctx.run(a_form(xo::FADD, 3, 1, 0, 2)).unwrap();
    assert_eq!(ctx.get_bits(3), ONE_PLUS_ULP);
}
