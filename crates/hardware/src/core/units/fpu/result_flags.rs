//! Result classification (FPRF) and CR1 mirroring.
//!
//! After an arithmetic result has been written to its destination register, the FPRF
//! field is rewritten from that value:
//!
//! | Result     | FPRF bits              |
//! |------------|------------------------|
//! | NaN        | C, FU                  |
//! | +∞         | FG, FU                 |
//! | −∞         | FL, FU                 |
//! | > 0        | FG                     |
//! | < 0        | FL                     |
//! | ±0         | FE                     |

use crate::core::arch::cr::ConditionRegister;
use crate::core::arch::fpscr::{self, Fpscr};

/// Returns the FPRF bits describing `val`.
pub fn fprf_bits(val: f64) -> u32 {
    if val.is_nan() {
        return fpscr::FPCC_FUNAN | fpscr::FPRCD;
    }
    let sign = if val > 0.0 {
        fpscr::FPCC_POS
    } else if val < 0.0 {
        fpscr::FPCC_NEG
    } else {
        fpscr::FPCC_ZERO
    };
    if val.is_infinite() {
        sign | fpscr::FPCC_FUNAN
    } else {
        sign
    }
}

/// Rewrites FPRF from the stored result `val`.
pub fn classify_result(fpscr: &mut Fpscr, val: f64) {
    fpscr.write((fpscr.read() & !fpscr::FPRF_MASK) | fprf_bits(val));
}

/// Copies FPSCR[FX, FEX, VX, OX] into CR1 when `record` is set.
#[inline]
pub fn mirror_to_cr1(cr: &mut ConditionRegister, fpscr: &Fpscr, record: bool) {
    if record {
        cr.mirror_fpscr(fpscr.read());
    }
}
