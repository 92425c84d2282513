//! Precision and integer conversions.
//!
//! `fctiw` and `fctiwz` share one state machine. NaN and out-of-range inputs raise an
//! invalid-convert condition: with VE clear a saturated sentinel is stored, with VE set
//! the instruction traps and leaves `frD` untouched.

use crate::common::{Exception, ExecResult};
use crate::core::Cpu;
use crate::core::arch::fpscr;
use crate::core::units::fpu::nan_handling::{
    CVT_MAX_SENTINEL, CVT_MIN_SENTINEL, box_i32, quiet_bit_clear,
};
use crate::core::units::fpu::result_flags::{classify_result, mirror_to_cr1};
use crate::core::units::fpu::rounding_modes::RoundingMode;
use crate::isa::FpDecoded;

/// Largest double that converts without overflow.
const I32_MAX_F64: f64 = i32::MAX as f64;
/// Smallest double that converts without overflow.
const I32_MIN_F64: f64 = i32::MIN as f64;

impl Cpu {
    /// `frsp`: rounds `frB` to single precision.
    pub fn frsp(&mut self, ops: &FpDecoded) -> ExecResult {
        let result = self.regs.read_f64(ops.rb) as f32 as f64;
        self.regs.write_f64(ops.rd, result);
        classify_result(&mut self.fpscr, result);
        mirror_to_cr1(&mut self.cr, &self.fpscr, ops.record);
        Ok(())
    }

    /// `fctiw`: converts `frB` to a 32-bit integer using the current RN mode.
    ///
    /// # Errors
    ///
    /// Returns [`Exception::FP_ENABLED`] for a NaN or out-of-range input while VE is set.
    pub fn fctiw(&mut self, ops: &FpDecoded) -> ExecResult {
        let mode = self.fpscr.rounding_mode();
        self.round_to_int(ops, mode)
    }

    /// `fctiwz`: converts `frB` to a 32-bit integer, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`Exception::FP_ENABLED`] for a NaN or out-of-range input while VE is set.
    pub fn fctiwz(&mut self, ops: &FpDecoded) -> ExecResult {
        self.round_to_int(ops, RoundingMode::TowardZero)
    }

    fn round_to_int(&mut self, ops: &FpDecoded, mode: RoundingMode) -> ExecResult {
        let raw = self.regs.read_f(ops.rb);
        let b = f64::from_bits(raw);

        let result = if b.is_nan() {
            let snan = if quiet_bit_clear(raw) { fpscr::VXSNAN } else { 0 };
            self.invalid_convert(snan)?;
            CVT_MIN_SENTINEL
        } else if b > I32_MAX_F64 || b < I32_MIN_F64 {
            self.invalid_convert(0)?;
            if b >= 0.0 { CVT_MAX_SENTINEL } else { CVT_MIN_SENTINEL }
        } else {
            box_i32(mode.round_to_i32(b))
        };

        self.store_fp_bits(ops, result);
        Ok(())
    }

    /// Flags an invalid integer conversion and traps if VE is enabled.
    fn invalid_convert(&mut self, extra: u32) -> ExecResult {
        self.fpscr.clear(fpscr::FR | fpscr::FI);
        self.fpscr.set(fpscr::VX | fpscr::VXCVI | extra);

        if self.fpscr.test(fpscr::VE) {
            self.fpscr.update_fex();
            tracing::debug!(
                fpscr = format_args!("{:#010x}", self.fpscr.read()),
                "invalid convert trapped"
            );
            return Err(Exception::FP_ENABLED);
        }
        Ok(())
    }
}
