//! Floating-point arithmetic instructions.
//!
//! Every arithmetic instruction follows the same sequence:
//! 1. **Classify:** Run the invalid-operation table for the operation class.
//! 2. **Compute:** Evaluate on the host FPU, which rounds in the guest's RN mode.
//! 3. **Narrow:** Single-precision forms round the result to `f32` and widen it back.
//! 4. **Store:** Write the destination FPR, then derive FPRF from the stored value.
//! 5. **Record:** Mirror the FPSCR summary into CR1 for record forms.
//!
//! Moves, sign manipulation and select skip steps 1 and 4's FPRF update.

use crate::common::ExecResult;
use crate::core::Cpu;
use crate::core::arch::fpscr;
use crate::core::units::fpu::exception_flags::{FpOpKind, classify_invalid};
use crate::core::units::fpu::nan_handling::is_snan_bits;
use crate::core::units::fpu::result_flags::{classify_result, mirror_to_cr1};
use crate::isa::FpDecoded;

/// Sign bit of a double.
const F64_SIGN_BIT: u64 = 0x8000_0000_0000_0000;

/// Rounds `val` to single precision when `single` is set.
#[inline]
fn narrow(val: f64, single: bool) -> f64 {
    if single { val as f32 as f64 } else { val }
}

impl Cpu {
    /// Stores an arithmetic result, updates FPRF and optionally CR1.
    pub(crate) fn store_fp_result(&mut self, ops: &FpDecoded, val: f64) {
        self.regs.write_f64(ops.rd, val);
        classify_result(&mut self.fpscr, val);
        mirror_to_cr1(&mut self.cr, &self.fpscr, ops.record);
    }

    /// Stores a raw bit pattern without touching FPRF.
    pub(crate) fn store_fp_bits(&mut self, ops: &FpDecoded, bits: u64) {
        self.regs.write_f(ops.rd, bits);
        mirror_to_cr1(&mut self.cr, &self.fpscr, ops.record);
    }

    fn fp_binary(
        &mut self,
        ops: &FpDecoded,
        kind: FpOpKind,
        second: usize,
        single: bool,
        op: fn(f64, f64) -> f64,
    ) -> ExecResult {
        let a = self.regs.read_f64(ops.ra);
        let b = self.regs.read_f64(second);
        classify_invalid(&mut self.fpscr, kind, a, b);
        self.store_fp_result(ops, narrow(op(a, b), single));
        Ok(())
    }

    fn fp_fused(
        &mut self,
        ops: &FpDecoded,
        kind: FpOpKind,
        single: bool,
        op: fn(f64, f64, f64) -> f64,
    ) -> ExecResult {
        let a = self.regs.read_f64(ops.ra);
        let b = self.regs.read_f64(ops.rb);
        let c = self.regs.read_f64(ops.rc);

        classify_invalid(&mut self.fpscr, FpOpKind::Mul, a, c);
        let fused = op(a, c, b);
        if b.is_nan() {
            classify_invalid(&mut self.fpscr, kind, b, fused);
        }

        self.store_fp_result(ops, narrow(fused, single));
        Ok(())
    }

    /// `fadd`: `frD = frA + frB`.
    pub fn fadd(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_binary(ops, FpOpKind::Add, ops.rb, false, |a, b| a + b)
    }

    /// `fsub`: `frD = frA - frB`.
    pub fn fsub(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_binary(ops, FpOpKind::Sub, ops.rb, false, |a, b| a - b)
    }

    /// `fmul`: `frD = frA * frC`.
    pub fn fmul(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_binary(ops, FpOpKind::Mul, ops.rc, false, |a, c| a * c)
    }

    /// `fdiv`: `frD = frA / frB`.
    pub fn fdiv(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_binary(ops, FpOpKind::Div, ops.rb, false, |a, b| a / b)
    }

    /// `fadds`: single-precision `frA + frB`.
    pub fn fadds(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_binary(ops, FpOpKind::Add, ops.rb, true, |a, b| a + b)
    }

    /// `fsubs`: single-precision `frA - frB`.
    pub fn fsubs(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_binary(ops, FpOpKind::Sub, ops.rb, true, |a, b| a - b)
    }

    /// `fmuls`: single-precision `frA * frC`.
    pub fn fmuls(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_binary(ops, FpOpKind::Mul, ops.rc, true, |a, c| a * c)
    }

    /// `fdivs`: single-precision `frA / frB`.
    pub fn fdivs(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_binary(ops, FpOpKind::Div, ops.rb, true, |a, b| a / b)
    }

    /// `fmadd`: `frD = frA * frC + frB`, single rounding.
    pub fn fmadd(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_fused(ops, FpOpKind::Add, false, |a, c, b| a.mul_add(c, b))
    }

    /// `fmsub`: `frD = frA * frC - frB`, single rounding.
    pub fn fmsub(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_fused(ops, FpOpKind::Sub, false, |a, c, b| a.mul_add(c, -b))
    }

    /// `fnmadd`: `frD = -(frA * frC + frB)`.
    pub fn fnmadd(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_fused(ops, FpOpKind::Add, false, |a, c, b| -a.mul_add(c, b))
    }

    /// `fnmsub`: `frD = -(frA * frC - frB)`.
    pub fn fnmsub(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_fused(ops, FpOpKind::Sub, false, |a, c, b| (-a).mul_add(c, b))
    }

    /// `fmadds`: single-precision fused multiply-add.
    pub fn fmadds(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_fused(ops, FpOpKind::Add, true, |a, c, b| a.mul_add(c, b))
    }

    /// `fmsubs`: single-precision fused multiply-subtract.
    pub fn fmsubs(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_fused(ops, FpOpKind::Sub, true, |a, c, b| a.mul_add(c, -b))
    }

    /// `fnmadds`: single-precision negated fused multiply-add.
    ///
    /// The negation is applied after narrowing, so it never affects rounding.
    pub fn fnmadds(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_fused(ops, FpOpKind::Add, true, |a, c, b| {
            -(a.mul_add(c, b) as f32 as f64)
        })
    }

    /// `fnmsubs`: single-precision negated fused multiply-subtract.
    pub fn fnmsubs(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_fused(ops, FpOpKind::Sub, true, |a, c, b| (-a).mul_add(c, b))
    }

    /// `fsqrt`: `frD = sqrt(frB)`.
    pub fn fsqrt(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_sqrt(ops, false)
    }

    /// `fsqrts`: single-precision square root.
    pub fn fsqrts(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_sqrt(ops, true)
    }

    fn fp_sqrt(&mut self, ops: &FpDecoded, single: bool) -> ExecResult {
        let b = self.regs.read_f64(ops.rb);
        let result = narrow(b.sqrt(), single);
        self.regs.write_f64(ops.rd, result);
        classify_invalid(&mut self.fpscr, FpOpKind::Sqrt, 0.0, b);
        classify_result(&mut self.fpscr, result);
        mirror_to_cr1(&mut self.cr, &self.fpscr, ops.record);
        Ok(())
    }

    /// `frsqrte`: reciprocal square-root estimate.
    ///
    /// Computes `1 / sqrt(frB)` exactly, so the result is more precise than the
    /// hardware's 5-bit estimate.
    pub fn frsqrte(&mut self, ops: &FpDecoded) -> ExecResult {
        let raw = self.regs.read_f(ops.rb);
        let b = f64::from_bits(raw);

        classify_invalid(&mut self.fpscr, FpOpKind::Sqrt, 0.0, b);
        if is_snan_bits(raw) {
            self.fpscr.set(fpscr::FX | fpscr::VXSNAN);
        } else if b == 0.0 {
            self.fpscr.set(fpscr::FX | fpscr::ZX);
        } else if b < 0.0 {
            self.fpscr.set(fpscr::FX | fpscr::VXSQRT);
        }
        self.fpscr.update_summaries();

        self.store_fp_result(ops, 1.0 / b.sqrt());
        Ok(())
    }

    /// `fres`: single-precision reciprocal estimate.
    pub fn fres(&mut self, ops: &FpDecoded) -> ExecResult {
        let b = self.regs.read_f64(ops.rb);
        let result = (1.0 / b) as f32 as f64;
        self.regs.write_f64(ops.rd, result);

        if b == 0.0 {
            self.fpscr.set(fpscr::ZX);
        } else if b.is_nan() {
            self.fpscr.set(fpscr::VXSNAN);
        } else if b.is_infinite() {
            self.fpscr.clear(fpscr::FR | fpscr::FI);
            self.fpscr.set(fpscr::VXSNAN);
        }
        self.fpscr.update_summaries();

        classify_result(&mut self.fpscr, result);
        mirror_to_cr1(&mut self.cr, &self.fpscr, ops.record);
        Ok(())
    }

    /// `fmr`: copies the raw bits of `frB` into `frD`.
    pub fn fmr(&mut self, ops: &FpDecoded) -> ExecResult {
        let bits = self.regs.read_f(ops.rb);
        self.store_fp_bits(ops, bits);
        Ok(())
    }

    /// `fabs`: clears the sign bit of `frB`.
    pub fn fabs(&mut self, ops: &FpDecoded) -> ExecResult {
        let bits = self.regs.read_f(ops.rb) & !F64_SIGN_BIT;
        self.store_fp_bits(ops, bits);
        Ok(())
    }

    /// `fnabs`: sets the sign bit of `frB`.
    pub fn fnabs(&mut self, ops: &FpDecoded) -> ExecResult {
        let bits = self.regs.read_f(ops.rb) | F64_SIGN_BIT;
        self.store_fp_bits(ops, bits);
        Ok(())
    }

    /// `fneg`: flips the sign bit of `frB`.
    pub fn fneg(&mut self, ops: &FpDecoded) -> ExecResult {
        let bits = self.regs.read_f(ops.rb) ^ F64_SIGN_BIT;
        self.store_fp_bits(ops, bits);
        Ok(())
    }

    /// `fsel`: `frD = frA >= -0.0 ? frC : frB`.
    ///
    /// Negative zero compares equal to zero, so `frA = -0.0` selects `frC`. A NaN in
    /// `frA` selects `frB`.
    pub fn fsel(&mut self, ops: &FpDecoded) -> ExecResult {
        let a = self.regs.read_f64(ops.ra);
        let chosen = if a >= -0.0 { ops.rc } else { ops.rb };
        let bits = self.regs.read_f(chosen);
        self.store_fp_bits(ops, bits);
        Ok(())
    }
}
