//! Floating-point comparisons.

use crate::common::ExecResult;
use crate::core::Cpu;
use crate::core::arch::cr::{CR_EQ, CR_GT, CR_LT, CR_SO};
use crate::core::arch::fpscr::FPCC_MASK;
use crate::isa::FpDecoded;

/// Shift that moves a CR nibble into the FPCC field.
const FPCC_SHIFT: u32 = 12;

/// Returns the 4-bit comparison code of `a` against `b`.
///
/// Unordered (`SO`) if either operand is a NaN, otherwise exactly one of LT, GT, EQ.
pub fn compare_code(a: f64, b: f64) -> u32 {
    if a.is_nan() || b.is_nan() {
        CR_SO
    } else if a < b {
        CR_LT
    } else if a > b {
        CR_GT
    } else {
        CR_EQ
    }
}

impl Cpu {
    fn fp_compare(&mut self, ops: &FpDecoded) {
        let a = self.regs.read_f64(ops.ra);
        let b = self.regs.read_f64(ops.rb);
        let code = compare_code(a, b);

        let bits = self.fpscr.read();
        self.fpscr.write((bits & !FPCC_MASK) | (code << FPCC_SHIFT));
        self.cr.set_field(ops.crfd, code);
    }

    /// `fcmpu`: unordered compare of `frA` and `frB` into FPCC and `crfD`.
    pub fn fcmpu(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_compare(ops);
        Ok(())
    }

    /// `fcmpo`: ordered compare of `frA` and `frB` into FPCC and `crfD`.
    ///
    /// Only the classification is modelled. The architected VXSNAN/VXVC flagging for
    /// signalling or unordered operands is not raised, so this behaves like `fcmpu`.
    pub fn fcmpo(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_compare(ops);
        Ok(())
    }
}
