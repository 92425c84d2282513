//! FPSCR transfer and control instructions.
//!
//! None of these instructions write FEX or VX directly. Whatever the source operand
//! holds in those positions is discarded and both summaries are recomputed from the
//! cause and enable bits afterwards.

use crate::common::ExecResult;
use crate::core::Cpu;
use crate::core::arch::fpscr::{CLEARABLE, SUMMARY};
use crate::core::units::fpu::nan_handling::{NAN_BOX, box_u32_601};
use crate::core::units::fpu::result_flags::mirror_to_cr1;
use crate::isa::FpDecoded;

/// Returns the FPSCR mask selected by an `mtfsf` field mask.
///
/// Bit 7 of `fm` selects field 0 (the most significant nibble).
pub fn field_mask(fm: u8) -> u32 {
    if fm == 0xFF {
        return u32::MAX;
    }
    let fm = u32::from(fm);
    (0..8u32)
        .filter(|&i| fm & (0x80 >> i) != 0)
        .fold(0, |mask, i| mask | (0xF000_0000u32 >> (4 * i)))
}

/// Mask of FPSCR field `field` (0-7).
#[inline]
fn nibble_mask(field: usize) -> u32 {
    0xF000_0000 >> (4 * (field & 7))
}

impl Cpu {
    /// `mffs`: copies the FPSCR into the low word of `frD`, upper word `0xFFF8_0000`.
    pub fn mffs(&mut self, ops: &FpDecoded) -> ExecResult {
        let bits = NAN_BOX | u64::from(self.fpscr.read());
        self.store_fp_bits(ops, bits);
        Ok(())
    }

    /// `mffs` as implemented by the 601: upper word padded with ones.
    pub fn mffs_601(&mut self, ops: &FpDecoded) -> ExecResult {
        let bits = box_u32_601(self.fpscr.read());
        self.store_fp_bits(ops, bits);
        Ok(())
    }

    /// `mtfsf`: copies the low word of `frB` into the FPSCR fields selected by `FM`.
    pub fn mtfsf(&mut self, ops: &FpDecoded) -> ExecResult {
        let mask = field_mask(ops.fm) & !SUMMARY;
        let src = self.regs.read_f(ops.rb) as u32;
        self.fpscr.write((self.fpscr.read() & !mask) | (src & mask));
        self.fpscr.update_summaries();
        mirror_to_cr1(&mut self.cr, &self.fpscr, ops.record);
        Ok(())
    }

    /// `mtfsfi`: writes the 4-bit immediate into FPSCR field `crfD`.
    ///
    /// Field 0 holds FX, FEX, VX and OX; writes to it leave the FPSCR unchanged.
    pub fn mtfsfi(&mut self, ops: &FpDecoded) -> ExecResult {
        if ops.crfd != 0 {
            let shift = 4 * ops.crfd as u32;
            let mask = nibble_mask(ops.crfd);
            let value = ((ops.imm & 0xF) << 28) >> shift;
            self.fpscr.write((self.fpscr.read() & !mask) | (value & mask));
            self.fpscr.update_summaries();
        }
        mirror_to_cr1(&mut self.cr, &self.fpscr, ops.record);
        Ok(())
    }

    /// `mtfsb0`: clears FPSCR bit `crbD`. Bits 1 (FEX) and 2 (VX) are ignored.
    pub fn mtfsb0(&mut self, ops: &FpDecoded) -> ExecResult {
        if let Some(bit) = Self::writable_bit(ops.rd) {
            self.fpscr.clear(bit);
            self.fpscr.update_summaries();
        }
        mirror_to_cr1(&mut self.cr, &self.fpscr, ops.record);
        Ok(())
    }

    /// `mtfsb1`: sets FPSCR bit `crbD`. Bits 1 (FEX) and 2 (VX) are ignored.
    pub fn mtfsb1(&mut self, ops: &FpDecoded) -> ExecResult {
        if let Some(bit) = Self::writable_bit(ops.rd) {
            self.fpscr.set(bit);
            self.fpscr.update_summaries();
        }
        mirror_to_cr1(&mut self.cr, &self.fpscr, ops.record);
        Ok(())
    }

    fn writable_bit(crbd: usize) -> Option<u32> {
        let bit = 0x8000_0000u32 >> (crbd & 31);
        (bit & SUMMARY == 0).then_some(bit)
    }

    /// `mcrfs`: copies FPSCR field `crfS` into CR field `crfD`, then clears the
    /// exception bits of that FPSCR field.
    pub fn mcrfs(&mut self, ops: &FpDecoded) -> ExecResult {
        let shift = 28 - 4 * (ops.crfs as u32 & 7);
        let nibble = (self.fpscr.read() >> shift) & 0xF;
        self.cr.set_field(ops.crfd, nibble);

        self.fpscr.clear(nibble_mask(ops.crfs) & CLEARABLE);
        self.fpscr.update_summaries();
        Ok(())
    }
}
