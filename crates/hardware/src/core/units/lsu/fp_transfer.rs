//! Floating-point loads and stores.
//!
//! Single-precision transfers convert between the 32-bit memory image and the 64-bit
//! register format; double-precision transfers and `stfiwx` move bits verbatim. Update
//! forms write the effective address back to `rA` only after the access succeeded, so a
//! faulting access leaves every register unchanged.

use super::addressing::{AddrMode, Width, effective_address};
use crate::common::ExecResult;
use crate::core::Cpu;
use crate::isa::FpDecoded;

impl Cpu {
    fn fp_load(
        &mut self,
        ops: &FpDecoded,
        width: Width,
        mode: AddrMode,
        update: bool,
    ) -> ExecResult {
        let ea = effective_address(&self.regs, ops, mode, update)?;
        let bits = match width {
            Width::Single => {
                let word = self.bus.read_u32(ea)?;
                f64::from(f32::from_bits(word)).to_bits()
            }
            Width::Double => self.bus.read_u64(ea)?,
        };
        self.regs.write_f(ops.rd, bits);
        if update {
            self.regs.write(ops.ra, ea);
        }
        Ok(())
    }

    fn fp_store(
        &mut self,
        ops: &FpDecoded,
        width: Width,
        mode: AddrMode,
        update: bool,
    ) -> ExecResult {
        let ea = effective_address(&self.regs, ops, mode, update)?;
        match width {
            Width::Single => {
                let word = (self.regs.read_f64(ops.rd) as f32).to_bits();
                self.bus.write_u32(ea, word)?;
            }
            Width::Double => self.bus.write_u64(ea, self.regs.read_f(ops.rd))?,
        }
        if update {
            self.regs.write(ops.ra, ea);
        }
        Ok(())
    }

    /// `lfs`: load single, D-form.
    pub fn lfs(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_load(ops, Width::Single, AddrMode::Displacement, false)
    }

    /// `lfsu`: load single with update, D-form.
    pub fn lfsu(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_load(ops, Width::Single, AddrMode::Displacement, true)
    }

    /// `lfsx`: load single, X-form.
    pub fn lfsx(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_load(ops, Width::Single, AddrMode::Indexed, false)
    }

    /// `lfsux`: load single with update, X-form.
    pub fn lfsux(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_load(ops, Width::Single, AddrMode::Indexed, true)
    }

    /// `lfd`: load double, D-form.
    pub fn lfd(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_load(ops, Width::Double, AddrMode::Displacement, false)
    }

    /// `lfdu`: load double with update, D-form.
    pub fn lfdu(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_load(ops, Width::Double, AddrMode::Displacement, true)
    }

    /// `lfdx`: load double, X-form.
    pub fn lfdx(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_load(ops, Width::Double, AddrMode::Indexed, false)
    }

    /// `lfdux`: load double with update, X-form.
    pub fn lfdux(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_load(ops, Width::Double, AddrMode::Indexed, true)
    }

    /// `stfs`: store single, D-form.
    pub fn stfs(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_store(ops, Width::Single, AddrMode::Displacement, false)
    }

    /// `stfsu`: store single with update, D-form.
    pub fn stfsu(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_store(ops, Width::Single, AddrMode::Displacement, true)
    }

    /// `stfsx`: store single, X-form.
    pub fn stfsx(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_store(ops, Width::Single, AddrMode::Indexed, false)
    }

    /// `stfsux`: store single with update, X-form.
    pub fn stfsux(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_store(ops, Width::Single, AddrMode::Indexed, true)
    }

    /// `stfd`: store double, D-form.
    pub fn stfd(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_store(ops, Width::Double, AddrMode::Displacement, false)
    }

    /// `stfdu`: store double with update, D-form.
    pub fn stfdu(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_store(ops, Width::Double, AddrMode::Displacement, true)
    }

    /// `stfdx`: store double, X-form.
    pub fn stfdx(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_store(ops, Width::Double, AddrMode::Indexed, false)
    }

    /// `stfdux`: store double with update, X-form.
    pub fn stfdux(&mut self, ops: &FpDecoded) -> ExecResult {
        self.fp_store(ops, Width::Double, AddrMode::Indexed, true)
    }

    /// `stfiwx`: stores the low word of `frS` as an integer, X-form.
    pub fn stfiwx(&mut self, ops: &FpDecoded) -> ExecResult {
        let ea = effective_address(&self.regs, ops, AddrMode::Indexed, false)?;
        self.bus.write_u32(ea, self.regs.read_f(ops.rd) as u32)
    }
}
