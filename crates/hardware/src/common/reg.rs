//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, which acts as a unified interface for
//! accessing both General Purpose Registers (GPRs) and Floating-Point Registers (FPRs).
//! It provides:
//! 1. **Unified Storage:** Combined storage for the 32-bit GPRs and 64-bit FPRs.
//! 2. **Dual View:** FPRs are readable as a `f64` or as the raw 64-bit pattern.
//! 3. **Observability:** Debugging utilities for dumping register state.

use crate::core::arch::fpr::Fpr;
use crate::core::arch::gpr::Gpr;

/// Unified register file containing both general-purpose and floating-point registers.
#[derive(Clone, Debug, Default)]
pub struct RegisterFile {
    gpr: Gpr,
    fpr: Fpr,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register.
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes a general-purpose register.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    /// Reads `rA` for effective-address computation: register 0 reads as zero.
    #[inline]
    pub fn read_base(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.gpr.read(idx) }
    }

    /// Reads a floating-point register as its raw 64-bit pattern.
    #[inline]
    pub fn read_f(&self, idx: usize) -> u64 {
        self.fpr.read(idx)
    }

    /// Writes a floating-point register from a raw 64-bit pattern.
    #[inline]
    pub fn write_f(&mut self, idx: usize, val: u64) {
        self.fpr.write(idx, val);
    }

    /// Reads a floating-point register as a double.
    #[inline]
    pub fn read_f64(&self, idx: usize) -> f64 {
        f64::from_bits(self.fpr.read(idx))
    }

    /// Writes a double into a floating-point register.
    #[inline]
    pub fn write_f64(&mut self, idx: usize, val: f64) {
        self.fpr.write(idx, val.to_bits());
    }

    /// Dumps the contents of all registers through `tracing` at debug level.
    pub fn dump(&self) {
        self.gpr.dump();
        self.fpr.dump();
    }
}
