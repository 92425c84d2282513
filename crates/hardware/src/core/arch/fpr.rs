//! PowerPC Floating-Point Register File.
//!
//! This module implements the Floating-Point Register (FPR) file. It performs the following:
//! 1. **Storage:** Maintains 32 floating-point registers (`f0`-`f31`).
//! 2. **Bit Identity:** Each register is a 64-bit cell; the double and integer views share
//!    the same bits, so NaN-boxed integer results survive unchanged.

/// Floating-Point Register file.
///
/// Registers are stored as raw 64-bit patterns rather than `f64` so that writing a
/// signalling NaN or a sentinel pattern never goes through a float conversion.
#[derive(Clone)]
pub struct Fpr {
    fregs: [u64; 32],
}

impl Default for Fpr {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Fpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.fregs.iter().map(|r| format!("{r:#018x}")))
            .finish()
    }
}

impl Fpr {
    /// Creates a new floating-point register file with all registers set to `+0.0`.
    pub fn new() -> Self {
        Self { fregs: [0; 32] }
    }

    /// Reads a floating-point register value as raw bits.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    #[inline]
    pub fn read(&self, idx: usize) -> u64 {
        self.fregs[idx]
    }

    /// Writes a floating-point register value from raw bits.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 64-bit pattern to store.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u64) {
        self.fregs[idx] = val;
    }

    /// Dumps all floating-point registers at debug level.
    pub fn dump(&self) {
        for (i, pair) in self.fregs.chunks(2).enumerate() {
            tracing::debug!(
                "f{:<2}={:#018x} f{:<2}={:#018x}",
                i * 2,
                pair[0],
                i * 2 + 1,
                pair[1]
            );
        }
    }
}
