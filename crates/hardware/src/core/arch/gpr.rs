//! PowerPC General-Purpose Register File.
//!
//! This module implements the 32-bit General-Purpose Register (GPR) file.
//! `r0` is an ordinary register; only effective-address computation treats `rA = 0` as
//! the literal zero (see [`RegisterFile::read_base`](crate::common::RegisterFile::read_base)).

/// General-Purpose Register file.
#[derive(Clone, Debug, Default)]
pub struct Gpr {
    regs: [u32; 32],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx] = val;
    }

    /// Dumps the contents of all general-purpose registers at debug level.
    pub fn dump(&self) {
        for i in (0..32).step_by(2) {
            tracing::debug!(
                "r{:<2}={:#010x} r{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}
