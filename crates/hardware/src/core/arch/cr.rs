//! Condition Register (CR).
//!
//! The CR is a 32-bit word split into eight 4-bit fields, `CR0` in the most significant
//! nibble. The floating-point engine writes `CR1` for record forms and an encoded field
//! for compares and `mcrfs`.

/// Less than / negative.
pub const CR_LT: u32 = 0x8;
/// Greater than / positive.
pub const CR_GT: u32 = 0x4;
/// Equal / zero.
pub const CR_EQ: u32 = 0x2;
/// Summary overflow, or unordered for floating-point compares.
pub const CR_SO: u32 = 0x1;

/// Mask of field 1 within the 32-bit CR word.
pub const CR1_FIELD: u32 = 0x0F00_0000;

/// The condition register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConditionRegister(u32);

impl ConditionRegister {
    /// Creates a condition register holding `val`.
    pub const fn new(val: u32) -> Self {
        Self(val)
    }

    /// Returns the whole 32-bit word.
    #[inline]
    pub fn read(self) -> u32 {
        self.0
    }

    /// Replaces the whole 32-bit word.
    #[inline]
    pub fn write(&mut self, val: u32) {
        self.0 = val;
    }

    /// Returns the 4-bit value of `field` (0-7).
    #[inline]
    pub fn field(self, field: usize) -> u32 {
        (self.0 >> Self::shift(field)) & 0xF
    }

    /// Replaces the 4-bit value of `field` (0-7).
    #[inline]
    pub fn set_field(&mut self, field: usize, val: u32) {
        let shift = Self::shift(field);
        self.0 = (self.0 & !(0xF << shift)) | ((val & 0xF) << shift);
    }

    /// Copies FPSCR[FX, FEX, VX, OX] into `CR1`.
    #[inline]
    pub fn mirror_fpscr(&mut self, fpscr: u32) {
        self.0 = (self.0 & !CR1_FIELD) | ((fpscr >> 4) & CR1_FIELD);
    }

    #[inline]
    fn shift(field: usize) -> u32 {
        28 - 4 * (field as u32 & 7)
    }
}
