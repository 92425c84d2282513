//! NaN boxing and NaN classification for the FPU.
//!
//! `fctiw`/`fctiwz` and `mffs` place a 32-bit integer in the low word of a 64-bit FPR.
//! The upper word is forced to a fixed sentinel rather than sign-extended, which makes
//! the register read as a quiet NaN when viewed as a double.
//!
//! - **Boxing** ([`box_i32`], [`box_u32_601`]): builds the 64-bit sentinel pattern.
//! - **Signalling test** ([`is_snan_bits`]): inspects the raw pattern, since a signalling
//!   NaN does not survive a round-trip through host `f64` arithmetic on every host.

/// Upper-word sentinel for integer results and `mffs` on 603 and later cores.
pub const NAN_BOX: u64 = 0xFFF8_0000_0000_0000;

/// Upper-word padding used by `mffs` on the 601.
pub const NAN_BOX_601: u64 = 0xFFFF_FFFF_0000_0000;

/// Quiet bit of a double-precision NaN.
const QUIET_BIT: u64 = 0x0008_0000_0000_0000;

/// Exponent field of a double.
const EXP_MASK: u64 = 0x7FF0_0000_0000_0000;

/// Fraction field of a double.
const FRAC_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

/// Integer-convert result for NaN inputs and negative overflow.
pub const CVT_MIN_SENTINEL: u64 = NAN_BOX | 0x8000_0000;

/// Integer-convert result for positive overflow.
pub const CVT_MAX_SENTINEL: u64 = NAN_BOX | 0x7FFF_FFFF;

/// Boxes a 32-bit integer result into the `0xFFF8_0000` sentinel.
#[inline]
pub fn box_i32(val: i32) -> u64 {
    NAN_BOX | u64::from(val as u32)
}

/// Boxes a 32-bit word with the 601 `mffs` padding.
#[inline]
pub fn box_u32_601(val: u32) -> u64 {
    NAN_BOX_601 | u64::from(val)
}

/// Returns true if `bits` is a double-precision signalling NaN.
#[inline]
pub fn is_snan_bits(bits: u64) -> bool {
    bits & EXP_MASK == EXP_MASK && bits & FRAC_MASK != 0 && bits & QUIET_BIT == 0
}

/// Returns true if `bits` is a NaN whose quiet bit is clear.
///
/// Used by the integer-convert path, which looks only at the quiet bit once the value
/// is known to be a NaN.
#[inline]
pub fn quiet_bit_clear(bits: u64) -> bool {
    bits & QUIET_BIT == 0
}
