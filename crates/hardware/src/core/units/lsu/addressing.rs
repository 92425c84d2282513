//! Effective-address computation.
//!
//! | Form     | EA                         | rA = 0           |
//! |----------|----------------------------|------------------|
//! | D        | `(rA\|0) + EXTS(d)`        | base reads as 0  |
//! | X        | `(rA\|0) + rB`             | base reads as 0  |
//! | D update | `rA + EXTS(d)`, `rA <- EA` | illegal          |
//! | X update | `rA + rB`, `rA <- EA`      | illegal          |
//!
//! All sums wrap at 32 bits.

use crate::common::{Exception, RegisterFile};
use crate::isa::FpDecoded;

/// Addressing form of a load or store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddrMode {
    /// Base plus sign-extended displacement.
    Displacement,
    /// Base plus index register.
    Indexed,
}

/// Floating-point format of a memory operand.
///
/// `stfiwx` stores an integer word and has no load counterpart, so it is not a width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    /// 32-bit IEEE single, converted to or from double.
    Single,
    /// 64-bit IEEE double, moved verbatim.
    Double,
}

/// Computes the effective address of a load or store.
///
/// # Errors
///
/// Returns [`Exception::ILLEGAL`] for an update form with `rA = 0`.
pub fn effective_address(
    regs: &RegisterFile,
    ops: &FpDecoded,
    mode: AddrMode,
    update: bool,
) -> Result<u32, Exception> {
    if update && ops.ra == 0 {
        return Err(Exception::ILLEGAL);
    }
    let base = regs.read_base(ops.ra);
    let ea = match mode {
        AddrMode::Displacement => base.wrapping_add(ops.d as u32),
        AddrMode::Indexed => base.wrapping_add(regs.read(ops.rb)),
    };
    Ok(ea)
}
