//! Floating-Point Status and Control Register (FPSCR).
//!
//! This module implements the FPSCR state machine. It provides:
//! 1. **Field Masks:** Constants for every architected FPSCR bit and field.
//! 2. **Register Storage:** The `Fpscr` struct holding the 32-bit word.
//! 3. **Summary Maintenance:** Recomputation of the derived FEX and VX summary bits.
//! 4. **Host Synchronization:** Mirroring of the RN field into the host FPU rounding mode.
//!
//! Bit numbering follows the PowerPC manuals (bit 0 is the MSB); the constants below are
//! the corresponding little-endian masks.
//!
//! | Bits  | Field  | Meaning                                  |
//! |-------|--------|------------------------------------------|
//! | 0     | FX     | Exception summary                        |
//! | 1     | FEX    | Enabled exception summary (derived)      |
//! | 2     | VX     | Invalid operation summary                |
//! | 3-6   | OX..XX | Overflow, underflow, zero-divide, inexact |
//! | 7-12  | VX*    | Invalid operation sub-causes             |
//! | 13-14 | FR, FI | Fraction rounded / inexact               |
//! | 15-19 | FPRF   | Result class (C + FPCC)                  |
//! | 21-23 | VX*    | Soft, square root, integer convert       |
//! | 24-28 | VE..XE | Exception enables                        |
//! | 29    | NI     | Non-IEEE mode                            |
//! | 30-31 | RN     | Rounding mode                            |

use crate::core::units::fpu::host_env::HostFpEnv;
use crate::core::units::fpu::rounding_modes::RoundingMode;

/// Floating-point exception summary.
pub const FX: u32 = 0x8000_0000;
/// Floating-point enabled exception summary.
pub const FEX: u32 = 0x4000_0000;
/// Invalid operation exception summary.
pub const VX: u32 = 0x2000_0000;
/// Overflow exception.
pub const OX: u32 = 0x1000_0000;
/// Underflow exception.
pub const UX: u32 = 0x0800_0000;
/// Zero divide exception.
pub const ZX: u32 = 0x0400_0000;
/// Inexact exception.
pub const XX: u32 = 0x0200_0000;
/// Invalid operation: signalling NaN.
pub const VXSNAN: u32 = 0x0100_0000;
/// Invalid operation: infinity minus infinity.
pub const VXISI: u32 = 0x0080_0000;
/// Invalid operation: infinity divided by infinity.
pub const VXIDI: u32 = 0x0040_0000;
/// Invalid operation: zero divided by zero.
pub const VXZDZ: u32 = 0x0020_0000;
/// Invalid operation: infinity times zero.
pub const VXIMZ: u32 = 0x0010_0000;
/// Invalid operation: invalid compare.
pub const VXVC: u32 = 0x0008_0000;
/// Fraction rounded.
pub const FR: u32 = 0x0004_0000;
/// Fraction inexact.
pub const FI: u32 = 0x0002_0000;
/// Result class descriptor (the C bit of FPRF).
pub const FPRCD: u32 = 0x0001_0000;
/// FPCC: less than or negative.
pub const FPCC_NEG: u32 = 0x0000_8000;
/// FPCC: greater than or positive.
pub const FPCC_POS: u32 = 0x0000_4000;
/// FPCC: equal or zero.
pub const FPCC_ZERO: u32 = 0x0000_2000;
/// FPCC: unordered, NaN or infinity.
pub const FPCC_FUNAN: u32 = 0x0000_1000;
/// Whole FPCC field.
pub const FPCC_MASK: u32 = 0x0000_F000;
/// Whole FPRF field (C + FPCC).
pub const FPRF_MASK: u32 = FPRCD | FPCC_MASK;
/// Reserved bit 20.
pub const RESERVED: u32 = 0x0000_0800;
/// Invalid operation: software request.
pub const VXSOFT: u32 = 0x0000_0400;
/// Invalid operation: square root of a negative number.
pub const VXSQRT: u32 = 0x0000_0200;
/// Invalid operation: invalid integer convert.
pub const VXCVI: u32 = 0x0000_0100;
/// Invalid operation exception enable.
pub const VE: u32 = 0x0000_0080;
/// Overflow exception enable.
pub const OE: u32 = 0x0000_0040;
/// Underflow exception enable.
pub const UE: u32 = 0x0000_0020;
/// Zero divide exception enable.
pub const ZE: u32 = 0x0000_0010;
/// Inexact exception enable.
pub const XE: u32 = 0x0000_0008;
/// Non-IEEE mode.
pub const NI: u32 = 0x0000_0004;
/// Rounding mode field.
pub const RN_MASK: u32 = 0x0000_0003;

/// All invalid-operation sub-causes; VX is their logical OR.
pub const VX_CAUSES: u32 =
    VXSNAN | VXISI | VXIDI | VXZDZ | VXIMZ | VXVC | VXSOFT | VXSQRT | VXCVI;

/// Bits that software may clear explicitly (via `mcrfs`).
pub const CLEARABLE: u32 = FX | OX | UX | ZX | XX | VX_CAUSES;

/// Summary bits that are only ever recomputed, never written by software.
pub const SUMMARY: u32 = FEX | VX;

/// Shift that lines an enable bit (VE..XE) up with its cause bit (VX..XX).
const ENABLE_TO_CAUSE_SHIFT: u32 = 22;

/// Cause bits that participate in FEX.
const ENABLED_CAUSES: u32 = VX | OX | UX | ZX | XX;

/// The FPSCR and the host floating-point environment it drives.
///
/// The host environment is injected so that the rounding-mode coupling is an explicit
/// dependency. Every write that changes RN is passed to the host before `write` returns;
/// while a host window is open (see [`Fpscr::enter_host`]) arithmetic executed afterwards
/// is rounded by the host in the guest's mode.
pub struct Fpscr {
    bits: u32,
    host: Box<dyn HostFpEnv>,
}

impl std::fmt::Debug for Fpscr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fpscr")
            .field("bits", &format_args!("{:#010x}", self.bits))
            .field("host_rounding", &self.host.rounding())
            .finish()
    }
}

impl Fpscr {
    /// Creates an FPSCR holding `initial` and applies its rounding mode to `host`.
    pub fn new(initial: u32, mut host: Box<dyn HostFpEnv>) -> Self {
        host.set_rounding(RoundingMode::from_bits(initial));
        Self {
            bits: initial,
            host,
        }
    }

    /// Returns the current FPSCR word.
    #[inline]
    pub fn read(&self) -> u32 {
        self.bits
    }

    /// Replaces the FPSCR word.
    ///
    /// If the RN field changes, the host rounding mode is reconfigured before returning.
    pub fn write(&mut self, val: u32) {
        if (val ^ self.bits) & RN_MASK != 0 {
            let mode = RoundingMode::from_bits(val);
            tracing::trace!(
                from = ?RoundingMode::from_bits(self.bits),
                to = ?mode,
                "host rounding mode updated"
            );
            self.host.set_rounding(mode);
        }
        self.bits = val;
    }

    /// Sets every bit in `mask`.
    #[inline]
    pub fn set(&mut self, mask: u32) {
        self.write(self.bits | mask);
    }

    /// Clears every bit in `mask`.
    #[inline]
    pub fn clear(&mut self, mask: u32) {
        self.write(self.bits & !mask);
    }

    /// Returns true if any bit in `mask` is set.
    #[inline]
    pub fn test(&self, mask: u32) -> bool {
        self.bits & mask != 0
    }

    /// Returns the rounding mode currently selected by RN.
    #[inline]
    pub fn rounding_mode(&self) -> RoundingMode {
        RoundingMode::from_bits(self.bits)
    }

    /// Returns the rounding mode the host environment applies to guest arithmetic.
    pub fn host_rounding_mode(&self) -> RoundingMode {
        self.host.rounding()
    }

    /// Installs RN on the calling thread's FPU until [`Fpscr::leave_host`].
    pub fn enter_host(&mut self) {
        self.host.enter();
    }

    /// Gives the calling thread back the rounding mode it had before [`Fpscr::enter_host`].
    pub fn leave_host(&mut self) {
        self.host.leave();
    }

    /// Recomputes FEX: set iff some cause bit among VX/OX/UX/ZX/XX has its enable set.
    pub fn update_fex(&mut self) {
        let enabled = self.bits & (self.bits << ENABLE_TO_CAUSE_SHIFT) & ENABLED_CAUSES;
        self.bits = (self.bits & !FEX) | if enabled != 0 { FEX } else { 0 };
    }

    /// Recomputes VX as the OR of the invalid-operation sub-causes.
    pub fn update_vx(&mut self) {
        self.bits = (self.bits & !VX) | if self.bits & VX_CAUSES != 0 { VX } else { 0 };
    }

    /// Recomputes both summaries, VX first since FEX depends on it.
    pub fn update_summaries(&mut self) {
        self.update_vx();
        self.update_fex();
    }
}
