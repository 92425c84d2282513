//! Floating-point rounding mode support.
//!
//! PowerPC selects one of four rounding modes through `FPSCR[RN]`:
//!
//! | RN   | Mode          | Host equivalent  |
//! |------|---------------|------------------|
//! | 0b00 | Nearest       | `FE_TONEAREST`   |
//! | 0b01 | Toward zero   | `FE_TOWARDZERO`  |
//! | 0b10 | Toward +∞     | `FE_UPWARD`      |
//! | 0b11 | Toward −∞     | `FE_DOWNWARD`    |
//!
//! Arithmetic relies on the host FPU being in the matching mode. Integer conversion
//! (`fctiw`/`fctiwz`) rounds explicitly with the helpers below.

/// PowerPC rounding mode encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to nearest.
    Nearest = 0b00,
    /// Round toward zero.
    TowardZero = 0b01,
    /// Round toward +infinity.
    TowardPosInf = 0b10,
    /// Round toward -infinity.
    TowardNegInf = 0b11,
}

impl RoundingMode {
    /// All modes, in RN encoding order.
    pub const ALL: [Self; 4] = [
        Self::Nearest,
        Self::TowardZero,
        Self::TowardPosInf,
        Self::TowardNegInf,
    ];

    /// Decodes the low two bits of `bits` (an FPSCR word or a bare RN value).
    pub fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0b00 => Self::Nearest,
            0b01 => Self::TowardZero,
            0b10 => Self::TowardPosInf,
            _ => Self::TowardNegInf,
        }
    }

    /// Returns the 2-bit RN encoding.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Rounds `x` to a 32-bit integer in this mode.
    ///
    /// `x` must already be known to lie within the signed 32-bit range.
    pub fn round_to_i32(self, x: f64) -> i32 {
        match self {
            Self::Nearest => round_to_nearest(x),
            Self::TowardZero => x.trunc() as i32,
            Self::TowardPosInf => x.ceil() as i32,
            Self::TowardNegInf => x.floor() as i32,
        }
    }
}

/// Nearest rounding as the hardware conversion path observes it: `floor(x + 0.5)` through
/// a 64-bit intermediate. Halfway cases round up, not to even.
fn round_to_nearest(x: f64) -> i32 {
    (x + 0.5).floor() as i64 as i32
}
