//! PowerPC Floating-Point Instruction Decoder.
//!
//! Maps a 32-bit instruction word onto the floating-point operation it encodes. Operand
//! fields are extracted separately by [`FpDecoded`](crate::isa::instruction::FpDecoded);
//! this module only answers "which instruction is this".

use crate::isa::instruction::InstructionBits;
use crate::isa::ppcfp::opcodes::{
    OP_EXT31, OP_FP_DOUBLE, OP_FP_SINGLE, OP_LFD, OP_LFDU, OP_LFS, OP_LFSU, OP_STFD, OP_STFDU,
    OP_STFS, OP_STFSU,
};
use crate::isa::ppcfp::xo;

/// Every floating-point instruction the engine implements.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FpOp {
    // Arithmetic, double
    Fadd,
    Fsub,
    Fmul,
    Fdiv,
    Fmadd,
    Fmsub,
    Fnmadd,
    Fnmsub,
    // Arithmetic, single
    Fadds,
    Fsubs,
    Fmuls,
    Fdivs,
    Fmadds,
    Fmsubs,
    Fnmadds,
    Fnmsubs,
    // Square root and estimates
    Fsqrt,
    Fsqrts,
    Frsqrte,
    Fres,
    // Moves, sign manipulation, select
    Fmr,
    Fabs,
    Fnabs,
    Fneg,
    Fsel,
    // Conversion
    Frsp,
    Fctiw,
    Fctiwz,
    // Compare
    Fcmpu,
    Fcmpo,
    // FPSCR control
    Mffs,
    Mtfsf,
    Mtfsfi,
    Mtfsb0,
    Mtfsb1,
    Mcrfs,
    // Loads
    Lfs,
    Lfsu,
    Lfsx,
    Lfsux,
    Lfd,
    Lfdu,
    Lfdx,
    Lfdux,
    // Stores
    Stfs,
    Stfsu,
    Stfsx,
    Stfsux,
    Stfd,
    Stfdu,
    Stfdx,
    Stfdux,
    Stfiwx,
}

/// Coarse instruction class, used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FpClass {
    /// Arithmetic, fused, square root, estimates, moves and select.
    Arithmetic,
    /// `frsp`, `fctiw`, `fctiwz`.
    Conversion,
    /// `fcmpu`, `fcmpo`.
    Compare,
    /// FPSCR and CR field manipulation.
    Control,
    /// Loads and stores.
    Memory,
}

impl FpOp {
    /// Returns the assembler mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Fadd => "fadd",
            Self::Fsub => "fsub",
            Self::Fmul => "fmul",
            Self::Fdiv => "fdiv",
            Self::Fmadd => "fmadd",
            Self::Fmsub => "fmsub",
            Self::Fnmadd => "fnmadd",
            Self::Fnmsub => "fnmsub",
            Self::Fadds => "fadds",
            Self::Fsubs => "fsubs",
            Self::Fmuls => "fmuls",
            Self::Fdivs => "fdivs",
            Self::Fmadds => "fmadds",
            Self::Fmsubs => "fmsubs",
            Self::Fnmadds => "fnmadds",
            Self::Fnmsubs => "fnmsubs",
            Self::Fsqrt => "fsqrt",
            Self::Fsqrts => "fsqrts",
            Self::Frsqrte => "frsqrte",
            Self::Fres => "fres",
            Self::Fmr => "fmr",
            Self::Fabs => "fabs",
            Self::Fnabs => "fnabs",
            Self::Fneg => "fneg",
            Self::Fsel => "fsel",
            Self::Frsp => "frsp",
            Self::Fctiw => "fctiw",
            Self::Fctiwz => "fctiwz",
            Self::Fcmpu => "fcmpu",
            Self::Fcmpo => "fcmpo",
            Self::Mffs => "mffs",
            Self::Mtfsf => "mtfsf",
            Self::Mtfsfi => "mtfsfi",
            Self::Mtfsb0 => "mtfsb0",
            Self::Mtfsb1 => "mtfsb1",
            Self::Mcrfs => "mcrfs",
            Self::Lfs => "lfs",
            Self::Lfsu => "lfsu",
            Self::Lfsx => "lfsx",
            Self::Lfsux => "lfsux",
            Self::Lfd => "lfd",
            Self::Lfdu => "lfdu",
            Self::Lfdx => "lfdx",
            Self::Lfdux => "lfdux",
            Self::Stfs => "stfs",
            Self::Stfsu => "stfsu",
            Self::Stfsx => "stfsx",
            Self::Stfsux => "stfsux",
            Self::Stfd => "stfd",
            Self::Stfdu => "stfdu",
            Self::Stfdx => "stfdx",
            Self::Stfdux => "stfdux",
            Self::Stfiwx => "stfiwx",
        }
    }

    /// Returns the statistics class of this instruction.
    pub fn class(self) -> FpClass {
        match self {
            Self::Frsp | Self::Fctiw | Self::Fctiwz => FpClass::Conversion,
            Self::Fcmpu | Self::Fcmpo => FpClass::Compare,
            Self::Mffs | Self::Mtfsf | Self::Mtfsfi | Self::Mtfsb0 | Self::Mtfsb1 | Self::Mcrfs => {
                FpClass::Control
            }
            Self::Lfs
            | Self::Lfsu
            | Self::Lfsx
            | Self::Lfsux
            | Self::Lfd
            | Self::Lfdu
            | Self::Lfdx
            | Self::Lfdux
            | Self::Stfs
            | Self::Stfsu
            | Self::Stfsx
            | Self::Stfsux
            | Self::Stfd
            | Self::Stfdu
            | Self::Stfdx
            | Self::Stfdux
            | Self::Stfiwx => FpClass::Memory,
            _ => FpClass::Arithmetic,
        }
    }

    /// Returns true for instruction forms that honor the record bit.
    pub fn has_record_form(self) -> bool {
        !matches!(self.class(), FpClass::Memory | FpClass::Compare) && self != Self::Mcrfs
    }
}

/// Decodes `inst` into the floating-point instruction it encodes.
///
/// Returns `None` for words that are not floating-point instructions handled here.
pub fn decode(inst: u32) -> Option<FpOp> {
    match inst.opcd() {
        OP_LFS => Some(FpOp::Lfs),
        OP_LFSU => Some(FpOp::Lfsu),
        OP_LFD => Some(FpOp::Lfd),
        OP_LFDU => Some(FpOp::Lfdu),
        OP_STFS => Some(FpOp::Stfs),
        OP_STFSU => Some(FpOp::Stfsu),
        OP_STFD => Some(FpOp::Stfd),
        OP_STFDU => Some(FpOp::Stfdu),
        OP_EXT31 => decode_ext31(inst.xo10()),
        OP_FP_SINGLE => decode_single(inst.xo5()),
        OP_FP_DOUBLE => {
            let xo10 = inst.xo10();
            if xo10 & xo::A_FORM_BIT != 0 {
                decode_double_a(inst.xo5())
            } else {
                decode_double_x(xo10)
            }
        }
        _ => None,
    }
}

fn decode_ext31(xo10: u32) -> Option<FpOp> {
    Some(match xo10 {
        xo::LFSX => FpOp::Lfsx,
        xo::LFSUX => FpOp::Lfsux,
        xo::LFDX => FpOp::Lfdx,
        xo::LFDUX => FpOp::Lfdux,
        xo::STFSX => FpOp::Stfsx,
        xo::STFSUX => FpOp::Stfsux,
        xo::STFDX => FpOp::Stfdx,
        xo::STFDUX => FpOp::Stfdux,
        xo::STFIWX => FpOp::Stfiwx,
        _ => return None,
    })
}

fn decode_single(xo5: u32) -> Option<FpOp> {
    Some(match xo5 {
        xo::FDIV => FpOp::Fdivs,
        xo::FSUB => FpOp::Fsubs,
        xo::FADD => FpOp::Fadds,
        xo::FSQRT => FpOp::Fsqrts,
        xo::FRES => FpOp::Fres,
        xo::FMUL => FpOp::Fmuls,
        xo::FMSUB => FpOp::Fmsubs,
        xo::FMADD => FpOp::Fmadds,
        xo::FNMSUB => FpOp::Fnmsubs,
        xo::FNMADD => FpOp::Fnmadds,
        _ => return None,
    })
}

fn decode_double_a(xo5: u32) -> Option<FpOp> {
    Some(match xo5 {
        xo::FDIV => FpOp::Fdiv,
        xo::FSUB => FpOp::Fsub,
        xo::FADD => FpOp::Fadd,
        xo::FSQRT => FpOp::Fsqrt,
        xo::FSEL => FpOp::Fsel,
        xo::FMUL => FpOp::Fmul,
        xo::FRSQRTE => FpOp::Frsqrte,
        xo::FMSUB => FpOp::Fmsub,
        xo::FMADD => FpOp::Fmadd,
        xo::FNMSUB => FpOp::Fnmsub,
        xo::FNMADD => FpOp::Fnmadd,
        _ => return None,
    })
}

fn decode_double_x(xo10: u32) -> Option<FpOp> {
    Some(match xo10 {
        xo::FCMPU => FpOp::Fcmpu,
        xo::FRSP => FpOp::Frsp,
        xo::FCTIW => FpOp::Fctiw,
        xo::FCTIWZ => FpOp::Fctiwz,
        xo::FCMPO => FpOp::Fcmpo,
        xo::MTFSB1 => FpOp::Mtfsb1,
        xo::FNEG => FpOp::Fneg,
        xo::MCRFS => FpOp::Mcrfs,
        xo::MTFSB0 => FpOp::Mtfsb0,
        xo::FMR => FpOp::Fmr,
        xo::MTFSFI => FpOp::Mtfsfi,
        xo::FNABS => FpOp::Fnabs,
        xo::FABS => FpOp::Fabs,
        xo::MFFS => FpOp::Mffs,
        xo::MTFSF => FpOp::Mtfsf,
        _ => return None,
    })
}
