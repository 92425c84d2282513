//! PowerPC Floating-Point Extended Opcodes.
//!
//! A-form instructions carry a 5-bit extended opcode in bits 26-30; X-form
//! instructions carry a 10-bit one in bits 21-30. Under primary 63 an X-form
//! opcode never has bit 4 set, which is how the two forms are told apart.

/// Bit that marks an A-form extended opcode under primary 63.
pub const A_FORM_BIT: u32 = 0x10;

// A-form (primaries 59 and 63)

/// fdiv / fdivs
pub const FDIV: u32 = 18;
/// fsub / fsubs
pub const FSUB: u32 = 20;
/// fadd / fadds
pub const FADD: u32 = 21;
/// fsqrt / fsqrts
pub const FSQRT: u32 = 22;
/// fsel
pub const FSEL: u32 = 23;
/// fres (primary 59 only)
pub const FRES: u32 = 24;
/// fmul / fmuls
pub const FMUL: u32 = 25;
/// frsqrte (primary 63 only)
pub const FRSQRTE: u32 = 26;
/// fmsub / fmsubs
pub const FMSUB: u32 = 28;
/// fmadd / fmadds
pub const FMADD: u32 = 29;
/// fnmsub / fnmsubs
pub const FNMSUB: u32 = 30;
/// fnmadd / fnmadds
pub const FNMADD: u32 = 31;

// X-form (primary 63)

/// fcmpu
pub const FCMPU: u32 = 0;
/// frsp
pub const FRSP: u32 = 12;
/// fctiw
pub const FCTIW: u32 = 14;
/// fctiwz
pub const FCTIWZ: u32 = 15;
/// fcmpo
pub const FCMPO: u32 = 32;
/// mtfsb1
pub const MTFSB1: u32 = 38;
/// fneg
pub const FNEG: u32 = 40;
/// mcrfs
pub const MCRFS: u32 = 64;
/// mtfsb0
pub const MTFSB0: u32 = 70;
/// fmr
pub const FMR: u32 = 72;
/// mtfsfi
pub const MTFSFI: u32 = 134;
/// fnabs
pub const FNABS: u32 = 136;
/// fabs
pub const FABS: u32 = 264;
/// mffs
pub const MFFS: u32 = 583;
/// mtfsf
pub const MTFSF: u32 = 711;

// X-form (primary 31)

/// lfsx
pub const LFSX: u32 = 535;
/// lfsux
pub const LFSUX: u32 = 567;
/// lfdx
pub const LFDX: u32 = 599;
/// lfdux
pub const LFDUX: u32 = 631;
/// stfsx
pub const STFSX: u32 = 663;
/// stfsux
pub const STFSUX: u32 = 695;
/// stfdx
pub const STFDX: u32 = 727;
/// stfdux
pub const STFDUX: u32 = 759;
/// stfiwx
pub const STFIWX: u32 = 983;
