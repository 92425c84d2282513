//! PowerPC Floating-Point Primary Opcodes.
//!
//! Defines the primary opcodes (bits 0-5) for floating-point loads, stores, and
//! arithmetic operations.

/// Integer extended group; hosts the X-form FP loads/stores.
pub const OP_EXT31: u32 = 31;

/// Load Floating-Point Single.
pub const OP_LFS: u32 = 48;

/// Load Floating-Point Single with Update.
pub const OP_LFSU: u32 = 49;

/// Load Floating-Point Double.
pub const OP_LFD: u32 = 50;

/// Load Floating-Point Double with Update.
pub const OP_LFDU: u32 = 51;

/// Store Floating-Point Single.
pub const OP_STFS: u32 = 52;

/// Store Floating-Point Single with Update.
pub const OP_STFSU: u32 = 53;

/// Store Floating-Point Double.
pub const OP_STFD: u32 = 54;

/// Store Floating-Point Double with Update.
pub const OP_STFDU: u32 = 55;

/// Single-precision arithmetic (A-form).
pub const OP_FP_SINGLE: u32 = 59;

/// Double-precision arithmetic, moves, compares and FPSCR control.
pub const OP_FP_DOUBLE: u32 = 63;
