//! Execution units.
//!
//! The floating-point unit implements arithmetic, conversion, comparison and FPSCR
//! control; the load/store unit implements the floating-point memory transfers.

/// Floating-Point Unit.
pub mod fpu;

/// Load/Store Unit for floating-point memory access.
pub mod lsu;
