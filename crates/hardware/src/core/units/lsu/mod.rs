//! Load/Store Unit (LSU).
//!
//! This module provides the floating-point load and store instructions. It includes:
//! - [`addressing`]: Effective-address computation for D-form, X-form and update forms.
//! - [`fp_transfer`]: The sixteen FPR loads/stores plus `stfiwx`.

/// Effective-address computation.
pub mod addressing;

/// Floating-point loads and stores.
pub mod fp_transfer;

pub use addressing::{AddrMode, Width};
