//! Floating-Point Unit (FPU).
//!
//! This module implements the PowerPC floating-point instruction set on top of the host
//! FPU. Host arithmetic does the rounding; the modules here reproduce the PowerPC status
//! reporting around it.
//!
//! Support code is organized into submodules:
//! - [`host_env`]: Host rounding-mode control (`fesetround`).
//! - [`rounding_modes`]: The RN field and the integer-conversion rounding rules.
//! - [`exception_flags`]: The invalid-operation classification table.
//! - [`result_flags`]: FPRF derivation and CR1 mirroring.
//! - [`nan_handling`]: Sentinel patterns for integer results and `mffs`.
//!
//! The instructions themselves are `impl Cpu` blocks in [`arith`], [`convert`],
//! [`compare`] and [`control`].

/// Host floating-point environment abstraction.
pub mod host_env;

/// Rounding mode definitions and support.
pub mod rounding_modes;

/// Invalid-operation classification.
pub mod exception_flags;

/// Result classification and CR1 mirroring.
pub mod result_flags;

/// NaN sentinels and signalling-NaN detection.
pub mod nan_handling;

/// Arithmetic, square root, estimates, moves and select.
pub mod arith;

/// Precision and integer conversions.
pub mod convert;

/// Comparisons.
pub mod compare;

/// FPSCR transfer and control.
pub mod control;

pub use self::host_env::{DetachedFenv, HostFpEnv, NativeFenv, current_host_rounding};
pub use self::rounding_modes::RoundingMode;
