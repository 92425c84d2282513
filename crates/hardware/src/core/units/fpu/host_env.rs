//! Host floating-point environment.
//!
//! Guest arithmetic executes on the host FPU and relies on its rounding, so the guest
//! `FPSCR[RN]` field has to be mirrored into the host environment. The [`HostFpEnv`] trait
//! is that seam:
//! - [`NativeFenv`] drives the real host FPU through the C library's `fesetround`.
//! - [`DetachedFenv`] only records the requested mode, for embedders that run guest
//!   arithmetic elsewhere and for tests of the synchronization itself.
//!
//! The host rounding mode is per host thread, not per emulated core. The guest mode is
//! installed only for the duration of one instruction: [`HostFpEnv::enter`] saves the
//! thread's mode and applies RN, [`HostFpEnv::leave`] puts the saved mode back. An RN
//! change inside that window is applied immediately, so later arithmetic in the same
//! instruction already sees it. Between instructions the thread keeps its own mode and
//! the processor state can move to another thread freely.
//!
//! rustc and LLVM assume the default floating-point environment. Arithmetic whose
//! operands are compile-time constants may be folded under round-to-nearest, so guest
//! arithmetic must stay on runtime register values (tests route literals through
//! `std::hint::black_box`) and must run between `enter` and `leave`.

use libc::c_int;

use super::rounding_modes::RoundingMode;

/// Abstraction over the host's floating-point rounding control.
pub trait HostFpEnv: Send {
    /// Selects the mode guest arithmetic runs in.
    ///
    /// Inside an `enter`/`leave` window the host is switched before this returns.
    fn set_rounding(&mut self, mode: RoundingMode);

    /// Returns the mode guest arithmetic runs in.
    fn rounding(&self) -> RoundingMode;

    /// Installs the guest mode on the calling thread until [`HostFpEnv::leave`].
    fn enter(&mut self) {}

    /// Restores the mode the calling thread had before [`HostFpEnv::enter`].
    fn leave(&mut self) {}
}

/// Returns the rounding mode of the calling thread's FPU.
pub fn current_host_rounding() -> RoundingMode {
    // SAFETY: fegetround only reads the calling thread's FP control word.
    from_fenv(unsafe { fegetround() })
}

fn apply(mode: RoundingMode) {
    // SAFETY: fesetround only writes the calling thread's FP control word, and the
    // argument is one of the four standard FE_* constants for this target.
    let rc = unsafe { fesetround(to_fenv(mode)) };
    if rc != 0 {
        tracing::warn!(?mode, rc, "fesetround rejected rounding mode");
    }
}

#[link(name = "m")]
unsafe extern "C" {
    fn fegetround() -> c_int;
    fn fesetround(round: c_int) -> c_int;
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod consts {
    use libc::c_int;
    pub const FE_TONEAREST: c_int = 0x0000;
    pub const FE_DOWNWARD: c_int = 0x0400;
    pub const FE_UPWARD: c_int = 0x0800;
    pub const FE_TOWARDZERO: c_int = 0x0c00;
}

#[cfg(target_arch = "aarch64")]
mod consts {
    use libc::c_int;
    pub const FE_TONEAREST: c_int = 0x00_0000;
    pub const FE_UPWARD: c_int = 0x40_0000;
    pub const FE_DOWNWARD: c_int = 0x80_0000;
    pub const FE_TOWARDZERO: c_int = 0xc0_0000;
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
compile_error!("fenv constants need porting for this host architecture");

use consts::{FE_DOWNWARD, FE_TONEAREST, FE_TOWARDZERO, FE_UPWARD};

fn to_fenv(mode: RoundingMode) -> c_int {
    match mode {
        RoundingMode::Nearest => FE_TONEAREST,
        RoundingMode::TowardZero => FE_TOWARDZERO,
        RoundingMode::TowardPosInf => FE_UPWARD,
        RoundingMode::TowardNegInf => FE_DOWNWARD,
    }
}

fn from_fenv(raw: c_int) -> RoundingMode {
    match raw {
        FE_TOWARDZERO => RoundingMode::TowardZero,
        FE_UPWARD => RoundingMode::TowardPosInf,
        FE_DOWNWARD => RoundingMode::TowardNegInf,
        _ => RoundingMode::Nearest,
    }
}

/// Host environment backed by the C floating-point environment of the executing thread.
///
/// The guest mode is only in force between [`HostFpEnv::enter`] and [`HostFpEnv::leave`],
/// on the thread that called `enter`. Dropping the value inside that window restores the
/// saved mode.
#[derive(Debug)]
pub struct NativeFenv {
    guest: RoundingMode,
    saved: Option<c_int>,
}

impl NativeFenv {
    /// Creates an environment whose guest mode starts as the calling thread's mode.
    pub fn new() -> Self {
        Self {
            guest: current_host_rounding(),
            saved: None,
        }
    }
}

impl Default for NativeFenv {
    fn default() -> Self {
        Self::new()
    }
}

impl HostFpEnv for NativeFenv {
    fn set_rounding(&mut self, mode: RoundingMode) {
        self.guest = mode;
        if self.saved.is_some() {
            apply(mode);
        }
    }

    fn rounding(&self) -> RoundingMode {
        self.guest
    }

    fn enter(&mut self) {
        if self.saved.is_none() {
            // SAFETY: see `current_host_rounding`.
            self.saved = Some(unsafe { fegetround() });
        }
        apply(self.guest);
    }

    fn leave(&mut self) {
        if let Some(saved) = self.saved.take() {
            // SAFETY: `saved` was produced by fegetround on this thread.
            let _ = unsafe { fesetround(saved) };
        }
    }
}

impl Drop for NativeFenv {
    fn drop(&mut self) {
        self.leave();
    }
}

/// Host environment that records the requested mode without touching the host FPU.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedFenv {
    mode: Option<RoundingMode>,
}

impl HostFpEnv for DetachedFenv {
    fn set_rounding(&mut self, mode: RoundingMode) {
        self.mode = Some(mode);
    }

    fn rounding(&self) -> RoundingMode {
        self.mode.unwrap_or(RoundingMode::Nearest)
    }
}
