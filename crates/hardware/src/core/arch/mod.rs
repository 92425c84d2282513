//! PowerPC architectural state touched by the floating-point engine.
//!
//! 1. **FPSCR:** Floating-point status and control register and its summary rules.
//! 2. **CR:** Condition register fields written by compares and record forms.
//! 3. **FPRs:** Floating-Point Register file implementation.
//! 4. **GPRs:** General-Purpose Register file implementation.

/// Condition register.
pub mod cr;

/// Floating-point status and control register.
pub mod fpscr;

/// Floating-Point Register file implementation.
pub mod fpr;

/// General-Purpose Register file implementation.
pub mod gpr;
