//! Exception and execution-result definitions.
//!
//! This module defines how an instruction leaves the floating-point engine early. It provides:
//! 1. **Exception Representation:** The architectural exceptions an FPU instruction can raise.
//! 2. **Program Causes:** The sub-causes reported through the program exception vector.
//! 3. **Execution Result:** The `ExecResult` alias every operation returns.
//!
//! Sticky FPSCR status bits are *not* errors: they are recorded in the FPSCR and observed
//! by guest software. Only conditions that abort the current instruction appear here.

use thiserror::Error;

/// Sub-cause reported with a program exception.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProgramCause {
    /// Invalid instruction form, e.g. an update-form load/store with `rA = 0`.
    IllegalInstruction,
    /// An enabled floating-point exception was detected (`FPSCR[VE]` set on an invalid operation).
    FloatingPointEnabled,
}

/// Exceptions handed to the external exception-delivery mechanism.
///
/// Raising one of these aborts the remaining effects of the current instruction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Exception {
    /// Program exception (vector `0x700`).
    #[error("program exception: {0:?}")]
    Program(ProgramCause),

    /// Data storage exception raised by the memory subsystem (vector `0x300`).
    #[error("data storage exception at {addr:#010x}")]
    DataStorage {
        /// Faulting effective address.
        addr: u32,
    },

    /// Alignment exception raised by the memory subsystem (vector `0x600`).
    #[error("alignment exception at {addr:#010x}")]
    Alignment {
        /// Faulting effective address.
        addr: u32,
    },
}

impl Exception {
    /// Shorthand for `Program(IllegalInstruction)`.
    pub const ILLEGAL: Self = Self::Program(ProgramCause::IllegalInstruction);

    /// Shorthand for `Program(FloatingPointEnabled)`.
    pub const FP_ENABLED: Self = Self::Program(ProgramCause::FloatingPointEnabled);

    /// Returns the PowerPC exception vector offset for this exception.
    pub fn vector(&self) -> u32 {
        match self {
            Self::DataStorage { .. } => 0x300,
            Self::Alignment { .. } => 0x600,
            Self::Program(_) => 0x700,
        }
    }
}

/// Outcome of executing a single instruction.
///
/// `Ok(())` means the instruction completed; `Err` carries the exception that must be
/// delivered instead. The caller (the dispatch loop) decides how to unwind.
pub type ExecResult = Result<(), Exception>;
