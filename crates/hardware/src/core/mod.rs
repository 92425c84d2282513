//! Core processor implementation.
//!
//! This module contains the processor state the floating-point engine operates on, the
//! architectural registers, and the execution units that implement the instructions.

/// Architectural registers (FPSCR, CR, FPRs, GPRs).
pub mod arch;

/// CPU state container and instruction dispatch.
pub mod cpu;

/// Execution units (FPU and floating-point LSU).
pub mod units;

pub use self::cpu::Cpu;
