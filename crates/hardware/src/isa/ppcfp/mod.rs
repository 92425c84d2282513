//! PowerPC Floating-Point Instructions.
//!
//! Defines the encodings of the floating-point instructions implemented by the FPU.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes for floating-point loads, stores and arithmetic.
//! - `xo`: Extended opcodes under primaries 31, 59 and 63.

/// Extended opcode definitions.
pub mod xo;

/// Primary opcode definitions.
pub mod opcodes;
