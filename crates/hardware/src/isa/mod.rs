//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, extended opcodes, and decoding logic for the
//! PowerPC floating-point instructions.

/// Floating-point instruction decoder.
pub mod decode;

/// Instruction field extraction and the decoded operand structure.
pub mod instruction;

/// Floating-point primary and extended opcodes.
pub mod ppcfp;

pub use decode::{FpClass, FpOp, decode};
pub use instruction::{FpDecoded, InstructionBits};
