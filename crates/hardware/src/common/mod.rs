//! Common types shared by the floating-point engine.
//!
//! 1. **Error Handling:** Exception representation and the per-instruction result type.
//! 2. **Register Management:** A unified interface for GPR and FPR access.

/// Exception types and the execution result alias.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{ExecResult, Exception, ProgramCause};
pub use reg::RegisterFile;
