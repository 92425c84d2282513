//! System-side collaborators of the floating-point engine.
//!
//! The FPU consumes a memory bus for loads and stores; this module defines that seam
//! and a flat RAM implementation of it.

/// Flat big-endian guest memory.
pub mod memory;

/// Memory-bus trait definitions.
pub mod traits;

pub use memory::Memory;
pub use traits::MemoryBus;
