//! Memory-bus trait consumed by the floating-point load/store unit.
//!
//! The FPU never translates addresses or models caches. It computes an effective address
//! and hands a sized access to whatever implements [`MemoryBus`]: an MMU front end in the
//! full emulator, a flat RAM in tests. All accesses are big-endian.
//!
//! A failing access returns the exception the memory subsystem wants delivered
//! (typically [`Exception::DataStorage`]); the FPU propagates it unchanged.

use crate::common::Exception;

/// Sized big-endian access to the guest's effective address space.
pub trait MemoryBus: Send {
    /// Reads a 32-bit word at `addr`.
    fn read_u32(&mut self, addr: u32) -> Result<u32, Exception>;
    /// Reads a 64-bit doubleword at `addr`.
    fn read_u64(&mut self, addr: u32) -> Result<u64, Exception>;
    /// Writes a 32-bit word at `addr`.
    fn write_u32(&mut self, addr: u32, val: u32) -> Result<(), Exception>;
    /// Writes a 64-bit doubleword at `addr`.
    fn write_u64(&mut self, addr: u32, val: u64) -> Result<(), Exception>;
}
