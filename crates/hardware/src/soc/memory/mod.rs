//! Flat guest memory.
//!
//! This module implements a simple big-endian RAM region. It provides:
//! 1. **Storage:** A contiguous byte buffer mapped at a base address.
//! 2. **Bus Access:** A [`MemoryBus`] implementation that faults outside the region.
//! 3. **Loading:** Helpers for placing test data and reading it back.

use crate::common::Exception;
use crate::soc::traits::MemoryBus;

/// Contiguous guest RAM mapped at `base`.
#[derive(Clone, Debug)]
pub struct Memory {
    data: Vec<u8>,
    base: u32,
}

impl Memory {
    /// Creates a zero-filled region of `size` bytes at `base`.
    pub fn new(size: usize, base: u32) -> Self {
        Self {
            data: vec![0; size],
            base,
        }
    }

    /// Copies `bytes` into memory at absolute address `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Exception::DataStorage`] if any byte falls outside the region.
    pub fn load(&mut self, addr: u32, bytes: &[u8]) -> Result<(), Exception> {
        let off = self.offset(addr, bytes.len())?;
        self.data[off..off + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Returns `len` bytes at absolute address `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Exception::DataStorage`] if any byte falls outside the region.
    pub fn bytes(&self, addr: u32, len: usize) -> Result<&[u8], Exception> {
        let off = self.offset(addr, len)?;
        Ok(&self.data[off..off + len])
    }

    fn offset(&self, addr: u32, len: usize) -> Result<usize, Exception> {
        let off = addr.wrapping_sub(self.base) as usize;
        if addr < self.base || off.saturating_add(len) > self.data.len() {
            return Err(Exception::DataStorage { addr });
        }
        Ok(off)
    }

    fn read<const N: usize>(&self, addr: u32) -> Result<[u8; N], Exception> {
        let off = self.offset(addr, N)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[off..off + N]);
        Ok(buf)
    }
}

impl MemoryBus for Memory {
    fn read_u32(&mut self, addr: u32) -> Result<u32, Exception> {
        self.read::<4>(addr).map(u32::from_be_bytes)
    }

    fn read_u64(&mut self, addr: u32) -> Result<u64, Exception> {
        self.read::<8>(addr).map(u64::from_be_bytes)
    }

    fn write_u32(&mut self, addr: u32, val: u32) -> Result<(), Exception> {
        self.load(addr, &val.to_be_bytes())
    }

    fn write_u64(&mut self, addr: u32, val: u64) -> Result<(), Exception> {
        self.load(addr, &val.to_be_bytes())
    }
}
