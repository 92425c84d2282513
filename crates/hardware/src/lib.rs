//! PowerPC floating-point execution engine.
//!
//! This crate implements the 32-bit PowerPC FPU of a Macintosh emulator core:
//! 1. **Core:** FPSCR state machine, condition register, FPR/GPR files.
//! 2. **FPU:** Arithmetic, fused multiply-add, conversion, comparison and FPSCR control,
//!    with the PowerPC invalid-operation and result-class reporting.
//! 3. **LSU:** Single and double precision loads and stores in every addressing form.
//! 4. **ISA:** Field extraction and opcode decode for the floating-point instructions.
//! 5. **SoC:** The memory-bus seam and a flat big-endian RAM.
//!
//! Arithmetic runs on the host FPU, whose rounding mode follows FPSCR[RN].
//!
//! ```
//! use ppcsim_core::{Config, Cpu};
//! use ppcsim_core::config::HostEnvKind;
//! use ppcsim_core::soc::Memory;
//!
//! let mut config = Config::default();
//! config.fpu.host_env = HostEnvKind::Detached;
//! let mut cpu = Cpu::new(Box::new(Memory::new(0x1000, 0)), &config).unwrap();
//!
//! cpu.regs.write_f64(1, 1.5);
//! cpu.regs.write_f64(2, 2.25);
//! // fadd f3, f1, f2
//! cpu.execute_fp(0xFC61_102A).unwrap();
//! assert_eq!(cpu.regs.read_f64(3), 3.75);
//! ```

/// Common types (exceptions, register file).
pub mod common;
/// Engine configuration (processor model, reset FPSCR, host environment).
pub mod config;
/// CPU core (architectural registers, execution units, dispatch).
pub mod core;
/// Instruction set (field extraction, opcodes, decode).
pub mod isa;
/// System-side collaborators (memory bus, flat RAM).
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Processor state and instruction entry point.
pub use crate::core::Cpu;
