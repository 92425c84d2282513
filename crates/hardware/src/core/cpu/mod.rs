//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the processor state
//! the floating-point engine operates on. It coordinates the following:
//! 1. **State Management:** Maintains GPRs, FPRs, the FPSCR and the condition register.
//! 2. **Host Coupling:** Owns the host floating-point environment through the FPSCR.
//! 3. **Memory Access:** Holds the memory bus used by floating-point loads and stores.
//! 4. **Observability:** Collects per-class statistics and optional instruction tracing.
//!
//! The instructions themselves live with their execution units (`units::fpu`,
//! `units::lsu`) as `impl Cpu` blocks; [`execution`] decodes and dispatches to them.

/// Instruction decode and dispatch.
pub mod execution;

use std::fmt;

use crate::common::RegisterFile;
use crate::config::{Config, ConfigError, HostEnvKind, ProcessorModel};
use crate::core::arch::cr::ConditionRegister;
use crate::core::arch::fpscr::Fpscr;
use crate::core::units::fpu::host_env::{DetachedFenv, HostFpEnv, NativeFenv};
use crate::soc::MemoryBus;
use crate::stats::FpStats;

/// Processor state seen by the floating-point engine.
///
/// One `Cpu` models one emulated core. Instructions run to completion one at a time;
/// the only state shared beyond this struct is the host rounding mode, which is set from
/// RN while an instruction executes and restored afterwards. A `Cpu` may therefore move
/// between host threads between instructions.
pub struct Cpu {
    /// General Purpose and Floating Point Registers.
    pub regs: RegisterFile,
    /// Floating-Point Status and Control Register.
    pub fpscr: Fpscr,
    /// Condition Register.
    pub cr: ConditionRegister,
    /// Memory bus for floating-point loads and stores.
    pub bus: Box<dyn MemoryBus>,
    /// Emulated processor model.
    pub model: ProcessorModel,
    /// Enable instruction tracing.
    pub trace: bool,
    /// Execution statistics.
    pub stats: FpStats,
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("fpscr", &self.fpscr)
            .field("cr", &self.cr)
            .field("model", &self.model)
            .field("trace", &self.trace)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl Cpu {
    /// Creates a CPU with the host environment selected by `config.fpu.host_env`.
    ///
    /// # Arguments
    ///
    /// * `bus` - Memory bus used by loads and stores.
    /// * `config` - Engine configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the configuration fails validation.
    pub fn new(bus: Box<dyn MemoryBus>, config: &Config) -> Result<Self, ConfigError> {
        let host: Box<dyn HostFpEnv> = match config.fpu.host_env {
            HostEnvKind::Native => Box::new(NativeFenv::new()),
            HostEnvKind::Detached => Box::new(DetachedFenv::default()),
        };
        Self::with_host_env(bus, config, host)
    }

    /// Creates a CPU driving an explicitly supplied host environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the configuration fails validation.
    pub fn with_host_env(
        bus: Box<dyn MemoryBus>,
        config: &Config,
        host: Box<dyn HostFpEnv>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut fpscr = Fpscr::new(config.fpu.initial_fpscr, host);
        fpscr.update_summaries();

        tracing::debug!(
            model = ?config.fpu.model,
            fpscr = format_args!("{:#010x}", fpscr.read()),
            "fpu core created"
        );

        Ok(Self {
            regs: RegisterFile::new(),
            fpscr,
            cr: ConditionRegister::default(),
            bus,
            model: config.fpu.model,
            trace: config.general.trace_instructions,
            stats: FpStats::default(),
        })
    }
}
