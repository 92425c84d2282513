//! Configuration system for the PowerPC FPU engine.
//!
//! This module defines the configuration structures used to parameterize the engine.
//! It provides:
//! 1. **Defaults:** Baseline processor model and FPSCR reset value.
//! 2. **Structures:** Hierarchical config for general and FPU settings.
//! 3. **Enums:** Processor model and host floating-point environment selection.
//! 4. **Loading:** JSON parsing from strings and files, with validation.
//!
//! Use `Config::default()` for a 603e-style core that drives the host FPU.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::arch::fpscr;

/// Default configuration constants.
mod defaults {
    /// FPSCR value at reset: all exceptions clear, round to nearest.
    pub const INITIAL_FPSCR: u32 = 0;
}

/// Errors produced while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration text is not valid JSON for [`Config`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the engine cannot start with.
    #[error("invalid configuration value for `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Processor model whose FPU behavior is emulated.
///
/// The models differ in how `mffs` pads the upper word of the destination register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ProcessorModel {
    /// PowerPC 601: `mffs` pads with `0xFFFF_FFFF`.
    #[serde(alias = "601")]
    Mpc601,
    /// PowerPC 603e and later: `mffs` pads with `0xFFF8_0000`.
    #[default]
    #[serde(alias = "603e")]
    Mpc603e,
}

/// Host floating-point environment backing the FPSCR rounding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum HostEnvKind {
    /// Apply RN to the host FPU of the executing thread.
    #[default]
    Native,
    /// Record RN only; host arithmetic keeps its current rounding mode.
    Detached,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ppcsim_core::config::{Config, ProcessorModel};
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.fpu.model, ProcessorModel::Mpc603e);
/// ```
///
/// Deserializing from JSON; omitted fields take their defaults:
///
/// ```
/// use ppcsim_core::config::{Config, HostEnvKind, ProcessorModel};
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "fpu": { "model": "Mpc601", "initial_fpscr": 1, "host_env": "Detached" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.fpu.model, ProcessorModel::Mpc601);
/// assert_eq!(config.fpu.initial_fpscr, 1);
/// assert_eq!(config.fpu.host_env, HostEnvKind::Detached);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Floating-point unit settings.
    #[serde(default)]
    pub fpu: FpuConfig,
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace` event for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Floating-point unit settings.
#[derive(Debug, Clone, Deserialize)]
pub struct FpuConfig {
    /// Emulated processor model.
    #[serde(default)]
    pub model: ProcessorModel,

    /// FPSCR value at reset.
    #[serde(default = "FpuConfig::default_initial_fpscr")]
    pub initial_fpscr: u32,

    /// Host environment that receives rounding-mode changes.
    #[serde(default)]
    pub host_env: HostEnvKind,
}

impl FpuConfig {
    fn default_initial_fpscr() -> u32 {
        defaults::INITIAL_FPSCR
    }
}

impl Default for FpuConfig {
    fn default() -> Self {
        Self {
            model: ProcessorModel::default(),
            initial_fpscr: defaults::INITIAL_FPSCR,
            host_env: HostEnvKind::default(),
        }
    }
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::Invalid`]
    /// for values rejected by [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks values that deserialize fine but describe an impossible reset state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the initial FPSCR has the reserved bit or
    /// FEX set. FEX is derived state and cannot be chosen independently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let initial = self.fpu.initial_fpscr;
        if initial & fpscr::RESERVED != 0 {
            return Err(ConfigError::Invalid {
                field: "fpu.initial_fpscr",
                reason: format!("reserved bit 20 set in {initial:#010x}"),
            });
        }
        if initial & fpscr::FEX != 0 {
            return Err(ConfigError::Invalid {
                field: "fpu.initial_fpscr",
                reason: format!("FEX is derived and may not be preset ({initial:#010x})"),
            });
        }
        Ok(())
    }
}
