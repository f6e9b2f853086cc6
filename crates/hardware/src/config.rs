//! Configuration system for the ALU simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline values applied to any field a config omits.
//! 2. **Structures:** General run settings and ALU selection.
//!
//! Configuration is supplied as JSON, or use `Config::default()`.

use serde::Deserialize;

use crate::common::error::SimError;
use crate::core::pipeline::engine::AluVariant;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::core::pipeline::engine::AluVariant;

    /// Per-cycle tracing is off unless requested.
    pub const TRACE_CYCLES: bool = false;

    /// Default ALU timing model.
    pub const VARIANT: AluVariant = AluVariant::Pipelined;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use rvalu_core::config::Config;
/// use rvalu_core::core::pipeline::engine::AluVariant;
///
/// let config = Config::default();
/// assert!(!config.general.trace_cycles);
/// assert_eq!(config.alu.variant, AluVariant::Pipelined);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use rvalu_core::config::Config;
/// use rvalu_core::core::pipeline::engine::AluVariant;
///
/// let json = r#"{
///     "general": { "trace_cycles": true, "max_cycles": 1000 },
///     "alu": { "variant": "SingleCycle" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_cycles);
/// assert_eq!(config.general.max_cycles, Some(1000));
/// assert_eq!(config.alu.variant, AluVariant::SingleCycle);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// ALU selection.
    #[serde(default)]
    pub alu: AluConfig,
}

impl Config {
    /// Parses a configuration from JSON. Omitted fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Parse`] if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, or
    /// [`SimError::Parse`] if its contents are malformed.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `tracing` debug event for every cycle.
    #[serde(default = "GeneralConfig::default_trace_cycles")]
    pub trace_cycles: bool,

    /// Abort with [`SimError::CycleLimit`] after this many cycles.
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

impl GeneralConfig {
    const fn default_trace_cycles() -> bool {
        defaults::TRACE_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_cycles: defaults::TRACE_CYCLES,
            max_cycles: None,
        }
    }
}

/// ALU selection.
#[derive(Debug, Clone, Deserialize)]
pub struct AluConfig {
    /// Timing model to simulate.
    #[serde(default = "AluConfig::default_variant")]
    pub variant: AluVariant,
}

impl AluConfig {
    const fn default_variant() -> AluVariant {
        defaults::VARIANT
    }
}

impl Default for AluConfig {
    fn default() -> Self {
        Self {
            variant: defaults::VARIANT,
        }
    }
}
