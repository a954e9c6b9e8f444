//! Configuration for the pipeline simulator.
//!
//! This module defines the configuration structures used to size memories and
//! control tracing. It provides:
//! 1. **Defaults:** Baseline memory geometry and run limits.
//! 2. **Structures:** `GeneralConfig` and `MemoryConfig` under a root `Config`.
//! 3. **Validation:** `Config::from_json` parses and rejects inconsistent sizes.
//!
//! Every field is optional in JSON; missing fields fall back to `defaults`.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Instruction memory size in 32-bit words.
    pub const IMEM_WORDS: usize = 256;

    /// Data memory size in 32-bit words.
    pub const DMEM_WORDS: usize = 1024;

    /// Largest program image accepted by the loader, in words.
    pub const MAX_PROGRAM_WORDS: usize = 256;

    /// Cycle budget for `Simulator::run_until_halt`.
    pub const MAX_CYCLES: u64 = 10_000;
}

/// Root configuration for the simulator.
///
/// # Examples
///
/// ```
/// use rvpipe_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_pipeline": true },
///     "memory": { "dmem_words": 4096 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_pipeline);
/// assert_eq!(config.general.max_cycles, 10_000);
/// assert_eq!(config.memory.dmem_words, 4096);
/// assert_eq!(config.memory.imem_words, 256);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Instruction and data memory geometry
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON and validates it.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON text; any subset of fields may be present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON, or a size error from
    /// [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that memory sizes are usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroSized` if either memory is empty, or
    /// `ConfigError::ProgramLimitTooLarge` if a maximal program would not fit
    /// in instruction memory.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        let mem = &self.memory;
        if mem.imem_words == 0 {
            return Err(ConfigError::ZeroSized("imem_words"));
        }
        if mem.dmem_words == 0 {
            return Err(ConfigError::ZeroSized("dmem_words"));
        }
        if mem.max_program_words > mem.imem_words {
            return Err(ConfigError::ProgramLimitTooLarge {
                max: mem.max_program_words,
                imem: mem.imem_words,
            });
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace` event for every stall, flush, redirect, and forwarding choice.
    #[serde(default)]
    pub trace_pipeline: bool,

    /// Cycle budget before `run_until_halt` gives up.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_pipeline: false,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Instruction and data memory geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Instruction memory size in 32-bit words.
    #[serde(default = "MemoryConfig::default_imem_words")]
    pub imem_words: usize,

    /// Data memory size in 32-bit words.
    #[serde(default = "MemoryConfig::default_dmem_words")]
    pub dmem_words: usize,

    /// Largest program image accepted by the loader, in words.
    #[serde(default = "MemoryConfig::default_max_program_words")]
    pub max_program_words: usize,
}

impl MemoryConfig {
    const fn default_imem_words() -> usize {
        defaults::IMEM_WORDS
    }

    const fn default_dmem_words() -> usize {
        defaults::DMEM_WORDS
    }

    const fn default_max_program_words() -> usize {
        defaults::MAX_PROGRAM_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            imem_words: defaults::IMEM_WORDS,
            dmem_words: defaults::DMEM_WORDS,
            max_program_words: defaults::MAX_PROGRAM_WORDS,
        }
    }
}
