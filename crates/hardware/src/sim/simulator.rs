//! Simulator: owns the core, its memories, and the configuration side-by-side.
//!
//! The core borrows memory only for the duration of a tick, so the driver can
//! hand out both halves independently between ticks.

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::{Core, TickControl};
use crate::sim::loader;
use crate::soc::memory::WordMemory;

/// Top-level simulator: pipeline core plus instruction and data memory.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// Pipeline and register state.
    pub core: Core,
    /// Instruction and data memory the core ticks against.
    pub memory: WordMemory,
    /// Configuration the simulator was built from.
    pub config: Config,
}

impl Simulator {
    /// Creates a simulator with zeroed memories sized from `config`.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` if the configuration fails validation.
    pub fn new(config: Config) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            core: Core::with_config(&config),
            memory: WordMemory::new(config.memory.imem_words, config.memory.dmem_words),
            config,
        })
    }

    /// Loads instruction words and resets the pipeline. Registers and data memory are kept.
    pub fn load_program(&mut self, words: &[u32]) {
        self.memory.load_program(words);
        self.core.tick(&mut self.memory, TickControl::Reset);
        tracing::info!(words = words.len(), "program loaded");
    }

    /// Validates a byte image and loads it as the program.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Loader` if the image is rejected.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<(), SimError> {
        let words = loader::load_bytes(bytes, self.config.memory.max_program_words)?;
        self.load_program(&words);
        Ok(())
    }

    /// Applies one tick with the given control.
    pub fn tick(&mut self, control: TickControl) {
        self.core.tick(&mut self.memory, control);
    }

    /// Runs one normal tick.
    pub fn step(&mut self) {
        self.tick(TickControl::Run);
    }

    /// Returns the core to PC 0 with empty latches.
    pub fn reset(&mut self) {
        self.tick(TickControl::Reset);
        tracing::info!("simulator reset");
    }

    /// Ticks until the core halts.
    ///
    /// # Returns
    ///
    /// The number of ticks this call ran.
    ///
    /// # Errors
    ///
    /// Returns `SimError::CycleLimitExceeded` if the core is still running
    /// after `config.general.max_cycles` ticks.
    pub fn run_until_halt(&mut self) -> Result<u64, SimError> {
        let limit = self.config.general.max_cycles;
        let mut ticks = 0;
        while !self.core.halted() {
            if ticks >= limit {
                tracing::warn!(limit, pc = self.core.pc(), "cycle limit reached");
                return Err(SimError::CycleLimitExceeded { limit });
            }
            self.step();
            ticks += 1;
        }
        Ok(ticks)
    }
}
