//! Error types for the fallible surfaces around the pipeline.
//!
//! The engine's `tick` is total and never fails. Errors only arise at the edges:
//! 1. **Loading:** a program image that cannot be placed in instruction memory.
//! 2. **Configuration:** malformed JSON or inconsistent sizes.
//! 3. **Simulation:** a run that does not reach the halted state in its cycle budget.

use std::io;

use thiserror::Error;

/// Errors raised while validating or reading a program image.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The image contained no bytes.
    #[error("program image is empty")]
    Empty,

    /// The image does not fit in the configured instruction memory.
    #[error("program has {words} words but at most {limit} fit in instruction memory")]
    TooLarge {
        /// Word count of the padded image.
        words: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// The last instruction word is not `ecall`, so the run would never halt.
    #[error("program must end with ecall (0x00000073), found {last:#010x}")]
    MissingTerminator {
        /// The final word actually present.
        last: u32,
    },

    /// The image file could not be read.
    #[error("could not read program image: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while building a [`crate::config::Config`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The JSON text did not parse into a configuration.
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A memory size was zero.
    #[error("{0} must be greater than zero")]
    ZeroSized(&'static str),

    /// The program limit exceeds the instruction memory it must fit in.
    #[error("max_program_words ({max}) exceeds imem_words ({imem})")]
    ProgramLimitTooLarge {
        /// Configured program limit.
        max: usize,
        /// Configured instruction memory size.
        imem: usize,
    },
}

/// Errors surfaced by the [`crate::sim::Simulator`] driver.
#[derive(Error, Debug)]
pub enum SimError {
    /// Loading the program failed.
    #[error(transparent)]
    Loader(#[from] LoaderError),

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The core did not reach the halted state within the cycle budget.
    #[error("core did not halt within {limit} cycles")]
    CycleLimitExceeded {
        /// The budget that ran out.
        limit: u64,
    },
}
