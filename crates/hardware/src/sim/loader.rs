//! Program image loader.
//!
//! Turns a raw little-endian byte image into instruction words ready for
//! `WordMemory::load_program`. It performs:
//! 1. **Padding:** A trailing partial word is zero-filled.
//! 2. **Size check:** The image must fit the configured program limit.
//! 3. **Terminator check:** The last word must be `ecall`, or the core would never halt.

use std::fs;
use std::path::Path;

use crate::common::constants::WORD_BYTES;
use crate::common::error::LoaderError;
use crate::isa::rv32i::opcodes::ECALL;

/// Converts a byte image into instruction words.
///
/// # Arguments
///
/// * `bytes` - The raw image, little-endian.
/// * `max_words` - Largest accepted program, in words.
///
/// # Errors
///
/// `LoaderError::Empty` for a zero-length image, `LoaderError::TooLarge` when
/// the padded image exceeds `max_words`, and `LoaderError::MissingTerminator`
/// when the final word is not `ecall`.
pub fn load_bytes(bytes: &[u8], max_words: usize) -> Result<Vec<u32>, LoaderError> {
    if bytes.is_empty() {
        return Err(LoaderError::Empty);
    }

    let rem = bytes.len() % WORD_BYTES;
    if rem != 0 {
        tracing::warn!(
            len = bytes.len(),
            pad = WORD_BYTES - rem,
            "image length is not word aligned; zero-padding"
        );
    }

    let words: Vec<u32> = bytes
        .chunks(WORD_BYTES)
        .map(|chunk| {
            let mut buf = [0u8; WORD_BYTES];
            buf[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(buf)
        })
        .collect();

    if words.len() > max_words {
        return Err(LoaderError::TooLarge {
            words: words.len(),
            limit: max_words,
        });
    }

    match words.last() {
        Some(&ECALL) => {}
        Some(&last) => return Err(LoaderError::MissingTerminator { last }),
        None => return Err(LoaderError::Empty),
    }

    tracing::debug!(words = words.len(), "program image decoded");
    Ok(words)
}

/// Reads a program image from disk and converts it with [`load_bytes`].
///
/// # Errors
///
/// `LoaderError::Io` if the file cannot be read, otherwise as [`load_bytes`].
pub fn load_file(path: impl AsRef<Path>, max_words: usize) -> Result<Vec<u32>, LoaderError> {
    let bytes = fs::read(path.as_ref())?;
    load_bytes(&bytes, max_words)
}
