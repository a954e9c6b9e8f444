//! Word-addressed instruction and data memory.
//!
//! This module implements the memory collaborator used by the simulator. It provides:
//! 1. **Storage:** Separate instruction and data arrays of 32-bit words.
//! 2. **Bounds Policy:** Out-of-range reads return 0 and out-of-range writes are dropped,
//!    each reported as a `warn` event rather than a fault.
//! 3. **Observability:** A written-address range tracker and the last store transaction.

use serde::Serialize;

use crate::common::constants::{WORD_BYTES, WORD_SHIFT};
use crate::core::units::lsu::merge_bytes;
use crate::soc::traits::MemoryPort;

/// The most recent store applied to data memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StoreTransaction {
    /// Byte address as issued by the store.
    pub address: u32,
    /// Lane-aligned data.
    pub data: u32,
    /// Byte enables.
    pub mask: u8,
}

/// Lowest and highest byte address touched by stores since the last reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WriteRange {
    /// Lowest byte written.
    pub min: u32,
    /// Highest byte written.
    pub max: u32,
}

/// Instruction and data memory backed by two word vectors.
#[derive(Clone, Debug, Default)]
pub struct WordMemory {
    imem: Vec<u32>,
    dmem: Vec<u32>,
    range: Option<WriteRange>,
    last_store: Option<StoreTransaction>,
}

impl WordMemory {
    /// Creates zero-filled memories.
    ///
    /// # Arguments
    ///
    /// * `imem_words` - Instruction memory size in words.
    /// * `dmem_words` - Data memory size in words.
    pub fn new(imem_words: usize, dmem_words: usize) -> Self {
        Self {
            imem: vec![0; imem_words],
            dmem: vec![0; dmem_words],
            range: None,
            last_store: None,
        }
    }

    /// Replaces instruction memory with a program, zero-filling the rest.
    ///
    /// Words past the end of instruction memory are dropped with a warning;
    /// the loader rejects such programs before they get here.
    pub fn load_program(&mut self, words: &[u32]) {
        Self::fill(&mut self.imem, words, "instruction");
    }

    /// Replaces data memory with an initial image, zero-filling the rest.
    ///
    /// Also clears the write-range tracker and the last store.
    pub fn load_data(&mut self, words: &[u32]) {
        Self::fill(&mut self.dmem, words, "data");
        self.range = None;
        self.last_store = None;
    }

    fn fill(mem: &mut [u32], words: &[u32], which: &str) {
        mem.fill(0);
        if words.len() > mem.len() {
            tracing::warn!(
                memory = which,
                words = words.len(),
                capacity = mem.len(),
                "image truncated to memory size"
            );
        }
        let n = words.len().min(mem.len());
        mem[..n].copy_from_slice(&words[..n]);
    }

    /// Reads a data word without going through the port, for inspection.
    pub fn data_word(&self, addr: u32) -> u32 {
        self.dmem.get(word_index(addr)).copied().unwrap_or(0)
    }

    /// The byte range written since the last data load, or `None` if nothing was stored.
    pub const fn write_range(&self) -> Option<WriteRange> {
        self.range
    }

    /// The most recent store, if any.
    pub const fn last_store(&self) -> Option<StoreTransaction> {
        self.last_store
    }

    /// Instruction memory size in bytes.
    pub const fn imem_bytes(&self) -> usize {
        self.imem.len() * WORD_BYTES
    }

    /// Data memory size in bytes.
    pub const fn dmem_bytes(&self) -> usize {
        self.dmem.len() * WORD_BYTES
    }

    fn track(&mut self, addr: u32, mask: u8) {
        let base = addr & !0b11;
        let lo = base + mask.trailing_zeros();
        let hi = base + (7 - mask.leading_zeros());
        self.range = Some(match self.range {
            Some(r) => WriteRange {
                min: r.min.min(lo),
                max: r.max.max(hi),
            },
            None => WriteRange { min: lo, max: hi },
        });
    }
}

#[inline]
const fn word_index(addr: u32) -> usize {
    (addr >> WORD_SHIFT) as usize
}

impl MemoryPort for WordMemory {
    fn fetch(&self, addr: u32) -> u32 {
        self.imem.get(word_index(addr)).copied().unwrap_or_else(|| {
            tracing::warn!(addr = format_args!("{addr:#010x}"), "fetch outside instruction memory");
            0
        })
    }

    fn data_read(&self, addr: u32) -> u32 {
        self.dmem.get(word_index(addr)).copied().unwrap_or_else(|| {
            tracing::warn!(addr = format_args!("{addr:#010x}"), "load outside data memory");
            0
        })
    }

    fn data_write(&mut self, addr: u32, mask: u8, value: u32) {
        let mask = mask & 0b1111;
        if mask == 0 {
            return;
        }
        let Some(slot) = self.dmem.get_mut(word_index(addr)) else {
            tracing::warn!(addr = format_args!("{addr:#010x}"), "store outside data memory dropped");
            return;
        };
        *slot = merge_bytes(*slot, value, mask);
        tracing::debug!(
            addr = format_args!("{addr:#010x}"),
            mask = format_args!("{mask:04b}"),
            value = format_args!("{value:#010x}"),
            "store"
        );
        self.track(addr, mask);
        self.last_store = Some(StoreTransaction {
            address: addr,
            data: value,
            mask,
        });
    }
}
