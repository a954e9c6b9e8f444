//! Memory port trait consumed by the pipeline.
//!
//! The engine never owns memory. Each tick it borrows something implementing
//! `MemoryPort` and performs at most one fetch, one data read, and one data write.
//! It provides:
//! 1. **Instruction Fetch:** A combinational word read.
//! 2. **Data Access:** A combinational word read and a byte-masked word write.
//!
//! Address validation is the implementor's responsibility. The engine passes
//! byte addresses through untouched and expects every call to return.

/// Narrow read/write contract between the core and its instruction/data memories.
pub trait MemoryPort {
    /// Reads the instruction word at a byte address.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address of the instruction (the PC).
    fn fetch(&self, addr: u32) -> u32;

    /// Reads the data word containing a byte address.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address; implementors align it down to a word.
    fn data_read(&self, addr: u32) -> u32;

    /// Writes the enabled byte lanes of a data word.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address; implementors align it down to a word.
    /// * `mask` - Four-bit byte enable, bit `i` for lane `i`.
    /// * `value` - Lane-aligned data; bytes outside `mask` are ignored.
    fn data_write(&mut self, addr: u32, mask: u8, value: u32);
}
