use core::ops::{BitAnd, Not};
use ruint::aliases::U256;

/// A frame's byte memory, grown on demand in 32-byte words and never shrunk
/// within the frame's lifetime.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Create a new, empty memory.
    #[inline]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Current memory size in bytes. Always a multiple of 32.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the memory has not been touched yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the full memory contents.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Extend the memory with zeros up to `new_size` bytes. The caller has
    /// already charged the expansion cost and rounded `new_size` up to a
    /// multiple of 32.
    #[inline]
    pub fn resize(&mut self, new_size: usize) {
        debug_assert!(new_size % 32 == 0);
        if new_size > self.data.len() {
            self.data.resize(new_size, 0);
        }
    }

    /// Memory region at the given offset.
    ///
    /// # Panics
    ///
    /// Panics when the range is out of bounds of the resized memory.
    #[inline]
    pub fn slice(&self, offset: usize, size: usize) -> &[u8] {
        &self.data[offset..offset + size]
    }

    /// Set a memory region to `value`. The caller has resized the memory.
    #[inline]
    pub fn set(&mut self, offset: usize, value: &[u8]) {
        if !value.is_empty() {
            self.data[offset..offset + value.len()].copy_from_slice(value);
        }
    }

    /// Store a 256-bit word big-endian at `offset`.
    #[inline]
    pub fn set_u256(&mut self, offset: usize, value: U256) {
        self.data[offset..offset + 32].copy_from_slice(&value.to_be_bytes::<32>());
    }
}

/// Rounds up `x` to the closest multiple of 32, or `None` on overflow.
#[inline]
pub fn next_multiple_of_32(x: usize) -> Option<usize> {
    let r = x.bitand(31).not().wrapping_add(1).bitand(31);
    x.checked_add(r)
}
