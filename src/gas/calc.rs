//! Gas cost functions for memory expansion.

use super::constants::MEMORY;

/// Number of 32-byte words required to hold `len` bytes.
#[inline]
pub const fn num_words(len: u64) -> u64 {
    len.saturating_add(31) / 32
}

/// Total gas charged for a memory of `num_words` words:
/// `3 * words + words^2 / 512`.
#[inline]
pub const fn memory_gas(num_words: u64) -> u64 {
    MEMORY
        .saturating_mul(num_words)
        .saturating_add(num_words.saturating_mul(num_words) / 512)
}

/// Additional gas required to grow a memory of `current_len` bytes so that it
/// holds `required_len` bytes. Zero when no growth is needed.
#[inline]
pub const fn memory_expansion_cost(current_len: usize, required_len: usize) -> u64 {
    if required_len <= current_len {
        return 0;
    }
    // The word-count cost function is monotone, so the subtraction is exact.
    memory_gas(num_words(required_len as u64)) - memory_gas(num_words(current_len as u64))
}
