//! EVM gas accounting.

pub mod calc;
pub mod constants;
pub mod table;

pub use calc::{memory_expansion_cost, memory_gas, num_words};
pub use constants::*;
pub use table::BASE_COST;

/// Represents the state of gas during execution of one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gas {
    /// The initial gas limit. This is constant throughout execution.
    limit: u64,
    /// The remaining gas.
    remaining: u64,
}

impl Gas {
    /// Creates a new `Gas` struct with the given gas limit.
    #[inline]
    pub const fn new(limit: u64) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    /// Returns the gas limit.
    #[inline]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Returns the amount of gas remaining.
    #[inline]
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Returns the total amount of gas spent.
    #[inline]
    pub const fn spent(&self) -> u64 {
        self.limit - self.remaining
    }

    /// Records a gas cost, returning `false` when the remaining gas does not
    /// cover it. On failure the remaining gas is left untouched.
    #[inline]
    #[must_use = "the caller must halt with an out-of-gas fault on failure"]
    pub fn record_cost(&mut self, cost: u64) -> bool {
        match self.remaining.checked_sub(cost) {
            Some(remaining) => {
                self.remaining = remaining;
                true
            }
            None => false,
        }
    }

    /// Erases a gas cost from remaining (unspent gas returned by a finished
    /// child frame).
    #[inline]
    pub fn erase_cost(&mut self, returned: u64) {
        self.remaining += returned;
    }

    /// Spends all remaining gas.
    #[inline]
    pub fn spend_all(&mut self) {
        self.remaining = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_cost_deducts() {
        let mut gas = Gas::new(100);
        assert!(gas.record_cost(40));
        assert_eq!(gas.remaining(), 60);
        assert_eq!(gas.spent(), 40);
    }

    #[test]
    fn record_cost_fails_without_mutation() {
        let mut gas = Gas::new(10);
        assert!(!gas.record_cost(11));
        assert_eq!(gas.remaining(), 10);
    }

    #[test]
    fn erase_cost_returns_gas() {
        let mut gas = Gas::new(100);
        assert!(gas.record_cost(70));
        gas.erase_cost(30);
        assert_eq!(gas.remaining(), 60);
    }

    #[test]
    fn spend_all_zeroes_remaining() {
        let mut gas = Gas::new(100);
        gas.spend_all();
        assert_eq!(gas.remaining(), 0);
        assert_eq!(gas.spent(), 100);
    }
}
