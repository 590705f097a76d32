//! The slice of a block header the executor reads and mutates.

use alloy_primitives::Address;

/// The portion of a block header the executor needs.
///
/// Owned by the caller and borrowed for the duration of a single `execute` call; the executor
/// mutates [`Self::gas_used`] but retains no reference across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockHeader {
    /// The block number, used to resolve the active hard-fork rule set.
    pub number: u64,
    /// The address credited with transaction fees.
    pub beneficiary: Address,
    /// The maximum amount of gas all transactions in the block may consume in total.
    pub gas_limit: u64,
    /// The amount of gas consumed by transactions processed so far in this block.
    ///
    /// Monotonically non-decreasing across a sequence of `execute` calls against the same
    /// header.
    pub gas_used: u64,
}

impl BlockHeader {
    /// Returns the amount of gas still available in the block.
    pub const fn gas_remaining(&self) -> u64 {
        self.gas_limit.saturating_sub(self.gas_used)
    }
}
