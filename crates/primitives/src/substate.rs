//! The accumulated effect of a single VM invocation.

use alloy_primitives::{Address, Bytes, B256};
use std::collections::HashSet;

/// A single log emitted during VM execution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    /// The address of the contract that emitted the log.
    pub address: Address,
    /// The log's indexed topics, in emission order.
    pub topics: Vec<B256>,
    /// The log's unindexed data.
    pub data: Bytes,
}

impl LogEntry {
    /// Constructs a new log entry.
    pub fn new(address: Address, topics: Vec<B256>, data: Bytes) -> Self {
        Self { address, topics, data }
    }
}

/// The substate produced by a VM invocation: the logs, destroy-list, and refund counter
/// accumulated across the entire call tree, plus whether the top-level call reverted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionSubstate {
    /// Set by an explicit `REVERT`. Forces the refund to zero and causes the executor to discard
    /// `logs` and `destroy_list` after restoring snapshots.
    pub should_revert: bool,
    /// Logs emitted across the call tree, in emission order.
    pub logs: Vec<LogEntry>,
    /// Accounts marked for deletion by `SELFDESTRUCT`, across the call tree.
    pub destroy_list: HashSet<Address>,
    /// Gas the VM elects to return to the sender, before the refund cap is applied.
    pub refund_counter: u64,
}

impl TransactionSubstate {
    /// An empty substate: no revert, no logs, no destroys, no refund.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A substate representing an explicit `REVERT`, carrying the logs and destroys accumulated
    /// up to the point of the revert (the executor discards both on this path; they are retained
    /// here only so a tracer can observe what the VM attempted).
    pub fn reverted(logs: Vec<LogEntry>, destroy_list: HashSet<Address>) -> Self {
        Self { should_revert: true, logs, destroy_list, refund_counter: 0 }
    }
}
