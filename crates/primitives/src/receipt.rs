//! The receipt produced for each executed transaction.

use crate::LogEntry;
use alloy_primitives::{Address, Bloom, B256};

/// The outcome recorded for an executed transaction.
///
/// [`Self::status`] is always assembled. [`Self::post_state_root`] is the sole field gated on
/// the active spec: it is only populated pre-Byzantium, when EIP-658 has not yet replaced the
/// post-transaction state root with a status code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionReceipt {
    /// The transaction's status.
    pub status: ReceiptStatus,
    /// The post-transaction state root, populated when `eip658_enabled` is unset.
    pub post_state_root: Option<B256>,
    /// The amount of gas used by this transaction plus all transactions preceding it in the
    /// block.
    pub cumulative_gas_used: u64,
    /// The logs emitted by this transaction, empty on a reverted or pre-flight-rejected
    /// transaction.
    pub logs: Vec<LogEntry>,
    /// The bloom filter over this transaction's own logs.
    pub bloom: Bloom,
    /// The transaction's recipient: the explicit `to` for a message call, or the derived address
    /// for a contract creation.
    pub recipient: Address,
}

impl TransactionReceipt {
    /// Builds the null receipt returned for a transaction rejected before execution begins: no
    /// gas consumed, no logs, and a failure status.
    pub fn rejected(cumulative_gas_used: u64, recipient: Address, eip658_enabled: bool) -> Self {
        Self {
            status: ReceiptStatus::Failure,
            post_state_root: (!eip658_enabled).then_some(B256::ZERO),
            cumulative_gas_used,
            logs: Vec::new(),
            bloom: Bloom::ZERO,
            recipient,
        }
    }

    /// Returns `true` if this receipt reports the transaction as successful.
    pub fn is_success(&self) -> bool {
        matches!(self.status, ReceiptStatus::Success)
    }
}

/// The EIP-658 transaction status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReceiptStatus {
    /// The transaction's top-level call completed without reverting.
    Success,
    /// The transaction's top-level call reverted, ran out of gas, or was otherwise rejected.
    Failure,
}
