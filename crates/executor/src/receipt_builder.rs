//! Assembly of the observable [`TransactionReceipt`].

use crate::bloom::LogBloomBuilder;
use alloy_primitives::Address;
use tx_primitives::{LogEntry, ReceiptStatus, TransactionReceipt};

/// Assembles a [`TransactionReceipt`] from the outcome of one `execute` call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReceiptBuilder;

impl ReceiptBuilder {
    /// Builds the receipt for a transaction that reached VM entry.
    ///
    /// `logs` is empty on the revert/fault path (the executor clears it before calling this);
    /// `state_root` is consulted only when `eip658_enabled` is unset.
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        &self,
        success: bool,
        cumulative_gas_used: u64,
        logs: Vec<LogEntry>,
        recipient: Address,
        state_root: impl FnOnce() -> alloy_primitives::B256,
        eip658_enabled: bool,
    ) -> TransactionReceipt {
        let bloom = LogBloomBuilder.build(&logs);
        TransactionReceipt {
            status: if success { ReceiptStatus::Success } else { ReceiptStatus::Failure },
            post_state_root: (!eip658_enabled).then(state_root),
            cumulative_gas_used,
            logs,
            bloom,
            recipient,
        }
    }
}
