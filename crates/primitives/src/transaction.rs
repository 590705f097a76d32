//! The transaction shape consumed by the executor.
//!
//! Signature recovery, RLP decoding and the mempool are external collaborators; by the time a
//! [`Transaction`] reaches this crate its sender has already been recovered.

use alloy_eips::eip2930::AccessList;
use alloy_primitives::{Address, Bytes, TxKind, B256, U256};

/// A single signed transaction, ready for execution.
///
/// The `access_list` field is carried for interface parity with upstream transaction decoders.
/// The executor's intrinsic gas calculator does not charge for it; see that crate's design notes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transaction {
    /// The hash of the transaction, as computed upstream.
    pub hash: B256,
    /// The sender, recovered from the transaction's signature upstream.
    pub sender: Address,
    /// The transaction's destination: a call to an existing address, or a contract creation.
    pub kind: TxKind,
    /// The amount of native value to transfer to the recipient.
    pub value: U256,
    /// The price the sender is willing to pay per unit of gas.
    pub gas_price: U256,
    /// The maximum amount of gas the sender is willing to have consumed.
    pub gas_limit: u64,
    /// The sender's account nonce at the time the transaction was signed.
    pub nonce: u64,
    /// The call data (for a message call) or init code (for a contract creation).
    pub input: Bytes,
    /// The EIP-2930 access list, unused by intrinsic gas accounting in this crate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub access_list: AccessList,
}

impl Transaction {
    /// Returns `true` if this transaction is a contract creation.
    pub const fn is_create(&self) -> bool {
        matches!(self.kind, TxKind::Create)
    }

    /// Returns the explicit recipient of this transaction, if it is a message call.
    pub const fn to(&self) -> Option<Address> {
        match self.kind {
            TxKind::Call(to) => Some(to),
            TxKind::Create => None,
        }
    }
}
