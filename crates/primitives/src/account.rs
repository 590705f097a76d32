//! The account shape owned by a state provider.

use alloy_primitives::{B256, U256};
use alloy_rlp::{RlpDecodable, RlpEncodable};

/// The hash of an account with no code, matching the convention used throughout the Ethereum
/// protocol: `keccak256(&[])`.
pub const EMPTY_CODE_HASH: B256 = alloy_primitives::b256!(
    "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a47"
);

/// An account as owned by a [`StateProvider`](crate::StateProvider) implementation.
///
/// Derives RLP so a trie-backed provider can encode it into a trie leaf directly; this crate
/// never encodes one itself (trie persistence is out of scope, see the crate docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, RlpEncodable, RlpDecodable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Account {
    /// The account's transaction counter.
    pub nonce: u64,
    /// The account's native-token balance.
    pub balance: U256,
    /// The hash of the account's code, or [`EMPTY_CODE_HASH`] for an externally-owned account.
    pub code_hash: B256,
}

impl Account {
    /// An account with zero balance, zero nonce, and no code.
    pub const fn new_empty() -> Self {
        Self { balance: U256::ZERO, nonce: 0, code_hash: EMPTY_CODE_HASH }
    }

    /// An EIP-161 "empty" account: zero balance, zero nonce, no code.
    ///
    /// Used by the state provider to decide whether a touched account should be pruned.
    pub fn is_empty(&self) -> bool {
        self.balance.is_zero() && self.nonce == 0 && self.code_hash == EMPTY_CODE_HASH
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new_empty()
    }
}
