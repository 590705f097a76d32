//! The hard-fork-parameterized rule set consulted by the executor.

/// The set of protocol rule flags active for a given block.
///
/// Resolved once per transaction from a [`SpecProvider`](crate::SpecProvider) keyed by block
/// number, then held immutably for the remainder of `execute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveSpec {
    /// EIP-2 (Homestead): contract-creation transactions pay a creation surcharge as part of
    /// their intrinsic gas, and running out of gas while paying the code-deposit cost fails the
    /// whole transaction rather than silently depositing empty code.
    pub eip2_enabled: bool,
    /// EIP-158 (Spurious Dragon): accounts touched but left empty (zero balance, zero nonce, no
    /// code) are pruned by the state provider at commit time.
    pub eip158_enabled: bool,
    /// EIP-170 (Spurious Dragon): contract code may not exceed [`MAX_CODE_SIZE`](crate::MAX_CODE_SIZE)
    /// bytes; a creation that would deposit more is treated as unaffordable.
    pub eip170_enabled: bool,
    /// EIP-658 (Byzantium): receipts carry a status code instead of a post-transaction state
    /// root.
    pub eip658_enabled: bool,
}

impl ActiveSpec {
    /// The rule set active at the Ethereum mainnet genesis block: no later hard forks enabled.
    pub const fn frontier() -> Self {
        Self { eip2_enabled: false, eip158_enabled: false, eip170_enabled: false, eip658_enabled: false }
    }

    /// The rule set active from Homestead through The DAO fork.
    pub const fn homestead() -> Self {
        Self { eip2_enabled: true, ..Self::frontier() }
    }

    /// The rule set active from Spurious Dragon through Byzantium's predecessor.
    pub const fn spurious_dragon() -> Self {
        Self { eip158_enabled: true, eip170_enabled: true, ..Self::homestead() }
    }

    /// The rule set active from Byzantium onward, as consumed by this crate.
    pub const fn byzantium() -> Self {
        Self { eip658_enabled: true, ..Self::spurious_dragon() }
    }
}
