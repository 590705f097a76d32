//! The world-state side of the executor's external interface.

use crate::Snapshot;
use alloy_primitives::{Address, Bytes, B256, U256};
use tx_primitives::ActiveSpec;

/// The account-level view of world state consumed by [`TransactionExecutor`](crate::TransactionExecutor).
///
/// Mirrors the capabilities a Merkle-Patricia-backed state database would expose; this crate
/// treats the implementation as an opaque collaborator and never reaches past this trait.
pub trait StateProvider {
    /// The failure mode this provider can report; wrapped by [`ExecutorError`](crate::ExecutorError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns `true` if `address` has ever been touched (even if subsequently emptied).
    fn account_exists(&self, address: Address) -> Result<bool, Self::Error>;

    /// Returns `true` if `address` is an EIP-161 "empty" account: zero balance, zero nonce, no
    /// code.
    fn is_empty_account(&self, address: Address) -> Result<bool, Self::Error>;

    /// Creates `address` with the given starting balance. Used both for sender symmetry with
    /// upstream validators and for materializing a contract-creation recipient.
    fn create_account(&mut self, address: Address, balance: U256) -> Result<(), Self::Error>;

    /// Returns the current balance of `address`, or zero if the account does not exist.
    fn balance(&self, address: Address) -> Result<U256, Self::Error>;

    /// Returns the current nonce of `address`, or zero if the account does not exist.
    fn nonce(&self, address: Address) -> Result<u64, Self::Error>;

    /// Increments the nonce of `address` by one.
    fn increment_nonce(&mut self, address: Address) -> Result<(), Self::Error>;

    /// Credits `amount` to `address`'s balance, creating the account if absent.
    fn add_balance(&mut self, address: Address, amount: U256, spec: ActiveSpec) -> Result<(), Self::Error>;

    /// Debits `amount` from `address`'s balance.
    ///
    /// Implementations should fail rather than drive a balance negative; the executor only
    /// calls this after validating affordability, so a failure here indicates a programmer
    /// error upstream.
    fn sub_balance(&mut self, address: Address, amount: U256, spec: ActiveSpec) -> Result<(), Self::Error>;

    /// Stores `code` in the provider's code cache and returns its hash.
    fn set_code(&mut self, code: Bytes) -> Result<B256, Self::Error>;

    /// Associates `address` with the code identified by `hash`.
    fn set_code_hash(&mut self, address: Address, hash: B256, spec: ActiveSpec) -> Result<(), Self::Error>;

    /// Returns the code hash of `address`, or the empty-code hash if it has none.
    fn code_hash(&self, address: Address) -> Result<B256, Self::Error>;

    /// Removes `address` and its balance, nonce, and code association entirely.
    fn delete_account(&mut self, address: Address) -> Result<(), Self::Error>;

    /// Captures the current state of the provider's reversible-mutation journal.
    fn take_snapshot(&mut self) -> Snapshot;

    /// Rolls back every mutation recorded after `snapshot` was taken.
    fn restore(&mut self, snapshot: Snapshot) -> Result<(), Self::Error>;

    /// Finalizes pending mutations, pruning empty accounts touched this transaction if `spec`
    /// calls for it.
    fn commit(&mut self, spec: ActiveSpec) -> Result<(), Self::Error>;

    /// Returns the current state root.
    fn state_root(&self) -> B256;
}

/// A single reversible account mutation recorded in [`InMemoryStateProvider`]'s journal.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone)]
enum StateUndo {
    SetAccount { address: Address, previous: Option<tx_primitives::Account> },
    SetCode { hash: B256, previously_present: bool },
}

/// A `HashMap`-backed [`StateProvider`] that journals every mutation for snapshot/restore.
///
/// Not a real trie: [`Self::state_root`] always returns [`B256::ZERO`]. Useful for this crate's
/// own tests and for downstream crates wiring up an executor before a trie-backed provider is
/// ready.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct InMemoryStateProvider {
    accounts: std::collections::HashMap<Address, tx_primitives::Account>,
    code: std::collections::HashMap<B256, Bytes>,
    journal: Vec<StateUndo>,
}

#[cfg(any(test, feature = "test-utils"))]
impl InMemoryStateProvider {
    /// Builds an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `address` with `account`, bypassing the journal (for test setup only).
    pub fn seed(&mut self, address: Address, account: tx_primitives::Account) {
        self.accounts.insert(address, account);
    }

    fn entry(&mut self, address: Address) -> &mut tx_primitives::Account {
        self.accounts.entry(address).or_insert_with(tx_primitives::Account::new_empty)
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl StateProvider for InMemoryStateProvider {
    type Error = std::convert::Infallible;

    fn account_exists(&self, address: Address) -> Result<bool, Self::Error> {
        Ok(self.accounts.contains_key(&address))
    }

    fn is_empty_account(&self, address: Address) -> Result<bool, Self::Error> {
        Ok(self.accounts.get(&address).map(tx_primitives::Account::is_empty).unwrap_or(true))
    }

    fn create_account(&mut self, address: Address, balance: U256) -> Result<(), Self::Error> {
        let previous = self.accounts.insert(
            address,
            tx_primitives::Account { balance, nonce: 0, code_hash: tx_primitives::EMPTY_CODE_HASH },
        );
        self.journal.push(StateUndo::SetAccount { address, previous });
        Ok(())
    }

    fn balance(&self, address: Address) -> Result<U256, Self::Error> {
        Ok(self.accounts.get(&address).map(|account| account.balance).unwrap_or_default())
    }

    fn nonce(&self, address: Address) -> Result<u64, Self::Error> {
        Ok(self.accounts.get(&address).map(|account| account.nonce).unwrap_or_default())
    }

    fn increment_nonce(&mut self, address: Address) -> Result<(), Self::Error> {
        let previous = self.accounts.get(&address).copied();
        self.entry(address).nonce += 1;
        self.journal.push(StateUndo::SetAccount { address, previous });
        Ok(())
    }

    fn add_balance(&mut self, address: Address, amount: U256, _spec: ActiveSpec) -> Result<(), Self::Error> {
        let previous = self.accounts.get(&address).copied();
        self.entry(address).balance += amount;
        self.journal.push(StateUndo::SetAccount { address, previous });
        Ok(())
    }

    fn sub_balance(&mut self, address: Address, amount: U256, _spec: ActiveSpec) -> Result<(), Self::Error> {
        let previous = self.accounts.get(&address).copied();
        self.entry(address).balance -= amount;
        self.journal.push(StateUndo::SetAccount { address, previous });
        Ok(())
    }

    fn set_code(&mut self, code: Bytes) -> Result<B256, Self::Error> {
        let hash = alloy_primitives::keccak256(&code);
        let previously_present = self.code.contains_key(&hash);
        self.code.insert(hash, code);
        self.journal.push(StateUndo::SetCode { hash, previously_present });
        Ok(hash)
    }

    fn set_code_hash(&mut self, address: Address, hash: B256, _spec: ActiveSpec) -> Result<(), Self::Error> {
        let previous = self.accounts.get(&address).copied();
        self.entry(address).code_hash = hash;
        self.journal.push(StateUndo::SetAccount { address, previous });
        Ok(())
    }

    fn code_hash(&self, address: Address) -> Result<B256, Self::Error> {
        Ok(self.accounts.get(&address).map(|account| account.code_hash).unwrap_or(tx_primitives::EMPTY_CODE_HASH))
    }

    fn delete_account(&mut self, address: Address) -> Result<(), Self::Error> {
        let previous = self.accounts.remove(&address);
        self.journal.push(StateUndo::SetAccount { address, previous });
        Ok(())
    }

    fn take_snapshot(&mut self) -> Snapshot {
        Snapshot::new(self.journal.len() as u64)
    }

    fn restore(&mut self, snapshot: Snapshot) -> Result<(), Self::Error> {
        while self.journal.len() as u64 > snapshot.0 {
            match self.journal.pop().expect("journal longer than snapshot checked above") {
                StateUndo::SetAccount { address, previous } => match previous {
                    Some(account) => {
                        self.accounts.insert(address, account);
                    }
                    None => {
                        self.accounts.remove(&address);
                    }
                },
                StateUndo::SetCode { hash, previously_present } => {
                    if !previously_present {
                        self.code.remove(&hash);
                    }
                }
            }
        }
        Ok(())
    }

    fn commit(&mut self, spec: ActiveSpec) -> Result<(), Self::Error> {
        if spec.eip158_enabled {
            self.accounts.retain(|_, account| !account.is_empty());
        }
        self.journal.clear();
        Ok(())
    }

    fn state_root(&self) -> B256 {
        B256::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_undoes_mutations_after_the_snapshot() {
        let mut provider = InMemoryStateProvider::new();
        let addr = Address::repeat_byte(0x11);
        provider.create_account(addr, U256::from(100u64)).unwrap();

        let snapshot = provider.take_snapshot();
        provider.add_balance(addr, U256::from(50u64), ActiveSpec::byzantium()).unwrap();
        assert_eq!(provider.balance(addr).unwrap(), U256::from(150u64));

        provider.restore(snapshot).unwrap();
        assert_eq!(provider.balance(addr).unwrap(), U256::from(100u64));
    }

    #[test]
    fn commit_prunes_empty_accounts_under_eip158() {
        let mut provider = InMemoryStateProvider::new();
        let addr = Address::repeat_byte(0x22);
        provider.create_account(addr, U256::ZERO).unwrap();
        provider.commit(ActiveSpec::spurious_dragon()).unwrap();
        assert!(!provider.account_exists(addr).unwrap());
    }
}
