//! The per-account slot-storage side of the executor's external interface.

use crate::Snapshot;
use tx_primitives::ActiveSpec;

/// The storage-trie view consumed by [`TransactionExecutor`](crate::TransactionExecutor).
///
/// Per-slot reads and writes are issued by the VM directly and are not part of this trait; the
/// executor only ever takes snapshots of and commits the provider as a whole.
pub trait StorageProvider {
    /// The failure mode this provider can report; wrapped by [`ExecutorError`](crate::ExecutorError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Captures the current state of the provider's reversible-mutation journal.
    fn take_snapshot(&mut self) -> Snapshot;

    /// Rolls back every mutation recorded after `snapshot` was taken.
    fn restore(&mut self, snapshot: Snapshot) -> Result<(), Self::Error>;

    /// Finalizes pending mutations.
    fn commit(&mut self, spec: ActiveSpec) -> Result<(), Self::Error>;
}

/// A no-op [`StorageProvider`] that only tracks snapshot depth.
///
/// Since this trait exposes no slot-level reads or writes to the executor, there is nothing for
/// an in-memory reference implementation to journal; a real backend would consult its own
/// internal trie/cache here instead.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct InMemoryStorageProvider {
    depth: u64,
}

#[cfg(any(test, feature = "test-utils"))]
impl InMemoryStorageProvider {
    /// Builds a provider with no outstanding snapshots.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl StorageProvider for InMemoryStorageProvider {
    type Error = std::convert::Infallible;

    fn take_snapshot(&mut self) -> Snapshot {
        self.depth += 1;
        Snapshot::new(self.depth)
    }

    fn restore(&mut self, _snapshot: Snapshot) -> Result<(), Self::Error> {
        Ok(())
    }

    fn commit(&mut self, _spec: ActiveSpec) -> Result<(), Self::Error> {
        Ok(())
    }
}
