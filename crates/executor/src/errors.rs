//! Errors for the `tx-executor` crate.

/// The error type returned by [`TransactionExecutor::execute`](crate::TransactionExecutor::execute).
///
/// Only programmer-error invariant violations are representable here. Every transaction-level
/// failure mode (bad nonce, insufficient balance, out-of-gas, revert, …) is absorbed into the
/// returned receipt instead; see the crate's design notes.
#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    /// The state provider reported a failure (I/O, encoding, or an implementation-specific
    /// invariant violation).
    #[error("state provider error: {0}")]
    StateProvider(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The storage provider reported a failure.
    #[error("storage provider error: {0}")]
    StorageProvider(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The virtual machine reported a failure outside of its normal fault/revert signaling (for
    /// example, a malformed environment it refuses to run).
    #[error("virtual machine error: {0}")]
    VirtualMachine(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The spec provider reported a failure resolving the active rule set.
    #[error("spec provider error: {0}")]
    SpecProvider(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A [`Result`] type alias for the [`ExecutorError`] enum.
pub type ExecutorResult<T> = Result<T, ExecutorError>;
