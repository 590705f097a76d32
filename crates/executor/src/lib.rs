//! A transaction-level executor for an Ethereum-compatible execution client.
//!
//! Applies a single signed transaction against world state: intrinsic-gas validation, nested
//! snapshot/revert discipline across a state provider and a storage provider, contract-creation
//! code-deposit accounting, gas refunds, and receipt construction with a log bloom filter. The
//! VM interpreter, trie persistence, RLP decoding, and signer recovery are external collaborators
//! this crate only defines an interface to; see [`providers`] for the trait boundary.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_debug_implementations, unreachable_pub)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

mod errors;
pub use errors::{ExecutorError, ExecutorResult};

mod snapshot;
pub use snapshot::Snapshot;

mod constants;

mod gas;
pub use gas::IntrinsicGasCalculator;

mod bloom;
pub use bloom::LogBloomBuilder;

mod refund;
pub use refund::{RefundComputer, RefundOutcome};

mod receipt_builder;
pub use receipt_builder::ReceiptBuilder;

pub mod providers;
pub use providers::{SpecProvider, StateProvider, StorageProvider, Tracer, VirtualMachine};

mod executor;
pub use executor::TransactionExecutor;
