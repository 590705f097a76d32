//! Data types shared between a transaction executor and its host: transactions, accounts, block
//! headers, the active protocol rule set, and the environment and substate the VM observes
//! during a single execution.
//!
//! This crate carries no execution logic of its own; see `tx-executor` for the orchestrator that
//! consumes these types.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations, unreachable_pub, unused_crate_dependencies)]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, doc(cfg_hide(docsrs)))]
#![doc(issue_tracker_base_url = "https://github.com/example/tx-executor/issues/")]

mod account;
mod environment;
mod header;
mod receipt;
mod spec;
mod substate;
mod transaction;

pub use account::{Account, EMPTY_CODE_HASH};
pub use environment::{ExecutionEnvironment, ExecutionType, ResolvedCode};
pub use header::BlockHeader;
pub use receipt::{ReceiptStatus, TransactionReceipt};
pub use spec::ActiveSpec;
pub use substate::{LogEntry, TransactionSubstate};
pub use transaction::Transaction;
