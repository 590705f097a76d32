//! The per-call execution environment handed to the VM.

use crate::ActiveSpec;
use alloy_primitives::{Address, Bytes, B256, U256};

/// The kind of top-level entry point the executor is driving the VM through.
///
/// Ordinary block processing only ever constructs [`ExecutionType::Transaction`]; the other
/// variants exist so a host embedding this crate can run a single call or a precompile in
/// isolation, reusing the same gas accounting and substate machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionType {
    /// A message call against an existing, non-precompiled account.
    Transaction,
    /// A contract creation: the recipient does not exist yet and `code` carries init bytes.
    DirectCreate,
    /// A call against a precompiled address.
    DirectPrecompile,
}

/// How the VM should obtain the code it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolvedCode {
    /// Look up the bytecode behind this hash in the state provider's code cache.
    Cached(B256),
    /// Run these bytes directly; used for contract-creation init code.
    Inline(Bytes),
    /// Dispatch natively to the precompile at this address; the bytes are never interpreted.
    Precompile(Address),
}

/// The environment a [`VirtualMachine`](crate::VirtualMachine) invocation executes within.
///
/// Built by the executor from the transaction, the block header, and the resolved
/// [`ActiveSpec`], then handed to the VM by reference for the duration of one top-level call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionEnvironment {
    /// The kind of entry point being driven.
    pub execution_type: ExecutionType,
    /// The transaction's original sender; stable across the whole call tree and exposed to the
    /// `ORIGIN` opcode.
    pub origin: Address,
    /// The immediate caller of this invocation. Equal to `origin` for the top-level call that
    /// this crate drives directly.
    pub sender: Address,
    /// The account whose code is executing: the message-call recipient, or the freshly derived
    /// contract address for a creation.
    pub executing_account: Address,
    /// The native value transferred to `executing_account` as part of this call.
    pub value: U256,
    /// The price the origin is paying per unit of gas, used by the `GASPRICE` opcode.
    pub gas_price: U256,
    /// The call data (for a message call) or init code (for a contract creation).
    pub input: Bytes,
    /// How the VM should resolve the code it runs for `executing_account`.
    pub code: ResolvedCode,
    /// The block number, used to resolve opcode availability.
    pub block_number: u64,
    /// The address credited with any fees collected during this execution.
    pub beneficiary: Address,
    /// The protocol rule set active for this execution.
    pub spec: ActiveSpec,
}
