//! The virtual-machine side of the executor's external interface.

use alloy_primitives::{Address, Bytes};
use tx_primitives::{ExecutionEnvironment, TransactionSubstate};

/// Why the VM aborted a call without reaching a `RETURN` or explicit `REVERT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VmFaultKind {
    /// The call ran out of gas.
    OutOfGas,
    /// The call attempted to execute an opcode the active spec does not define.
    InvalidOpcode,
    /// The call underflowed or overflowed the VM's operand stack.
    StackViolation,
    /// A gas-accounting computation overflowed.
    GasArithmeticOverflow,
    /// Any other abort the VM implementation wishes to surface without its own variant.
    Other(String),
}

/// The result of one top-level VM invocation.
///
/// Mirrors the source's exception-driven control flow (a caught execution fault) as an explicit
/// tagged variant instead: the executor's revert handling is identical for [`Self::Revert`] and
/// [`Self::Fault`], differing only in how much gas is deemed remaining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VmOutcome {
    /// The call completed normally.
    Success {
        /// The call's return data; for a contract creation, the code to be deposited.
        output: Bytes,
        /// The logs, destroy-list, and refund counter accumulated across the call tree.
        substate: TransactionSubstate,
        /// Gas the VM did not consume, to be returned to the sender.
        gas_remaining: u64,
    },
    /// The call executed an explicit `REVERT`.
    Revert {
        /// The substate accumulated up to the point of the revert.
        substate: TransactionSubstate,
        /// Gas the VM did not consume, still returned to the sender despite the revert.
        gas_remaining: u64,
    },
    /// The call aborted abnormally; all gas handed to the VM is deemed spent.
    Fault {
        /// Why the call aborted.
        kind: VmFaultKind,
    },
}

/// The EVM interpreter, treated as a black box with a defined call/return contract.
///
/// Precompile dispatch, opcode semantics, and gas metering during execution are entirely the
/// implementation's concern; this crate only consumes the outcome.
pub trait VirtualMachine {
    /// The failure mode this VM can report outside of its normal [`VmOutcome`] signaling.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Runs `environment` with `gas_available` gas.
    fn run(&mut self, gas_available: u64, environment: &ExecutionEnvironment) -> Result<VmOutcome, Self::Error>;

    /// Returns the cached code hash for `address`, used by the executor to decide whether a
    /// message-call recipient has code to run at all.
    fn cached_code_hash(&self, address: Address) -> Result<alloy_primitives::B256, Self::Error>;
}

/// A [`VirtualMachine`] that returns a fixed, caller-supplied outcome for every call.
///
/// The interpreter itself is out of scope for this crate (see its design notes); this stand-in
/// lets the executor's own tests and downstream integration tests drive every branch of
/// `execute` without a real bytecode interpreter.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone)]
pub struct ScriptedVirtualMachine {
    outcome: VmOutcome,
    code_hashes: std::collections::HashMap<Address, alloy_primitives::B256>,
}

#[cfg(any(test, feature = "test-utils"))]
impl ScriptedVirtualMachine {
    /// Builds a VM that always returns `outcome`.
    pub fn returning(outcome: VmOutcome) -> Self {
        Self { outcome, code_hashes: std::collections::HashMap::new() }
    }

    /// Registers the code hash this VM reports for `address` via [`VirtualMachine::cached_code_hash`].
    pub fn with_cached_code_hash(mut self, address: Address, hash: alloy_primitives::B256) -> Self {
        self.code_hashes.insert(address, hash);
        self
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl VirtualMachine for ScriptedVirtualMachine {
    type Error = std::convert::Infallible;

    fn run(&mut self, _gas_available: u64, _environment: &ExecutionEnvironment) -> Result<VmOutcome, Self::Error> {
        Ok(self.outcome.clone())
    }

    fn cached_code_hash(&self, address: Address) -> Result<alloy_primitives::B256, Self::Error> {
        Ok(self.code_hashes.get(&address).copied().unwrap_or(tx_primitives::EMPTY_CODE_HASH))
    }
}
