//! The transaction-level orchestrator.

use crate::{
    constants::{is_precompile, MAX_CODE_SIZE},
    gas::IntrinsicGasCalculator,
    providers::{SpecProvider, StateProvider, StorageProvider, Trace, Tracer, VirtualMachine, VmOutcome},
    receipt_builder::ReceiptBuilder,
    refund::RefundComputer,
    ExecutorError, ExecutorResult,
};
use alloy_primitives::{Bytes, U256};
use std::collections::HashSet;
use tx_primitives::{
    BlockHeader, ExecutionEnvironment, ExecutionType, ResolvedCode, Transaction, TransactionReceipt,
    TransactionSubstate,
};

fn boxed<E: std::error::Error + Send + Sync + 'static>(error: E) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(error)
}

/// Drives a single transaction to a receipt: intrinsic-gas validation, snapshot/revert discipline,
/// contract-creation code deposit, refund arithmetic, and receipt assembly.
///
/// Generic over the five collaborator traits so that callers can plug in a trie-backed state
/// provider and a real interpreter in production while this crate's own tests use the in-memory
/// reference implementations under `providers::`.
#[derive(Debug)]
pub struct TransactionExecutor<S, ST, V, SP, T> {
    state: S,
    storage: ST,
    vm: V,
    spec_provider: SP,
    tracer: T,
    intrinsic_gas: IntrinsicGasCalculator,
    refund: RefundComputer,
    receipt_builder: ReceiptBuilder,
}

impl<S, ST, V, SP, T> TransactionExecutor<S, ST, V, SP, T>
where
    S: StateProvider,
    ST: StorageProvider,
    V: VirtualMachine,
    SP: SpecProvider,
    T: Tracer,
{
    /// Constructs an executor from its five collaborators.
    pub fn new(state: S, storage: ST, vm: V, spec_provider: SP, tracer: T) -> Self {
        Self {
            state,
            storage,
            vm,
            spec_provider,
            tracer,
            intrinsic_gas: IntrinsicGasCalculator,
            refund: RefundComputer,
            receipt_builder: ReceiptBuilder,
        }
    }

    /// Returns a reference to the state provider.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Returns a mutable reference to the state provider.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Returns a reference to the storage provider.
    pub fn storage(&self) -> &ST {
        &self.storage
    }

    /// Returns a reference to the tracer.
    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    /// Consumes the executor, returning its collaborators.
    pub fn into_parts(self) -> (S, ST, V, SP, T) {
        (self.state, self.storage, self.vm, self.spec_provider, self.tracer)
    }

    fn resolve_recipient(&self, transaction: &Transaction) -> ExecutorResult<alloy_primitives::Address> {
        match transaction.to() {
            Some(to) => Ok(to),
            None => {
                let nonce = self.state.nonce(transaction.sender).map_err(|e| ExecutorError::StateProvider(boxed(e)))?;
                Ok(transaction.sender.create(nonce))
            }
        }
    }

    /// Runs `transaction` against `header`, returning its receipt.
    ///
    /// Every transaction-level failure mode — bad nonce, insufficient balance, an out-of-gas VM,
    /// an explicit revert — is absorbed into the returned receipt; an `Err` here means a
    /// collaborator violated its contract.
    pub fn execute(
        &mut self,
        transaction: &Transaction,
        header: &mut BlockHeader,
    ) -> ExecutorResult<TransactionReceipt> {
        let spec =
            self.spec_provider.spec(header.number).map_err(|e| ExecutorError::SpecProvider(boxed(e)))?;

        debug!(
            target: "tx_executor",
            tx_hash = %transaction.hash,
            gas_limit = transaction.gas_limit,
            "executing transaction"
        );

        let recipient = self.resolve_recipient(transaction)?;
        let intrinsic_gas = self.intrinsic_gas.compute(transaction, spec);

        if !self.state.account_exists(transaction.sender).map_err(|e| ExecutorError::StateProvider(boxed(e)))? {
            self.state
                .create_account(transaction.sender, U256::ZERO)
                .map_err(|e| ExecutorError::StateProvider(boxed(e)))?;
        }

        if intrinsic_gas > transaction.gas_limit || transaction.gas_limit > header.gas_remaining() {
            return Ok(TransactionReceipt::rejected(header.gas_used, recipient, spec.eip658_enabled));
        }

        let sender_balance =
            self.state.balance(transaction.sender).map_err(|e| ExecutorError::StateProvider(boxed(e)))?;
        let upfront_cost = U256::from(intrinsic_gas) * transaction.gas_price + transaction.value;
        if upfront_cost > sender_balance {
            return Ok(TransactionReceipt::rejected(header.gas_used, recipient, spec.eip658_enabled));
        }

        let sender_nonce =
            self.state.nonce(transaction.sender).map_err(|e| ExecutorError::StateProvider(boxed(e)))?;
        if transaction.nonce != sender_nonce {
            return Ok(TransactionReceipt::rejected(header.gas_used, recipient, spec.eip658_enabled));
        }

        // Admission: the nonce increment and gas pre-debit are durable even across a later revert.
        self.state.increment_nonce(transaction.sender).map_err(|e| ExecutorError::StateProvider(boxed(e)))?;
        let gas_cost = U256::from(transaction.gas_limit) * transaction.gas_price;
        self.state
            .sub_balance(transaction.sender, gas_cost, spec)
            .map_err(|e| ExecutorError::StateProvider(boxed(e)))?;
        self.state.commit(spec).map_err(|e| ExecutorError::StateProvider(boxed(e)))?;

        let snapshot = self.state.take_snapshot();
        let storage_snapshot = self.storage.take_snapshot();

        self.state
            .sub_balance(transaction.sender, transaction.value, spec)
            .map_err(|e| ExecutorError::StateProvider(boxed(e)))?;
        self.state
            .add_balance(recipient, transaction.value, spec)
            .map_err(|e| ExecutorError::StateProvider(boxed(e)))?;

        let is_create = transaction.is_create();
        let (execution_type, code) = if is_precompile(recipient) {
            (ExecutionType::DirectPrecompile, ResolvedCode::Precompile(recipient))
        } else if is_create {
            (ExecutionType::DirectCreate, ResolvedCode::Inline(transaction.input.clone()))
        } else {
            let hash =
                self.vm.cached_code_hash(recipient).map_err(|e| ExecutorError::VirtualMachine(boxed(e)))?;
            (ExecutionType::Transaction, ResolvedCode::Cached(hash))
        };

        let environment = ExecutionEnvironment {
            execution_type,
            origin: transaction.sender,
            sender: transaction.sender,
            executing_account: recipient,
            value: transaction.value,
            gas_price: transaction.gas_price,
            input: transaction.input.clone(),
            code,
            block_number: header.number,
            beneficiary: header.beneficiary,
            spec,
        };

        let unspent_gas_budget = transaction.gas_limit - intrinsic_gas;
        let outcome = self
            .vm
            .run(unspent_gas_budget, &environment)
            .map_err(|e| ExecutorError::VirtualMachine(boxed(e)))?;

        let (mut substate, output, mut unspent_gas, mut reverted) = match outcome {
            VmOutcome::Success { output, substate, gas_remaining } => {
                let reverted = substate.should_revert;
                (substate, output, gas_remaining, reverted)
            }
            VmOutcome::Revert { mut substate, gas_remaining } => {
                substate.should_revert = true;
                (substate, Bytes::default(), gas_remaining, true)
            }
            VmOutcome::Fault { kind } => {
                debug!(
                    target: "tx_executor",
                    tx_hash = %transaction.hash,
                    fault = ?kind,
                    "virtual machine execution fault"
                );
                (TransactionSubstate::reverted(Vec::new(), HashSet::new()), Bytes::default(), 0, true)
            }
        };

        if !reverted && is_create {
            let code_deposit_cost = self.intrinsic_gas.code_deposit_cost(output.len());
            let size_capped = spec.eip170_enabled && output.len() > MAX_CODE_SIZE;
            let affordable = !size_capped && unspent_gas >= code_deposit_cost;

            if affordable {
                let hash =
                    self.state.set_code(output.clone()).map_err(|e| ExecutorError::StateProvider(boxed(e)))?;
                self.state
                    .set_code_hash(recipient, hash, spec)
                    .map_err(|e| ExecutorError::StateProvider(boxed(e)))?;
                unspent_gas -= code_deposit_cost;
            } else if spec.eip2_enabled {
                reverted = true;
                substate.should_revert = true;
                unspent_gas = 0;
            }
            // Otherwise: the deposit is unaffordable but EIP-2 is not active. The contract is
            // created with empty code and no deposit is charged.
        }

        if reverted {
            self.storage.restore(storage_snapshot).map_err(|e| ExecutorError::StorageProvider(boxed(e)))?;
            self.state.restore(snapshot).map_err(|e| ExecutorError::StateProvider(boxed(e)))?;
        }

        let receipt_logs = if reverted { Vec::new() } else { std::mem::take(&mut substate.logs) };
        let destroyed = if reverted { HashSet::new() } else { std::mem::take(&mut substate.destroy_list) };

        let outcome = self.refund.compute(transaction.gas_limit, unspent_gas, &substate);

        let sender_credit = U256::from(unspent_gas + outcome.refund) * transaction.gas_price;
        self.state
            .add_balance(transaction.sender, sender_credit, spec)
            .map_err(|e| ExecutorError::StateProvider(boxed(e)))?;

        header.gas_used += outcome.spent_gas;

        for address in &destroyed {
            self.state.delete_account(*address).map_err(|e| ExecutorError::StateProvider(boxed(e)))?;
        }

        let fee = U256::from(outcome.spent_gas) * transaction.gas_price;
        if !destroyed.contains(&header.beneficiary) {
            self.state
                .add_balance(header.beneficiary, fee, spec)
                .map_err(|e| ExecutorError::StateProvider(boxed(e)))?;
        }

        self.storage.commit(spec).map_err(|e| ExecutorError::StorageProvider(boxed(e)))?;
        self.state.commit(spec).map_err(|e| ExecutorError::StateProvider(boxed(e)))?;

        if self.tracer.is_tracing_enabled() {
            self.tracer.save_trace(transaction.hash, Trace { gas: outcome.spent_gas });
        }

        let success = !reverted;
        let receipt = self.receipt_builder.build(
            success,
            header.gas_used,
            receipt_logs,
            recipient,
            || self.state.state_root(),
            spec.eip658_enabled,
        );

        info!(
            target: "tx_executor",
            tx_hash = %transaction.hash,
            gas_used = outcome.spent_gas,
            success,
            "transaction executed"
        );

        Ok(receipt)
    }
}
