#![allow(missing_docs)]
//! End-to-end coverage of `TransactionExecutor::execute` against the in-memory reference
//! providers, one scenario per outcome the executor distinguishes.

use alloy_eips::eip2930::AccessList;
use alloy_primitives::{Address, Bytes, TxKind, B256, U256};
use tx_executor::providers::{
    InMemoryStateProvider, InMemoryStorageProvider, NoopTracer, ScheduledSpecProvider, ScriptedVirtualMachine,
    VmFaultKind, VmOutcome,
};
use tx_executor::TransactionExecutor;
use tx_primitives::{Account, ActiveSpec, BlockHeader, LogEntry, Transaction, TransactionSubstate};

const SENDER: Address = Address::repeat_byte(0xaa);
const RECIPIENT: Address = Address::repeat_byte(0xbb);
const BENEFICIARY: Address = Address::repeat_byte(0xcc);

fn header() -> BlockHeader {
    BlockHeader { number: 1, beneficiary: BENEFICIARY, gas_limit: 30_000_000, gas_used: 0 }
}

fn transfer(value: U256, gas_limit: u64, nonce: u64) -> Transaction {
    Transaction {
        hash: B256::repeat_byte(0x11),
        sender: SENDER,
        kind: TxKind::Call(RECIPIENT),
        value,
        gas_price: U256::from(1u64),
        gas_limit,
        nonce,
        input: Bytes::default(),
        access_list: AccessList::default(),
    }
}

fn executor_with(
    sender_balance: U256,
    vm_outcome: VmOutcome,
) -> TransactionExecutor<InMemoryStateProvider, InMemoryStorageProvider, ScriptedVirtualMachine, ScheduledSpecProvider, NoopTracer>
{
    let mut state = InMemoryStateProvider::new();
    state.seed(SENDER, Account { balance: sender_balance, ..Account::new_empty() });
    state.seed(RECIPIENT, Account::new_empty());

    TransactionExecutor::new(
        state,
        InMemoryStorageProvider::new(),
        ScriptedVirtualMachine::returning(vm_outcome),
        ScheduledSpecProvider::new(vec![(0, ActiveSpec::byzantium())]),
        NoopTracer,
    )
}

#[test]
fn simple_transfer_succeeds() {
    let success = VmOutcome::Success { output: Bytes::default(), substate: TransactionSubstate::empty(), gas_remaining: 0 };
    let mut executor = executor_with(U256::from(100_000_000_000_000_000_000u128), success);
    let mut h = header();

    let tx = transfer(U256::from(1u64), 21_000, 0);
    let receipt = executor.execute(&tx, &mut h).unwrap();

    assert!(receipt.is_success());
    assert_eq!(receipt.cumulative_gas_used, 21_000);
    assert_eq!(h.gas_used, 21_000);

    let expected_sender = U256::from(100_000_000_000_000_000_000u128) - U256::from(1u64) - U256::from(21_000u64);
    assert_eq!(executor.state().balance(SENDER).unwrap(), expected_sender);
    assert_eq!(executor.state().balance(RECIPIENT).unwrap(), U256::from(1u64));
    assert_eq!(executor.state().balance(BENEFICIARY).unwrap(), U256::from(21_000u64));
    assert_eq!(executor.state().nonce(SENDER).unwrap(), 1);
}

#[test]
fn nonce_mismatch_yields_a_null_receipt_and_leaves_state_untouched() {
    let success = VmOutcome::Success { output: Bytes::default(), substate: TransactionSubstate::empty(), gas_remaining: 0 };
    let mut executor = executor_with(U256::from(100_000_000_000_000_000_000u128), success);
    let mut h = header();

    let tx = transfer(U256::from(1u64), 21_000, 5);
    let receipt = executor.execute(&tx, &mut h).unwrap();

    assert!(!receipt.is_success());
    assert_eq!(receipt.cumulative_gas_used, 0);
    assert!(receipt.logs.is_empty());
    assert_eq!(h.gas_used, 0);
    assert_eq!(executor.state().balance(SENDER).unwrap(), U256::from(100_000_000_000_000_000_000u128));
    assert_eq!(executor.state().nonce(SENDER).unwrap(), 0);
}

#[test]
fn out_of_gas_during_call_consumes_the_whole_gas_limit_and_restores_state() {
    let fault = VmOutcome::Fault { kind: VmFaultKind::OutOfGas };
    let mut executor = executor_with(U256::from(100_000_000_000_000_000_000u128), fault);
    let mut h = header();

    let tx = transfer(U256::from(1u64), 21_100, 0);
    let receipt = executor.execute(&tx, &mut h).unwrap();

    assert!(!receipt.is_success());
    assert_eq!(receipt.cumulative_gas_used, 21_100);
    assert!(receipt.logs.is_empty());
    assert_eq!(h.gas_used, 21_100);

    // The value transfer never lands; only the fee is deducted, and the recipient is untouched.
    let expected_sender = U256::from(100_000_000_000_000_000_000u128) - U256::from(21_100u64);
    assert_eq!(executor.state().balance(SENDER).unwrap(), expected_sender);
    assert_eq!(executor.state().balance(RECIPIENT).unwrap(), U256::ZERO);
    assert_eq!(executor.state().balance(BENEFICIARY).unwrap(), U256::from(21_100u64));
}

#[test]
fn successful_contract_creation_installs_code_and_deducts_the_deposit() {
    let init_output = Bytes::from(vec![0xfe; 10]);
    let success = VmOutcome::Success {
        output: init_output.clone(),
        substate: TransactionSubstate::empty(),
        gas_remaining: 50_000,
    };

    let mut state = InMemoryStateProvider::new();
    state.seed(SENDER, Account { balance: U256::from(1_000_000_000_000u64), ..Account::new_empty() });
    let mut executor = TransactionExecutor::new(
        state,
        InMemoryStorageProvider::new(),
        ScriptedVirtualMachine::returning(success),
        ScheduledSpecProvider::new(vec![(0, ActiveSpec::byzantium())]),
        NoopTracer,
    );
    let mut h = header();

    let tx = Transaction {
        hash: B256::repeat_byte(0x22),
        sender: SENDER,
        kind: TxKind::Create,
        value: U256::ZERO,
        gas_price: U256::from(1u64),
        gas_limit: 200_000,
        nonce: 0,
        input: Bytes::default(),
        access_list: AccessList::default(),
    };

    let receipt = executor.execute(&tx, &mut h).unwrap();

    assert!(receipt.is_success());
    let created = SENDER.create(0);
    assert_eq!(receipt.recipient, created);

    let code_hash = executor.state().code_hash(created).unwrap();
    assert_eq!(code_hash, alloy_primitives::keccak256(&init_output));
}

#[test]
fn init_code_over_the_eip170_cap_is_a_fatal_fault() {
    let oversized = Bytes::from(vec![0x00; 0x6001]);
    let success = VmOutcome::Success {
        output: oversized,
        substate: TransactionSubstate::empty(),
        gas_remaining: 1_000_000,
    };

    let mut state = InMemoryStateProvider::new();
    state.seed(SENDER, Account { balance: U256::from(1_000_000_000_000u64), ..Account::new_empty() });
    let mut executor = TransactionExecutor::new(
        state,
        InMemoryStorageProvider::new(),
        ScriptedVirtualMachine::returning(success),
        ScheduledSpecProvider::new(vec![(0, ActiveSpec::byzantium())]),
        NoopTracer,
    );
    let mut h = header();

    let tx = Transaction {
        hash: B256::repeat_byte(0x33),
        sender: SENDER,
        kind: TxKind::Create,
        value: U256::ZERO,
        gas_price: U256::from(1u64),
        gas_limit: 1_100_000,
        nonce: 0,
        input: Bytes::default(),
        access_list: AccessList::default(),
    };

    let receipt = executor.execute(&tx, &mut h).unwrap();

    assert!(!receipt.is_success());
    assert_eq!(receipt.cumulative_gas_used, 1_100_000);
    let created = SENDER.create(0);
    assert_eq!(executor.state().code_hash(created).unwrap(), tx_primitives::EMPTY_CODE_HASH);
}

#[rstest::rstest]
#[case::nonce_too_low(4)]
#[case::nonce_too_high(6)]
#[case::nonce_far_ahead(1_000)]
fn any_nonce_other_than_five_is_rejected(#[case] tx_nonce: u64) {
    let success = VmOutcome::Success { output: Bytes::default(), substate: TransactionSubstate::empty(), gas_remaining: 0 };
    let mut executor = executor_with(U256::from(100_000_000_000_000_000_000u128), success);
    executor.state_mut().seed(SENDER, Account { balance: U256::from(100_000_000_000_000_000_000u128), nonce: 5, ..Account::new_empty() });
    let mut h = header();

    let tx = transfer(U256::from(1u64), 21_000, tx_nonce);
    let receipt = executor.execute(&tx, &mut h).unwrap();

    assert!(!receipt.is_success());
    assert_eq!(h.gas_used, 0);
    assert_eq!(executor.state().nonce(SENDER).unwrap(), 5);
}

#[test]
fn explicit_revert_discards_logs_and_refunds_unspent_gas() {
    let logs = vec![
        LogEntry::new(RECIPIENT, vec![B256::repeat_byte(0x01)], Bytes::default()),
        LogEntry::new(RECIPIENT, vec![B256::repeat_byte(0x02)], Bytes::default()),
    ];
    let mut substate = TransactionSubstate::empty();
    substate.logs = logs;
    substate.refund_counter = 15_000;

    let revert = VmOutcome::Revert { substate, gas_remaining: 60_000 };
    let mut executor = executor_with(U256::from(100_000_000_000_000_000_000u128), revert);
    let mut h = header();

    let tx = transfer(U256::from(1u64), 100_000, 0);
    let receipt = executor.execute(&tx, &mut h).unwrap();

    assert!(!receipt.is_success());
    assert!(receipt.logs.is_empty());
    assert_eq!(receipt.bloom, alloy_primitives::Bloom::ZERO);
    assert_eq!(receipt.cumulative_gas_used, 100_000 - 60_000);

    // Unspent gas still returns to the sender even though the transfer itself was rolled back.
    assert_eq!(executor.state().balance(RECIPIENT).unwrap(), U256::ZERO);
}
