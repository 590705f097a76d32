//! Intrinsic gas accounting: the cost a transaction pays before any bytecode runs.

use crate::constants::{CODE_DEPOSIT_PER_BYTE, TX_BASE_GAS, TX_CREATE_GAS, TX_DATA_NON_ZERO_GAS, TX_DATA_ZERO_GAS};
use tx_primitives::{ActiveSpec, Transaction};

/// Computes the intrinsic gas cost of a transaction: the base transaction cost, plus a per-byte
/// charge for its data or init-code payload, plus a creation surcharge once EIP-2 is active.
///
/// Pure and side-effect free. Does not account for the transaction's EIP-2930 access list; see
/// this crate's design notes for why.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntrinsicGasCalculator;

impl IntrinsicGasCalculator {
    /// Computes the intrinsic gas for `transaction` under `spec`.
    pub fn compute(&self, transaction: &Transaction, spec: ActiveSpec) -> u64 {
        let mut gas = TX_BASE_GAS;

        for byte in transaction.input.iter() {
            gas += if *byte == 0 { TX_DATA_ZERO_GAS } else { TX_DATA_NON_ZERO_GAS };
        }

        if transaction.is_create() && spec.eip2_enabled {
            gas += TX_CREATE_GAS;
        }

        gas
    }

    /// Computes the code-deposit cost for `output_len` bytes of contract-creation output.
    ///
    /// Callers apply the EIP-170 code-size cap themselves before calling this; the calculator
    /// only does the multiplication.
    pub fn code_deposit_cost(&self, output_len: usize) -> u64 {
        output_len as u64 * CODE_DEPOSIT_PER_BYTE
    }
}
