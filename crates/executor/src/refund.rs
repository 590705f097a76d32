//! Post-execution gas refund arithmetic.

use crate::constants::DESTROY_REFUND;
use tx_primitives::TransactionSubstate;

/// The outcome of refund computation: how much gas the sender actually spent, and how much of
/// the substate's claimed refund was honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefundOutcome {
    /// `gasLimit − unspentGas − refund`: the gas ultimately charged against the block.
    pub spent_gas: u64,
    /// The portion of the substate's refund claim actually granted, after the half-spent cap.
    pub refund: u64,
}

/// Computes the gas actually spent by a transaction, applying the refund cap.
///
/// A revert forces the refund to zero regardless of the substate's claim, even though unspent
/// gas (the portion never handed to the VM) is still returned to the sender by the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct RefundComputer;

impl RefundComputer {
    /// Computes `spentGas` and the granted refund for one transaction.
    ///
    /// `gas_limit` and `unspent_gas` must satisfy `gas_limit >= unspent_gas`; `unspent_gas` is
    /// the portion of the gas limit held back for the VM invocation (i.e. `gasLimit −
    /// intrinsicGas`) minus whatever the VM reported as its own remaining gas.
    pub fn compute(&self, gas_limit: u64, unspent_gas: u64, substate: &TransactionSubstate) -> RefundOutcome {
        let spent_gas0 = gas_limit - unspent_gas;
        let cap = spent_gas0 / 2;
        let claim = substate.refund_counter + substate.destroy_list.len() as u64 * DESTROY_REFUND;
        let refund = if substate.should_revert { 0 } else { cap.min(claim) };

        RefundOutcome { spent_gas: spent_gas0 - refund, refund }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_revert_forces_the_refund_to_zero() {
        let mut substate = TransactionSubstate::empty();
        substate.refund_counter = 10_000;
        substate.should_revert = true;

        let outcome = RefundComputer.compute(100_000, 50_000, &substate);
        assert_eq!(outcome.refund, 0);
        assert_eq!(outcome.spent_gas, 50_000);
    }

    #[test]
    fn the_refund_is_capped_at_half_the_gas_spent() {
        let mut substate = TransactionSubstate::empty();
        substate.refund_counter = 1_000_000;

        let outcome = RefundComputer.compute(100_000, 0, &substate);
        assert_eq!(outcome.refund, 50_000);
        assert_eq!(outcome.spent_gas, 50_000);
        assert!(outcome.spent_gas >= 100_000 / 2);
    }

    #[test]
    fn an_unclaimed_refund_passes_through_untouched() {
        let substate = TransactionSubstate::empty();
        let outcome = RefundComputer.compute(100_000, 79_000, &substate);
        assert_eq!(outcome.refund, 0);
        assert_eq!(outcome.spent_gas, 21_000);
    }
}
