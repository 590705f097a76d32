//! The hard-fork-schedule side of the executor's external interface.

use tx_primitives::ActiveSpec;

/// Resolves the protocol rule set active at a given block number.
pub trait SpecProvider {
    /// The failure mode this provider can report; wrapped by [`ExecutorError`](crate::ExecutorError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the [`ActiveSpec`] in effect at `block_number`.
    fn spec(&self, block_number: u64) -> Result<ActiveSpec, Self::Error>;
}

/// A [`SpecProvider`] backed by a block-number-ordered hard-fork activation schedule.
///
/// Lets a host binary load a chain spec from a TOML/JSON file into a `Vec<(u64, ActiveSpec)>`
/// without this crate knowing the file format.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Default)]
pub struct ScheduledSpecProvider {
    schedule: Vec<(u64, ActiveSpec)>,
}

#[cfg(any(test, feature = "test-utils"))]
impl ScheduledSpecProvider {
    /// Builds a provider from `(activation_block, spec)` pairs; order does not matter, the
    /// schedule is sorted on construction.
    pub fn new(mut schedule: Vec<(u64, ActiveSpec)>) -> Self {
        schedule.sort_by_key(|(block, _)| *block);
        Self { schedule }
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl SpecProvider for ScheduledSpecProvider {
    type Error = std::convert::Infallible;

    fn spec(&self, block_number: u64) -> Result<ActiveSpec, Self::Error> {
        Ok(self
            .schedule
            .iter()
            .rev()
            .find(|(activation, _)| *activation <= block_number)
            .map(|(_, spec)| *spec)
            .unwrap_or_else(ActiveSpec::frontier))
    }
}
