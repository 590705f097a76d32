//! 2048-bit log bloom derivation.

use alloy_primitives::Bloom;
use tx_primitives::LogEntry;

/// Folds a set of logs into a 2048-bit bloom filter.
///
/// Delegates the per-item folding to [`Bloom::m3_2048`], which implements the domain's standard
/// three-position KECCAK-256 scheme over the first six bytes of each item's hash, modulo 2048.
/// Purely additive: the empty bloom is all zeros, and folding in more logs never clears a bit.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogBloomBuilder;

impl LogBloomBuilder {
    /// Builds the bloom for a slice of logs.
    pub fn build(&self, logs: &[LogEntry]) -> Bloom {
        let mut bloom = Bloom::ZERO;
        for log in logs {
            bloom.m3_2048(log.address.as_slice());
            for topic in &log.topics {
                bloom.m3_2048(topic.as_slice());
            }
        }
        bloom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, Bytes, B256};

    #[test]
    fn empty_logs_produce_the_zero_bloom() {
        assert_eq!(LogBloomBuilder.build(&[]), Bloom::ZERO);
    }

    #[test]
    fn a_single_log_sets_bits_for_its_address_and_topics() {
        let log = LogEntry::new(Address::repeat_byte(0xaa), vec![B256::repeat_byte(0xbb)], Bytes::default());
        let bloom = LogBloomBuilder.build(&[log]);
        assert_ne!(bloom, Bloom::ZERO);
    }

    #[test]
    fn folding_in_more_logs_never_clears_a_bit() {
        let first = LogEntry::new(Address::repeat_byte(0x01), vec![], Bytes::default());
        let second = LogEntry::new(Address::repeat_byte(0x02), vec![B256::repeat_byte(0x03)], Bytes::default());

        let partial = LogBloomBuilder.build(&[first.clone()]);
        let combined = LogBloomBuilder.build(&[first, second]);

        for (partial_byte, combined_byte) in partial.as_slice().iter().zip(combined.as_slice()) {
            assert_eq!(partial_byte & combined_byte, *partial_byte);
        }
    }
}
