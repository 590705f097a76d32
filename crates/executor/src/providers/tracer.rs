//! The optional execution-trace sink.

use alloy_primitives::B256;

/// A single transaction's execution trace, as much or as little detail as a given tracer
/// implementation chooses to capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    /// The gas ultimately charged for the transaction.
    pub gas: u64,
}

/// Receives per-transaction traces from the executor when tracing is enabled.
///
/// The executor checks [`Self::is_tracing_enabled`] before allocating a [`Trace`]; a tracer that
/// returns `false` never has [`Self::save_trace`] called.
pub trait Tracer {
    /// Returns `true` if the executor should build and save a trace for each transaction.
    fn is_tracing_enabled(&self) -> bool;

    /// Saves the completed trace for the transaction identified by `tx_hash`.
    fn save_trace(&mut self, tx_hash: B256, trace: Trace);
}

/// A [`Tracer`] with tracing permanently disabled.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

#[cfg(any(test, feature = "test-utils"))]
impl Tracer for NoopTracer {
    fn is_tracing_enabled(&self) -> bool {
        false
    }

    fn save_trace(&mut self, _tx_hash: B256, _trace: Trace) {}
}

/// A [`Tracer`] that records every trace handed to it, keyed by transaction hash.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct RecordingTracer {
    traces: std::collections::HashMap<B256, Trace>,
}

#[cfg(any(test, feature = "test-utils"))]
impl RecordingTracer {
    /// Builds a tracer with no recorded traces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the trace saved for `tx_hash`, if any.
    pub fn trace_for(&self, tx_hash: B256) -> Option<&Trace> {
        self.traces.get(&tx_hash)
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Tracer for RecordingTracer {
    fn is_tracing_enabled(&self) -> bool {
        true
    }

    fn save_trace(&mut self, tx_hash: B256, trace: Trace) {
        self.traces.insert(tx_hash, trace);
    }
}
