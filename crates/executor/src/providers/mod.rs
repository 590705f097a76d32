//! The executor's collaborator traits: the world state, storage, VM, hard-fork schedule, and
//! tracer it drives.
//!
//! Each submodule pairs a trait with an in-memory reference implementation gated behind
//! `#[cfg(any(test, feature = "test-utils"))]`, so downstream crates can wire up an executor
//! before a production-grade provider is ready.

mod spec;
pub use spec::SpecProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use spec::ScheduledSpecProvider;

mod state;
pub use state::StateProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use state::InMemoryStateProvider;

mod storage;
pub use storage::StorageProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use storage::InMemoryStorageProvider;

mod tracer;
pub use tracer::{Tracer, Trace};
#[cfg(any(test, feature = "test-utils"))]
pub use tracer::{NoopTracer, RecordingTracer};

mod vm;
pub use vm::{VirtualMachine, VmFaultKind, VmOutcome};
#[cfg(any(test, feature = "test-utils"))]
pub use vm::ScriptedVirtualMachine;
