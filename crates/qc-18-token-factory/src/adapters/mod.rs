//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-memory implementations of the outbound ports, used by tests, genesis
//! tooling and single-node setups.

mod event_sink;
mod memory_bank;
mod memory_store;
mod sudo;

pub use event_sink::RecordingEventSink;
pub use memory_bank::InMemoryBank;
pub use memory_store::InMemoryKvStore;
pub use sudo::{StaticSudoers, SUDOERS_LABEL};
