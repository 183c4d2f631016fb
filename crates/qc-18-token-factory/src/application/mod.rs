//! # Application Layer
//!
//! Command semantics over the Authority Store and the bank ledger.

pub mod service;

pub use service::{ServiceCheckpoint, TokenFactoryService};
