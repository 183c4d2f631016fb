//! IPC Module for the Token Factory
//!
//! - Accept: the eight `TokenFactoryMsg` commands, from any signer
//! - Governance-gated: `UpdateModuleParams` (configured authority only)
//! - Sudo-gated: `SudoSetDenomMetadata`
//! - Emit: `TokenFactoryEvent` through the configured `EventSink`

pub mod handler;
pub mod payloads;

pub use handler::TokenFactoryHandler;
pub use payloads::*;
