//! # Ports Layer
//!
//! Driving port: [`TokenFactoryApi`].
//! Driven ports: [`KvStore`], [`BankKeeper`], [`SudoPermissions`], [`EventSink`].

pub mod inbound;
pub mod outbound;

pub use inbound::TokenFactoryApi;
pub use outbound::{BankKeeper, EventSink, KvStore, Revertible, SudoPermissions};
