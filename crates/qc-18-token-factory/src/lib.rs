//! # QC-18: Token Factory Subsystem
//!
//! Permissioned sub-currency factory on top of the bank ledger. Any account
//! can create a denom in its own namespace and becomes its admin; the admin
//! mints, burns and manages metadata. All supply changes go through the
//! ledger's module account, so this subsystem keeps no balances itself.
//!
//! ## Architecture
//!
//! - **Domain**: Denomination model, authority records, events, Authority Store
//! - **Ports**: Inbound (`TokenFactoryApi`) and Outbound (`KvStore`, `BankKeeper`,
//!   `SudoPermissions`, `EventSink`)
//! - **Application**: Command semantics
//! - **IPC**: Handler providing the per-command transaction boundary
//! - **Genesis**: State import/export and genesis message replay
//!
//! ## Module Structure
//!
//! ```text
//! qc-18-token-factory/
//! ├── domain/        # TfDenom, DenomAuthority, ModuleParams, AuthorityStore
//! ├── ports/         # Hexagonal ports
//! ├── application/   # TokenFactoryService
//! ├── ipc/           # Messages, responses, TokenFactoryHandler
//! ├── adapters/      # In-memory store, bank, sudoers, event sink
//! ├── genesis.rs
//! └── config.rs
//! ```
//!
//! ## Denom Format
//!
//! ```text
//! factory/<creator>/<subdenom>
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod genesis;
pub mod ipc;
pub mod ports;

pub use application::service::TokenFactoryService;
pub use config::TokenFactoryConfig;
pub use domain::*;
pub use genesis::{export_genesis, init_genesis, GenesisDenom, GenesisMessages, GenesisState};
pub use ipc::{TokenFactoryHandler, TokenFactoryMsg, TokenFactoryResponse};
pub use ports::inbound::TokenFactoryApi;
pub use ports::outbound::{BankKeeper, EventSink, KvStore, Revertible, SudoPermissions};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
