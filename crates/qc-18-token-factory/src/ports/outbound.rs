//! # Outbound Ports
//!
//! Collaborators the Token Factory drives: the key-value store backing the
//! Authority Store, the bank ledger, the sudo permission checker and the
//! event sink.
//!
//! Commands are applied one at a time by the host, so every port takes
//! `&mut self` for writes and none of them lock internally.

use crate::domain::{
    Address, Coin, DenomMetadata, LedgerError, TokenFactoryError, TokenFactoryEvent,
};

/// State that can be rolled back to an earlier checkpoint.
///
/// The handler checkpoints every collaborator before a command and reverts
/// all of them if the command fails.
///
/// A checkpoint is taken for every command, so its cost is paid per command.
/// The in-memory adapters clone their whole state, which is O(total state);
/// persistent adapters should hand out a cheap handle instead, such as a
/// write-batch marker or a copy-on-write snapshot.
pub trait Revertible {
    /// Opaque snapshot of the state.
    type Checkpoint;

    /// Capture the current state.
    fn checkpoint(&self) -> Self::Checkpoint;

    /// Restore a previously captured state, discarding later writes.
    fn revert_to(&mut self, checkpoint: Self::Checkpoint);
}

/// Byte-keyed persistent store.
pub trait KvStore: Revertible + Send + Sync {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    fn set(&mut self, key: &[u8], value: Vec<u8>);

    fn has(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// All entries whose key starts with `prefix`, in ascending key order.
    fn prefix_scan(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)>;
}

/// Bank ledger operations consumed by the factory.
///
/// Mint and burn may only target a module account; moving coins to and from
/// user accounts goes through the module-to-account transfers.
pub trait BankKeeper: Revertible + Send + Sync {
    /// Create `coins` in the balance of module account `module`.
    fn mint_coins(&mut self, module: &str, coins: &[Coin]) -> Result<(), LedgerError>;

    /// Destroy `coins` held by module account `module`.
    fn burn_coins(&mut self, module: &str, coins: &[Coin]) -> Result<(), LedgerError>;

    fn send_coins_from_module_to_account(
        &mut self,
        module: &str,
        to: &Address,
        coins: &[Coin],
    ) -> Result<(), LedgerError>;

    fn send_coins_from_account_to_module(
        &mut self,
        from: &Address,
        module: &str,
        coins: &[Coin],
    ) -> Result<(), LedgerError>;

    /// Whether ledger policy forbids moving funds to or from `addr`.
    fn blocked_addr(&self, addr: &Address) -> bool;

    fn set_denom_metadata(&mut self, metadata: DenomMetadata);

    fn get_denom_metadata(&self, denom: &str) -> Option<DenomMetadata>;
}

/// Privileged override checker ("sudoers").
pub trait SudoPermissions: Send + Sync {
    /// `Ok(())` if `addr` holds sudo permission, `Unauthorized` otherwise.
    fn check_permissions(&self, addr: &Address) -> Result<(), TokenFactoryError>;
}

/// Receives events of committed commands.
pub trait EventSink: Send + Sync {
    fn publish(&mut self, event: TokenFactoryEvent);
}
