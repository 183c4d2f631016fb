//! # Domain Errors
//!
//! Error types for the Token Factory.
//!
//! Every handler failure surfaces as one `TokenFactoryError`; nothing is
//! retried inside the subsystem.

use primitive_types::U256;
use thiserror::Error;

/// Token Factory error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenFactoryError {
    /// Command envelope was absent.
    #[error("nil command: the message envelope is empty")]
    NilCommand,

    /// Structural validation failed before any state access.
    #[error("validation failed: {0}")]
    ValidationFailed(String),

    /// No authority record exists for the denom.
    #[error("denom not found: {denom}")]
    NotFound {
        /// Canonical denom string.
        denom: String,
    },

    /// Denom creation collided with an existing record.
    #[error("denom already exists: {denom}")]
    AlreadyExists {
        /// Canonical denom string.
        denom: String,
    },

    /// Sender is not the recorded admin.
    #[error("unauthorized: sender ({sender}), admin ({admin})")]
    Unauthorized {
        /// Address that sent the command.
        sender: String,
        /// Address allowed to send it.
        admin: String,
    },

    /// Sender is not the governance authority.
    #[error("invalid authority; expected {expected}, got {got}")]
    InvalidSigner {
        /// Configured governance authority.
        expected: String,
        /// Signer of the command.
        got: String,
    },

    /// Mint destination or burn source is disallowed by ledger policy.
    #[error("blocked address: {address}")]
    BlockedAddress {
        /// The blocked account.
        address: String,
    },

    /// Denom string does not belong to the factory namespace.
    #[error("invalid namespace: {denom} is not a factory denom")]
    InvalidNamespace {
        /// Offending denom string.
        denom: String,
    },

    /// Failure reported by the bank ledger.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Failure reported by the authority store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl TokenFactoryError {
    /// Shorthand for [`TokenFactoryError::ValidationFailed`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationFailed(msg.into())
    }
}

/// Errors raised by the bank ledger collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Account holds less than the requested amount.
    #[error("insufficient funds: {account} has {available}{denom}, needs {required}{denom}")]
    InsufficientFunds {
        /// Debited account.
        account: String,
        /// Coin denom.
        denom: String,
        /// Requested amount.
        required: U256,
        /// Current balance.
        available: U256,
    },

    /// Supply arithmetic overflowed.
    #[error("supply overflow for {denom}")]
    SupplyOverflow {
        /// Coin denom.
        denom: String,
    },

    /// Module account is not registered with the ledger.
    #[error("unknown module account: {0}")]
    UnknownModuleAccount(String),
}

/// Errors raised by the authority store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A stored record could not be decoded.
    #[error("corrupted record at {key}: {reason}")]
    Corrupted {
        /// Storage key.
        key: String,
        /// Decoder message.
        reason: String,
    },

    /// A record could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors raised while loading genesis state or replaying genesis messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenesisError {
    /// Genesis document could not be decoded.
    #[error("genesis decode error: {0}")]
    Decode(String),

    /// Genesis state failed validation or import.
    #[error("invalid genesis state: {0}")]
    InvalidState(#[source] TokenFactoryError),

    /// A replayed message failed; replay stops at the first failure.
    #[error("genesis message {index} failed: {source}")]
    Message {
        /// Position of the failing message.
        index: usize,
        /// Handler error.
        #[source]
        source: TokenFactoryError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_error_names_both_parties() {
        let err = TokenFactoryError::Unauthorized {
            sender: "alice".into(),
            admin: "bob".into(),
        };
        assert_eq!(err.to_string(), "unauthorized: sender (alice), admin (bob)");
    }

    #[test]
    fn test_invalid_signer_error() {
        let err = TokenFactoryError::InvalidSigner {
            expected: "gov".into(),
            got: "mallory".into(),
        };
        assert!(err.to_string().contains("expected gov, got mallory"));
    }

    #[test]
    fn test_ledger_error_converts() {
        let err: TokenFactoryError = LedgerError::InsufficientFunds {
            account: "alice".into(),
            denom: "factory/alice/gold".into(),
            required: U256::from(50u64),
            available: U256::from(10u64),
        }
        .into();
        assert!(matches!(err, TokenFactoryError::Ledger(_)));
        assert!(err.to_string().contains("insufficient funds"));
    }
}
