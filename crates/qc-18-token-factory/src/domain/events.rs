//! # Events
//!
//! One typed event per successful state-changing command. Each carries
//! enough fields to reconstruct the transition without re-reading storage.

use super::value_objects::{Address, Coin, DenomMetadata};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenFactoryEvent {
    ChangeAdmin {
        denom: String,
        old_admin: Address,
        new_admin: Address,
    },
    Mint {
        coin: Coin,
        to_addr: Address,
        caller: Address,
    },
    Burn {
        coin: Coin,
        from_addr: Address,
        caller: Address,
    },
    SetDenomMetadata {
        denom: String,
        metadata: DenomMetadata,
        caller: Address,
    },
}

impl TokenFactoryEvent {
    /// Short event name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ChangeAdmin { .. } => "change_admin",
            Self::Mint { .. } => "mint",
            Self::Burn { .. } => "burn",
            Self::SetDenomMetadata { .. } => "set_denom_metadata",
        }
    }
}
