//! # Domain Entities
//!
//! Authority records and module parameters owned by the Authority Store.

use super::errors::TokenFactoryError;
use super::value_objects::{Address, DenomMetadata};
use serde::{Deserialize, Serialize};

/// Upper bound on the gas charged for creating a denom.
pub const MAX_DENOM_CREATION_GAS: u64 = 1_000_000_000;

/// Default gas charged for creating a denom.
pub const DEFAULT_DENOM_CREATION_GAS: u64 = 4_000_000;

/// Authority record for one denom.
///
/// Written once at creation with `admin = creator`; replaced wholesale by
/// `ChangeAdmin`. Never deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomAuthority {
    pub admin: Address,
}

impl DenomAuthority {
    pub fn new(admin: impl Into<Address>) -> Self {
        Self {
            admin: admin.into(),
        }
    }

    /// Whether `sender` is the recorded admin.
    pub fn is_admin(&self, sender: &Address) -> bool {
        &self.admin == sender
    }
}

/// Global module parameters, replaced as a unit by governance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleParams {
    /// Gas the host charges for `CreateDenom`.
    pub denom_creation_gas_consume: u64,
}

impl Default for ModuleParams {
    fn default() -> Self {
        Self {
            denom_creation_gas_consume: DEFAULT_DENOM_CREATION_GAS,
        }
    }
}

impl ModuleParams {
    pub fn validate(&self) -> Result<(), TokenFactoryError> {
        if self.denom_creation_gas_consume > MAX_DENOM_CREATION_GAS {
            return Err(TokenFactoryError::validation(format!(
                "denom_creation_gas_consume {} exceeds maximum {}",
                self.denom_creation_gas_consume, MAX_DENOM_CREATION_GAS
            )));
        }
        Ok(())
    }
}

/// Query view of one denom: its admin and any bank metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomInfo {
    pub denom: String,
    pub admin: Address,
    pub metadata: Option<DenomMetadata>,
}
