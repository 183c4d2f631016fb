//! Configuration for the Token Factory Subsystem

use crate::domain::{Address, ModuleParams, TokenFactoryError};
use serde::{Deserialize, Serialize};
use std::env;

/// Ledger module account used as the mint/burn intermediary.
pub const DEFAULT_MODULE_ACCOUNT: &str = "tokenfactory";

/// Governance authority allowed to update module params.
pub const DEFAULT_AUTHORITY: &str = "gov";

/// Token Factory configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFactoryConfig {
    /// Module account name passed to every ledger mint/burn/transfer call
    pub module_account: String,
    /// Only signer accepted by `UpdateModuleParams`
    pub authority: Address,
    /// Params written at genesis when none are supplied
    pub default_params: ModuleParams,
}

impl Default for TokenFactoryConfig {
    fn default() -> Self {
        Self {
            module_account: DEFAULT_MODULE_ACCOUNT.to_string(),
            authority: Address::new(DEFAULT_AUTHORITY),
            default_params: ModuleParams::default(),
        }
    }
}

impl TokenFactoryConfig {
    /// Load from environment variables, falling back to defaults for unset
    /// ones. Set but malformed values are rejected.
    pub fn from_env() -> Result<Self, TokenFactoryError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, TokenFactoryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_params = match var("QC_TF_DENOM_CREATION_GAS") {
            Some(raw) => ModuleParams {
                denom_creation_gas_consume: raw.trim().parse().map_err(|_| {
                    TokenFactoryError::validation(format!(
                        "QC_TF_DENOM_CREATION_GAS: {raw:?} is not an unsigned integer"
                    ))
                })?,
            },
            None => defaults.default_params,
        };

        let config = Self {
            module_account: var("QC_TF_MODULE_ACCOUNT").unwrap_or(defaults.module_account),
            authority: var("QC_TF_AUTHORITY")
                .map(Address::new)
                .unwrap_or(defaults.authority),
            default_params,
        };
        config.validate()?;
        Ok(config)
    }

    /// Authority must be a usable signer and default params must be valid.
    pub fn validate(&self) -> Result<(), TokenFactoryError> {
        if self.module_account.trim().is_empty() {
            return Err(TokenFactoryError::validation("empty module account name"));
        }
        self.authority.validate()?;
        self.default_params.validate()
    }

    pub fn with_authority(mut self, authority: impl Into<Address>) -> Self {
        self.authority = authority.into();
        self
    }

    pub fn with_module_account(mut self, module: impl Into<String>) -> Self {
        self.module_account = module.into();
        self
    }
}
