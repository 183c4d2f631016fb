//! # Authority Store
//!
//! Typed view over a [`KvStore`]: one authority record per canonical denom
//! plus the global module parameters. Records are JSON encoded.
//!
//! ```text
//! denom_admins/<canonical denom>  ->  DenomAuthority
//! module_params                   ->  ModuleParams
//! ```
//!
//! Callers re-read on every operation; nothing is cached here.

use super::denom::{DenomStr, TfDenom, DENOM_PREFIX, DENOM_SEPARATOR};
use super::entities::{DenomAuthority, ModuleParams};
use super::errors::{StoreError, TokenFactoryError};
use super::value_objects::Address;
use crate::ports::outbound::{KvStore, Revertible};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Key prefix of authority records.
pub const DENOM_ADMINS_PREFIX: &str = "denom_admins/";

/// Key of the module parameters.
pub const MODULE_PARAMS_KEY: &str = "module_params";

pub struct AuthorityStore<S: KvStore> {
    kv: S,
}

impl<S: KvStore> AuthorityStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Create the authority record for a new denom with `admin = creator`.
    ///
    /// Fails with `AlreadyExists` if the canonical denom is taken.
    pub fn insert_denom(&mut self, denom: &TfDenom) -> Result<DenomStr, TokenFactoryError> {
        let denom_str = denom.denom();
        let key = authority_key(denom_str.as_str());
        if self.kv.has(&key) {
            return Err(TokenFactoryError::AlreadyExists {
                denom: denom_str.into_string(),
            });
        }
        self.write(&key, &DenomAuthority::new(denom.creator.clone()))?;
        debug!(denom = %denom_str, admin = %denom.creator, "Inserted denom authority");
        Ok(denom_str)
    }

    pub fn get_authority(&self, denom: &str) -> Result<DenomAuthority, TokenFactoryError> {
        self.read(&authority_key(denom))?
            .ok_or_else(|| TokenFactoryError::NotFound {
                denom: denom.to_string(),
            })
    }

    pub fn get_admin(&self, denom: &str) -> Result<Address, TokenFactoryError> {
        Ok(self.get_authority(denom)?.admin)
    }

    pub fn has_denom(&self, denom: &str) -> bool {
        self.kv.has(&authority_key(denom))
    }

    /// Unconditional overwrite. Authorization is the caller's job.
    pub fn set_authority(
        &mut self,
        denom: &str,
        record: &DenomAuthority,
    ) -> Result<(), TokenFactoryError> {
        self.write(&authority_key(denom), record)
    }

    /// Stored params, or the defaults if none were ever written.
    pub fn get_params(&self) -> Result<ModuleParams, TokenFactoryError> {
        Ok(self
            .read(MODULE_PARAMS_KEY.as_bytes())?
            .unwrap_or_default())
    }

    pub fn set_params(&mut self, params: &ModuleParams) -> Result<(), TokenFactoryError> {
        self.write(MODULE_PARAMS_KEY.as_bytes(), params)
    }

    /// Canonical denoms created by `creator`, in ascending order.
    pub fn denoms_by_creator(&self, creator: &Address) -> Vec<String> {
        let prefix = authority_key(&format!(
            "{DENOM_PREFIX}{DENOM_SEPARATOR}{creator}{DENOM_SEPARATOR}"
        ));
        self.kv
            .prefix_scan(&prefix)
            .into_iter()
            .filter_map(|(key, _)| denom_from_key(&key))
            .collect()
    }

    /// Every authority record, ordered by denom.
    pub fn all_authorities(&self) -> Result<Vec<(String, DenomAuthority)>, TokenFactoryError> {
        self.kv
            .prefix_scan(DENOM_ADMINS_PREFIX.as_bytes())
            .into_iter()
            .filter_map(|(key, value)| denom_from_key(&key).map(|denom| (denom, key, value)))
            .map(|(denom, key, value)| decode(&key, &value).map(|auth| (denom, auth)))
            .collect()
    }

    fn read<T: DeserializeOwned>(&self, key: &[u8]) -> Result<Option<T>, TokenFactoryError> {
        self.kv
            .get(key)
            .map(|bytes| decode(key, &bytes))
            .transpose()
    }

    fn write<T: Serialize>(&mut self, key: &[u8], value: &T) -> Result<(), TokenFactoryError> {
        let bytes =
            serde_json::to_vec(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.kv.set(key, bytes);
        Ok(())
    }
}

impl<S: KvStore> Revertible for AuthorityStore<S> {
    type Checkpoint = S::Checkpoint;

    fn checkpoint(&self) -> Self::Checkpoint {
        self.kv.checkpoint()
    }

    fn revert_to(&mut self, checkpoint: Self::Checkpoint) {
        self.kv.revert_to(checkpoint);
    }
}

fn authority_key(denom: &str) -> Vec<u8> {
    format!("{DENOM_ADMINS_PREFIX}{denom}").into_bytes()
}

fn denom_from_key(key: &[u8]) -> Option<String> {
    std::str::from_utf8(key)
        .ok()?
        .strip_prefix(DENOM_ADMINS_PREFIX)
        .map(str::to_string)
}

fn decode<T: DeserializeOwned>(key: &[u8], bytes: &[u8]) -> Result<T, TokenFactoryError> {
    serde_json::from_slice(bytes).map_err(|e| {
        StoreError::Corrupted {
            key: String::from_utf8_lossy(key).into_owned(),
            reason: e.to_string(),
        }
        .into()
    })
}
