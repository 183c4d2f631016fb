//! # Genesis
//!
//! Two startup paths:
//!
//! - [`GenesisState`]: module params plus the authority record of every
//!   factory denom, imported with [`init_genesis`] and produced by
//!   [`export_genesis`].
//! - [`GenesisMessages`]: arbitrary commands decoded from JSON and replayed
//!   through the handler in order. The first failure aborts the replay.

use crate::application::service::TokenFactoryService;
use crate::domain::{
    DenomAuthority, DenomStr, GenesisError, ModuleParams, TokenFactoryError,
};
use crate::ipc::handler::TokenFactoryHandler;
use crate::ipc::payloads::{TokenFactoryMsg, TokenFactoryResponse};
use crate::ports::outbound::{BankKeeper, EventSink, KvStore, Revertible, SudoPermissions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Authority record of one denom as carried in genesis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisDenom {
    pub denom: String,
    pub authority: DenomAuthority,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    /// `None` means the configured default params.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<ModuleParams>,
    #[serde(default)]
    pub factory_denoms: Vec<GenesisDenom>,
}

impl GenesisState {
    /// Params valid, every denom a well-formed factory denom, no duplicates.
    pub fn validate(&self) -> Result<(), TokenFactoryError> {
        if let Some(params) = &self.params {
            params.validate()?;
        }

        let mut seen = BTreeSet::new();
        for entry in &self.factory_denoms {
            DenomStr::new(entry.denom.as_str()).to_tf_denom()?;
            entry.authority.admin.validate()?;
            if !seen.insert(entry.denom.as_str()) {
                return Err(TokenFactoryError::validation(format!(
                    "duplicate genesis denom {}",
                    entry.denom
                )));
            }
        }
        Ok(())
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, GenesisError> {
        serde_json::from_slice(bytes).map_err(|e| GenesisError::Decode(e.to_string()))
    }
}

/// Write params and authority records. Nothing is written if any entry fails.
pub fn init_genesis<S, B, P>(
    service: &mut TokenFactoryService<S, B, P>,
    genesis: &GenesisState,
) -> Result<(), GenesisError>
where
    S: KvStore,
    B: BankKeeper,
    P: SudoPermissions,
{
    genesis.validate().map_err(GenesisError::InvalidState)?;

    let checkpoint = service.checkpoint();
    if let Err(e) = import(service, genesis) {
        service.revert_to(checkpoint);
        warn!("[qc-18] Genesis import failed: {}", e);
        return Err(GenesisError::InvalidState(e));
    }

    info!(
        denoms = genesis.factory_denoms.len(),
        "[qc-18] Imported token factory genesis"
    );
    Ok(())
}

fn import<S, B, P>(
    service: &mut TokenFactoryService<S, B, P>,
    genesis: &GenesisState,
) -> Result<(), TokenFactoryError>
where
    S: KvStore,
    B: BankKeeper,
    P: SudoPermissions,
{
    let params = genesis
        .params
        .clone()
        .unwrap_or_else(|| service.config().default_params.clone());

    let store = service.store_mut();
    store.set_params(&params)?;
    for entry in &genesis.factory_denoms {
        let tf_denom = DenomStr::new(entry.denom.as_str()).to_tf_denom()?;
        store.insert_denom(&tf_denom)?;
        store.set_authority(&entry.denom, &entry.authority)?;
    }
    Ok(())
}

/// Current params and every authority record, ordered by denom.
pub fn export_genesis<S, B, P>(
    service: &TokenFactoryService<S, B, P>,
) -> Result<GenesisState, TokenFactoryError>
where
    S: KvStore,
    B: BankKeeper,
    P: SudoPermissions,
{
    let store = service.store();
    let mut factory_denoms: Vec<GenesisDenom> = store
        .all_authorities()?
        .into_iter()
        .map(|(denom, authority)| GenesisDenom { denom, authority })
        .collect();
    factory_denoms.sort_by(|a, b| a.denom.cmp(&b.denom));

    Ok(GenesisState {
        params: Some(store.get_params()?),
        factory_denoms,
    })
}

/// Commands executed once at chain start, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisMessages {
    #[serde(default)]
    pub messages: Vec<TokenFactoryMsg>,
}

impl GenesisMessages {
    pub fn from_json(bytes: &[u8]) -> Result<Self, GenesisError> {
        serde_json::from_slice(bytes).map_err(|e| GenesisError::Decode(e.to_string()))
    }

    /// Run every message through `handler`. Messages before a failure stay
    /// committed; the failing one is reverted by the handler.
    pub fn replay<S, B, P, E>(
        self,
        handler: &mut TokenFactoryHandler<S, B, P, E>,
    ) -> Result<Vec<TokenFactoryResponse>, GenesisError>
    where
        S: KvStore,
        B: BankKeeper,
        P: SudoPermissions,
        E: EventSink,
    {
        let total = self.messages.len();
        let mut responses = Vec::with_capacity(total);
        for (index, msg) in self.messages.into_iter().enumerate() {
            let response = handler
                .handle(Some(msg))
                .map_err(|source| GenesisError::Message { index, source })?;
            responses.push(response);
        }
        info!(messages = total, "[qc-18] Replayed genesis messages");
        Ok(responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryBank, InMemoryKvStore, StaticSudoers};
    use crate::config::TokenFactoryConfig;
    use crate::domain::Address;

    fn service() -> TokenFactoryService<InMemoryKvStore, InMemoryBank, StaticSudoers> {
        TokenFactoryService::new(
            TokenFactoryConfig::default(),
            InMemoryKvStore::new(),
            InMemoryBank::new().with_module_account("tokenfactory"),
            StaticSudoers::default(),
        )
    }

    fn entry(denom: &str, admin: &str) -> GenesisDenom {
        GenesisDenom {
            denom: denom.into(),
            authority: DenomAuthority::new(admin),
        }
    }

    #[test]
    fn test_init_then_export_is_sorted() {
        let mut svc = service();
        let genesis = GenesisState {
            params: None,
            factory_denoms: vec![
                entry("factory/bob/silver", "bob"),
                entry("factory/alice/gold", "carol"),
            ],
        };
        init_genesis(&mut svc, &genesis).unwrap();

        let exported = export_genesis(&svc).unwrap();
        assert_eq!(exported.params, Some(ModuleParams::default()));
        assert_eq!(
            exported.factory_denoms,
            vec![
                entry("factory/alice/gold", "carol"),
                entry("factory/bob/silver", "bob"),
            ]
        );
        assert_eq!(
            svc.store().get_admin("factory/alice/gold").unwrap(),
            Address::new("carol")
        );
    }

    #[test]
    fn test_duplicate_denoms_rejected() {
        let genesis = GenesisState {
            params: None,
            factory_denoms: vec![
                entry("factory/alice/gold", "alice"),
                entry("factory/alice/gold", "bob"),
            ],
        };
        assert!(matches!(
            genesis.validate(),
            Err(TokenFactoryError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_foreign_denom_rejected() {
        let genesis = GenesisState {
            params: None,
            factory_denoms: vec![entry("unibi", "alice")],
        };
        assert!(matches!(
            init_genesis(&mut service(), &genesis),
            Err(GenesisError::InvalidState(TokenFactoryError::InvalidNamespace { .. }))
        ));
    }

    #[test]
    fn test_import_over_existing_denom_leaves_no_partial_state() {
        let mut svc = service();
        init_genesis(
            &mut svc,
            &GenesisState {
                params: None,
                factory_denoms: vec![entry("factory/bob/silver", "bob")],
            },
        )
        .unwrap();

        let err = init_genesis(
            &mut svc,
            &GenesisState {
                params: Some(ModuleParams {
                    denom_creation_gas_consume: 9,
                }),
                factory_denoms: vec![
                    entry("factory/alice/gold", "alice"),
                    entry("factory/bob/silver", "bob"),
                ],
            },
        )
        .unwrap_err();

        assert!(matches!(
            err,
            GenesisError::InvalidState(TokenFactoryError::AlreadyExists { .. })
        ));
        assert!(!svc.store().has_denom("factory/alice/gold"));
        assert_eq!(svc.store().get_params().unwrap(), ModuleParams::default());
    }

    #[test]
    fn test_genesis_state_json() {
        let json = br#"{
            "factory_denoms": [
                {"denom": "factory/alice/gold", "authority": {"admin": "alice"}}
            ]
        }"#;
        let genesis = GenesisState::from_json(json).unwrap();
        assert!(genesis.params.is_none());
        assert_eq!(genesis.factory_denoms, vec![entry("factory/alice/gold", "alice")]);

        assert!(matches!(
            GenesisState::from_json(b"{not json"),
            Err(GenesisError::Decode(_))
        ));
    }
}
