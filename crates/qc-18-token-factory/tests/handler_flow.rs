//! End-to-end command flows through `TokenFactoryHandler` with the
//! in-memory adapters.

use primitive_types::U256;
use qc_18_token_factory::adapters::{
    InMemoryBank, InMemoryKvStore, RecordingEventSink, StaticSudoers,
};
use qc_18_token_factory::ipc::payloads::{
    MsgBurn, MsgBurnNative, MsgChangeAdmin, MsgCreateDenom, MsgMint, MsgMintResponse,
    MsgSetDenomMetadata, MsgSudoSetDenomMetadata, MsgUpdateModuleParams,
};
use qc_18_token_factory::{
    Address, Coin, DenomMetadata, DenomUnit, GenesisError, GenesisMessages, LedgerError,
    ModuleParams, TokenFactoryApi, TokenFactoryConfig, TokenFactoryError, TokenFactoryEvent,
    TokenFactoryHandler, TokenFactoryMsg, TokenFactoryResponse, TokenFactoryService,
};

type Handler =
    TokenFactoryHandler<InMemoryKvStore, InMemoryBank, StaticSudoers, RecordingEventSink>;

const GOLD: &str = "factory/C/gold";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn handler() -> Handler {
    init_tracing();
    let config = TokenFactoryConfig::default();
    let bank = InMemoryBank::new()
        .with_module_account(&config.module_account)
        .with_blocked("blackhole");
    let service = TokenFactoryService::new(
        config,
        InMemoryKvStore::new(),
        bank,
        StaticSudoers::new(["sudoer"]),
    );
    TokenFactoryHandler::new(service, RecordingEventSink::new())
}

fn addr(s: &str) -> Address {
    Address::new(s)
}

fn create(sender: &str, subdenom: &str) -> TokenFactoryMsg {
    TokenFactoryMsg::CreateDenom(MsgCreateDenom {
        sender: addr(sender),
        subdenom: subdenom.into(),
    })
}

fn mint(sender: &str, amount: u64, mint_to: Option<&str>) -> TokenFactoryMsg {
    TokenFactoryMsg::Mint(MsgMint {
        sender: addr(sender),
        coin: Coin::new(GOLD, amount),
        mint_to: mint_to.map(addr),
    })
}

fn burn(sender: &str, amount: u64, burn_from: Option<&str>) -> TokenFactoryMsg {
    TokenFactoryMsg::Burn(MsgBurn {
        sender: addr(sender),
        coin: Coin::new(GOLD, amount),
        burn_from: burn_from.map(addr),
    })
}

fn gold_metadata() -> DenomMetadata {
    DenomMetadata {
        description: "C's gold".into(),
        denom_units: vec![
            DenomUnit {
                denom: GOLD.into(),
                exponent: 0,
                aliases: vec![],
            },
            DenomUnit {
                denom: "GOLD".into(),
                exponent: 6,
                aliases: vec!["gold".into()],
            },
        ],
        base: GOLD.into(),
        display: "GOLD".into(),
        name: "Gold".into(),
        symbol: "GOLD".into(),
        uri: String::new(),
        uri_hash: String::new(),
    }
}

fn balance(handler: &Handler, who: &str) -> U256 {
    handler.service().bank().balance(&addr(who), GOLD)
}

fn supply(handler: &Handler) -> U256 {
    handler.service().bank().supply(GOLD)
}

// =============================================================================
// Full lifecycle
// =============================================================================

#[test]
fn test_create_mint_change_admin_burn() {
    let mut h = handler();

    let resp = h.handle(Some(create("C", "gold"))).unwrap();
    match resp {
        TokenFactoryResponse::CreateDenom(r) => assert_eq!(r.new_token_denom, GOLD),
        other => panic!("unexpected response {other:?}"),
    }
    assert_eq!(h.service().store().get_admin(GOLD).unwrap(), addr("C"));

    let resp = h.handle(Some(mint("C", 100, Some("")))).unwrap();
    assert_eq!(
        resp,
        TokenFactoryResponse::Mint(MsgMintResponse { mint_to: addr("C") })
    );
    assert_eq!(balance(&h, "C"), U256::from(100u64));

    h.handle(Some(TokenFactoryMsg::ChangeAdmin(MsgChangeAdmin {
        sender: addr("C"),
        denom: GOLD.into(),
        new_admin: addr("D"),
    })))
    .unwrap();
    assert_eq!(h.service().store().get_admin(GOLD).unwrap(), addr("D"));

    let err = h.handle(Some(mint("C", 1, None))).unwrap_err();
    assert_eq!(
        err,
        TokenFactoryError::Unauthorized {
            sender: "C".into(),
            admin: "D".into(),
        }
    );

    h.handle(Some(burn("D", 40, Some("C")))).unwrap();
    assert_eq!(balance(&h, "C"), U256::from(60u64));
    assert_eq!(supply(&h), U256::from(60u64));

    let kinds: Vec<_> = h.event_sink().events().iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec!["mint", "change_admin", "burn"]);
    assert_eq!(
        h.event_sink().events()[2],
        TokenFactoryEvent::Burn {
            coin: Coin::new(GOLD, 40u64),
            from_addr: addr("C"),
            caller: addr("D"),
        }
    );
}

#[test]
fn test_change_admin_by_stranger_keeps_admin() {
    let mut h = handler();
    h.handle(Some(create("C", "gold"))).unwrap();

    let err = h
        .handle(Some(TokenFactoryMsg::ChangeAdmin(MsgChangeAdmin {
            sender: addr("E"),
            denom: GOLD.into(),
            new_admin: addr("E"),
        })))
        .unwrap_err();

    assert!(matches!(err, TokenFactoryError::Unauthorized { .. }));
    assert_eq!(h.service().store().get_admin(GOLD).unwrap(), addr("C"));
    assert!(h.event_sink().events().is_empty());
}

#[test]
fn test_change_admin_unknown_denom_not_found() {
    let mut h = handler();
    let err = h
        .handle(Some(TokenFactoryMsg::ChangeAdmin(MsgChangeAdmin {
            sender: addr("C"),
            denom: GOLD.into(),
            new_admin: addr("D"),
        })))
        .unwrap_err();
    assert_eq!(
        err,
        TokenFactoryError::NotFound {
            denom: GOLD.into()
        }
    );
}

// =============================================================================
// Failure atomicity
// =============================================================================

#[test]
fn test_mint_to_blocked_address_changes_nothing() {
    let mut h = handler();
    h.handle(Some(create("C", "gold"))).unwrap();

    let err = h.handle(Some(mint("C", 50, Some("blackhole")))).unwrap_err();

    assert_eq!(
        err,
        TokenFactoryError::BlockedAddress {
            address: "blackhole".into()
        }
    );
    assert_eq!(supply(&h), U256::zero());
    assert_eq!(balance(&h, "blackhole"), U256::zero());
    assert!(h.event_sink().events().is_empty());
}

#[test]
fn test_burn_from_blocked_address_changes_nothing() {
    let mut h = handler();
    h.handle(Some(create("C", "gold"))).unwrap();
    h.handle(Some(mint("C", 10, None))).unwrap();

    let err = h.handle(Some(burn("C", 5, Some("blackhole")))).unwrap_err();

    assert!(matches!(err, TokenFactoryError::BlockedAddress { .. }));
    assert_eq!(supply(&h), U256::from(10u64));
    assert_eq!(h.event_sink().events().len(), 1);
}

#[test]
fn test_burn_more_than_held_changes_nothing() {
    let mut h = handler();
    h.handle(Some(create("C", "gold"))).unwrap();
    h.handle(Some(mint("C", 30, None))).unwrap();

    let err = h.handle(Some(burn("C", 31, None))).unwrap_err();

    assert!(matches!(
        err,
        TokenFactoryError::Ledger(LedgerError::InsufficientFunds { .. })
    ));
    assert_eq!(balance(&h, "C"), U256::from(30u64));
    assert_eq!(supply(&h), U256::from(30u64));
}

#[test]
fn test_mint_outside_factory_namespace_rejected() {
    let mut h = handler();
    let err = h
        .handle(Some(TokenFactoryMsg::Mint(MsgMint {
            sender: addr("C"),
            coin: Coin::new("unibi", 1u64),
            mint_to: None,
        })))
        .unwrap_err();
    assert!(matches!(err, TokenFactoryError::NotFound { .. }));
}

#[test]
fn test_zero_amount_fails_validation() {
    let mut h = handler();
    h.handle(Some(create("C", "gold"))).unwrap();
    assert!(matches!(
        h.handle(Some(mint("C", 0, None))),
        Err(TokenFactoryError::ValidationFailed(_))
    ));
}

// =============================================================================
// Governance and sudo
// =============================================================================

#[test]
fn test_update_module_params_gating() {
    let mut h = handler();
    let update = |authority: &str, gas: u64| {
        Some(TokenFactoryMsg::UpdateModuleParams(MsgUpdateModuleParams {
            authority: addr(authority),
            params: ModuleParams {
                denom_creation_gas_consume: gas,
            },
        }))
    };

    assert!(matches!(
        h.handle(update("C", 10)),
        Err(TokenFactoryError::InvalidSigner { .. })
    ));
    assert!(matches!(
        h.handle(update("gov", u64::MAX)),
        Err(TokenFactoryError::ValidationFailed(_))
    ));
    assert_eq!(h.service().params().unwrap(), ModuleParams::default());

    h.handle(update("gov", 10)).unwrap();
    assert_eq!(
        h.service().params().unwrap(),
        ModuleParams {
            denom_creation_gas_consume: 10
        }
    );
}

#[test]
fn test_metadata_admin_and_sudo_paths() {
    let mut h = handler();
    h.handle(Some(create("C", "gold"))).unwrap();

    h.handle(Some(TokenFactoryMsg::SetDenomMetadata(MsgSetDenomMetadata {
        sender: addr("C"),
        metadata: gold_metadata(),
    })))
    .unwrap();
    assert_eq!(
        h.service().denom_info(GOLD).unwrap().metadata,
        Some(gold_metadata())
    );

    let mut renamed = gold_metadata();
    renamed.name = "Sudo Gold".into();

    let err = h
        .handle(Some(TokenFactoryMsg::SudoSetDenomMetadata(
            MsgSudoSetDenomMetadata {
                sender: addr("C"),
                metadata: renamed.clone(),
            },
        )))
        .unwrap_err();
    assert!(matches!(err, TokenFactoryError::Unauthorized { .. }));

    h.handle(Some(TokenFactoryMsg::SudoSetDenomMetadata(
        MsgSudoSetDenomMetadata {
            sender: addr("sudoer"),
            metadata: renamed.clone(),
        },
    )))
    .unwrap();
    assert_eq!(h.service().denom_info(GOLD).unwrap().metadata, Some(renamed));
}

#[test]
fn test_burn_native_requires_funds() {
    let mut h = handler();
    h.service_mut()
        .bank_mut()
        .fund(&addr("C"), &Coin::new("unibi", 5u64))
        .unwrap();
    let burn_native = |amount: u64| {
        Some(TokenFactoryMsg::BurnNative(MsgBurnNative {
            sender: addr("C"),
            coin: Coin::new("unibi", amount),
        }))
    };

    assert!(matches!(
        h.handle(burn_native(6)),
        Err(TokenFactoryError::Ledger(_))
    ));
    h.handle(burn_native(5)).unwrap();
    assert_eq!(h.service().bank().supply("unibi"), U256::zero());
}

// =============================================================================
// Genesis message replay
// =============================================================================

#[test]
fn test_genesis_messages_replay_in_order() {
    let mut h = handler();
    let json = br#"{
        "messages": [
            {"type": "create_denom", "value": {"sender": "C", "subdenom": "gold"}},
            {"type": "mint", "value": {
                "sender": "C",
                "coin": {"denom": "factory/C/gold", "amount": "0x3e8"},
                "mint_to": "D"
            }}
        ]
    }"#;

    let responses = GenesisMessages::from_json(json)
        .unwrap()
        .replay(&mut h)
        .unwrap();

    assert_eq!(responses.len(), 2);
    assert_eq!(balance(&h, "D"), U256::from(1000u64));
}

#[test]
fn test_genesis_replay_stops_at_first_failure() {
    let mut h = handler();
    let messages = GenesisMessages {
        messages: vec![
            create("C", "gold"),
            mint("E", 1, None),
            create("C", "silver"),
        ],
    };

    let err = messages.replay(&mut h).unwrap_err();

    assert!(matches!(
        err,
        GenesisError::Message {
            index: 1,
            source: TokenFactoryError::Unauthorized { .. }
        }
    ));
    assert!(h.service().store().has_denom(GOLD));
    assert!(!h.service().store().has_denom("factory/C/silver"));
}
