//! Token Factory Service
//!
//! Main service implementing [`TokenFactoryApi`].
//!
//! Every command runs `validate_basic()` before touching state, re-reads the
//! authority record it needs, checks the sender, then drives the bank ledger.
//! Events are buffered until the caller commits via
//! [`TokenFactoryService::take_events`]; a failed command is rolled back with
//! [`Revertible::revert_to`], which also drops its buffered events.

use crate::config::TokenFactoryConfig;
use crate::domain::{
    Address, AuthorityStore, Coin, DenomAuthority, DenomInfo, DenomStr, ModuleParams,
    TokenFactoryError, TokenFactoryEvent,
};
use crate::ipc::payloads::{
    MsgBurn, MsgBurnNative, MsgChangeAdmin, MsgCreateDenom, MsgCreateDenomResponse, MsgMint,
    MsgMintResponse, MsgSetDenomMetadata, MsgSudoSetDenomMetadata, MsgUpdateModuleParams,
};
use crate::ports::inbound::TokenFactoryApi;
use crate::ports::outbound::{BankKeeper, KvStore, Revertible, SudoPermissions};
use tracing::{debug, info};

/// Snapshot of everything a command can touch.
#[derive(Debug, Clone)]
pub struct ServiceCheckpoint<SC, BC> {
    store: SC,
    bank: BC,
    events: usize,
}

/// Token Factory Service
///
/// Owns the Authority Store and the ledger/sudo collaborators:
/// 1. Resolve the authority record for the target denom
/// 2. Check the sender against it
/// 3. Apply the ledger or store effect
/// 4. Buffer the event
pub struct TokenFactoryService<S: KvStore, B: BankKeeper, P: SudoPermissions> {
    config: TokenFactoryConfig,
    store: AuthorityStore<S>,
    bank: B,
    sudo: P,
    pending_events: Vec<TokenFactoryEvent>,
}

impl<S: KvStore, B: BankKeeper, P: SudoPermissions> TokenFactoryService<S, B, P> {
    pub fn new(config: TokenFactoryConfig, kv: S, bank: B, sudo: P) -> Self {
        Self {
            config,
            store: AuthorityStore::new(kv),
            bank,
            sudo,
            pending_events: Vec::new(),
        }
    }

    pub fn config(&self) -> &TokenFactoryConfig {
        &self.config
    }

    pub fn store(&self) -> &AuthorityStore<S> {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut AuthorityStore<S> {
        &mut self.store
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    /// Direct ledger access, e.g. to fund accounts in tests or genesis.
    pub fn bank_mut(&mut self) -> &mut B {
        &mut self.bank
    }

    /// Drain the events of the committed command(s).
    pub fn take_events(&mut self) -> Vec<TokenFactoryEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn pending_events(&self) -> &[TokenFactoryEvent] {
        &self.pending_events
    }

    /// Load the authority record and require `sender` to be its admin.
    fn authorize_admin(
        &self,
        denom: &str,
        sender: &Address,
    ) -> Result<DenomAuthority, TokenFactoryError> {
        let authority = self.store.get_authority(denom)?;
        if !authority.is_admin(sender) {
            return Err(TokenFactoryError::Unauthorized {
                sender: sender.to_string(),
                admin: authority.admin.to_string(),
            });
        }
        Ok(authority)
    }

    fn ensure_not_blocked(&self, addr: &Address) -> Result<(), TokenFactoryError> {
        if self.bank.blocked_addr(addr) {
            return Err(TokenFactoryError::BlockedAddress {
                address: addr.to_string(),
            });
        }
        Ok(())
    }

    /// Mint into the module account, then send to `to`.
    fn mint_to(&mut self, coin: &Coin, to: &Address) -> Result<(), TokenFactoryError> {
        DenomStr::new(coin.denom.as_str()).to_tf_denom()?;
        self.ensure_not_blocked(to)?;

        let coins = std::slice::from_ref(coin);
        let module = self.config.module_account.as_str();
        self.bank.mint_coins(module, coins)?;
        self.bank.send_coins_from_module_to_account(module, to, coins)?;
        Ok(())
    }

    /// Send from `from` into the module account, then burn.
    fn burn_from(&mut self, coin: &Coin, from: &Address) -> Result<(), TokenFactoryError> {
        DenomStr::new(coin.denom.as_str()).to_tf_denom()?;
        self.ensure_not_blocked(from)?;
        self.burn_via_module(coin, from)
    }

    fn burn_via_module(&mut self, coin: &Coin, from: &Address) -> Result<(), TokenFactoryError> {
        let coins = std::slice::from_ref(coin);
        let module = self.config.module_account.as_str();
        self.bank.send_coins_from_account_to_module(from, module, coins)?;
        self.bank.burn_coins(module, coins)?;
        Ok(())
    }
}

impl<S: KvStore, B: BankKeeper, P: SudoPermissions> Revertible for TokenFactoryService<S, B, P> {
    type Checkpoint = ServiceCheckpoint<S::Checkpoint, B::Checkpoint>;

    fn checkpoint(&self) -> Self::Checkpoint {
        ServiceCheckpoint {
            store: self.store.checkpoint(),
            bank: self.bank.checkpoint(),
            events: self.pending_events.len(),
        }
    }

    fn revert_to(&mut self, checkpoint: Self::Checkpoint) {
        self.store.revert_to(checkpoint.store);
        self.bank.revert_to(checkpoint.bank);
        self.pending_events.truncate(checkpoint.events);
    }
}

impl<S: KvStore, B: BankKeeper, P: SudoPermissions> TokenFactoryApi
    for TokenFactoryService<S, B, P>
{
    fn create_denom(
        &mut self,
        msg: MsgCreateDenom,
    ) -> Result<MsgCreateDenomResponse, TokenFactoryError> {
        msg.validate_basic()?;
        let denom = self.store.insert_denom(&msg.tf_denom())?;

        info!(denom = %denom, sender = %msg.sender, "Created denom");

        Ok(MsgCreateDenomResponse {
            new_token_denom: denom.into_string(),
        })
    }

    fn change_admin(&mut self, msg: MsgChangeAdmin) -> Result<(), TokenFactoryError> {
        msg.validate_basic()?;
        let mut authority = self.authorize_admin(&msg.denom, &msg.sender)?;

        authority.admin = msg.new_admin.clone();
        self.store.set_authority(&msg.denom, &authority)?;

        info!(
            denom = %msg.denom,
            old_admin = %msg.sender,
            new_admin = %msg.new_admin,
            "Changed denom admin"
        );

        self.pending_events.push(TokenFactoryEvent::ChangeAdmin {
            denom: msg.denom,
            old_admin: msg.sender,
            new_admin: msg.new_admin,
        });
        Ok(())
    }

    fn mint(&mut self, msg: MsgMint) -> Result<MsgMintResponse, TokenFactoryError> {
        msg.validate_basic()?;
        self.authorize_admin(&msg.coin.denom, &msg.sender)?;
        let to = msg.recipient();

        self.mint_to(&msg.coin, &to)?;

        info!(coin = %msg.coin, to = %to, caller = %msg.sender, "Minted");

        self.pending_events.push(TokenFactoryEvent::Mint {
            coin: msg.coin,
            to_addr: to.clone(),
            caller: msg.sender,
        });
        Ok(MsgMintResponse { mint_to: to })
    }

    fn burn(&mut self, msg: MsgBurn) -> Result<(), TokenFactoryError> {
        msg.validate_basic()?;
        self.authorize_admin(&msg.coin.denom, &msg.sender)?;
        let from = msg.source();

        self.burn_from(&msg.coin, &from)?;

        info!(coin = %msg.coin, from = %from, caller = %msg.sender, "Burned");

        self.pending_events.push(TokenFactoryEvent::Burn {
            coin: msg.coin,
            from_addr: from,
            caller: msg.sender,
        });
        Ok(())
    }

    fn set_denom_metadata(&mut self, msg: MsgSetDenomMetadata) -> Result<(), TokenFactoryError> {
        msg.validate_basic()?;
        let denom = msg.metadata.base.clone();
        self.authorize_admin(&denom, &msg.sender)?;

        self.bank.set_denom_metadata(msg.metadata.clone());

        info!(denom = %denom, caller = %msg.sender, "Set denom metadata");

        self.pending_events.push(TokenFactoryEvent::SetDenomMetadata {
            denom,
            metadata: msg.metadata,
            caller: msg.sender,
        });
        Ok(())
    }

    fn update_module_params(
        &mut self,
        msg: MsgUpdateModuleParams,
    ) -> Result<(), TokenFactoryError> {
        msg.validate_basic()?;
        if msg.authority != self.config.authority {
            return Err(TokenFactoryError::InvalidSigner {
                expected: self.config.authority.to_string(),
                got: msg.authority.to_string(),
            });
        }
        msg.params.validate()?;

        self.store.set_params(&msg.params)?;

        info!(
            denom_creation_gas_consume = msg.params.denom_creation_gas_consume,
            "Updated module params"
        );
        Ok(())
    }

    fn sudo_set_denom_metadata(
        &mut self,
        msg: MsgSudoSetDenomMetadata,
    ) -> Result<(), TokenFactoryError> {
        msg.validate_basic()?;
        self.sudo.check_permissions(&msg.sender)?;

        debug!(denom = %msg.metadata.base, sudoer = %msg.sender, "Sudo override of denom metadata");
        self.bank.set_denom_metadata(msg.metadata);
        Ok(())
    }

    fn burn_native(&mut self, msg: MsgBurnNative) -> Result<(), TokenFactoryError> {
        msg.validate_basic()?;
        self.burn_via_module(&msg.coin, &msg.sender)?;

        info!(coin = %msg.coin, sender = %msg.sender, "Burned native coins");
        Ok(())
    }

    fn params(&self) -> Result<ModuleParams, TokenFactoryError> {
        self.store.get_params()
    }

    fn denoms_by_creator(&self, creator: &Address) -> Vec<String> {
        self.store.denoms_by_creator(creator)
    }

    fn denom_info(&self, denom: &str) -> Result<DenomInfo, TokenFactoryError> {
        let authority = self.store.get_authority(denom)?;
        Ok(DenomInfo {
            denom: denom.to_string(),
            admin: authority.admin,
            metadata: self.bank.get_denom_metadata(denom),
        })
    }
}
