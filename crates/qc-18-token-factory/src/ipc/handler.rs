//! IPC Handler for the Token Factory
//!
//! Entry point for every inbound command. Each call is one transaction:
//!
//! 1. Reject an absent envelope (`NilCommand`)
//! 2. Run `validate_basic()` before any state access
//! 3. Checkpoint store and ledger, dispatch by `match`
//! 4. On success publish the buffered events; on failure revert everything

use crate::application::service::TokenFactoryService;
use crate::domain::TokenFactoryError;
use crate::ipc::payloads::{TokenFactoryMsg, TokenFactoryResponse};
use crate::ports::inbound::TokenFactoryApi;
use crate::ports::outbound::{BankKeeper, EventSink, KvStore, Revertible, SudoPermissions};
use tracing::{debug, info, instrument, warn};

/// IPC Handler for the Token Factory.
///
/// Provides the transaction boundary around [`TokenFactoryService`].
pub struct TokenFactoryHandler<S, B, P, E>
where
    S: KvStore,
    B: BankKeeper,
    P: SudoPermissions,
    E: EventSink,
{
    service: TokenFactoryService<S, B, P>,
    events: E,
}

impl<S, B, P, E> TokenFactoryHandler<S, B, P, E>
where
    S: KvStore,
    B: BankKeeper,
    P: SudoPermissions,
    E: EventSink,
{
    pub fn new(service: TokenFactoryService<S, B, P>, events: E) -> Self {
        Self { service, events }
    }

    pub fn service(&self) -> &TokenFactoryService<S, B, P> {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut TokenFactoryService<S, B, P> {
        &mut self.service
    }

    pub fn event_sink(&self) -> &E {
        &self.events
    }

    /// Handle one command atomically.
    #[instrument(skip(self, msg), fields(command = msg.as_ref().map(TokenFactoryMsg::name)))]
    pub fn handle(
        &mut self,
        msg: Option<TokenFactoryMsg>,
    ) -> Result<TokenFactoryResponse, TokenFactoryError> {
        let Some(msg) = msg else {
            warn!("[qc-18] Rejected nil command");
            return Err(TokenFactoryError::NilCommand);
        };
        let name = msg.name();
        let signer = msg.signer().clone();

        if let Err(e) = msg.validate_basic() {
            warn!("[qc-18] {} from {} failed validation: {}", name, signer, e);
            return Err(e);
        }

        let checkpoint = self.service.checkpoint();
        match self.dispatch(msg) {
            Ok(response) => {
                let events = self.service.take_events();
                let emitted = events.len();
                for event in events {
                    self.events.publish(event);
                }
                info!("[qc-18] {} from {} committed ({} events)", name, signer, emitted);
                Ok(response)
            }
            Err(e) => {
                self.service.revert_to(checkpoint);
                debug!("[qc-18] Reverted {} from {}", name, signer);
                warn!("[qc-18] {} from {} rejected: {}", name, signer, e);
                Err(e)
            }
        }
    }

    fn dispatch(
        &mut self,
        msg: TokenFactoryMsg,
    ) -> Result<TokenFactoryResponse, TokenFactoryError> {
        let svc = &mut self.service;
        Ok(match msg {
            TokenFactoryMsg::CreateDenom(m) => {
                TokenFactoryResponse::CreateDenom(svc.create_denom(m)?)
            }
            TokenFactoryMsg::ChangeAdmin(m) => {
                svc.change_admin(m)?;
                TokenFactoryResponse::ChangeAdmin
            }
            TokenFactoryMsg::Mint(m) => TokenFactoryResponse::Mint(svc.mint(m)?),
            TokenFactoryMsg::Burn(m) => {
                svc.burn(m)?;
                TokenFactoryResponse::Burn
            }
            TokenFactoryMsg::SetDenomMetadata(m) => {
                svc.set_denom_metadata(m)?;
                TokenFactoryResponse::SetDenomMetadata
            }
            TokenFactoryMsg::UpdateModuleParams(m) => {
                svc.update_module_params(m)?;
                TokenFactoryResponse::UpdateModuleParams
            }
            TokenFactoryMsg::SudoSetDenomMetadata(m) => {
                svc.sudo_set_denom_metadata(m)?;
                TokenFactoryResponse::SudoSetDenomMetadata
            }
            TokenFactoryMsg::BurnNative(m) => {
                svc.burn_native(m)?;
                TokenFactoryResponse::BurnNative
            }
        })
    }
}
