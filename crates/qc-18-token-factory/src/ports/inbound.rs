//! Inbound Ports (Driving Ports / API)
//!
//! The eight state-changing commands plus read-only queries. Commands take
//! `&mut self`: the host applies them one at a time.

use crate::domain::{Address, DenomInfo, ModuleParams, TokenFactoryError};
use crate::ipc::payloads::{
    MsgBurn, MsgBurnNative, MsgChangeAdmin, MsgCreateDenom, MsgCreateDenomResponse, MsgMint,
    MsgMintResponse, MsgSetDenomMetadata, MsgSudoSetDenomMetadata, MsgUpdateModuleParams,
};

/// Primary Token Factory API
pub trait TokenFactoryApi {
    /// Register `factory/<sender>/<subdenom>` with the sender as admin.
    fn create_denom(
        &mut self,
        msg: MsgCreateDenom,
    ) -> Result<MsgCreateDenomResponse, TokenFactoryError>;

    /// Replace the admin of a denom. Only the current admin may do this.
    fn change_admin(&mut self, msg: MsgChangeAdmin) -> Result<(), TokenFactoryError>;

    /// Mint to the module account, then send to the recipient.
    fn mint(&mut self, msg: MsgMint) -> Result<MsgMintResponse, TokenFactoryError>;

    /// Send from the source to the module account, then burn.
    fn burn(&mut self, msg: MsgBurn) -> Result<(), TokenFactoryError>;

    fn set_denom_metadata(&mut self, msg: MsgSetDenomMetadata) -> Result<(), TokenFactoryError>;

    fn update_module_params(&mut self, msg: MsgUpdateModuleParams)
        -> Result<(), TokenFactoryError>;

    fn sudo_set_denom_metadata(
        &mut self,
        msg: MsgSudoSetDenomMetadata,
    ) -> Result<(), TokenFactoryError>;

    /// Burn the sender's own coins. No denom authority involved.
    fn burn_native(&mut self, msg: MsgBurnNative) -> Result<(), TokenFactoryError>;

    // Queries

    fn params(&self) -> Result<ModuleParams, TokenFactoryError>;

    /// Canonical denoms created by `creator`, ascending.
    fn denoms_by_creator(&self, creator: &Address) -> Vec<String>;

    /// Admin and bank metadata of a factory denom.
    fn denom_info(&self, denom: &str) -> Result<DenomInfo, TokenFactoryError>;
}
