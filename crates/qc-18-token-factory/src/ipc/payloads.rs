//! IPC Payloads for the Token Factory
//!
//! One request/response pair per command, plus the closed
//! [`TokenFactoryMsg`] set the handler dispatches on. Wire encoding belongs
//! to the host transaction envelope; these types only fix the logical shape.
//!
//! `validate_basic()` is stateless: it never touches the store or ledger.

use crate::domain::{
    Address, Coin, DenomMetadata, DenomStr, ModuleParams, TfDenom, TokenFactoryError,
};
use serde::{Deserialize, Serialize};

// ============================================================
// REQUESTS
// ============================================================

/// Create `factory/<sender>/<subdenom>` with the sender as admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateDenom {
    pub sender: Address,
    pub subdenom: String,
}

impl MsgCreateDenom {
    pub fn validate_basic(&self) -> Result<(), TokenFactoryError> {
        self.tf_denom().validate()
    }

    pub fn tf_denom(&self) -> TfDenom {
        TfDenom::new(self.sender.clone(), self.subdenom.clone())
    }
}

/// Hand the admin role of `denom` to `new_admin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgChangeAdmin {
    pub sender: Address,
    pub denom: String,
    pub new_admin: Address,
}

impl MsgChangeAdmin {
    pub fn validate_basic(&self) -> Result<(), TokenFactoryError> {
        self.sender.validate()?;
        self.new_admin.validate()?;
        DenomStr::new(self.denom.as_str()).to_tf_denom()?;
        Ok(())
    }
}

/// Mint `coin` to `mint_to`, or to the sender when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgMint {
    pub sender: Address,
    pub coin: Coin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint_to: Option<Address>,
}

impl MsgMint {
    pub fn validate_basic(&self) -> Result<(), TokenFactoryError> {
        self.sender.validate()?;
        self.coin.validate()?;
        match &self.mint_to {
            Some(to) if !to.is_empty() => to.validate(),
            _ => Ok(()),
        }
    }

    /// Recipient with the default applied: an absent or empty `mint_to`
    /// means the sender.
    pub fn recipient(&self) -> Address {
        resolve_or_sender(&self.mint_to, &self.sender)
    }
}

/// Burn `coin` from `burn_from`, or from the sender when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgBurn {
    pub sender: Address,
    pub coin: Coin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burn_from: Option<Address>,
}

impl MsgBurn {
    pub fn validate_basic(&self) -> Result<(), TokenFactoryError> {
        self.sender.validate()?;
        self.coin.validate()?;
        match &self.burn_from {
            Some(from) if !from.is_empty() => from.validate(),
            _ => Ok(()),
        }
    }

    /// Burn source with the default applied.
    pub fn source(&self) -> Address {
        resolve_or_sender(&self.burn_from, &self.sender)
    }
}

/// Set bank metadata for `metadata.base`; admin only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSetDenomMetadata {
    pub sender: Address,
    pub metadata: DenomMetadata,
}

impl MsgSetDenomMetadata {
    pub fn validate_basic(&self) -> Result<(), TokenFactoryError> {
        self.sender.validate()?;
        self.metadata.validate()
    }
}

/// Replace the module params; governance authority only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateModuleParams {
    pub authority: Address,
    pub params: ModuleParams,
}

impl MsgUpdateModuleParams {
    /// Params are validated by the handler after the signer check.
    pub fn validate_basic(&self) -> Result<(), TokenFactoryError> {
        self.authority.validate()
    }
}

/// Set bank metadata for any denom; sudoers only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSudoSetDenomMetadata {
    pub sender: Address,
    pub metadata: DenomMetadata,
}

impl MsgSudoSetDenomMetadata {
    pub fn validate_basic(&self) -> Result<(), TokenFactoryError> {
        self.sender.validate()?;
        self.metadata.validate()
    }
}

/// Burn the sender's own coins of any denom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgBurnNative {
    pub sender: Address,
    pub coin: Coin,
}

impl MsgBurnNative {
    pub fn validate_basic(&self) -> Result<(), TokenFactoryError> {
        self.sender.validate()?;
        self.coin.validate()
    }
}

fn resolve_or_sender(target: &Option<Address>, sender: &Address) -> Address {
    match target {
        Some(addr) if !addr.is_empty() => addr.clone(),
        _ => sender.clone(),
    }
}

// ============================================================
// RESPONSES
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateDenomResponse {
    pub new_token_denom: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgMintResponse {
    pub mint_to: Address,
}

// ============================================================
// DISPATCH ENVELOPE
// ============================================================

/// Every command the Token Factory accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TokenFactoryMsg {
    CreateDenom(MsgCreateDenom),
    ChangeAdmin(MsgChangeAdmin),
    Mint(MsgMint),
    Burn(MsgBurn),
    SetDenomMetadata(MsgSetDenomMetadata),
    UpdateModuleParams(MsgUpdateModuleParams),
    SudoSetDenomMetadata(MsgSudoSetDenomMetadata),
    BurnNative(MsgBurnNative),
}

impl TokenFactoryMsg {
    /// Command name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateDenom(_) => "create_denom",
            Self::ChangeAdmin(_) => "change_admin",
            Self::Mint(_) => "mint",
            Self::Burn(_) => "burn",
            Self::SetDenomMetadata(_) => "set_denom_metadata",
            Self::UpdateModuleParams(_) => "update_module_params",
            Self::SudoSetDenomMetadata(_) => "sudo_set_denom_metadata",
            Self::BurnNative(_) => "burn_native",
        }
    }

    pub fn validate_basic(&self) -> Result<(), TokenFactoryError> {
        match self {
            Self::CreateDenom(m) => m.validate_basic(),
            Self::ChangeAdmin(m) => m.validate_basic(),
            Self::Mint(m) => m.validate_basic(),
            Self::Burn(m) => m.validate_basic(),
            Self::SetDenomMetadata(m) => m.validate_basic(),
            Self::UpdateModuleParams(m) => m.validate_basic(),
            Self::SudoSetDenomMetadata(m) => m.validate_basic(),
            Self::BurnNative(m) => m.validate_basic(),
        }
    }

    /// Address that signed the command.
    pub fn signer(&self) -> &Address {
        match self {
            Self::CreateDenom(m) => &m.sender,
            Self::ChangeAdmin(m) => &m.sender,
            Self::Mint(m) => &m.sender,
            Self::Burn(m) => &m.sender,
            Self::SetDenomMetadata(m) => &m.sender,
            Self::UpdateModuleParams(m) => &m.authority,
            Self::SudoSetDenomMetadata(m) => &m.sender,
            Self::BurnNative(m) => &m.sender,
        }
    }
}

/// Response to a [`TokenFactoryMsg`], variant for variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TokenFactoryResponse {
    CreateDenom(MsgCreateDenomResponse),
    ChangeAdmin,
    Mint(MsgMintResponse),
    Burn,
    SetDenomMetadata,
    UpdateModuleParams,
    SudoSetDenomMetadata,
    BurnNative,
}
