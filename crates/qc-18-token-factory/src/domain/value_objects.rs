//! # Value Objects
//!
//! Addresses, coins and bank metadata exchanged with the ledger.

use super::errors::TokenFactoryError;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Maximum account address length accepted by the factory.
pub const MAX_ADDRESS_LEN: usize = 59;

/// Minimum and maximum length of a bank denom.
pub const MIN_DENOM_LEN: usize = 3;
pub const MAX_DENOM_LEN: usize = 128;

/// Account address as rendered by the host chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Wrap a string without validating it.
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    /// Parse and validate an address.
    pub fn parse(addr: &str) -> Result<Self, TokenFactoryError> {
        let address = Self::new(addr);
        address.validate()?;
        Ok(address)
    }

    /// Check address syntax: non-empty, ASCII alphanumeric, bounded length.
    pub fn validate(&self) -> Result<(), TokenFactoryError> {
        if self.0.is_empty() {
            return Err(TokenFactoryError::validation("empty address"));
        }
        if self.0.len() > MAX_ADDRESS_LEN {
            return Err(TokenFactoryError::validation(format!(
                "address {} exceeds {} characters",
                self.0, MAX_ADDRESS_LEN
            )));
        }
        if !self.0.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(TokenFactoryError::validation(format!(
                "address {} contains invalid characters",
                self.0
            )));
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Check bank denom syntax: `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
pub fn validate_denom(denom: &str) -> Result<(), TokenFactoryError> {
    let len = denom.len();
    if !(MIN_DENOM_LEN..=MAX_DENOM_LEN).contains(&len) {
        return Err(TokenFactoryError::validation(format!(
            "invalid denom {denom}: length must be between {MIN_DENOM_LEN} and {MAX_DENOM_LEN}"
        )));
    }
    let mut chars = denom.chars();
    let leading_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_ok =
        chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'));
    if !leading_alpha || !rest_ok {
        return Err(TokenFactoryError::validation(format!("invalid denom: {denom}")));
    }
    Ok(())
}

/// A single denomination and amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: U256,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<U256>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    /// Denom syntax holds and amount is positive.
    pub fn validate(&self) -> Result<(), TokenFactoryError> {
        validate_denom(&self.denom)?;
        if self.amount.is_zero() {
            return Err(TokenFactoryError::validation(format!(
                "coin amount must be positive: {self}"
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// One unit of a denomination (e.g. `gold` at exponent 6).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomUnit {
    pub denom: String,
    pub exponent: u32,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Bank metadata for a denomination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomMetadata {
    #[serde(default)]
    pub description: String,
    pub denom_units: Vec<DenomUnit>,
    /// Smallest unit; the denom the metadata describes.
    pub base: String,
    /// Unit used when displaying balances.
    pub display: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub uri_hash: String,
}

impl DenomMetadata {
    /// Bank-level metadata rules.
    ///
    /// The first unit must be the base at exponent 0, exponents must strictly
    /// increase, unit names and aliases must be unique, and `display` must be
    /// one of the listed units.
    pub fn validate(&self) -> Result<(), TokenFactoryError> {
        if self.name.trim().is_empty() {
            return Err(TokenFactoryError::validation("metadata name cannot be blank"));
        }
        if self.symbol.trim().is_empty() {
            return Err(TokenFactoryError::validation("metadata symbol cannot be blank"));
        }
        validate_denom(&self.base)?;
        validate_denom(&self.display)?;

        let mut has_display = false;
        let mut current_exponent = 0u32;
        let mut seen: HashSet<&str> = HashSet::new();

        for (i, unit) in self.denom_units.iter().enumerate() {
            if i == 0 {
                if unit.exponent != 0 || unit.denom != self.base {
                    return Err(TokenFactoryError::validation(format!(
                        "first denom unit must be the base {} with exponent 0",
                        self.base
                    )));
                }
            } else if unit.exponent <= current_exponent {
                return Err(TokenFactoryError::validation(format!(
                    "denom units must be sorted by strictly increasing exponent: {}",
                    unit.denom
                )));
            }
            current_exponent = unit.exponent;

            validate_denom(&unit.denom)?;
            if unit.denom == self.display {
                has_display = true;
            }
            if !seen.insert(unit.denom.as_str()) {
                return Err(TokenFactoryError::validation(format!(
                    "duplicate denom unit {}",
                    unit.denom
                )));
            }
            for alias in &unit.aliases {
                if alias.trim().is_empty() || !seen.insert(alias.as_str()) {
                    return Err(TokenFactoryError::validation(format!(
                        "invalid or duplicate alias {alias:?} in unit {}",
                        unit.denom
                    )));
                }
            }
        }

        if !has_display {
            return Err(TokenFactoryError::validation(format!(
                "display {} is not one of the denom units",
                self.display
            )));
        }
        Ok(())
    }
}
