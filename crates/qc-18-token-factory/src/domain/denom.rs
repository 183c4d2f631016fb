//! # Denomination Model
//!
//! Factory denoms live in a reserved namespace:
//!
//! ```text
//! factory/<creator>/<subdenom>
//! ```
//!
//! The canonical string is the only key used in storage and in ledger calls,
//! so two denoms are equal iff their canonical strings are equal.

use super::errors::TokenFactoryError;
use super::value_objects::{validate_denom, Address};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved namespace prefix for factory denoms.
pub const DENOM_PREFIX: &str = "factory";

/// Separator between the canonical denom parts.
pub const DENOM_SEPARATOR: char = '/';

/// Maximum subdenom length.
pub const MAX_SUBDENOM_LEN: usize = 44;

/// A factory denomination: `creator` plus `subdenom`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TfDenom {
    pub creator: Address,
    pub subdenom: String,
}

impl TfDenom {
    pub fn new(creator: impl Into<Address>, subdenom: impl Into<String>) -> Self {
        Self {
            creator: creator.into(),
            subdenom: subdenom.into(),
        }
    }

    /// Build the canonical denom string. No validation.
    pub fn denom(&self) -> DenomStr {
        DenomStr(format!(
            "{DENOM_PREFIX}{DENOM_SEPARATOR}{}{DENOM_SEPARATOR}{}",
            self.creator, self.subdenom
        ))
    }

    /// Creation-time checks on creator and subdenom.
    pub fn validate(&self) -> Result<(), TokenFactoryError> {
        self.creator.validate()?;
        if self.subdenom.is_empty() {
            return Err(TokenFactoryError::validation("empty subdenom"));
        }
        if self.subdenom.len() > MAX_SUBDENOM_LEN {
            return Err(TokenFactoryError::validation(format!(
                "subdenom {} exceeds {} characters",
                self.subdenom, MAX_SUBDENOM_LEN
            )));
        }
        if self.subdenom.contains(DENOM_SEPARATOR) {
            return Err(TokenFactoryError::validation(format!(
                "subdenom {} must not contain '{DENOM_SEPARATOR}'",
                self.subdenom
            )));
        }
        validate_denom(self.denom().as_str())
    }
}

impl fmt::Display for TfDenom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.denom().as_str())
    }
}

/// A canonical denom string, possibly not yet known to be a factory denom.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DenomStr(String);

impl DenomStr {
    pub fn new(denom: impl Into<String>) -> Self {
        Self(denom.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Confirm the string sits in the factory namespace.
    pub fn validate_namespace(&self) -> Result<(), TokenFactoryError> {
        let prefix = format!("{DENOM_PREFIX}{DENOM_SEPARATOR}");
        if !self.0.starts_with(&prefix) {
            return Err(TokenFactoryError::InvalidNamespace {
                denom: self.0.clone(),
            });
        }
        Ok(())
    }

    /// Split into creator and subdenom, validating every part.
    pub fn to_tf_denom(&self) -> Result<TfDenom, TokenFactoryError> {
        self.validate_namespace()?;
        let parts: Vec<&str> = self.0.split(DENOM_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(TokenFactoryError::validation(format!(
                "denom {} must have the form {DENOM_PREFIX}/<creator>/<subdenom>",
                self.0
            )));
        }
        let tf_denom = TfDenom::new(parts[1], parts[2]);
        tf_denom.validate()?;
        Ok(tf_denom)
    }
}

impl fmt::Display for DenomStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DenomStr {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DenomStr {
    fn from(s: String) -> Self {
        Self(s)
    }
}
