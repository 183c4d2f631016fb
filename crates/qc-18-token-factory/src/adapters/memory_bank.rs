//! # In-Memory Bank
//!
//! Balance ledger used by tests and local tooling. Production nodes talk to
//! the bank subsystem instead.

use crate::domain::{Address, Coin, DenomMetadata, LedgerError};
use crate::ports::outbound::{BankKeeper, Revertible};
use primitive_types::U256;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Everything the bank tracks; cloned wholesale for checkpoints.
#[derive(Debug, Clone, Default)]
pub struct BankState {
    balances: BTreeMap<(Address, String), U256>,
    supply: BTreeMap<String, U256>,
    modules: BTreeMap<String, Address>,
    blocked: BTreeSet<Address>,
    metadata: BTreeMap<String, DenomMetadata>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryBank {
    state: BankState,
}

impl InMemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module account. Module accounts are blocked from
    /// receiving user transfers.
    pub fn with_module_account(mut self, module: &str) -> Self {
        let address = Address::new(format!("{module}module"));
        self.state.blocked.insert(address.clone());
        self.state.modules.insert(module.to_string(), address);
        self
    }

    pub fn with_blocked(mut self, addr: impl Into<Address>) -> Self {
        self.state.blocked.insert(addr.into());
        self
    }

    /// Credit `coin` to `addr`, increasing supply. Genesis/test funding.
    pub fn fund(&mut self, addr: &Address, coin: &Coin) -> Result<(), LedgerError> {
        self.add_supply(coin)?;
        self.credit(addr, coin)
    }

    pub fn balance(&self, addr: &Address, denom: &str) -> U256 {
        self.state
            .balances
            .get(&(addr.clone(), denom.to_string()))
            .copied()
            .unwrap_or_default()
    }

    pub fn supply(&self, denom: &str) -> U256 {
        self.state.supply.get(denom).copied().unwrap_or_default()
    }

    pub fn module_address(&self, module: &str) -> Result<Address, LedgerError> {
        self.state
            .modules
            .get(module)
            .cloned()
            .ok_or_else(|| LedgerError::UnknownModuleAccount(module.to_string()))
    }

    fn credit(&mut self, addr: &Address, coin: &Coin) -> Result<(), LedgerError> {
        let balance = self
            .state
            .balances
            .entry((addr.clone(), coin.denom.clone()))
            .or_default();
        *balance = balance
            .checked_add(coin.amount)
            .ok_or_else(|| LedgerError::SupplyOverflow {
                denom: coin.denom.clone(),
            })?;
        Ok(())
    }

    fn debit(&mut self, addr: &Address, coin: &Coin) -> Result<(), LedgerError> {
        let available = self.balance(addr, &coin.denom);
        if available < coin.amount {
            return Err(LedgerError::InsufficientFunds {
                account: addr.to_string(),
                denom: coin.denom.clone(),
                required: coin.amount,
                available,
            });
        }
        self.state
            .balances
            .insert((addr.clone(), coin.denom.clone()), available - coin.amount);
        Ok(())
    }

    fn add_supply(&mut self, coin: &Coin) -> Result<(), LedgerError> {
        let supply = self.state.supply.entry(coin.denom.clone()).or_default();
        *supply = supply
            .checked_add(coin.amount)
            .ok_or_else(|| LedgerError::SupplyOverflow {
                denom: coin.denom.clone(),
            })?;
        Ok(())
    }

    fn sub_supply(&mut self, coin: &Coin) {
        let supply = self.state.supply.entry(coin.denom.clone()).or_default();
        *supply = supply.saturating_sub(coin.amount);
    }

    fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        coins: &[Coin],
    ) -> Result<(), LedgerError> {
        for coin in coins {
            self.debit(from, coin)?;
            self.credit(to, coin)?;
        }
        Ok(())
    }
}

impl Revertible for InMemoryBank {
    type Checkpoint = BankState;

    fn checkpoint(&self) -> Self::Checkpoint {
        self.state.clone()
    }

    fn revert_to(&mut self, checkpoint: Self::Checkpoint) {
        self.state = checkpoint;
    }
}

impl BankKeeper for InMemoryBank {
    fn mint_coins(&mut self, module: &str, coins: &[Coin]) -> Result<(), LedgerError> {
        let module_addr = self.module_address(module)?;
        for coin in coins {
            self.add_supply(coin)?;
            self.credit(&module_addr, coin)?;
        }
        debug!(module, coins = coins.len(), "Minted coins");
        Ok(())
    }

    fn burn_coins(&mut self, module: &str, coins: &[Coin]) -> Result<(), LedgerError> {
        let module_addr = self.module_address(module)?;
        for coin in coins {
            self.debit(&module_addr, coin)?;
            self.sub_supply(coin);
        }
        debug!(module, coins = coins.len(), "Burned coins");
        Ok(())
    }

    fn send_coins_from_module_to_account(
        &mut self,
        module: &str,
        to: &Address,
        coins: &[Coin],
    ) -> Result<(), LedgerError> {
        let module_addr = self.module_address(module)?;
        self.transfer(&module_addr, to, coins)
    }

    fn send_coins_from_account_to_module(
        &mut self,
        from: &Address,
        module: &str,
        coins: &[Coin],
    ) -> Result<(), LedgerError> {
        let module_addr = self.module_address(module)?;
        self.transfer(from, &module_addr, coins)
    }

    fn blocked_addr(&self, addr: &Address) -> bool {
        self.state.blocked.contains(addr)
    }

    fn set_denom_metadata(&mut self, metadata: DenomMetadata) {
        self.state.metadata.insert(metadata.base.clone(), metadata);
    }

    fn get_denom_metadata(&self, denom: &str) -> Option<DenomMetadata> {
        self.state.metadata.get(denom).cloned()
    }
}
