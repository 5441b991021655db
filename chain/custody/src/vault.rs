//! Vault — external holdings backing the exchange ledger
//!
//! Balances are stored as `HashMap<TraderId, HashMap<HandleId, Amount>>`.
//! `fund` seeds a holding (an admin faucet for test deployments),
//! `pull` moves value into exchange custody, `release` moves it back out.
//! All arithmetic is checked; a failed transfer leaves the holding untouched.

use std::collections::HashMap;
use types::asset::HandleId;
use types::ids::TraderId;
use types::numeric::Amount;

use crate::errors::CustodyError;

/// External-holding vault
#[derive(Debug, Default)]
pub struct Vault {
    /// Holdings: trader -> (handle -> amount)
    holdings: HashMap<TraderId, HashMap<HandleId, Amount>>,
}

impl Vault {
    /// Create an empty vault
    pub fn new() -> Self {
        Self {
            holdings: HashMap::new(),
        }
    }

    /// Seed a trader's external holding (admin/test faucet)
    pub fn fund(
        &mut self,
        trader: TraderId,
        handle: &HandleId,
        amount: Amount,
    ) -> Result<(), CustodyError> {
        self.credit(trader, handle, amount)
    }

    /// Debit a trader's external holding into exchange custody
    ///
    /// Fails with `InsufficientCollateral` if the holding is short; the
    /// holding is left untouched on failure.
    pub fn pull(
        &mut self,
        trader: TraderId,
        handle: &HandleId,
        amount: Amount,
    ) -> Result<(), CustodyError> {
        let current = self.balance_of(trader, handle);
        let remaining = current.checked_sub(amount).ok_or_else(|| {
            CustodyError::InsufficientCollateral {
                handle: handle.to_string(),
                required: amount.to_string(),
                available: current.to_string(),
            }
        })?;

        self.holdings
            .entry(trader)
            .or_default()
            .insert(handle.clone(), remaining);
        Ok(())
    }

    /// Credit a trader's external holding back from exchange custody
    pub fn release(
        &mut self,
        trader: TraderId,
        handle: &HandleId,
        amount: Amount,
    ) -> Result<(), CustodyError> {
        self.credit(trader, handle, amount)
    }

    /// Get a trader's external holding for one handle
    pub fn balance_of(&self, trader: TraderId, handle: &HandleId) -> Amount {
        self.holdings
            .get(&trader)
            .and_then(|handles| handles.get(handle))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn credit(
        &mut self,
        trader: TraderId,
        handle: &HandleId,
        amount: Amount,
    ) -> Result<(), CustodyError> {
        let entry = self
            .holdings
            .entry(trader)
            .or_default()
            .entry(handle.clone())
            .or_insert(Amount::ZERO);

        *entry = entry.checked_add(amount).ok_or(CustodyError::Overflow)?;
        Ok(())
    }
}
