//! Balance ledger
//!
//! Per-(trader, asset) custody holdings. Amounts are non-negative at all
//! times: a debit that would go negative fails with `InsufficientBalance`
//! and leaves the holding untouched.

use std::collections::HashMap;
use types::asset::AssetId;
use types::errors::ExchangeError;
use types::ids::TraderId;
use types::numeric::Amount;

/// In-custody balances: trader -> (asset -> amount)
#[derive(Debug, Default)]
pub struct BalanceLedger {
    holdings: HashMap<TraderId, HashMap<AssetId, Amount>>,
}

impl BalanceLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            holdings: HashMap::new(),
        }
    }

    /// Increase a holding; fails only on arithmetic overflow
    pub fn credit(
        &mut self,
        trader: TraderId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<(), ExchangeError> {
        let entry = self
            .holdings
            .entry(trader)
            .or_default()
            .entry(asset)
            .or_insert(Amount::ZERO);

        *entry = entry.checked_add(amount).ok_or(ExchangeError::Overflow)?;
        Ok(())
    }

    /// Decrease a holding
    ///
    /// Fails with `InsufficientBalance` if the holding is short. Atomic:
    /// never leaves a partially-applied debit.
    pub fn debit(
        &mut self,
        trader: TraderId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<(), ExchangeError> {
        let current = self.balance_of(trader, asset);
        let remaining =
            current
                .checked_sub(amount)
                .ok_or_else(|| ExchangeError::InsufficientBalance {
                    asset: asset.to_string(),
                    required: amount.to_string(),
                    available: current.to_string(),
                })?;

        self.holdings
            .entry(trader)
            .or_default()
            .insert(asset, remaining);
        Ok(())
    }

    /// Read a holding; unknown traders and assets hold zero
    pub fn balance_of(&self, trader: TraderId, asset: AssetId) -> Amount {
        self.holdings
            .get(&trader)
            .and_then(|assets| assets.get(&asset))
            .copied()
            .unwrap_or(Amount::ZERO)
    }
}
