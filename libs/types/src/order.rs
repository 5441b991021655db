//! Order lifecycle types
//!
//! A resting order lives in the book from insertion until fully filled.
//! Market orders are never represented by this struct: they are consumed
//! entirely within one matching pass and only their effects survive.

use crate::asset::AssetId;
use crate::ids::{OrderId, TraderId};
use crate::numeric::{Amount, Price};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

/// A resting limit order
///
/// Invariant: `filled <= amount` at all times. An order with
/// `filled == amount` is eligible for removal from the book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub trader: TraderId,
    pub asset: AssetId,
    pub side: Side,
    pub amount: Amount,
    pub price: Price,
    pub filled: Amount,
    pub created_at: i64, // Unix nanos
}

impl Order {
    /// Create a new resting order with nothing filled
    pub fn new(
        id: OrderId,
        trader: TraderId,
        asset: AssetId,
        side: Side,
        amount: Amount,
        price: Price,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            trader,
            asset,
            side,
            amount,
            price,
            filled: Amount::ZERO,
            created_at,
        }
    }

    /// Quantity still open for matching
    pub fn remaining(&self) -> Amount {
        self.amount
            .checked_sub(self.filled)
            .unwrap_or(Amount::ZERO)
    }

    /// Check if the order is completely filled
    pub fn is_filled(&self) -> bool {
        self.filled == self.amount
    }

    /// Check the fill invariant: filled <= amount
    pub fn check_invariant(&self) -> bool {
        self.filled <= self.amount
    }

    /// Record a fill slice against this order
    ///
    /// # Panics
    /// Panics if the fill would exceed the remaining quantity
    pub fn fill(&mut self, quantity: Amount) {
        let new_filled = self
            .filled
            .checked_add(quantity)
            .expect("fill overflow");

        assert!(
            new_filled <= self.amount,
            "Fill would exceed order quantity"
        );

        self.filled = new_filled;
    }
}
