//! Trade execution records
//!
//! One `Trade` is a single matched slice between a market-order aggressor
//! (taker) and one resting limit order (maker). The resting order's price
//! always governs execution.

use crate::asset::AssetId;
use crate::ids::{OrderId, TradeId, TraderId};
use crate::numeric::{Amount, Price};
use crate::order::Side;
use serde::{Deserialize, Serialize};

/// A matched slice between maker and taker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: TradeId,
    /// Global monotonic trade sequence
    pub sequence: u64,
    pub asset: AssetId,

    /// The resting order this slice filled against
    pub maker_order_id: OrderId,
    pub maker: TraderId,
    pub taker: TraderId,

    /// Side of the aggressing market order
    pub taker_side: Side,
    /// Execution price (the resting order's limit price)
    pub price: Price,
    pub amount: Amount,

    pub executed_at: i64, // Unix nanos
}

impl Trade {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sequence: u64,
        asset: AssetId,
        maker_order_id: OrderId,
        maker: TraderId,
        taker: TraderId,
        taker_side: Side,
        price: Price,
        amount: Amount,
        executed_at: i64,
    ) -> Self {
        Self {
            trade_id: TradeId::new(),
            sequence,
            asset,
            maker_order_id,
            maker,
            taker,
            taker_side,
            price,
            amount,
            executed_at,
        }
    }

    /// Settlement-currency value of the slice (amount × price); None on overflow
    pub fn settlement_value(&self) -> Option<Amount> {
        self.amount.checked_mul_price(self.price)
    }
}
