//! Engine events
//!
//! Append-only record of externally visible state changes, mirroring the
//! event log an on-chain deployment would emit. `TradeExecuted` carries the
//! full trade record.

use serde::{Deserialize, Serialize};
use types::asset::AssetId;
use types::ids::TraderId;
use types::numeric::Amount;
use types::order::Order;
use types::trade::Trade;

/// Enum wrapper for all engine events, enabling uniform handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExchangeEvent {
    /// Value pulled from a trader's external holding into custody
    Deposited {
        trader: TraderId,
        asset: AssetId,
        amount: Amount,
    },
    /// Value released from custody back to a trader's external holding
    Withdrawn {
        trader: TraderId,
        asset: AssetId,
        amount: Amount,
    },
    /// A limit order entered the book
    OrderPlaced { order: Order },
    /// One matched slice settled on both sides
    TradeExecuted { trade: Trade },
}
