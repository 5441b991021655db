//! Per-asset order book
//!
//! A book is a pair of price-time ordered sequences, one per side. Limit
//! orders are placed once, in order, and never re-sorted; matching consumes
//! from the head of the opposing sequence.

mod queue;

pub use queue::SideQueue;

use types::ids::OrderId;
use types::order::{Order, Side};

/// Order book for a single asset
#[derive(Debug, Default)]
pub struct OrderBook {
    bids: SideQueue,
    asks: SideQueue,
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            bids: SideQueue::new(),
            asks: SideQueue::new(),
        }
    }

    /// Insert an order into the side matching `order.side`
    pub fn insert(&mut self, order: Order) {
        match order.side {
            Side::BUY => self.bids.insert(order),
            Side::SELL => self.asks.insert(order),
        }
    }

    /// Best (highest-priced) resting bid
    pub fn best_bid(&self) -> Option<&Order> {
        self.bids.best()
    }

    /// Best (lowest-priced) resting ask
    pub fn best_ask(&self) -> Option<&Order> {
        self.asks.best()
    }

    /// Remove a specific order from one side
    pub fn remove(&mut self, side: Side, id: OrderId) -> Option<Order> {
        self.side_mut(side).remove(id)
    }

    /// Read-only snapshot of one side, best first
    pub fn orders(&self, side: Side) -> &[Order] {
        self.side(side).orders()
    }

    pub fn side(&self, side: Side) -> &SideQueue {
        match side {
            Side::BUY => &self.bids,
            Side::SELL => &self.asks,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideQueue {
        match side {
            Side::BUY => &mut self.bids,
            Side::SELL => &mut self.asks,
        }
    }
}
