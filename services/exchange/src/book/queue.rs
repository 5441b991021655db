//! One side of an order book as a price-time ordered sequence
//!
//! Orders are kept sorted at insertion time: bids by (price desc, id asc),
//! asks by (price asc, id asc). The head of the sequence is always the best
//! order on that side. Fully-filled orders are purged lazily at the end of a
//! matching pass so the sequence is never mutated mid-iteration.

use types::ids::OrderId;
use types::order::{Order, Side};

/// Price-time ordered queue for one side of a book
#[derive(Debug, Default)]
pub struct SideQueue {
    orders: Vec<Order>,
}

impl SideQueue {
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// True when `a` must come before `b` on side `side`
    fn ranks_before(side: Side, a: &Order, b: &Order) -> bool {
        match side {
            // Highest bid first; oldest first at equal prices
            Side::BUY => a.price > b.price || (a.price == b.price && a.id < b.id),
            // Lowest ask first; oldest first at equal prices
            Side::SELL => a.price < b.price || (a.price == b.price && a.id < b.id),
        }
    }

    /// Sorted insert preserving the side's ordering invariant
    ///
    /// Sequence ids are monotonic, so at equal prices a new order always
    /// lands behind the resting ones (time priority).
    pub fn insert(&mut self, order: Order) {
        let side = order.side;
        let position = self
            .orders
            .partition_point(|resting| !Self::ranks_before(side, &order, resting));
        self.orders.insert(position, order);
    }

    /// The best order on this side (head of the sequence)
    pub fn best(&self) -> Option<&Order> {
        self.orders.first()
    }

    /// Look up a resting order by id
    pub fn get_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.iter_mut().find(|order| order.id == id)
    }

    /// Remove a specific order; returns it if present
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        let position = self.orders.iter().position(|order| order.id == id)?;
        Some(self.orders.remove(position))
    }

    /// Drop every fully-filled order from the sequence
    pub fn purge_filled(&mut self) {
        self.orders.retain(|order| !order.is_filled());
    }

    /// Read-only snapshot of the sequence, best first
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }
}
