//! Matching engine core
//!
//! Single sequential state machine owning the asset registry, the balance
//! ledger, and one order book per listed asset. Every entry point either
//! commits completely or fails with zero effect on shared state.
//!
//! Limit orders are purely passive: they rest in the book from creation and
//! only execute when an opposing market order arrives. Market orders walk
//! the best opposing resting orders, settling each slice at the resting
//! order's price; any unfilled remainder is discarded silently.

use std::collections::HashMap;

use custody::Vault;
use tracing::{debug, info};
use types::asset::{AssetId, HandleId};
use types::errors::ExchangeError;
use types::ids::{OrderId, TraderId};
use types::numeric::{Amount, Price};
use types::order::{Order, Side};
use types::trade::Trade;

use crate::book::OrderBook;
use crate::config::EngineConfig;
use crate::events::ExchangeEvent;
use crate::ledger::BalanceLedger;
use crate::registry::AssetRegistry;

/// Main matching engine
pub struct MatchingEngine {
    registry: AssetRegistry,
    ledger: BalanceLedger,
    /// Order books per asset
    books: HashMap<AssetId, OrderBook>,
    /// Full trade history, sequence order
    trades: Vec<Trade>,
    /// Emitted events log (append-only)
    events: Vec<ExchangeEvent>,
    next_order_sequence: u64,
    next_trade_sequence: u64,
}

/// One slice decided during the planning walk of a matching pass
struct Slice {
    maker_order_id: OrderId,
    maker: TraderId,
    price: Price,
    quantity: Amount,
    value: Amount,
}

/// Copy-on-read view of the ledger used to validate an entire matching pass
/// before any mutation is applied.
struct ShadowBalances<'a> {
    ledger: &'a BalanceLedger,
    balances: HashMap<(TraderId, AssetId), Amount>,
}

impl<'a> ShadowBalances<'a> {
    fn new(ledger: &'a BalanceLedger) -> Self {
        Self {
            ledger,
            balances: HashMap::new(),
        }
    }

    fn get(&mut self, trader: TraderId, asset: AssetId) -> Amount {
        let ledger = self.ledger;
        *self
            .balances
            .entry((trader, asset))
            .or_insert_with(|| ledger.balance_of(trader, asset))
    }

    /// On shortfall, returns the available balance for error reporting
    fn debit(&mut self, trader: TraderId, asset: AssetId, amount: Amount) -> Result<(), Amount> {
        let current = self.get(trader, asset);
        match current.checked_sub(amount) {
            Some(remaining) => {
                self.balances.insert((trader, asset), remaining);
                Ok(())
            }
            None => Err(current),
        }
    }

    fn credit(
        &mut self,
        trader: TraderId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<(), ExchangeError> {
        let current = self.get(trader, asset);
        let updated = current
            .checked_add(amount)
            .ok_or(ExchangeError::Overflow)?;
        self.balances.insert((trader, asset), updated);
        Ok(())
    }
}

impl MatchingEngine {
    /// Create a new engine; the settlement currency is registered up front
    pub fn new(config: EngineConfig) -> Self {
        Self {
            registry: AssetRegistry::new(config.settlement, config.settlement_handle),
            ledger: BalanceLedger::new(),
            books: HashMap::new(),
            trades: Vec::new(),
            events: Vec::new(),
            next_order_sequence: config.starting_sequence,
            next_trade_sequence: config.starting_sequence,
        }
    }

    // ───────────────────────── Administration ─────────────────────────

    /// Register a new tradable asset and the custody handle backing it
    pub fn register_asset(
        &mut self,
        asset: AssetId,
        handle: HandleId,
    ) -> Result<(), ExchangeError> {
        self.registry.register(asset, handle)?;
        debug!(asset = %asset, "asset registered");
        Ok(())
    }

    // ───────────────────────── Deposit / Withdraw ─────────────────────────

    /// Pull `amount` of `asset` from the trader's external holding into
    /// custody, then credit the ledger
    pub fn deposit(
        &mut self,
        vault: &mut Vault,
        trader: TraderId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<(), ExchangeError> {
        let handle = self.lookup_handle(asset)?.clone();
        if amount.is_zero() {
            return Err(ExchangeError::InvalidAmount);
        }
        // The ledger credit must not be able to fail after the external pull
        self.ledger
            .balance_of(trader, asset)
            .checked_add(amount)
            .ok_or(ExchangeError::Overflow)?;

        vault.pull(trader, &handle, amount)?;
        self.ledger.credit(trader, asset, amount)?;

        info!(trader = %trader, asset = %asset, amount = %amount, "deposit credited");
        self.events.push(ExchangeEvent::Deposited {
            trader,
            asset,
            amount,
        });
        Ok(())
    }

    /// Debit the ledger (fail fast on insufficient balance), then release
    /// `amount` of `asset` back to the trader's external holding
    pub fn withdraw(
        &mut self,
        vault: &mut Vault,
        trader: TraderId,
        asset: AssetId,
        amount: Amount,
    ) -> Result<(), ExchangeError> {
        let handle = self.lookup_handle(asset)?.clone();
        if amount.is_zero() {
            return Err(ExchangeError::InvalidAmount);
        }

        self.ledger.debit(trader, asset, amount)?;
        if let Err(err) = vault.release(trader, &handle, amount) {
            // restore the ledger so a custody failure has zero effect
            self.ledger.credit(trader, asset, amount)?;
            return Err(err.into());
        }

        info!(trader = %trader, asset = %asset, amount = %amount, "withdrawal released");
        self.events.push(ExchangeEvent::Withdrawn {
            trader,
            asset,
            amount,
        });
        Ok(())
    }

    // ───────────────────────── Orders ─────────────────────────

    /// Place a resting limit order
    ///
    /// Purely passive: the order is inserted at its price-time position and
    /// never matches at creation time, even against a crossing resting order.
    pub fn create_limit_order(
        &mut self,
        trader: TraderId,
        asset: AssetId,
        amount: Amount,
        price: Price,
        side: Side,
        timestamp: i64,
    ) -> Result<OrderId, ExchangeError> {
        self.validate_tradable(asset)?;
        if amount.is_zero() || price.is_zero() {
            return Err(ExchangeError::InvalidAmount);
        }

        match side {
            Side::SELL => {
                let available = self.ledger.balance_of(trader, asset);
                if available < amount {
                    return Err(ExchangeError::TokenBalanceTooLow {
                        asset: asset.to_string(),
                        required: amount.to_string(),
                        available: available.to_string(),
                    });
                }
            }
            Side::BUY => {
                let required = amount
                    .checked_mul_price(price)
                    .ok_or(ExchangeError::Overflow)?;
                let settlement = self.registry.settlement_currency();
                let available = self.ledger.balance_of(trader, settlement);
                if available < required {
                    return Err(ExchangeError::SettlementBalanceTooLow {
                        required: required.to_string(),
                        available: available.to_string(),
                    });
                }
            }
        }

        let id = OrderId::new(self.next_order_sequence);
        self.next_order_sequence += 1;

        let order = Order::new(id, trader, asset, side, amount, price, timestamp);
        self.books.entry(asset).or_default().insert(order.clone());

        debug!(order = %id, asset = %asset, side = ?side, price = %price, amount = %amount, "limit order resting");
        self.events.push(ExchangeEvent::OrderPlaced { order });
        Ok(id)
    }

    /// Execute a market order against the best opposing resting orders
    ///
    /// Returns the trades produced, best-priced resting orders first. A
    /// remainder left when the opposing side is exhausted is discarded
    /// silently; an empty result is success, not an error. If any slice
    /// cannot be funded the whole call fails with no effect.
    pub fn create_market_order(
        &mut self,
        trader: TraderId,
        asset: AssetId,
        amount: Amount,
        side: Side,
        timestamp: i64,
    ) -> Result<Vec<Trade>, ExchangeError> {
        self.validate_tradable(asset)?;
        if amount.is_zero() {
            return Err(ExchangeError::InvalidAmount);
        }
        if side == Side::SELL {
            let available = self.ledger.balance_of(trader, asset);
            if available < amount {
                return Err(ExchangeError::TokenBalanceTooLow {
                    asset: asset.to_string(),
                    required: amount.to_string(),
                    available: available.to_string(),
                });
            }
        }
        // Market buys have no declared price, so their settlement check
        // happens per slice during the planning walk.

        let slices = self.plan_market_order(trader, asset, amount, side)?;
        let settlement = self.registry.settlement_currency();

        // Commit. The plan validated every movement against shadow balances,
        // so none of these ledger calls can fail; `?` still propagates
        // rather than panicking.
        for slice in &slices {
            match side {
                Side::BUY => {
                    self.ledger.debit(trader, settlement, slice.value)?;
                    self.ledger.credit(slice.maker, settlement, slice.value)?;
                    self.ledger.debit(slice.maker, asset, slice.quantity)?;
                    self.ledger.credit(trader, asset, slice.quantity)?;
                }
                Side::SELL => {
                    self.ledger.debit(trader, asset, slice.quantity)?;
                    self.ledger.credit(slice.maker, asset, slice.quantity)?;
                    self.ledger.debit(slice.maker, settlement, slice.value)?;
                    self.ledger.credit(trader, settlement, slice.value)?;
                }
            }
        }

        if let Some(book) = self.books.get_mut(&asset) {
            let queue = book.side_mut(side.opposite());
            for slice in &slices {
                if let Some(order) = queue.get_mut(slice.maker_order_id) {
                    order.fill(slice.quantity);
                }
            }
            queue.purge_filled();
        }

        let mut trades = Vec::with_capacity(slices.len());
        for slice in slices {
            let sequence = self.next_trade_sequence;
            self.next_trade_sequence += 1;

            let trade = Trade::new(
                sequence,
                asset,
                slice.maker_order_id,
                slice.maker,
                trader,
                side,
                slice.price,
                slice.quantity,
                timestamp,
            );
            info!(
                trade = %trade.trade_id,
                asset = %asset,
                price = %trade.price,
                amount = %trade.amount,
                "trade executed"
            );
            self.events.push(ExchangeEvent::TradeExecuted {
                trade: trade.clone(),
            });
            self.trades.push(trade.clone());
            trades.push(trade);
        }
        Ok(trades)
    }

    /// Walk the opposing side best-first and decide every slice of the pass,
    /// verifying all four balance movements per slice against shadow
    /// balances. Nothing is mutated here.
    fn plan_market_order(
        &self,
        trader: TraderId,
        asset: AssetId,
        amount: Amount,
        side: Side,
    ) -> Result<Vec<Slice>, ExchangeError> {
        let mut slices = Vec::new();
        let Some(book) = self.books.get(&asset) else {
            return Ok(slices);
        };

        let settlement = self.registry.settlement_currency();
        let mut shadow = ShadowBalances::new(&self.ledger);
        let mut remaining = amount;

        for resting in book.orders(side.opposite()) {
            if remaining.is_zero() {
                break;
            }
            let quantity = remaining.min(resting.remaining());
            if quantity.is_zero() {
                continue;
            }
            // The resting order's price always governs execution
            let value = quantity
                .checked_mul_price(resting.price)
                .ok_or(ExchangeError::Overflow)?;

            match side {
                Side::BUY => {
                    shadow.debit(trader, settlement, value).map_err(|available| {
                        ExchangeError::SettlementBalanceTooLow {
                            required: value.to_string(),
                            available: available.to_string(),
                        }
                    })?;
                    shadow.credit(resting.trader, settlement, value)?;
                    shadow
                        .debit(resting.trader, asset, quantity)
                        .map_err(|available| ExchangeError::TokenBalanceTooLow {
                            asset: asset.to_string(),
                            required: quantity.to_string(),
                            available: available.to_string(),
                        })?;
                    shadow.credit(trader, asset, quantity)?;
                }
                Side::SELL => {
                    shadow
                        .debit(trader, asset, quantity)
                        .map_err(|available| ExchangeError::TokenBalanceTooLow {
                            asset: asset.to_string(),
                            required: quantity.to_string(),
                            available: available.to_string(),
                        })?;
                    shadow.credit(resting.trader, asset, quantity)?;
                    shadow
                        .debit(resting.trader, settlement, value)
                        .map_err(|available| ExchangeError::SettlementBalanceTooLow {
                            required: value.to_string(),
                            available: available.to_string(),
                        })?;
                    shadow.credit(trader, settlement, value)?;
                }
            }

            slices.push(Slice {
                maker_order_id: resting.id,
                maker: resting.trader,
                price: resting.price,
                quantity,
                value,
            });
            remaining = remaining.checked_sub(quantity).unwrap_or(Amount::ZERO);
        }

        Ok(slices)
    }

    // ───────────────────────── Snapshots ─────────────────────────

    /// Read-only snapshot of one book side, best first
    pub fn orders_for(&self, asset: AssetId, side: Side) -> &[Order] {
        self.books
            .get(&asset)
            .map(|book| book.orders(side))
            .unwrap_or(&[])
    }

    /// Read a trader's in-custody holding
    pub fn balance_of(&self, trader: TraderId, asset: AssetId) -> Amount {
        self.ledger.balance_of(trader, asset)
    }

    /// Full trade history in sequence order
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// The designated settlement currency
    pub fn settlement_currency(&self) -> AssetId {
        self.registry.settlement_currency()
    }

    /// All emitted events
    pub fn events(&self) -> &[ExchangeEvent] {
        &self.events
    }

    /// Drain all events (consume and clear)
    pub fn drain_events(&mut self) -> Vec<ExchangeEvent> {
        std::mem::take(&mut self.events)
    }

    // ───────────────────────── Validation ─────────────────────────

    fn validate_tradable(&self, asset: AssetId) -> Result<(), ExchangeError> {
        if !self.registry.exists(asset) {
            return Err(ExchangeError::UnknownAsset {
                asset: asset.to_string(),
            });
        }
        if self.registry.is_settlement_currency(asset) {
            return Err(ExchangeError::SettlementCurrencyNotTradable {
                asset: asset.to_string(),
            });
        }
        Ok(())
    }

    fn lookup_handle(&self, asset: AssetId) -> Result<&HandleId, ExchangeError> {
        self.registry
            .handle_of(asset)
            .ok_or_else(|| ExchangeError::UnknownAsset {
                asset: asset.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: i64 = 1708123456789000000;

    fn dai() -> AssetId {
        AssetId::new("DAI")
    }

    fn rep() -> AssetId {
        AssetId::new("REP")
    }

    fn setup_engine() -> MatchingEngine {
        let mut engine = MatchingEngine::new(EngineConfig::new(dai(), HandleId::new("dai-vault")));
        engine
            .register_asset(rep(), HandleId::new("rep-vault"))
            .unwrap();
        engine
    }

    /// Seed a trader with in-custody balance through the full deposit path
    fn seed(engine: &mut MatchingEngine, vault: &mut Vault, trader: TraderId, asset: AssetId, amount: u64) {
        let handle = engine.lookup_handle(asset).unwrap().clone();
        vault.fund(trader, &handle, Amount::from(amount)).unwrap();
        engine.deposit(vault, trader, asset, Amount::from(amount)).unwrap();
    }

    #[test]
    fn test_limit_order_rests() {
        let mut engine = setup_engine();
        let mut vault = Vault::new();
        let trader = TraderId::new();
        seed(&mut engine, &mut vault, trader, dai(), 100);

        let id = engine
            .create_limit_order(trader, rep(), Amount::from(10u64), Price::new(10), Side::BUY, TS)
            .unwrap();

        let bids = engine.orders_for(rep(), Side::BUY);
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].id, id);
        assert_eq!(bids[0].filled, Amount::ZERO);
        assert!(engine.orders_for(rep(), Side::SELL).is_empty());
    }

    #[test]
    fn test_limit_orders_are_passive() {
        // A crossing pair of limit orders must both rest, untouched
        let mut engine = setup_engine();
        let mut vault = Vault::new();
        let buyer = TraderId::new();
        let seller = TraderId::new();
        seed(&mut engine, &mut vault, buyer, dai(), 1000);
        seed(&mut engine, &mut vault, seller, rep(), 100);

        engine
            .create_limit_order(seller, rep(), Amount::from(10u64), Price::new(10), Side::SELL, TS)
            .unwrap();
        engine
            .create_limit_order(buyer, rep(), Amount::from(10u64), Price::new(12), Side::BUY, TS)
            .unwrap();

        assert_eq!(engine.orders_for(rep(), Side::BUY).len(), 1);
        assert_eq!(engine.orders_for(rep(), Side::SELL).len(), 1);
        assert!(engine.trades().is_empty());
        assert_eq!(engine.balance_of(buyer, rep()), Amount::ZERO);
    }

    #[test]
    fn test_unknown_asset_rejected() {
        let mut engine = setup_engine();
        let trader = TraderId::new();

        let result = engine.create_limit_order(
            trader,
            AssetId::new("SHIB"),
            Amount::from(1u64),
            Price::new(1),
            Side::BUY,
            TS,
        );
        assert!(matches!(result, Err(ExchangeError::UnknownAsset { .. })));
    }

    #[test]
    fn test_settlement_currency_not_tradable() {
        let mut engine = setup_engine();
        let trader = TraderId::new();

        let result =
            engine.create_market_order(trader, dai(), Amount::from(1u64), Side::BUY, TS);
        assert!(matches!(
            result,
            Err(ExchangeError::SettlementCurrencyNotTradable { .. })
        ));
    }

    #[test]
    fn test_limit_sell_requires_token_balance() {
        let mut engine = setup_engine();
        let trader = TraderId::new();

        let result = engine.create_limit_order(
            trader,
            rep(),
            Amount::from(100u64),
            Price::new(10),
            Side::SELL,
            TS,
        );
        assert!(matches!(
            result,
            Err(ExchangeError::TokenBalanceTooLow { .. })
        ));
        assert!(engine.orders_for(rep(), Side::SELL).is_empty());
    }

    #[test]
    fn test_limit_buy_requires_settlement_balance() {
        let mut engine = setup_engine();
        let mut vault = Vault::new();
        let trader = TraderId::new();
        seed(&mut engine, &mut vault, trader, dai(), 99);

        // 10 × 10 = 100 > 99
        let result = engine.create_limit_order(
            trader,
            rep(),
            Amount::from(10u64),
            Price::new(10),
            Side::BUY,
            TS,
        );
        assert!(matches!(
            result,
            Err(ExchangeError::SettlementBalanceTooLow { .. })
        ));
    }

    #[test]
    fn test_market_order_empty_book_is_success() {
        let mut engine = setup_engine();
        let mut vault = Vault::new();
        let trader = TraderId::new();
        seed(&mut engine, &mut vault, trader, rep(), 100);

        let trades = engine
            .create_market_order(trader, rep(), Amount::from(10u64), Side::SELL, TS)
            .unwrap();
        assert!(trades.is_empty());
        assert_eq!(engine.balance_of(trader, rep()), Amount::from(100u64));
    }

    #[test]
    fn test_market_sell_partial_fill_of_resting_bid() {
        let mut engine = setup_engine();
        let mut vault = Vault::new();
        let buyer = TraderId::new();
        let seller = TraderId::new();
        seed(&mut engine, &mut vault, buyer, dai(), 100);
        seed(&mut engine, &mut vault, seller, rep(), 100);

        engine
            .create_limit_order(buyer, rep(), Amount::from(10u64), Price::new(10), Side::BUY, TS)
            .unwrap();
        let trades = engine
            .create_market_order(seller, rep(), Amount::from(5u64), Side::SELL, TS)
            .unwrap();

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].amount, Amount::from(5u64));
        assert_eq!(trades[0].price, Price::new(10));
        assert_eq!(trades[0].maker, buyer);
        assert_eq!(trades[0].taker, seller);

        // resting order partially filled, not removed
        let bids = engine.orders_for(rep(), Side::BUY);
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].filled, Amount::from(5u64));

        assert_eq!(engine.balance_of(buyer, dai()), Amount::from(50u64));
        assert_eq!(engine.balance_of(buyer, rep()), Amount::from(5u64));
        assert_eq!(engine.balance_of(seller, dai()), Amount::from(50u64));
        assert_eq!(engine.balance_of(seller, rep()), Amount::from(95u64));
    }

    #[test]
    fn test_market_order_walks_price_priority() {
        let mut engine = setup_engine();
        let mut vault = Vault::new();
        let buyer = TraderId::new();
        let seller = TraderId::new();
        seed(&mut engine, &mut vault, buyer, dai(), 1000);
        seed(&mut engine, &mut vault, seller, rep(), 100);

        engine
            .create_limit_order(buyer, rep(), Amount::from(5u64), Price::new(9), Side::BUY, TS)
            .unwrap();
        engine
            .create_limit_order(buyer, rep(), Amount::from(5u64), Price::new(11), Side::BUY, TS)
            .unwrap();

        let trades = engine
            .create_market_order(seller, rep(), Amount::from(8u64), Side::SELL, TS)
            .unwrap();

        // best bid (11) consumed fully first, then 3 from the 9 bid
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].price, Price::new(11));
        assert_eq!(trades[0].amount, Amount::from(5u64));
        assert_eq!(trades[1].price, Price::new(9));
        assert_eq!(trades[1].amount, Amount::from(3u64));

        // filled bid removed lazily, partially-filled one remains
        let bids = engine.orders_for(rep(), Side::BUY);
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].price, Price::new(9));
        assert_eq!(bids[0].filled, Amount::from(3u64));

        // seller proceeds: 5×11 + 3×9 = 82
        assert_eq!(engine.balance_of(seller, dai()), Amount::from(82u64));
    }

    #[test]
    fn test_market_buy_fails_atomically_when_unfunded() {
        let mut engine = setup_engine();
        let mut vault = Vault::new();
        let seller = TraderId::new();
        let buyer = TraderId::new();
        seed(&mut engine, &mut vault, seller, rep(), 100);

        engine
            .create_limit_order(seller, rep(), Amount::from(100u64), Price::new(10), Side::SELL, TS)
            .unwrap();

        // buyer has zero settlement balance
        let result =
            engine.create_market_order(buyer, rep(), Amount::from(100u64), Side::BUY, TS);
        assert!(matches!(
            result,
            Err(ExchangeError::SettlementBalanceTooLow { .. })
        ));

        // no partial slice observable
        let asks = engine.orders_for(rep(), Side::SELL);
        assert_eq!(asks.len(), 1);
        assert_eq!(asks[0].filled, Amount::ZERO);
        assert_eq!(engine.balance_of(buyer, rep()), Amount::ZERO);
        assert_eq!(engine.balance_of(seller, rep()), Amount::ZERO);
        assert!(engine.trades().is_empty());
    }

    #[test]
    fn test_trade_sequences_are_monotonic() {
        let mut engine = setup_engine();
        let mut vault = Vault::new();
        let buyer = TraderId::new();
        let seller = TraderId::new();
        seed(&mut engine, &mut vault, buyer, dai(), 1000);
        seed(&mut engine, &mut vault, seller, rep(), 100);

        engine
            .create_limit_order(buyer, rep(), Amount::from(5u64), Price::new(10), Side::BUY, TS)
            .unwrap();
        engine
            .create_limit_order(buyer, rep(), Amount::from(5u64), Price::new(10), Side::BUY, TS)
            .unwrap();
        let trades = engine
            .create_market_order(seller, rep(), Amount::from(10u64), Side::SELL, TS)
            .unwrap();

        assert_eq!(trades.len(), 2);
        assert_eq!(trades[1].sequence, trades[0].sequence + 1);
        assert_eq!(engine.trades().len(), 2);
    }

    #[test]
    fn test_zero_amounts_rejected() {
        let mut engine = setup_engine();
        let mut vault = Vault::new();
        let trader = TraderId::new();

        assert_eq!(
            engine.deposit(&mut vault, trader, rep(), Amount::ZERO),
            Err(ExchangeError::InvalidAmount)
        );
        assert_eq!(
            engine.create_market_order(trader, rep(), Amount::ZERO, Side::BUY, TS),
            Err(ExchangeError::InvalidAmount)
        );
        assert_eq!(
            engine.create_limit_order(trader, rep(), Amount::from(1u64), Price::new(0), Side::BUY, TS),
            Err(ExchangeError::InvalidAmount)
        );
    }

    #[test]
    fn test_events_recorded() {
        let mut engine = setup_engine();
        let mut vault = Vault::new();
        let trader = TraderId::new();
        seed(&mut engine, &mut vault, trader, dai(), 100);

        engine
            .create_limit_order(trader, rep(), Amount::from(10u64), Price::new(10), Side::BUY, TS)
            .unwrap();

        let events = engine.drain_events();
        assert_eq!(events.len(), 2); // Deposited + OrderPlaced
        assert!(engine.events().is_empty());
        assert!(matches!(events[0], ExchangeEvent::Deposited { .. }));
        assert!(matches!(events[1], ExchangeEvent::OrderPlaced { .. }));
    }
}
