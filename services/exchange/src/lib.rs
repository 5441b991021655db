//! Exchange Engine Service
//!
//! Order-matching and balance-accounting engine: per-trader holdings, one
//! price-ordered order book per listed asset, and price-time-priority
//! matching of market orders against resting limit orders, with balances
//! settled atomically per fill.
//!
//! **Key Invariants:**
//! - Holdings never go negative; every failed operation leaves zero effect
//! - Bid side sorted by (price desc, sequence asc); ask side by
//!   (price asc, sequence asc) after every insertion
//! - A trade is never recorded without the matching balance movement on
//!   both sides
//! - The settlement currency prices every pair and is itself never tradable

pub mod book;
pub mod config;
pub mod engine;
pub mod events;
pub mod ledger;
pub mod registry;

pub use config::EngineConfig;
pub use engine::MatchingEngine;
