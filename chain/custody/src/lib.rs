//! Custody layer for the exchange
//!
//! Models the external holdings that back the exchange ledger: each trader
//! owns collateral keyed by an opaque holding handle, and the engine pulls
//! value into custody on deposit and releases it back on withdrawal. This
//! stands in for the on-chain token contracts an exchange would settle
//! against in production.
//!
//! # Modules
//! - `errors`: custody-specific error types
//! - `vault`: per-(trader, handle) external balances with checked transfers

pub mod errors;
pub mod vault;

pub use errors::CustodyError;
pub use vault::Vault;
