//! Types library for the custodial exchange ledger
//!
//! This library provides all core type definitions shared across the exchange
//! engine and the custody layer, ensuring type safety and deterministic
//! behavior.
//!
//! # Modules
//! - `ids`: Unique identifiers (TraderId, OrderId, TradeId)
//! - `asset`: Asset symbols and external holding handles
//! - `numeric`: Fixed-point integer types (Amount, Price)
//! - `order`: Order lifecycle types
//! - `trade`: Trade execution records
//! - `errors`: Error taxonomy

// Public modules
pub mod asset;
pub mod errors;
pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::asset::*;
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
}
