//! Error types for the exchange engine
//!
//! Single taxonomy using thiserror. Every failure is reported synchronously
//! to the caller of the failing operation and leaves all ledger and book
//! state exactly as it was.

use thiserror::Error;

/// Exchange-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExchangeError {
    #[error("Asset does not exist: {asset}")]
    UnknownAsset { asset: String },

    #[error("Settlement currency {asset} cannot be traded")]
    SettlementCurrencyNotTradable { asset: String },

    #[error("Token balance too low for {asset}: required {required}, available {available}")]
    TokenBalanceTooLow {
        asset: String,
        required: String,
        available: String,
    },

    #[error("Settlement balance too low: required {required}, available {available}")]
    SettlementBalanceTooLow {
        required: String,
        available: String,
    },

    #[error("Insufficient balance for {asset}: required {required}, available {available}")]
    InsufficientBalance {
        asset: String,
        required: String,
        available: String,
    },

    #[error("Asset already registered: {asset}")]
    AlreadyRegistered { asset: String },

    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Arithmetic overflow in balance calculation")]
    Overflow,

    #[error("Custody transfer failed: {0}")]
    Custody(String),
}
