//! Custody-specific error types

use thiserror::Error;
use types::errors::ExchangeError;

/// Vault errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CustodyError {
    #[error("Insufficient external holding for {handle}: required {required}, available {available}")]
    InsufficientCollateral {
        handle: String,
        required: String,
        available: String,
    },

    #[error("Arithmetic overflow in holding calculation")]
    Overflow,
}

impl From<CustodyError> for ExchangeError {
    fn from(err: CustodyError) -> Self {
        ExchangeError::Custody(err.to_string())
    }
}
