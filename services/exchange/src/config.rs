//! Engine configuration
//!
//! Names the one settlement currency all pairs are priced against, the
//! custody handle backing it, and the starting point of the engine's
//! monotonic sequence counters.

use serde::{Deserialize, Serialize};
use types::asset::{AssetId, HandleId};

/// Matching engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The settlement currency (quote asset of every pair)
    pub settlement: AssetId,
    /// External holding handle backing the settlement currency
    pub settlement_handle: HandleId,
    /// Starting value for order and trade sequence counters
    #[serde(default)]
    pub starting_sequence: u64,
}

impl EngineConfig {
    pub fn new(settlement: AssetId, settlement_handle: HandleId) -> Self {
        Self {
            settlement,
            settlement_handle,
            starting_sequence: 0,
        }
    }
}
