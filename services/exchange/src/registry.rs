//! Asset registry
//!
//! Maps each listed asset symbol to its external holding handle and
//! distinguishes the one settlement currency. Registration is administrative
//! and not on the hot path; listed assets are immutable once registered.

use std::collections::HashMap;
use types::asset::{AssetId, HandleId};
use types::errors::ExchangeError;

/// A listed asset and the custody handle backing it
#[derive(Debug, Clone, PartialEq)]
pub struct ListedAsset {
    pub id: AssetId,
    pub handle: HandleId,
}

/// Registry of tradable assets plus the settlement currency
#[derive(Debug)]
pub struct AssetRegistry {
    assets: HashMap<AssetId, ListedAsset>,
    settlement: AssetId,
}

impl AssetRegistry {
    /// Create a registry with the settlement currency pre-registered
    pub fn new(settlement: AssetId, settlement_handle: HandleId) -> Self {
        let mut assets = HashMap::new();
        assets.insert(
            settlement,
            ListedAsset {
                id: settlement,
                handle: settlement_handle,
            },
        );
        Self { assets, settlement }
    }

    /// Register a new asset
    ///
    /// Fails with `AlreadyRegistered` if the symbol is in use.
    pub fn register(&mut self, id: AssetId, handle: HandleId) -> Result<(), ExchangeError> {
        if self.assets.contains_key(&id) {
            return Err(ExchangeError::AlreadyRegistered {
                asset: id.to_string(),
            });
        }
        self.assets.insert(id, ListedAsset { id, handle });
        Ok(())
    }

    /// Check if an asset symbol is registered
    pub fn exists(&self, id: AssetId) -> bool {
        self.assets.contains_key(&id)
    }

    /// Check if an asset is the designated settlement currency
    pub fn is_settlement_currency(&self, id: AssetId) -> bool {
        id == self.settlement
    }

    /// The designated settlement currency
    pub fn settlement_currency(&self) -> AssetId {
        self.settlement
    }

    /// Resolve the external holding handle for a registered asset
    pub fn handle_of(&self, id: AssetId) -> Option<&HandleId> {
        self.assets.get(&id).map(|asset| &asset.handle)
    }
}
