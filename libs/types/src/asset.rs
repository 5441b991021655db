//! Asset symbols and external holding handles
//!
//! Asset identifiers are fixed-width opaque symbols (ASCII, zero-padded),
//! so an unknown symbol is an ordinary lookup miss rather than a parse crash.
//! The external holding handle is the opaque address of the collateral that
//! backs an asset in the custody layer.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Fixed symbol width in bytes
pub const SYMBOL_WIDTH: usize = 8;

/// Fixed-width asset symbol (e.g. "REP", "DAI")
///
/// Stored as an 8-byte zero-padded ASCII array so symbols compare and hash as
/// plain bytes. Serialized as the trimmed string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; SYMBOL_WIDTH]);

impl AssetId {
    /// Create a new AssetId from a symbol string
    ///
    /// # Panics
    /// Panics if the symbol is empty, longer than [`SYMBOL_WIDTH`] bytes, or
    /// contains non-printable/non-ASCII characters
    pub fn new(symbol: &str) -> Self {
        Self::try_new(symbol).expect("invalid asset symbol")
    }

    /// Try to create an AssetId, returning None if the symbol is invalid
    pub fn try_new(symbol: &str) -> Option<Self> {
        let bytes = symbol.as_bytes();
        if bytes.is_empty() || bytes.len() > SYMBOL_WIDTH {
            return None;
        }
        if !bytes.iter().all(|b| b.is_ascii_graphic()) {
            return None;
        }
        let mut buf = [0u8; SYMBOL_WIDTH];
        buf[..bytes.len()].copy_from_slice(bytes);
        Some(Self(buf))
    }

    /// Get the symbol string (padding trimmed)
    pub fn as_str(&self) -> &str {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(SYMBOL_WIDTH);
        // Construction guarantees ASCII up to the first padding byte
        std::str::from_utf8(&self.0[..end]).unwrap_or("")
    }

    /// Get the raw fixed-width bytes
    pub fn as_bytes(&self) -> &[u8; SYMBOL_WIDTH] {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for AssetId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AssetIdVisitor;

        impl Visitor<'_> for AssetIdVisitor {
            type Value = AssetId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "an ASCII asset symbol of at most {SYMBOL_WIDTH} bytes")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<AssetId, E> {
                AssetId::try_new(v)
                    .ok_or_else(|| E::custom(format!("invalid asset symbol: {v:?}")))
            }
        }

        deserializer.deserialize_str(AssetIdVisitor)
    }
}

/// Opaque handle to an asset's external holding in the custody layer
///
/// Plays the role of a token contract address in an on-chain
/// deployment: the registry maps each listed asset to one handle, and the
/// custody vault keys external balances by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandleId(String);

impl HandleId {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HandleId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
