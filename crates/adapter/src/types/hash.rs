// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use primitive_types::H256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wrapper type for block hashes with controlled string representation.
///
/// Block hashes leave the adapter through this type so that every hash is
/// rendered the same way: `0x` followed by 64 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockHash(pub H256);

impl BlockHash {
    pub fn new(hash: H256) -> Self {
        Self(hash)
    }

    pub fn inner(&self) -> &H256 {
        &self.0
    }

    pub fn into_inner(self) -> H256 {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_fixed_bytes()
    }

    /// Parse a `0x`-prefixed 32-byte hex string.
    pub fn parse(s: &str) -> Result<Self, String> {
        let hex_str = s
            .strip_prefix("0x")
            .ok_or_else(|| format!("missing 0x prefix in '{}'", s))?;

        let bytes = hex::decode(hex_str).map_err(|e| format!("{}: {}", s, e))?;

        if bytes.len() != 32 {
            return Err(format!("Expected 32 bytes, got {}", bytes.len()));
        }

        Ok(BlockHash(H256::from_slice(&bytes)))
    }
}

impl From<H256> for BlockHash {
    fn from(hash: H256) -> Self {
        Self(hash)
    }
}

impl From<BlockHash> for H256 {
    fn from(hash: BlockHash) -> Self {
        hash.0
    }
}

impl From<[u8; 32]> for BlockHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(H256::from(bytes))
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // H256's Debug impl prints the full "0x..." form
        write!(f, "{:?}", self.0)
    }
}

impl Serialize for BlockHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BlockHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BlockHash::parse(&s).map_err(serde::de::Error::custom)
    }
}
