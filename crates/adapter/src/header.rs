// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Block headers whose identity hash travels next to the body.
//!
//! Tron computes block ids differently from Ethereum, so the hash can't be
//! derived from the Ethereum-shaped header fields. The node returns it as the
//! sibling `hash` field and that value is authoritative.

use crate::types::BlockHash;
use crate::utils::{null_as_empty, quantity};
use primitive_types::{H256, U256};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Name of the sibling field carrying the block id.
pub const HASH_FIELD: &str = "hash";

#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("Missing header field: {0}")]
    MissingField(String),

    #[error("Invalid hex format: {0}")]
    InvalidEncoding(String),

    #[error("Failed to decode header body")]
    Body(#[source] serde_json::Error),
}

/// Common view of a block header, independent of the chain's hashing rules.
pub trait BlockHeader {
    /// `0x`-prefixed block hash
    fn hash(&self) -> String;

    fn number(&self) -> u64;

    fn difficulty(&self) -> U256;
}

/// Ethereum-shaped header body, as decoded for any EVM-style chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmHeader {
    pub parent_hash: H256,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sha3_uncles: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub miner: String,
    pub state_root: H256,
    pub transactions_root: H256,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub receipts_root: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub logs_bloom: String,
    #[serde(default)]
    pub difficulty: U256,
    #[serde(with = "quantity")]
    pub number: u64,
    #[serde(with = "quantity", default)]
    pub gas_limit: u64,
    #[serde(with = "quantity", default)]
    pub gas_used: u64,
    #[serde(with = "quantity")]
    pub timestamp: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub extra_data: String,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub mix_hash: String,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub nonce: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee_per_gas: Option<U256>,
}

/// Tron block header: the generic body plus the authoritative sibling hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TronHeader {
    pub hash: BlockHash,
    #[serde(flatten)]
    pub header: EvmHeader,
}

impl TronHeader {
    /// Decode from a block or header JSON object.
    ///
    /// The sibling hash is validated before the body is looked at, so a
    /// payload without a usable id fails without attempting body decoding.
    pub fn from_json(value: &Value) -> Result<Self, HeaderError> {
        let hash_str = value
            .get(HASH_FIELD)
            .ok_or_else(|| HeaderError::MissingField(HASH_FIELD.to_string()))?
            .as_str()
            .ok_or_else(|| HeaderError::InvalidEncoding(format!("{} is not a string", HASH_FIELD)))?;

        let hash = BlockHash::parse(hash_str).map_err(HeaderError::InvalidEncoding)?;

        let header = EvmHeader::deserialize(value).map_err(HeaderError::Body)?;

        Ok(Self { hash, header })
    }

    pub fn from_slice(raw: &[u8]) -> Result<Self, HeaderError> {
        let value: Value = serde_json::from_slice(raw).map_err(HeaderError::Body)?;
        Self::from_json(&value)
    }

    pub fn parent_hash(&self) -> BlockHash {
        BlockHash::from(self.header.parent_hash)
    }

    pub fn timestamp(&self) -> u64 {
        self.header.timestamp
    }
}

impl BlockHeader for TronHeader {
    fn hash(&self) -> String {
        self.hash.to_string()
    }

    fn number(&self) -> u64 {
        self.header.number
    }

    fn difficulty(&self) -> U256 {
        self.header.difficulty
    }
}

impl<'de> Deserialize<'de> for TronHeader {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}
