// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repairs for known deviations in Tron's Ethereum-compatible RPC responses.
//!
//! - Block responses carry `stateRoot` as `"0x"` (or another non-hash value),
//!   which strict 32-byte hash decoding rejects. It is replaced with the zero
//!   hash before typed decoding.
//! - The node has no pending block view, so `pending` queries are answered
//!   from `latest`.

use crate::utils::hex_with_prefix;
use primitive_types::H256;
use serde_json::Value;
use thiserror::Error;

/// Field holding the post-execution state root in block payloads.
pub const STATE_ROOT_FIELD: &str = "stateRoot";

/// Substitute for a malformed state root: the all-zero 32-byte hash.
pub const EMPTY_STATE_ROOT: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000000";

pub const METHOD_GET_BLOCK_BY_HASH: &str = "eth_getBlockByHash";
pub const METHOD_GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";

#[derive(Debug, Error)]
pub enum SanitizeError {
    #[error("Upstream returned malformed JSON")]
    UpstreamMalformed(#[source] serde_json::Error),
}

/// Whether `s` is a `0x`-prefixed 32-byte hex hash.
pub fn is_valid_hash(s: &str) -> bool {
    s.len() == 66
        && s.starts_with("0x")
        && s.as_bytes()[2..].iter().all(|b| b.is_ascii_hexdigit())
}

/// Replace a malformed `stateRoot` in place. Returns whether anything changed.
///
/// Only a string-valued `stateRoot` on a JSON object is inspected; every
/// other field is left as is.
pub fn fix_state_root_value(block: &mut Value) -> bool {
    let Some(state_root) = block.get_mut(STATE_ROOT_FIELD) else {
        return false;
    };
    let Some(current) = state_root.as_str() else {
        return false;
    };
    if is_valid_hash(current) {
        return false;
    }

    tracing::debug!(
        state_root = %current,
        "Replacing malformed stateRoot with zero hash"
    );
    *state_root = Value::String(EMPTY_STATE_ROOT.to_string());
    true
}

/// Repair a raw block payload.
///
/// Payloads that need no repair are returned byte-for-byte unchanged.
pub fn fix_state_root(raw: &[u8]) -> Result<Vec<u8>, SanitizeError> {
    let mut block: Value = serde_json::from_slice(raw).map_err(SanitizeError::UpstreamMalformed)?;
    if !fix_state_root_value(&mut block) {
        return Ok(raw.to_vec());
    }
    serde_json::to_vec(&block).map_err(SanitizeError::UpstreamMalformed)
}

/// Apply method-specific repairs to an RPC result.
pub fn sanitize_response(method: &str, result: &mut Value) -> bool {
    match method {
        METHOD_GET_BLOCK_BY_HASH | METHOD_GET_BLOCK_BY_NUMBER => fix_state_root_value(result),
        _ => false,
    }
}

/// Block selector for block queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockQuery {
    Latest,
    /// Served as `Latest`: the node exposes no pending view.
    Pending,
    Hash(H256),
    Height(u64),
}

impl BlockQuery {
    /// Parse the selector strings accepted by the indexer: `latest`,
    /// `pending`, a `0x` block hash or a decimal height.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "latest" => Some(BlockQuery::Latest),
            "pending" => Some(BlockQuery::Pending),
            _ if is_valid_hash(s) => {
                let bytes = hex::decode(&s[2..]).ok()?;
                Some(BlockQuery::Hash(H256::from_slice(&bytes)))
            }
            _ => s.parse::<u64>().ok().map(BlockQuery::Height),
        }
    }

    /// RPC method and first parameter for this selector.
    pub fn rpc_call(&self) -> (&'static str, String) {
        match self {
            BlockQuery::Latest => (METHOD_GET_BLOCK_BY_NUMBER, to_block_num_arg(None)),
            BlockQuery::Pending => {
                tracing::debug!("Pending block view unavailable, querying latest");
                (METHOD_GET_BLOCK_BY_NUMBER, to_block_num_arg(None))
            }
            BlockQuery::Hash(hash) => (METHOD_GET_BLOCK_BY_HASH, hex_with_prefix(hash.as_bytes())),
            BlockQuery::Height(height) => (METHOD_GET_BLOCK_BY_NUMBER, to_block_num_arg(Some(*height))),
        }
    }
}

/// Block number argument for `eth_getBlockByNumber`; `None` is `latest`.
pub fn to_block_num_arg(number: Option<u64>) -> String {
    match number {
        None => "latest".to_string(),
        Some(n) => format!("0x{:x}", n),
    }
}
