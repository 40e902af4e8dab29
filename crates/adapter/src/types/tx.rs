// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::utils::null_as_empty;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Transaction as returned by `eth_getTransactionByHash` / full blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    #[serde(rename = "nonce", default)]
    pub account_nonce: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gas_price: String,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub max_priority_fee_per_gas: String,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub max_fee_per_gas: String,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub base_fee_per_gas: String,
    #[serde(rename = "gas", default)]
    pub gas_limit: String,
    /// Empty for contract creation.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub to: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "input", default)]
    pub payload: String,
    pub hash: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub block_number: String,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "String::is_empty")]
    pub block_hash: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub from: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transaction_index: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcLog {
    pub address: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcReceipt {
    #[serde(default)]
    pub gas_used: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "null_logs")]
    pub logs: Vec<RpcLog>,
}

fn null_logs<'de, D>(deserializer: D) -> Result<Vec<RpcLog>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<RpcLog>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InternalTransferType {
    #[default]
    Call,
    Create,
    SelfDestruct,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalTransfer {
    #[serde(rename = "type", default)]
    pub kind: InternalTransferType,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub value: U256,
}

/// Internal (trace-derived) data of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalData {
    #[serde(rename = "type", default)]
    pub kind: InternalTransferType,
    /// Created contract, for `Create`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contract: String,
    #[serde(default)]
    pub transfers: Vec<InternalTransfer>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl InternalData {
    /// A plain call without transfers or error carries no information.
    pub fn is_empty_call(&self) -> bool {
        self.kind == InternalTransferType::Call && self.transfers.is_empty() && self.error.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedParam {
    #[serde(rename = "type")]
    pub kind: String,
    pub values: Vec<String>,
}

impl ParsedParam {
    /// Whether the parameter holds addresses (`address` or `address[]`).
    pub fn is_address(&self) -> bool {
        matches!(self.kind.as_str(), "address" | "address[]")
    }
}

/// Decoded call payload, supplied by an external ABI decoder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMethod {
    pub method_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub function: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParsedParam>,
}

/// Chain-specific part of a normalized transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TronSpecificData {
    pub tx: RpcTransaction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_data: Option<InternalData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<RpcReceipt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_data: Option<ParsedMethod>,
}

/// Normalized transaction handed to the indexing pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tx {
    pub txid: String,
    pub blocktime: i64,
    pub time: i64,
    pub confirmations: u32,
    /// Sender, at most one address.
    pub vin_addresses: Vec<String>,
    /// Recipient, at most one address.
    pub vout_addresses: Vec<String>,
    pub value: U256,
    pub coin_specific_data: TronSpecificData,
}
