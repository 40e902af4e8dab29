// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tron decorator over a generic Ethereum JSON-RPC transport.
//!
//! [`TronRpc`] forwards calls to the wrapped [`EvmRpc`] transport and
//! overrides the operations where the node deviates from Ethereum: block
//! payloads are repaired before decoding, `pending` is served from `latest`,
//! the network is resolved from `net_version` and transactions come back with
//! display addresses. Every round trip is bounded by the configured timeout.

use crate::address::AddressDescriptor;
use crate::header::{BlockHeader, HeaderError, TronHeader};
use crate::network::{Network, NetworkError};
use crate::parser::{ParseError, TronParser};
use crate::sanitize::{BlockQuery, sanitize_response};
use crate::types::{BlockHash, RpcReceipt, RpcTransaction, Tx};
use crate::utils::{parse_hex_u256, parse_quantity};
use config::RpcConfig;
use primitive_types::U256;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use subxt_rpcs::RpcClient;
use subxt_rpcs::client::RpcParams;
use thiserror::Error;

pub const METHOD_NET_VERSION: &str = "net_version";
pub const METHOD_GET_BALANCE: &str = "eth_getBalance";
pub const METHOD_GET_TRANSACTION_COUNT: &str = "eth_getTransactionCount";
pub const METHOD_GET_TRANSACTION_BY_HASH: &str = "eth_getTransactionByHash";
pub const METHOD_GET_TRANSACTION_RECEIPT: &str = "eth_getTransactionReceipt";

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("RPC call {method} timed out after {timeout:?}")]
    Timeout { method: String, timeout: Duration },

    #[error("RPC call {method} failed")]
    Rpc {
        method: String,
        #[source]
        source: subxt_rpcs::Error,
    },

    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    #[error("Unexpected response from {method}: {reason}")]
    InvalidResponse { method: String, reason: String },

    #[error("Failed to decode response from {method}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Header(#[from] HeaderError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Generic Ethereum JSON-RPC transport.
pub trait EvmRpc: Send + Sync {
    fn call(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Value, subxt_rpcs::Error>> + Send;
}

impl EvmRpc for RpcClient {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, subxt_rpcs::Error> {
        let mut rpc_params = RpcParams::new();
        for param in params {
            rpc_params.push(param)?;
        }
        self.request::<Value>(method, rpc_params).await
    }
}

impl<T: EvmRpc> EvmRpc for Arc<T> {
    fn call(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> impl Future<Output = Result<Value, subxt_rpcs::Error>> + Send {
        (**self).call(method, params)
    }
}

pub struct TronRpc<T> {
    inner: T,
    timeout: Duration,
    parser: TronParser,
}

impl<T: EvmRpc> TronRpc<T> {
    pub fn new(inner: T, config: &RpcConfig, parser: TronParser) -> Self {
        Self {
            inner,
            timeout: config.timeout,
            parser,
        }
    }

    /// The wrapped transport, for operations that need no adaptation.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn parser(&self) -> &TronParser {
        &self.parser
    }

    /// Forward a call to the transport, bounded by the configured timeout.
    ///
    /// Block results are repaired before they are returned.
    pub async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, AdapterError> {
        tracing::trace!(method = %method, "Forwarding RPC call");

        let mut result = match tokio::time::timeout(self.timeout, self.inner.call(method, params)).await {
            Ok(Ok(result)) => result,
            Ok(Err(source)) => {
                return Err(AdapterError::Rpc {
                    method: method.to_string(),
                    source,
                });
            }
            Err(_) => {
                tracing::warn!(
                    method = %method,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "RPC call timed out"
                );
                return Err(AdapterError::Timeout {
                    method: method.to_string(),
                    timeout: self.timeout,
                });
            }
        };

        sanitize_response(method, &mut result);
        Ok(result)
    }

    async fn call_typed<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Option<R>, AdapterError> {
        let result = self.call(method, params).await?;
        if result.is_null() {
            return Ok(None);
        }
        serde_json::from_value(result)
            .map(Some)
            .map_err(|source| AdapterError::Decode {
                method: method.to_string(),
                source,
            })
    }

    async fn call_str(&self, method: &str, params: Vec<Value>) -> Result<String, AdapterError> {
        match self.call(method, params).await? {
            Value::String(s) => Ok(s),
            other => Err(AdapterError::InvalidResponse {
                method: method.to_string(),
                reason: format!("expected string, got {}", other),
            }),
        }
    }

    /// Fetch a block as JSON, with the state root repaired.
    pub async fn get_block_raw(&self, query: BlockQuery, full_txs: bool) -> Result<Value, AdapterError> {
        let (method, selector) = query.rpc_call();
        let block = self.call(method, vec![json!(selector), json!(full_txs)]).await?;

        let empty = match &block {
            Value::Null => true,
            Value::Object(fields) => fields.is_empty(),
            _ => false,
        };
        if empty {
            return Err(AdapterError::BlockNotFound(selector));
        }
        Ok(block)
    }

    /// Header at `number`, or the latest header for `None`.
    pub async fn header_by_number(&self, number: Option<u64>) -> Result<TronHeader, AdapterError> {
        let query = number.map_or(BlockQuery::Latest, BlockQuery::Height);
        let block = self.get_block_raw(query, false).await?;
        Ok(TronHeader::from_json(&block)?)
    }

    pub async fn header_by_hash(&self, hash: &str) -> Result<TronHeader, AdapterError> {
        let hash = BlockHash::parse(hash).map_err(HeaderError::InvalidEncoding)?;
        let block = self.get_block_raw(BlockQuery::Hash(hash.into_inner()), false).await?;
        Ok(TronHeader::from_json(&block)?)
    }

    pub async fn best_block_hash(&self) -> Result<String, AdapterError> {
        Ok(self.header_by_number(None).await?.hash())
    }

    pub async fn best_block_height(&self) -> Result<u64, AdapterError> {
        Ok(self.header_by_number(None).await?.number())
    }

    pub async fn network(&self) -> Result<Network, AdapterError> {
        let version = self.call_str(METHOD_NET_VERSION, vec![]).await?;
        Network::resolve(&version).map_err(|e| {
            tracing::warn!(net_version = %version, "Node reports an unknown network");
            AdapterError::from(e)
        })
    }

    pub async fn balance(&self, address: &AddressDescriptor) -> Result<U256, AdapterError> {
        let balance = self
            .call_str(METHOD_GET_BALANCE, vec![json!(address.to_hex()), json!("latest")])
            .await?;
        parse_hex_u256(&balance).map_err(|reason| AdapterError::InvalidResponse {
            method: METHOD_GET_BALANCE.to_string(),
            reason,
        })
    }

    pub async fn nonce(&self, address: &AddressDescriptor) -> Result<u64, AdapterError> {
        let nonce = self
            .call(
                METHOD_GET_TRANSACTION_COUNT,
                vec![json!(address.to_hex()), json!("latest")],
            )
            .await?;
        parse_quantity(&nonce).map_err(|reason| AdapterError::InvalidResponse {
            method: METHOD_GET_TRANSACTION_COUNT.to_string(),
            reason,
        })
    }

    /// Pending transactions. The node has no mempool view, so this is always empty.
    pub fn mempool_transactions(&self) -> Vec<String> {
        tracing::debug!("Mempool not available upstream, returning no transactions");
        Vec::new()
    }

    /// Fetch a transaction with its receipt and normalize it to display form.
    pub async fn get_transaction(
        &self,
        txid: &str,
        blocktime: i64,
        confirmations: u32,
    ) -> Result<Tx, AdapterError> {
        let (tx, receipt) = tokio::join!(
            self.call_typed::<RpcTransaction>(METHOD_GET_TRANSACTION_BY_HASH, vec![json!(txid)]),
            self.call_typed::<RpcReceipt>(METHOD_GET_TRANSACTION_RECEIPT, vec![json!(txid)]),
        );

        let tx = tx?.ok_or_else(|| AdapterError::TransactionNotFound(txid.to_string()))?;
        let receipt = receipt?;

        Ok(self
            .parser
            .tx_to_tx(&tx, receipt.as_ref(), None, blocktime, confirmations)?)
    }
}
