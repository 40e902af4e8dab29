// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test fixtures and helpers for mocking a Tron node's Ethereum-compatible RPC.
//!
//! Payloads mirror what a node returns on the wire: hex addresses, hex
//! quantities and the empty `stateRoot` that needs repairing.

use serde_json::{Value, json, value::RawValue};
use std::sync::Arc;
use subxt_rpcs::client::mock_rpc_client::{Json as MockJson, MockRpcClientBuilder};
use subxt_rpcs::client::{MockRpcClient, RpcClient};

use crate::network::Network;
use crate::transfers::TRANSFER_EVENT_TOPIC;

/// Default test block hash used in mocks.
pub const TEST_BLOCK_HASH: &str =
    "0x00000000000186a0a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718";

pub const TEST_PARENT_HASH: &str =
    "0x000000000001869f0f1e2d3c4b5a69788796a5b4c3d2e1f00f1e2d3c4b5a6978";

pub const TEST_TX_HASH: &str =
    "0xc92919ad24ffd58f760b18df7949f06e1190cf54a50a0e3745a385608ed3cbf2";

/// Default test block number.
pub const TEST_BLOCK_NUMBER: u64 = 100_000;

pub const TEST_BLOCK_TIME: u64 = 1_700_000_000;

/// Sender of the sample TRC-20 transfer.
pub const TEST_SENDER_HEX: &str = "0xc88bb5a4636463d7eb2af02ccabb8b790fb200a9";
pub const TEST_SENDER: &str = "TUFbWcZzvLy2LbxkxFAraojZRTB8vewjsz";

/// TRC-20 contract called by the sample transaction.
pub const TEST_CONTRACT_HEX: &str = "0xa614f803b6fd780986a42c78ec9c7f77e6ded13c";
pub const TEST_CONTRACT: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";

/// Recipient of the sample TRC-20 transfer.
pub const TEST_RECIPIENT_HEX: &str = "0x8da98894069283ddf2379e0b27bfea76fc9b7399";
pub const TEST_RECIPIENT: &str = "TNtFNW4EoQJanSczatPpU2kETN3WbVFVHR";

/// Block payload as served by the node, with a valid `stateRoot`.
pub fn block_json() -> Value {
    json!({
        "baseFeePerGas": "0x0",
        "difficulty": "0x0",
        "extraData": "0x",
        "gasLimit": "0x2b2b82cae",
        "gasUsed": "0x34dc",
        "hash": TEST_BLOCK_HASH,
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "miner": "0x4e7e5f7cd0d2a0d0d8b18b4d3d8e6b0d0b8f14bf",
        "mixHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "nonce": "0x0000000000000000",
        "number": format!("0x{:x}", TEST_BLOCK_NUMBER),
        "parentHash": TEST_PARENT_HASH,
        "receiptsRoot": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
        "size": "0x2f5",
        "stateRoot": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "timestamp": format!("0x{:x}", TEST_BLOCK_TIME),
        "totalDifficulty": "0x0",
        "transactions": [TEST_TX_HASH],
        "transactionsRoot": "0x7b8a1c6c6c4ba0b2c6e1cb8e9b3fd2f8c77ab0f4c84e9a4d1bd3cd8d1a7e5a4f",
        "uncles": []
    })
}

/// Block payload with the malformed `stateRoot` Tron nodes actually return.
pub fn raw_block_json() -> Value {
    let mut block = block_json();
    block["stateRoot"] = json!("0x");
    block
}

/// TRC-20 `transfer(address,uint256)` call.
pub fn tx_json() -> Value {
    json!({
        "blockHash": TEST_BLOCK_HASH,
        "blockNumber": format!("0x{:x}", TEST_BLOCK_NUMBER),
        "from": TEST_SENDER_HEX,
        "gas": "0x0",
        "gasPrice": "0xd2",
        "hash": TEST_TX_HASH,
        "input": "0xa9059cbb0000000000000000000000008da98894069283ddf2379e0b27bfea76fc9b73990000000000000000000000000000000000000000000000000000000022eda680",
        "nonce": "0x0",
        "to": TEST_CONTRACT_HEX,
        "transactionIndex": "0x0",
        "value": "0x0"
    })
}

pub fn receipt_json() -> Value {
    json!({
        "gasUsed": "0x34dc",
        "status": "0x1",
        "logs": [
            {
                "address": TEST_CONTRACT_HEX,
                "topics": [
                    TRANSFER_EVENT_TOPIC,
                    "0x000000000000000000000000c88bb5a4636463d7eb2af02ccabb8b790fb200a9",
                    "0x0000000000000000000000008da98894069283ddf2379e0b27bfea76fc9b7399"
                ],
                "data": "0x0000000000000000000000000000000000000000000000000000000022eda680"
            }
        ]
    })
}

fn first_param(params: Option<Box<RawValue>>) -> Option<Value> {
    params
        .and_then(|p| serde_json::from_str::<Value>(p.get()).ok())
        .and_then(|v| v.get(0).cloned())
}

/// Create a MockRpcClient builder pre-configured with handlers for:
/// - network identification (net_version)
/// - block lookups by number and hash, returning the unsanitized block
/// - transaction and receipt lookups for the sample TRC-20 transfer
/// - account balance and nonce
///
/// You can add additional handlers to the returned builder before calling .build()
pub fn mock_rpc_client_builder() -> MockRpcClientBuilder {
    MockRpcClient::builder()
        .method_handler("net_version", async |_params| {
            MockJson(Network::Mainnet.version_id())
        })
        .method_handler("eth_getBlockByNumber", async |_params| {
            MockJson(raw_block_json())
        })
        .method_handler("eth_getBlockByHash", move |params: Option<Box<RawValue>>| {
            let requested = first_param(params);
            async move {
                match requested.as_ref().and_then(Value::as_str) {
                    Some(TEST_BLOCK_HASH) => MockJson(raw_block_json()),
                    _ => MockJson(Value::Null),
                }
            }
        })
        .method_handler("eth_getTransactionByHash", async |_params| MockJson(tx_json()))
        .method_handler("eth_getTransactionReceipt", async |_params| {
            MockJson(receipt_json())
        })
        .method_handler("eth_getBalance", async |_params| MockJson("0x5f5e100"))
        .method_handler("eth_getTransactionCount", async |_params| MockJson("0x2a"))
}

/// Create a pre-configured MockRpcClient suitable for most tests.
pub fn create_mock_rpc_client() -> MockRpcClient {
    mock_rpc_client_builder().build()
}

/// Create an RpcClient from the mock.
pub fn create_rpc_client() -> Arc<RpcClient> {
    Arc::new(RpcClient::new(create_mock_rpc_client()))
}
