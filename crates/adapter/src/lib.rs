// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tron support for an EVM-style indexing pipeline.
//!
//! Tron nodes expose an Ethereum-compatible JSON-RPC surface, but client-facing
//! addresses are Base58Check strings and a few response fields do not match the
//! Ethereum schema. This crate converts between the address encodings, repairs
//! block payloads before typed decoding and rewrites every address-bearing field
//! of transactions, receipts, internal transfers and token transfers.

pub mod address;
pub mod header;
pub mod logging;
pub mod network;
pub mod parser;
pub mod rewrite;
pub mod rpc;
pub mod sanitize;
pub mod transfers;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod test_fixtures;

pub use address::{AddressDescriptor, AddressError, decode_address, encode_address};
pub use header::{BlockHeader, EvmHeader, HeaderError, TronHeader};
pub use network::{Network, NetworkError};
pub use parser::{ParseError, TronParser};
pub use rewrite::{Representation, RewriteError, TxRewriter};
pub use rpc::{AdapterError, EvmRpc, TronRpc};
pub use sanitize::{BlockQuery, SanitizeError};
