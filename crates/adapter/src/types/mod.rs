// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! RPC data model shared by the parser, the rewriter and the RPC layer.
//!
//! Address fields are plain strings: the same structures carry either the
//! node's hex form, the canonical `0x` hex form or the Base58Check display
//! form, depending on which pipeline stage produced them.

pub mod hash;
pub mod token;
pub mod tx;

pub use hash::BlockHash;
pub use token::{MultiTokenValue, TokenStandard, TokenTransfer};
pub use tx::{
    InternalData, InternalTransfer, InternalTransferType, ParsedMethod, ParsedParam, RpcLog,
    RpcReceipt, RpcTransaction, TronSpecificData, Tx,
};
