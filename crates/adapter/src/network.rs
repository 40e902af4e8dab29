// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network identification from the node's `net_version` result.
//!
//! Tron nodes report the tail of the genesis block hash instead of a numeric
//! network id, so the mapping is a closed table. Unknown values are rejected:
//! genesis parameters and confirmation depth depend on an exact match.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("Unknown network: net_version {0:?}")]
    UnknownNetwork(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Nile,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Mainnet, Network::Nile];

    /// Map a `net_version` result to a known network.
    pub fn resolve(version_id: &str) -> Result<Self, NetworkError> {
        Self::ALL
            .into_iter()
            .find(|network| network.version_id() == version_id)
            .ok_or_else(|| NetworkError::UnknownNetwork(version_id.to_string()))
    }

    /// The `net_version` string the node reports for this network.
    pub fn version_id(&self) -> &'static str {
        match self {
            Network::Mainnet => "0x2b6653dc",
            Network::Nile => "0x94a9059e",
        }
    }

    /// Numeric id used by the indexer for this network.
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => 11111,
            Network::Nile => 201910292,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Nile => "nile",
        }
    }

    pub fn is_testnet(&self) -> bool {
        !matches!(self, Network::Mainnet)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}
