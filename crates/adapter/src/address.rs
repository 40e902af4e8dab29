// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Address codec.
//!
//! Tron accounts are identified internally by a bare 20-byte body (the same
//! width as an Ethereum address). Clients see the Base58Check form:
//!
//! ```text
//! Base58( 0x41 || body || sha256(sha256(0x41 || body))[..4] )
//! ```
//!
//! which is always 34 characters long and starts with `T`. The node's
//! JSON-RPC interface reports the same body as hex, with or without the `41`
//! prefix byte.

use primitive_types::H160;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix byte of every mainnet/testnet Tron address.
pub const ADDRESS_PREFIX: u8 = 0x41;

/// Width of the canonical address body.
pub const ADDRESS_LEN: usize = 20;

/// Length of the Base58Check display form.
pub const DISPLAY_ADDRESS_LEN: usize = 34;

const CHECKSUM_LEN: usize = 4;

/// Decoded length of a display address: prefix, body and checksum.
const PAYLOAD_LEN: usize = 1 + ADDRESS_LEN + CHECKSUM_LEN;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Invalid address encoding: {0}")]
    InvalidEncoding(String),

    #[error("Invalid address checksum: {0}")]
    InvalidChecksum(String),

    #[error("Invalid address length: expected 20 bytes, got {0}")]
    InvalidLength(usize),
}

/// Canonical binary account identifier.
///
/// Carries neither the `0x41` prefix nor the checksum, both of which are
/// reconstructed on encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AddressDescriptor(H160);

impl AddressDescriptor {
    pub fn new(body: [u8; ADDRESS_LEN]) -> Self {
        Self(H160(body))
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        self.0.as_fixed_bytes()
    }

    pub fn inner(&self) -> &H160 {
        &self.0
    }

    /// `0x`-prefixed lowercase hex of the body, as the node's RPC expects it.
    pub fn to_hex(&self) -> String {
        crate::utils::hex_with_prefix(self.as_bytes())
    }

    /// Base58Check display form.
    pub fn to_display(&self) -> String {
        encode_address(self)
    }
}

impl From<H160> for AddressDescriptor {
    fn from(address: H160) -> Self {
        Self(address)
    }
}

impl From<[u8; ADDRESS_LEN]> for AddressDescriptor {
    fn from(body: [u8; ADDRESS_LEN]) -> Self {
        Self::new(body)
    }
}

impl TryFrom<&[u8]> for AddressDescriptor {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let body: [u8; ADDRESS_LEN] = bytes
            .try_into()
            .map_err(|_| AddressError::InvalidLength(bytes.len()))?;
        Ok(Self::new(body))
    }
}

impl AsRef<[u8]> for AddressDescriptor {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for AddressDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display())
    }
}

impl FromStr for AddressDescriptor {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_address(s)
    }
}

/// Serialized as canonical `0x` hex, the form handed to storage.
impl Serialize for AddressDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Accepts every textual form `decode_address` accepts.
impl<'de> Deserialize<'de> for AddressDescriptor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        decode_address(&s).map_err(serde::de::Error::custom)
    }
}

/// First four bytes of the double SHA-256 of `payload`.
fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first = Sha256::digest(payload);
    let second = Sha256::digest(first);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&second[..CHECKSUM_LEN]);
    out
}

/// Decode any recognized textual address into its canonical body.
///
/// Accepted shapes, tried in order:
/// 1. 34-character Base58Check string with prefix byte `0x41`
/// 2. `0x` followed by 40 hex digits
/// 3. `0x` followed by 42 hex digits whose first byte is `0x41`
/// 4. bare 40 hex digits
pub fn decode_address(input: &str) -> Result<AddressDescriptor, AddressError> {
    if input.len() == DISPLAY_ADDRESS_LEN && !input.starts_with("0x") {
        return decode_base58(input);
    }

    if let Some(hex_str) = input.strip_prefix("0x") {
        let bytes = hex::decode(hex_str)
            .map_err(|e| AddressError::InvalidEncoding(format!("{}: {}", input, e)))?;
        return match bytes.len() {
            ADDRESS_LEN => AddressDescriptor::try_from(bytes.as_slice()),
            len if len == ADDRESS_LEN + 1 => {
                if bytes[0] != ADDRESS_PREFIX {
                    return Err(AddressError::InvalidEncoding(format!(
                        "{}: expected prefix byte 0x{:02x}, got 0x{:02x}",
                        input, ADDRESS_PREFIX, bytes[0]
                    )));
                }
                AddressDescriptor::try_from(&bytes[1..])
            }
            len => Err(AddressError::InvalidLength(len)),
        };
    }

    if input.len() == ADDRESS_LEN * 2 {
        let bytes = hex::decode(input)
            .map_err(|e| AddressError::InvalidEncoding(format!("{}: {}", input, e)))?;
        return AddressDescriptor::try_from(bytes.as_slice());
    }

    Err(AddressError::InvalidEncoding(input.to_string()))
}

fn decode_base58(input: &str) -> Result<AddressDescriptor, AddressError> {
    let decoded = bs58::decode(input)
        .into_vec()
        .map_err(|e| AddressError::InvalidEncoding(format!("{}: {}", input, e)))?;

    if decoded.len() <= CHECKSUM_LEN {
        return Err(AddressError::InvalidEncoding(format!(
            "{}: decoded payload too short",
            input
        )));
    }

    // The checksum is verified before the layout so that any corrupted
    // character surfaces as a checksum failure.
    let (payload, check) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if checksum(payload) != check {
        return Err(AddressError::InvalidChecksum(input.to_string()));
    }

    if decoded.len() != PAYLOAD_LEN {
        return Err(AddressError::InvalidLength(
            payload.len().saturating_sub(1),
        ));
    }

    if payload[0] != ADDRESS_PREFIX {
        return Err(AddressError::InvalidEncoding(format!(
            "{}: expected prefix byte 0x{:02x}, got 0x{:02x}",
            input, ADDRESS_PREFIX, payload[0]
        )));
    }

    AddressDescriptor::try_from(&payload[1..])
}

/// Encode a canonical body into its Base58Check display form.
pub fn encode_address(desc: &AddressDescriptor) -> String {
    // Fresh buffer per call; the descriptor bytes are never extended in place.
    let mut payload = Vec::with_capacity(PAYLOAD_LEN);
    payload.push(ADDRESS_PREFIX);
    payload.extend_from_slice(desc.as_bytes());
    let check = checksum(&payload);
    payload.extend_from_slice(&check);

    bs58::encode(payload).into_string()
}

/// Encode a raw byte body, rejecting anything that is not exactly 20 bytes.
pub fn encode_address_bytes(body: &[u8]) -> Result<String, AddressError> {
    if !is_chain_address(body) {
        return Err(AddressError::InvalidLength(body.len()));
    }
    AddressDescriptor::try_from(body).map(|desc| encode_address(&desc))
}

/// Whether `body` has the width of an account identifier.
pub fn is_chain_address(body: &[u8]) -> bool {
    body.len() == ADDRESS_LEN
}
