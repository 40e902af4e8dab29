// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Chain-specific parsing on top of the EVM-shaped RPC data.

use crate::address::{AddressDescriptor, AddressError, decode_address, encode_address_bytes};
use crate::rewrite::{MIN_ADDRESS_FIELD_LEN, RewriteError, TxRewriter};
use crate::transfers::token_transfers_from_logs;
use crate::types::{
    InternalData, RpcReceipt, RpcTransaction, TokenStandard, TokenTransfer, TronSpecificData, Tx,
};
use crate::utils::{format_amount, parse_hex_u256};
use config::ParserConfig;
use primitive_types::U256;
use thiserror::Error;

/// Decimal places of the native amount (1 TRX = 1,000,000 sun).
pub const AMOUNT_DECIMAL_POINT: u32 = 6;

/// Suffix of resolved address aliases.
pub const ALIAS_SUFFIX: &str = ".tron";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}

#[derive(Debug, Clone, Default)]
pub struct TronParser {
    config: ParserConfig,
}

impl TronParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn addr_desc_from_address(&self, address: &str) -> Result<AddressDescriptor, ParseError> {
        Ok(decode_address(address)?)
    }

    /// Display addresses for a stored descriptor and whether they are searchable.
    ///
    /// Stored descriptors come from contract data as well as accounts, so
    /// the width is checked before encoding.
    pub fn addresses_from_addr_desc(&self, desc: &[u8]) -> Result<(Vec<String>, bool), ParseError> {
        let address = encode_address_bytes(desc)?;
        Ok((vec![address], true))
    }

    /// Display alias for a named address, or `None` when aliases are disabled.
    pub fn format_address_alias(&self, _address: &str, name: &str) -> Option<String> {
        if !self.config.address_aliases {
            return None;
        }
        Some(format!("{}{}", name, ALIAS_SUFFIX))
    }

    pub fn amount_decimals(&self) -> u32 {
        AMOUNT_DECIMAL_POINT
    }

    pub fn format_amount(&self, amount: U256) -> String {
        format_amount(amount, AMOUNT_DECIMAL_POINT)
    }

    pub fn token_type_name(&self, standard: TokenStandard) -> &str {
        let names = &self.config.token_type_names;
        match standard {
            TokenStandard::Fungible => names.fungible.as_str(),
            TokenStandard::NonFungible => names.non_fungible.as_str(),
            TokenStandard::Multi => names.multi.as_str(),
        }
    }

    /// Normalize a fetched transaction into display form.
    pub fn tx_to_tx(
        &self,
        tx: &RpcTransaction,
        receipt: Option<&RpcReceipt>,
        internal_data: Option<&InternalData>,
        blocktime: i64,
        confirmations: u32,
    ) -> Result<Tx, ParseError> {
        let value = parse_hex_u256(&tx.value).map_err(|e| {
            tracing::warn!(txid = %tx.hash, value = %tx.value, error = %e, "Invalid transaction value");
            RewriteError::InvalidAmount {
                field: "value".to_string(),
                value: tx.value.clone(),
            }
        })?;

        let specific = TronSpecificData {
            tx: tx.clone(),
            internal_data: internal_data.filter(|d| !d.is_empty_call()).cloned(),
            receipt: receipt.cloned(),
            parsed_data: None,
        };
        let specific = TxRewriter::outbound().apply(&specific)?;

        let single = |address: &str| {
            if address.len() < MIN_ADDRESS_FIELD_LEN {
                Vec::new()
            } else {
                vec![address.to_string()]
            }
        };

        Ok(Tx {
            txid: tx.hash.clone(),
            blocktime,
            time: blocktime,
            confirmations,
            vin_addresses: single(&specific.tx.from),
            vout_addresses: single(&specific.tx.to),
            value,
            coin_specific_data: specific,
        })
    }

    /// Token transfers emitted by a normalized transaction, in display form.
    pub fn token_transfers_from_tx(&self, tx: &Tx) -> Result<Vec<TokenTransfer>, ParseError> {
        let Some(receipt) = &tx.coin_specific_data.receipt else {
            return Ok(Vec::new());
        };
        let transfers = token_transfers_from_logs(&receipt.logs);
        Ok(TxRewriter::outbound().apply(&transfers)?)
    }

    /// Convert a normalized transaction back to canonical form for storage.
    pub fn to_storage(&self, tx: &Tx) -> Result<Tx, ParseError> {
        Ok(TxRewriter::inbound().apply(tx)?)
    }
}
