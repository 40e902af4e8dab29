// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Address rewriting across decoded transaction graphs.
//!
//! Every address-bearing field of a transaction, its receipt logs, internal
//! transfers, token transfers and decoded `address` call arguments is
//! converted to one [`Representation`]. Everything else is copied as is.
//!
//! Rewrites never mutate their input. A new value is built field by field and
//! the first failure is returned instead, so a caller either gets a fully
//! converted value or an error.

use crate::address::{AddressError, decode_address};
use crate::types::{
    InternalData, InternalTransfer, ParsedMethod, RpcLog, RpcReceipt, RpcTransaction,
    TokenTransfer, TronSpecificData, Tx,
};
use thiserror::Error;

/// Values shorter than this are never addresses and pass through untouched.
pub const MIN_ADDRESS_FIELD_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    #[error("Invalid address in field '{field}': {value:?}")]
    Field {
        field: String,
        value: String,
        #[source]
        source: AddressError,
    },

    #[error("Invalid amount in field '{field}': {value:?}")]
    InvalidAmount { field: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// Base58Check, shown to clients
    Display,
    /// `0x` hex of the 20-byte body, handed to storage
    Canonical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxRewriter {
    target: Representation,
}

impl TxRewriter {
    pub const fn new(target: Representation) -> Self {
        Self { target }
    }

    /// Canonical to display, for client-facing results.
    pub const fn outbound() -> Self {
        Self::new(Representation::Display)
    }

    /// Any recognized shape to canonical, before storage.
    pub const fn inbound() -> Self {
        Self::new(Representation::Canonical)
    }

    pub fn target(&self) -> Representation {
        self.target
    }

    /// Rewrite a whole object graph.
    pub fn apply<T: AddressFields>(&self, value: &T) -> Result<T, RewriteError> {
        value.rewrite_addresses(self, "")
    }

    /// Convert a single address field.
    ///
    /// `field` names the field in errors. Values shorter than
    /// [`MIN_ADDRESS_FIELD_LEN`] are returned unchanged.
    pub fn rewrite_address(&self, field: &str, value: &str) -> Result<String, RewriteError> {
        if value.len() < MIN_ADDRESS_FIELD_LEN {
            return Ok(value.to_string());
        }

        let desc = decode_address(value).map_err(|source| RewriteError::Field {
            field: field.to_string(),
            value: value.to_string(),
            source,
        })?;

        Ok(match self.target {
            Representation::Display => desc.to_display(),
            Representation::Canonical => desc.to_hex(),
        })
    }

    /// Convert a decoded `address` call argument.
    ///
    /// Arguments come from an external ABI decoder and may hold values of
    /// other widths. Outbound, anything undecodable passes through. Inbound,
    /// only a length mismatch passes through.
    fn rewrite_param(&self, field: &str, value: &str) -> Result<String, RewriteError> {
        match self.rewrite_address(field, value) {
            Ok(rewritten) => Ok(rewritten),
            Err(RewriteError::Field { source, .. })
                if self.target == Representation::Display
                    || matches!(source, AddressError::InvalidLength(_)) =>
            {
                tracing::debug!(
                    field = %field,
                    value = %value,
                    error = %source,
                    "Leaving undecodable address argument as is"
                );
                Ok(value.to_string())
            }
            Err(e) => Err(e),
        }
    }
}

fn join(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", path, field)
    }
}

fn index(path: &str, i: usize) -> String {
    format!("{}[{}]", path, i)
}

/// Object graphs whose address fields can be rewritten.
pub trait AddressFields: Sized {
    /// Build a copy with every address field converted. `path` locates
    /// `self` in the enclosing graph and prefixes field names in errors.
    fn rewrite_addresses(&self, rw: &TxRewriter, path: &str) -> Result<Self, RewriteError>;
}

impl<T: AddressFields> AddressFields for Vec<T> {
    fn rewrite_addresses(&self, rw: &TxRewriter, path: &str) -> Result<Self, RewriteError> {
        self.iter()
            .enumerate()
            .map(|(i, item)| item.rewrite_addresses(rw, &index(path, i)))
            .collect()
    }
}

impl<T: AddressFields> AddressFields for Option<T> {
    fn rewrite_addresses(&self, rw: &TxRewriter, path: &str) -> Result<Self, RewriteError> {
        self.as_ref()
            .map(|item| item.rewrite_addresses(rw, path))
            .transpose()
    }
}

impl AddressFields for RpcTransaction {
    fn rewrite_addresses(&self, rw: &TxRewriter, path: &str) -> Result<Self, RewriteError> {
        Ok(Self {
            from: rw.rewrite_address(&join(path, "from"), &self.from)?,
            to: rw.rewrite_address(&join(path, "to"), &self.to)?,
            ..self.clone()
        })
    }
}

impl AddressFields for RpcLog {
    fn rewrite_addresses(&self, rw: &TxRewriter, path: &str) -> Result<Self, RewriteError> {
        Ok(Self {
            address: rw.rewrite_address(&join(path, "address"), &self.address)?,
            topics: self.topics.clone(),
            data: self.data.clone(),
        })
    }
}

impl AddressFields for RpcReceipt {
    fn rewrite_addresses(&self, rw: &TxRewriter, path: &str) -> Result<Self, RewriteError> {
        Ok(Self {
            logs: self.logs.rewrite_addresses(rw, &join(path, "logs"))?,
            ..self.clone()
        })
    }
}

impl AddressFields for InternalTransfer {
    fn rewrite_addresses(&self, rw: &TxRewriter, path: &str) -> Result<Self, RewriteError> {
        Ok(Self {
            kind: self.kind,
            from: rw.rewrite_address(&join(path, "from"), &self.from)?,
            to: rw.rewrite_address(&join(path, "to"), &self.to)?,
            value: self.value,
        })
    }
}

impl AddressFields for InternalData {
    fn rewrite_addresses(&self, rw: &TxRewriter, path: &str) -> Result<Self, RewriteError> {
        Ok(Self {
            kind: self.kind,
            contract: rw.rewrite_address(&join(path, "contract"), &self.contract)?,
            transfers: self.transfers.rewrite_addresses(rw, &join(path, "transfers"))?,
            error: self.error.clone(),
        })
    }
}

impl AddressFields for TokenTransfer {
    fn rewrite_addresses(&self, rw: &TxRewriter, path: &str) -> Result<Self, RewriteError> {
        Ok(Self {
            standard: self.standard,
            contract: rw.rewrite_address(&join(path, "contract"), &self.contract)?,
            from: rw.rewrite_address(&join(path, "from"), &self.from)?,
            to: rw.rewrite_address(&join(path, "to"), &self.to)?,
            value: self.value,
            multi_token_values: self.multi_token_values.clone(),
        })
    }
}

impl AddressFields for ParsedMethod {
    fn rewrite_addresses(&self, rw: &TxRewriter, path: &str) -> Result<Self, RewriteError> {
        let params_path = join(path, "params");
        let mut params = Vec::with_capacity(self.params.len());
        for (i, param) in self.params.iter().enumerate() {
            let mut param = param.clone();
            if param.is_address() {
                let values_path = join(&index(&params_path, i), "values");
                param.values = param
                    .values
                    .iter()
                    .enumerate()
                    .map(|(j, v)| rw.rewrite_param(&index(&values_path, j), v))
                    .collect::<Result<_, _>>()?;
            }
            params.push(param);
        }

        Ok(Self {
            params,
            ..self.clone()
        })
    }
}

impl AddressFields for TronSpecificData {
    fn rewrite_addresses(&self, rw: &TxRewriter, path: &str) -> Result<Self, RewriteError> {
        Ok(Self {
            tx: self.tx.rewrite_addresses(rw, &join(path, "tx"))?,
            internal_data: self
                .internal_data
                .rewrite_addresses(rw, &join(path, "internalData"))?,
            receipt: self.receipt.rewrite_addresses(rw, &join(path, "receipt"))?,
            parsed_data: self
                .parsed_data
                .rewrite_addresses(rw, &join(path, "parsedData"))?,
        })
    }
}

impl AddressFields for Tx {
    fn rewrite_addresses(&self, rw: &TxRewriter, path: &str) -> Result<Self, RewriteError> {
        let rewrite_list = |field: &str, list: &[String]| -> Result<Vec<String>, RewriteError> {
            let field = join(path, field);
            list.iter()
                .enumerate()
                .map(|(i, a)| rw.rewrite_address(&index(&field, i), a))
                .collect()
        };

        Ok(Self {
            txid: self.txid.clone(),
            blocktime: self.blocktime,
            time: self.time,
            confirmations: self.confirmations,
            vin_addresses: rewrite_list("vinAddresses", &self.vin_addresses)?,
            vout_addresses: rewrite_list("voutAddresses", &self.vout_addresses)?,
            value: self.value,
            coin_specific_data: self
                .coin_specific_data
                .rewrite_addresses(rw, &join(path, "coinSpecificData"))?,
        })
    }
}
