// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Token standard of a transfer.
///
/// The taxonomy is shared with the EVM ledger family and is never relabeled
/// when addresses are rewritten; display names come from the parser's
/// configured `TokenTypeNames`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenStandard {
    Fungible,
    NonFungible,
    Multi,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiTokenValue {
    pub id: U256,
    pub value: U256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    #[serde(rename = "type")]
    pub standard: TokenStandard,
    pub contract: String,
    pub from: String,
    pub to: String,
    /// Amount for fungible transfers, token id for non-fungible ones.
    #[serde(default)]
    pub value: U256,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub multi_token_values: Vec<MultiTokenValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_transfer_json_shape() {
        let transfer = TokenTransfer {
            standard: TokenStandard::NonFungible,
            contract: "TAyrbZCme4jVBnHnALvoKbE6ewLd2VGD77".to_string(),
            from: "TEkC6sH3rPjwXzXm58p9dRVVMHiz2wTcub".to_string(),
            to: "TB9YmmXyQuhZ4dvG4T2EAzeksVme6RSvWA".to_string(),
            value: U256::from(1663),
            multi_token_values: vec![],
        };

        assert_eq!(
            serde_json::to_value(&transfer).unwrap(),
            json!({
                "type": "nonFungible",
                "contract": "TAyrbZCme4jVBnHnALvoKbE6ewLd2VGD77",
                "from": "TEkC6sH3rPjwXzXm58p9dRVVMHiz2wTcub",
                "to": "TB9YmmXyQuhZ4dvG4T2EAzeksVme6RSvWA",
                "value": "0x67f"
            })
        );
    }
}
