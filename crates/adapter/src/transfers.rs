// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Token transfer extraction from receipt logs.
//!
//! Tron's TRC-20/721/1155 contracts emit the same events as their ERC
//! counterparts, so transfers are recognized by the Ethereum event topics.
//! Addresses produced here are canonical `0x` hex; the parser converts them
//! to display form afterwards.

use crate::types::{MultiTokenValue, RpcLog, TokenStandard, TokenTransfer};
use crate::utils::{hex_with_prefix, strip_hex_prefix};
use primitive_types::U256;

/// `Transfer(address,address,uint256)`, shared by fungible and non-fungible tokens.
pub const TRANSFER_EVENT_TOPIC: &str =
    "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";

/// `TransferSingle(address,address,address,uint256,uint256)`
pub const TRANSFER_SINGLE_EVENT_TOPIC: &str =
    "0xc3d58168c5ae7397731d063d5bbf3d657854427343f4c083240f7aacaa2d0f62";

/// `TransferBatch(address,address,address,uint256[],uint256[])`
pub const TRANSFER_BATCH_EVENT_TOPIC: &str =
    "0x4a39dc06d4c0dbc64b70af90fd698a233a518aa5d07e595d983b8c0526c8f7fb";

const WORD_LEN: usize = 32;

/// Extract every recognizable token transfer from `logs`, in log order.
pub fn token_transfers_from_logs(logs: &[RpcLog]) -> Vec<TokenTransfer> {
    logs.iter()
        .filter_map(|log| {
            let transfer = transfer_from_log(log);
            if transfer.is_none() && is_transfer_event(log) {
                tracing::debug!(
                    contract = %log.address,
                    topics = log.topics.len(),
                    "Skipping malformed token transfer log"
                );
            }
            transfer
        })
        .collect()
}

fn is_transfer_event(log: &RpcLog) -> bool {
    log.topics.first().is_some_and(|topic| {
        let topic = topic.to_ascii_lowercase();
        topic == TRANSFER_EVENT_TOPIC
            || topic == TRANSFER_SINGLE_EVENT_TOPIC
            || topic == TRANSFER_BATCH_EVENT_TOPIC
    })
}

fn transfer_from_log(log: &RpcLog) -> Option<TokenTransfer> {
    let topic0 = log.topics.first()?.to_ascii_lowercase();
    match topic0.as_str() {
        TRANSFER_EVENT_TOPIC => match log.topics.len() {
            3 => fungible_transfer(log),
            4 => non_fungible_transfer(log),
            _ => None,
        },
        TRANSFER_SINGLE_EVENT_TOPIC if log.topics.len() == 4 => multi_single_transfer(log),
        TRANSFER_BATCH_EVENT_TOPIC if log.topics.len() == 4 => multi_batch_transfer(log),
        _ => None,
    }
}

fn fungible_transfer(log: &RpcLog) -> Option<TokenTransfer> {
    let data = decode_hex(&log.data)?;
    if data.len() != WORD_LEN {
        return None;
    }
    Some(TokenTransfer {
        standard: TokenStandard::Fungible,
        contract: log.address.clone(),
        from: address_from_topic(&log.topics[1])?,
        to: address_from_topic(&log.topics[2])?,
        value: U256::from_big_endian(&data),
        multi_token_values: Vec::new(),
    })
}

fn non_fungible_transfer(log: &RpcLog) -> Option<TokenTransfer> {
    Some(TokenTransfer {
        standard: TokenStandard::NonFungible,
        contract: log.address.clone(),
        from: address_from_topic(&log.topics[1])?,
        to: address_from_topic(&log.topics[2])?,
        value: word_from_topic(&log.topics[3])?,
        multi_token_values: Vec::new(),
    })
}

fn multi_single_transfer(log: &RpcLog) -> Option<TokenTransfer> {
    let data = decode_hex(&log.data)?;
    if data.len() != 2 * WORD_LEN {
        return None;
    }
    Some(TokenTransfer {
        standard: TokenStandard::Multi,
        contract: log.address.clone(),
        from: address_from_topic(&log.topics[2])?,
        to: address_from_topic(&log.topics[3])?,
        value: U256::zero(),
        multi_token_values: vec![MultiTokenValue {
            id: word_at(&data, 0)?,
            value: word_at(&data, 1)?,
        }],
    })
}

fn multi_batch_transfer(log: &RpcLog) -> Option<TokenTransfer> {
    let data = decode_hex(&log.data)?;
    let ids = dynamic_array(&data, 0)?;
    let values = dynamic_array(&data, 1)?;
    if ids.len() != values.len() {
        return None;
    }
    Some(TokenTransfer {
        standard: TokenStandard::Multi,
        contract: log.address.clone(),
        from: address_from_topic(&log.topics[2])?,
        to: address_from_topic(&log.topics[3])?,
        value: U256::zero(),
        multi_token_values: ids
            .into_iter()
            .zip(values)
            .map(|(id, value)| MultiTokenValue { id, value })
            .collect(),
    })
}

fn decode_hex(s: &str) -> Option<Vec<u8>> {
    hex::decode(strip_hex_prefix(s)).ok()
}

/// Low 20 bytes of a 32-byte topic, as canonical hex.
fn address_from_topic(topic: &str) -> Option<String> {
    let bytes = decode_hex(topic)?;
    if bytes.len() != WORD_LEN {
        return None;
    }
    Some(hex_with_prefix(&bytes[WORD_LEN - 20..]))
}

fn word_from_topic(topic: &str) -> Option<U256> {
    let bytes = decode_hex(topic)?;
    if bytes.len() != WORD_LEN {
        return None;
    }
    Some(U256::from_big_endian(&bytes))
}

fn word_at(data: &[u8], index: usize) -> Option<U256> {
    let start = index.checked_mul(WORD_LEN)?;
    let end = start.checked_add(WORD_LEN)?;
    data.get(start..end).map(U256::from_big_endian)
}

fn word_as_usize(data: &[u8], index: usize) -> Option<usize> {
    let word = word_at(data, index)?;
    if word > U256::from(usize::MAX) {
        return None;
    }
    Some(word.as_usize())
}

/// ABI-decode the `uint256[]` whose head slot is `slot`.
fn dynamic_array(data: &[u8], slot: usize) -> Option<Vec<U256>> {
    let offset = word_as_usize(data, slot)?;
    if offset % WORD_LEN != 0 {
        return None;
    }
    let len_index = offset / WORD_LEN;
    let len = word_as_usize(data, len_index)?;
    (0..len)
        .map(|i| word_at(data, len_index.checked_add(1)?.checked_add(i)?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(address: &str, topics: &[&str], data: &str) -> RpcLog {
        RpcLog {
            address: address.to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            data: data.to_string(),
        }
    }

    fn word(n: u64) -> String {
        format!("{:064x}", n)
    }

    #[test]
    fn test_fungible_transfer() {
        let logs = vec![log(
            "0xa614f803b6fd780986a42c78ec9c7f77e6ded13c",
            &[
                TRANSFER_EVENT_TOPIC,
                "0x000000000000000000000000c88bb5a4636463d7eb2af02ccabb8b790fb200a9",
                "0x0000000000000000000000008da98894069283ddf2379e0b27bfea76fc9b7399",
            ],
            "0x0000000000000000000000000000000000000000000000000000000022eda680",
        )];

        let transfers = token_transfers_from_logs(&logs);
        assert_eq!(transfers.len(), 1);
        let t = &transfers[0];
        assert_eq!(t.standard, TokenStandard::Fungible);
        assert_eq!(t.contract, "0xa614f803b6fd780986a42c78ec9c7f77e6ded13c");
        assert_eq!(t.from, "0xc88bb5a4636463d7eb2af02ccabb8b790fb200a9");
        assert_eq!(t.to, "0x8da98894069283ddf2379e0b27bfea76fc9b7399");
        assert_eq!(t.value, U256::from(586_000_000u64));
    }

    #[test]
    fn test_non_fungible_transfer() {
        let logs = vec![log(
            "0x0b17822171ee88e98d4a61029f97c9f8edc15fcd",
            &[
                TRANSFER_EVENT_TOPIC,
                "0x00000000000000000000000034627862d50389c8d7a1ab5ef074b84ab4ddb9e9",
                "0x0000000000000000000000000cecca0e53477d2b6c562ab68c3452fc99f7817e",
                "0x000000000000000000000000000000000000000000000000000000000000067f",
            ],
            "0x",
        )];

        let transfers = token_transfers_from_logs(&logs);
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].standard, TokenStandard::NonFungible);
        assert_eq!(transfers[0].value, U256::from(1663));
    }

    #[test]
    fn test_multi_single_transfer() {
        let logs = vec![log(
            "0xec3dc0f7b89a6463eb05527fdaf3634db481fe61",
            &[
                TRANSFER_SINGLE_EVENT_TOPIC,
                "0x00000000000000000000000046f67edfe3080971e39c7e099d50ec5d86f2cb06",
                "0x00000000000000000000000046f67edfe3080971e39c7e099d50ec5d86f2cb06",
                "0x0000000000000000000000008227ecc55945f98c3dd10a8f461a4d7db126fdba",
            ],
            "0x000000000000000000000000000000000000000019efcdb92505463d0bebd4000000000000000000000000000000000000000000000000000000000000000001",
        )];

        let transfers = token_transfers_from_logs(&logs);
        assert_eq!(transfers.len(), 1);
        let t = &transfers[0];
        assert_eq!(t.standard, TokenStandard::Multi);
        assert_eq!(t.from, "0x46f67edfe3080971e39c7e099d50ec5d86f2cb06");
        assert_eq!(t.to, "0x8227ecc55945f98c3dd10a8f461a4d7db126fdba");
        assert_eq!(
            t.multi_token_values,
            vec![MultiTokenValue {
                id: U256::from_dec_str("8027030016865780586704000000").unwrap(),
                value: U256::one(),
            }]
        );
    }

    #[test]
    fn test_multi_batch_transfer() {
        // ids = [1, 2], values = [10, 20]
        let data = format!(
            "0x{}{}{}{}{}{}{}{}",
            word(0x40),
            word(0xa0),
            word(2),
            word(1),
            word(2),
            word(2),
            word(10),
            word(20)
        );
        let logs = vec![log(
            "0xec3dc0f7b89a6463eb05527fdaf3634db481fe61",
            &[
                TRANSFER_BATCH_EVENT_TOPIC,
                "0x00000000000000000000000046f67edfe3080971e39c7e099d50ec5d86f2cb06",
                "0x00000000000000000000000046f67edfe3080971e39c7e099d50ec5d86f2cb06",
                "0x0000000000000000000000008227ecc55945f98c3dd10a8f461a4d7db126fdba",
            ],
            &data,
        )];

        let transfers = token_transfers_from_logs(&logs);
        assert_eq!(transfers.len(), 1);
        assert_eq!(
            transfers[0].multi_token_values,
            vec![
                MultiTokenValue { id: U256::from(1), value: U256::from(10) },
                MultiTokenValue { id: U256::from(2), value: U256::from(20) },
            ]
        );
    }

    #[test]
    fn test_unrelated_and_malformed_logs_are_skipped() {
        let logs = vec![
            // Approval event
            log(
                "0xa614f803b6fd780986a42c78ec9c7f77e6ded13c",
                &[
                    "0x8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925",
                    "0x000000000000000000000000c88bb5a4636463d7eb2af02ccabb8b790fb200a9",
                    "0x0000000000000000000000008da98894069283ddf2379e0b27bfea76fc9b7399",
                ],
                "0x0000000000000000000000000000000000000000000000000000000022eda680",
            ),
            // Transfer with truncated data
            log(
                "0xa614f803b6fd780986a42c78ec9c7f77e6ded13c",
                &[
                    TRANSFER_EVENT_TOPIC,
                    "0x000000000000000000000000c88bb5a4636463d7eb2af02ccabb8b790fb200a9",
                    "0x0000000000000000000000008da98894069283ddf2379e0b27bfea76fc9b7399",
                ],
                "0x22eda680",
            ),
            // Batch with an out-of-range offset
            log(
                "0xec3dc0f7b89a6463eb05527fdaf3634db481fe61",
                &[
                    TRANSFER_BATCH_EVENT_TOPIC,
                    "0x00000000000000000000000046f67edfe3080971e39c7e099d50ec5d86f2cb06",
                    "0x00000000000000000000000046f67edfe3080971e39c7e099d50ec5d86f2cb06",
                    "0x0000000000000000000000008227ecc55945f98c3dd10a8f461a4d7db126fdba",
                ],
                &format!("0x{}{}", word(0x4000), word(0x40)),
            ),
            log("0xa614f803b6fd780986a42c78ec9c7f77e6ded13c", &[], "0x"),
        ];

        assert!(token_transfers_from_logs(&logs).is_empty());
    }
}
