// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Formatting utilities for hex encoding and amount conversion.

use primitive_types::U256;
use serde::{Deserialize, Deserializer};

/// Format bytes as hex string with "0x" prefix
pub fn hex_with_prefix(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

/// Strip an optional "0x" prefix
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}

/// Parse a quantity from a JSON value.
///
/// Handles both formats seen from node RPC implementations:
/// - Hex string: `"0x1a2b3c"`
/// - Numeric: `12345`
pub fn parse_quantity(value: &serde_json::Value) -> Result<u64, String> {
    if let Some(hex_str) = value.as_str() {
        let hex_str = strip_hex_prefix(hex_str);
        return u64::from_str_radix(hex_str, 16)
            .map_err(|e| format!("invalid hex '{}': {}", hex_str, e));
    }

    if let Some(num) = value.as_u64() {
        return Ok(num);
    }

    Err(format!("expected hex string or number, got: {}", value))
}

/// Parse a `0x`-prefixed big-endian hex quantity into a `U256`.
pub fn parse_hex_u256(s: &str) -> Result<U256, String> {
    let hex_str = s
        .strip_prefix("0x")
        .ok_or_else(|| format!("missing 0x prefix in '{}'", s))?;
    if hex_str.is_empty() {
        return Err(format!("empty hex quantity '{}'", s));
    }
    U256::from_str_radix(hex_str, 16).map_err(|e| format!("invalid hex '{}': {:?}", s, e))
}

/// Render a smallest-unit amount as a decimal string with `decimals` places.
///
/// Trailing fractional zeros are trimmed: `1500000` with 6 decimals is `"1.5"`.
pub fn format_amount(amount: U256, decimals: u32) -> String {
    let digits = amount.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals - digits.len() + 1), digits)
    } else {
        digits
    };

    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, frac_part)
    }
}

/// Deserialize `null` (or a missing field, with `#[serde(default)]`) as an empty string.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serde adapter for `u64` fields carried as hex quantities.
pub mod quantity {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{:x}", value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        super::parse_quantity(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hex_with_prefix() {
        assert_eq!(hex_with_prefix(&[0xde, 0xad]), "0xdead");
        assert_eq!(hex_with_prefix(&[]), "0x");
    }

    #[test]
    fn test_parse_quantity_hex_string() {
        assert_eq!(parse_quantity(&json!("0x64")).unwrap(), 100);
        assert_eq!(parse_quantity(&json!("64")).unwrap(), 100);
        assert_eq!(parse_quantity(&json!("0x0")).unwrap(), 0);
        assert_eq!(parse_quantity(&json!("0xf4240")).unwrap(), 1_000_000);
    }

    #[test]
    fn test_parse_quantity_numeric() {
        assert_eq!(parse_quantity(&json!(100)).unwrap(), 100);
        assert_eq!(parse_quantity(&json!(0)).unwrap(), 0);
    }

    #[test]
    fn test_parse_quantity_invalid() {
        assert!(parse_quantity(&json!(null)).is_err());
        assert!(parse_quantity(&json!([])).is_err());
        assert!(parse_quantity(&json!("not_hex")).is_err());
    }

    #[test]
    fn test_parse_hex_u256() {
        assert_eq!(parse_hex_u256("0x101").unwrap(), U256::from(257));
        assert_eq!(parse_hex_u256("0x0").unwrap(), U256::zero());
        assert!(parse_hex_u256("0x").is_err());
        assert!(parse_hex_u256("101").is_err());
        assert!(parse_hex_u256("0xzz").is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(U256::from(1_500_000u64), 6), "1.5");
        assert_eq!(format_amount(U256::from(1_000_000u64), 6), "1");
        assert_eq!(format_amount(U256::from(257u64), 6), "0.000257");
        assert_eq!(format_amount(U256::zero(), 6), "0");
        assert_eq!(format_amount(U256::from(123_450_096u64), 6), "123.450096");
        assert_eq!(format_amount(U256::from(42u64), 0), "42");
    }

    #[test]
    fn test_quantity_serde() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "quantity")]
            number: u64,
        }

        let w: Wrapper = serde_json::from_value(json!({ "number": "0x186a0" })).unwrap();
        assert_eq!(w.number, 100_000);
        assert_eq!(
            serde_json::to_value(&w).unwrap(),
            json!({ "number": "0x186a0" })
        );
    }
}
