// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;

/// Display names for the three token standards.
///
/// Passed into each parser instead of living in a process-wide table, so
/// several adapters in one process can label tokens independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTypeNames {
    /// Env: TRON_TOKEN_FUNGIBLE_NAME (default: TRC20)
    pub fungible: String,
    /// Env: TRON_TOKEN_NON_FUNGIBLE_NAME (default: TRC721)
    pub non_fungible: String,
    /// Env: TRON_TOKEN_MULTI_NAME (default: TRC1155)
    pub multi: String,
}

impl Default for TokenTypeNames {
    fn default() -> Self {
        Self {
            fungible: "TRC20".to_string(),
            non_fungible: "TRC721".to_string(),
            multi: "TRC1155".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Produce `<name>.tron` aliases for named addresses
    ///
    /// Env: TRON_ADDRESS_ALIASES
    /// Default: false
    pub address_aliases: bool,

    pub token_type_names: TokenTypeNames,
}

impl ParserConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let names = &self.token_type_names;
        for (kind, name) in [
            ("fungible", &names.fungible),
            ("non-fungible", &names.non_fungible),
            ("multi", &names.multi),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidateError(format!(
                    "Token type name for {} tokens cannot be empty",
                    kind
                )));
            }
        }
        Ok(())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            address_aliases: false,
            token_type_names: TokenTypeNames::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_token_names() {
        let names = TokenTypeNames::default();
        assert_eq!(names.fungible, "TRC20");
        assert_eq!(names.non_fungible, "TRC721");
        assert_eq!(names.multi, "TRC1155");
    }

    #[test]
    fn test_validate_empty_token_name() {
        let config = ParserConfig {
            token_type_names: TokenTypeNames {
                multi: "  ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_default_parser_config() {
        assert!(ParserConfig::default().validate().is_ok());
    }
}
