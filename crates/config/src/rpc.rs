// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// Tron node JSON-RPC endpoint
    ///
    /// Env: TRON_RPC_URL
    /// Valid schemes: http://, https://, ws://, wss://
    /// Default: http://127.0.0.1:8545
    pub url: String,

    /// Upper bound for a single RPC round trip
    ///
    /// Env: TRON_RPC_TIMEOUT_SECS
    /// Default: 25
    pub timeout: Duration,
}

pub(crate) fn default_url() -> String {
    "http://127.0.0.1:8545".to_string()
}

pub(crate) fn default_timeout_secs() -> u64 {
    25
}

impl RpcConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::ValidateError(
                "RPC URL cannot be empty".to_string(),
            ));
        }

        let parsed = url::Url::parse(&self.url).map_err(|e| {
            ConfigError::ValidateError(format!("Invalid URL '{}': {}", self.url, e))
        })?;

        match parsed.scheme() {
            "http" | "https" | "ws" | "wss" => {}
            scheme => {
                return Err(ConfigError::ValidateError(format!(
                    "Invalid URL scheme '{}'. Must be http://, https://, ws://, or wss://",
                    scheme
                )));
            }
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::ValidateError(
                "RPC timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout: Duration::from_secs(default_timeout_secs()),
        }
    }
}
