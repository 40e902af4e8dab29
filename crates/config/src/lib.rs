// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

mod error;
mod log;
mod parser;
mod rpc;

pub use error::ConfigError;
pub use log::LogConfig;
pub use parser::{ParserConfig, TokenTypeNames};
pub use rpc::RpcConfig;

use serde::Deserialize;
use std::time::Duration;

/// Environment variable prefix for every adapter setting.
pub const ENV_PREFIX: &str = "TRON_";

#[derive(Debug, Clone, Default)]
pub struct AdapterConfig {
    pub rpc: RpcConfig,
    pub log: LogConfig,
    pub parser: ParserConfig,
}

/// Flat view of the environment, as `envy` sees it.
///
/// Each field maps to `TRON_<FIELD>` (e.g. `rpc_url` is read from `TRON_RPC_URL`).
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default = "rpc::default_url")]
    rpc_url: String,

    #[serde(default = "rpc::default_timeout_secs")]
    rpc_timeout_secs: u64,

    #[serde(default = "log::default_level")]
    log_level: String,

    #[serde(default)]
    log_json: bool,

    #[serde(default)]
    log_strip_ansi: bool,

    #[serde(default)]
    address_aliases: bool,

    token_fungible_name: Option<String>,
    token_non_fungible_name: Option<String>,
    token_multi_name: Option<String>,
}

impl From<EnvConfig> for AdapterConfig {
    fn from(env: EnvConfig) -> Self {
        let defaults = TokenTypeNames::default();
        Self {
            rpc: RpcConfig {
                url: env.rpc_url,
                timeout: Duration::from_secs(env.rpc_timeout_secs),
            },
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
            },
            parser: ParserConfig {
                address_aliases: env.address_aliases,
                token_type_names: TokenTypeNames {
                    fungible: env.token_fungible_name.unwrap_or(defaults.fungible),
                    non_fungible: env.token_non_fungible_name.unwrap_or(defaults.non_fungible),
                    multi: env.token_multi_name.unwrap_or(defaults.multi),
                },
            },
        }
    }
}

impl AdapterConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed(ENV_PREFIX).from_env::<EnvConfig>()?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit set of `TRON_`-prefixed key/value pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvConfig>(vars)?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.rpc.validate()?;
        self.log.validate()?;
        self.parser.validate()?;
        Ok(())
    }
}
