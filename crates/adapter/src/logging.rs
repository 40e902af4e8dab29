// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Result;
use config::LogConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging from the log configuration.
///
/// * `level` - Log level or filter directive (trace, debug, info, warn, error)
/// * `json` - If true, output logs in JSON format
/// * `strip_ansi` - If true, disable ANSI color codes in logs
///
/// Fails if a global subscriber is already installed.
///
/// # Examples
/// ```no_run
/// let config = config::LogConfig::default();
/// tron_rpc_adapter::logging::init(&config)?; // Plain console output
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log level '{}': {}. Falling back to 'info'",
            config.level, e
        );
        EnvFilter::new("info")
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi);

        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}
