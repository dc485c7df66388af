// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log subscriber setup. Logs go to stderr so stdout stays parseable.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "ABAAD_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Builds the filter: `ABAAD_LOG`, then the configured level, then `warn`.
pub fn filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or(DEFAULT_LEVEL)))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(configured: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(configured))
        .with_writer(std::io::stderr)
        .try_init();
}
