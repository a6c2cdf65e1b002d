use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use hcpaudit_domain::AuditConfig;

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Flag (or `HCPAUDIT_LOG`) first, then the config file, then `warn`.
pub fn resolve_filter(flag: Option<&str>, config: &AuditConfig) -> String {
    flag.or(config.log_filter.as_deref())
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_string()
}

/// Installs the global subscriber. Logs go to stderr; stdout carries the report.
pub fn init(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("invalid log filter '{filter}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
