use anyhow::{Context, Result};

use hcpaudit_domain::AuditReport;

pub(super) fn render_json(report: &AuditReport) -> Result<String> {
    let mut out = serde_json::to_string_pretty(report).context("failed to marshal to JSON")?;
    out.push('\n');
    Ok(out)
}

pub(super) fn render_yaml(report: &AuditReport) -> Result<String> {
    serde_yaml::to_string(report).context("failed to marshal to YAML")
}
