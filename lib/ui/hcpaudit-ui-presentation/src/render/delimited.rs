use anyhow::{Context, Result};

use hcpaudit_domain::{AuditReport, TenantRecord};

use super::{COLUMN_COUNT, RenderOptions};

const HEADER: [&str; COLUMN_COUNT] = [
    "cluster_id",
    "cluster_name",
    "namespace",
    "autoscaling_enabled",
    "has_override",
    "current_size",
    "recommended_size",
];

pub(super) fn render(report: &AuditReport, options: RenderOptions) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    if !options.no_headers {
        writer
            .write_record(HEADER)
            .context("failed to write CSV header")?;
    }
    for record in report.clusters() {
        writer
            .write_record(row(record))
            .context("failed to write CSV row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("failed to flush CSV output: {}", err.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

fn row(record: &TenantRecord) -> [&str; COLUMN_COUNT] {
    [
        &record.cluster_id,
        &record.cluster_name,
        &record.namespace,
        bool_str(record.autoscaling_enabled),
        bool_str(record.has_override_annotation),
        &record.current_size,
        &record.recommended_size,
    ]
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
