use chrono::SecondsFormat;
use tabled::builder::Builder;
use tabled::settings::Style;

use hcpaudit_domain::{AuditReport, TenantRecord};

use super::{COLUMN_COUNT, RenderOptions};

const HEADER: [&str; COLUMN_COUNT] = [
    "CLUSTER ID",
    "CLUSTER NAME",
    "NAMESPACE",
    "AUTOSCALING",
    "HAS OVERRIDE",
    "CURRENT SIZE",
    "RECOMMENDED SIZE",
];

const ENABLED: &str = "✅";
const DISABLED: &str = "❌";

pub(super) fn render(report: &AuditReport, options: RenderOptions) -> String {
    let mut out = format!(
        "\n=== Management Cluster: {} ===\nTimestamp: {}\nTotal Hosted Clusters: {}\n\n",
        report.management_cluster(),
        report.timestamp().to_rfc3339_opts(SecondsFormat::Secs, true),
        report.total_clusters(),
    );

    if report.is_empty() {
        out.push_str("No hosted clusters found\n");
        return out;
    }

    let mut rows: Vec<&TenantRecord> = report.clusters().iter().collect();
    rows.sort_by(|a, b| a.cluster_name.cmp(&b.cluster_name));

    let mut builder = Builder::default();
    if !options.no_headers {
        builder.push_record(HEADER);
    }
    for record in rows {
        builder.push_record(row(record));
    }

    let mut table = builder.build();
    table.with(Style::blank());
    out.push_str(&table.to_string());
    out.push_str("\n\n");
    out
}

fn row(record: &TenantRecord) -> [String; COLUMN_COUNT] {
    [
        record.cluster_id.clone(),
        record.cluster_name.clone(),
        record.namespace.clone(),
        glyph(record.autoscaling_enabled).to_string(),
        glyph(record.has_override_annotation).to_string(),
        record.current_size.clone(),
        record.recommended_size.clone(),
    ]
}

fn glyph(enabled: bool) -> &'static str {
    if enabled { ENABLED } else { DISABLED }
}
