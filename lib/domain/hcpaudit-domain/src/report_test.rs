use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use crate::{AuditReport, TenantRecord};

fn record(name: &str) -> TenantRecord {
    TenantRecord {
        cluster_id: format!("id-{name}"),
        cluster_name: name.into(),
        namespace: format!("ocm-staging-{name}"),
        autoscaling_enabled: false,
        has_override_annotation: false,
        current_size: "N/A".into(),
        recommended_size: "N/A".into(),
    }
}

#[test]
fn total_tracks_cluster_count() {
    let timestamp = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let report = AuditReport::new(timestamp, "hs-mc-1", vec![record("b"), record("a")]);
    assert_eq!(report.total_clusters(), 2);
    assert_eq!(report.total_clusters(), report.clusters().len());

    let empty = AuditReport::new(timestamp, "hs-mc-1", Vec::new());
    assert_eq!(empty.total_clusters(), 0);
    assert!(empty.is_empty());
}

#[test]
fn serializes_with_snake_case_fields() {
    let timestamp = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let report = AuditReport::new(timestamp, "hs-mc-1", vec![record("a")]);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["timestamp"], "2025-03-01T12:00:00Z");
    assert_eq!(value["management_cluster"], "hs-mc-1");
    assert_eq!(value["total_clusters"], 1);

    let cluster = &value["clusters"][0];
    let mut keys: Vec<&str> = cluster
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "autoscaling_enabled",
            "cluster_id",
            "cluster_name",
            "current_size",
            "has_override",
            "namespace",
            "recommended_size",
        ]
    );
}
