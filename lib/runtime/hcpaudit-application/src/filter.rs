use hcpaudit_domain::{AuditReport, ReadinessBucket};

/// Builds a new report holding only the records in `bucket`.
///
/// Timestamp, management cluster and record order carry over; the total is
/// recounted by [`AuditReport::new`].
pub fn apply_filter(report: &AuditReport, bucket: ReadinessBucket) -> AuditReport {
    let clusters = report
        .clusters()
        .iter()
        .filter(|record| bucket.contains(record))
        .cloned()
        .collect();
    AuditReport::new(report.timestamp(), report.management_cluster(), clusters)
}
