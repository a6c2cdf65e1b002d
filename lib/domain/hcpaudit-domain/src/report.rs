use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::tenant::TenantRecord;

/// Classification of every audited hosted cluster on one management cluster.
///
/// The cluster count is derived on construction and the records are only
/// reachable by shared reference, so `total_clusters` always matches.
/// Filtering builds a new report through [`AuditReport::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    timestamp: DateTime<Utc>,
    management_cluster: String,
    total_clusters: usize,
    clusters: Vec<TenantRecord>,
}

impl AuditReport {
    pub fn new(
        timestamp: DateTime<Utc>,
        management_cluster: impl Into<String>,
        clusters: Vec<TenantRecord>,
    ) -> Self {
        Self {
            timestamp,
            management_cluster: management_cluster.into(),
            total_clusters: clusters.len(),
            clusters,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn management_cluster(&self) -> &str {
        &self.management_cluster
    }

    pub fn total_clusters(&self) -> usize {
        self.total_clusters
    }

    pub fn clusters(&self) -> &[TenantRecord] {
        &self.clusters
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}
