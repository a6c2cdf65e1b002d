use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use hcpaudit_domain::{AuditError, AuditReport, ClusterKey, ReadinessBucket, TenantRecord};
use hcpaudit_ports::{ClusterApiPort, FleetDirectoryPort};

use crate::classifier::classify;
use crate::enumerator::{NamespaceEnumerator, RetryPolicy};
use crate::filter::apply_filter;
use crate::resolver::resolve_tenant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequest {
    pub cluster_key: ClusterKey,
    pub show_only: Option<ReadinessBucket>,
}

impl AuditRequest {
    pub fn new(cluster_key: ClusterKey) -> Self {
        Self {
            cluster_key,
            show_only: None,
        }
    }

    pub fn show_only(mut self, bucket: Option<ReadinessBucket>) -> Self {
        self.show_only = bucket;
        self
    }
}

/// A tenant namespace left out of the report, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedNamespace {
    pub namespace: String,
    pub reason: AuditError,
}

#[derive(Debug, Clone)]
pub struct AuditOutcome {
    pub report: AuditReport,
    pub skipped: Vec<SkippedNamespace>,
}

/// Runs one audit of one management cluster, start to finish.
pub struct Auditor {
    directory: Arc<dyn FleetDirectoryPort>,
    enumerator: NamespaceEnumerator,
}

impl Auditor {
    pub fn new(directory: Arc<dyn FleetDirectoryPort>) -> Self {
        Self {
            directory,
            enumerator: NamespaceEnumerator::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.enumerator = NamespaceEnumerator::new(retry);
        self
    }

    pub async fn run(&self, request: &AuditRequest) -> Result<AuditOutcome> {
        let timestamp = Utc::now();

        let cluster = self
            .directory
            .resolve_cluster(&request.cluster_key)
            .await
            .context("failed to get cluster")?;

        let is_management = self
            .directory
            .is_management_cluster(&cluster)
            .await
            .context("failed to verify management cluster")?;
        if !is_management {
            return Err(AuditError::NotManagementCluster(cluster.id).into());
        }

        let api = self
            .directory
            .connect(&cluster)
            .await
            .context("failed to create management cluster client")?;

        let namespaces = self.enumerator.tenant_namespaces(api.as_ref()).await?;
        info!(
            cluster = %cluster.name,
            namespaces = namespaces.len(),
            "auditing hosted cluster namespaces"
        );

        let mut records = Vec::with_capacity(namespaces.len());
        let mut skipped = Vec::new();
        for namespace in namespaces {
            match audit_namespace(api.as_ref(), &namespace).await {
                Ok(record) => records.push(record),
                Err(reason) if reason.is_tenant_scoped() => {
                    warn!("failed to audit namespace {namespace}: {reason}");
                    skipped.push(SkippedNamespace { namespace, reason });
                }
                Err(err) => return Err(err.into()),
            }
        }

        let report = AuditReport::new(timestamp, cluster.name, records);
        let report = match request.show_only {
            Some(bucket) => apply_filter(&report, bucket),
            None => report,
        };

        Ok(AuditOutcome { report, skipped })
    }
}

async fn audit_namespace(
    api: &dyn ClusterApiPort,
    namespace: &str,
) -> Result<TenantRecord, AuditError> {
    let tenant = resolve_tenant(api, namespace).await?;
    let record = classify(&tenant);
    debug!(
        namespace,
        cluster = %record.cluster_name,
        autoscaling = record.autoscaling_enabled,
        has_override = record.has_override_annotation,
        "classified hosted cluster"
    );
    Ok(record)
}
