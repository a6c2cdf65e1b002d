//! Domain models and invariants.

pub mod bucket;
pub mod cluster;
pub mod config;
pub mod error;
pub mod report;
pub mod tenant;

pub use bucket::ReadinessBucket;
pub use cluster::{ClusterKey, ManagementCluster};
pub use config::AuditConfig;
pub use error::AuditError;
pub use report::AuditReport;
pub use tenant::{
    ANNOTATION_CLUSTER_SIZE_OVERRIDE, ANNOTATION_RECOMMENDED_CLUSTER_SIZE,
    ANNOTATION_RESOURCE_BASED_AUTOSCALING, LABEL_CLUSTER_ID, LABEL_HOSTED_CLUSTER_SIZE,
    SIZE_NOT_AVAILABLE, TenantRecord, TenantResource,
};

#[cfg(test)]
mod report_test;
