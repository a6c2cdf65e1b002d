use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ANNOTATION_RESOURCE_BASED_AUTOSCALING: &str =
    "hypershift.openshift.io/resource-based-cp-auto-scaling";
pub const ANNOTATION_CLUSTER_SIZE_OVERRIDE: &str = "hypershift.openshift.io/cluster-size-override";
pub const ANNOTATION_RECOMMENDED_CLUSTER_SIZE: &str =
    "hypershift.openshift.io/recommended-cluster-size";

pub const LABEL_HOSTED_CLUSTER_SIZE: &str = "hypershift.openshift.io/hosted-cluster-size";
pub const LABEL_CLUSTER_ID: &str = "api.openshift.com/id";

/// Stand-in for a size label or annotation that is missing or empty.
pub const SIZE_NOT_AVAILABLE: &str = "N/A";

/// The metadata of one hosted cluster resource, as read from its namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantResource {
    pub name: String,
    pub namespace: String,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
}

impl TenantResource {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }
}

/// Migration readiness of one hosted cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRecord {
    pub cluster_id: String,
    pub cluster_name: String,
    pub namespace: String,
    pub autoscaling_enabled: bool,
    #[serde(rename = "has_override")]
    pub has_override_annotation: bool,
    pub current_size: String,
    pub recommended_size: String,
}

impl TenantRecord {
    pub fn needs_override_removal(&self) -> bool {
        self.has_override_annotation
    }

    pub fn is_ready_for_migration(&self) -> bool {
        !self.autoscaling_enabled
    }

    /// Autoscaling is on, an override is pinned, and the pinned size already
    /// matches a real recommendation.
    pub fn is_safe_to_remove_override(&self) -> bool {
        self.autoscaling_enabled
            && self.has_override_annotation
            && !self.recommended_size.is_empty()
            && self.recommended_size != SIZE_NOT_AVAILABLE
            && self.current_size == self.recommended_size
    }
}
