use kube::{CustomResource, ResourceExt};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use hcpaudit_domain::TenantResource;

pub const HOSTED_CLUSTER_CRD_NAME: &str = "hostedclusters.hypershift.openshift.io";

/// `HostedCluster` as the audit sees it: only metadata is read, so the spec
/// declares no fields and accepts any payload.
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "hypershift.openshift.io",
    version = "v1beta1",
    kind = "HostedCluster",
    plural = "hostedclusters"
)]
#[kube(namespaced, shortname = "hc")]
pub struct HostedClusterSpec {}

impl HostedCluster {
    /// Metadata view used by the classifier. `fallback_namespace` covers
    /// objects returned without a namespace in their metadata.
    pub fn to_tenant_resource(&self, fallback_namespace: &str) -> TenantResource {
        TenantResource {
            name: self.name_any(),
            namespace: self
                .namespace()
                .unwrap_or_else(|| fallback_namespace.to_string()),
            labels: self.labels().clone(),
            annotations: self.annotations().clone(),
        }
    }
}
