//! Port traits for the collaborators an audit talks to.

mod memory;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use hcpaudit_domain::{ClusterKey, ManagementCluster, TenantResource};

pub use memory::{InMemoryClusterApi, StaticFleetDirectory};

/// Read-only API access to one management cluster.
#[async_trait]
pub trait ClusterApiPort: Send + Sync {
    /// Names of every namespace on the cluster, unfiltered.
    async fn list_namespaces(&self) -> Result<Vec<String>>;

    /// Hosted cluster resources inside `namespace`.
    async fn list_tenant_resources(&self, namespace: &str) -> Result<Vec<TenantResource>>;

    /// Whether the cluster serves the hosted cluster resource type at all.
    async fn has_tenant_resource_type(&self) -> Result<bool>;
}

/// Looks up management clusters and hands out API clients scoped to them.
#[async_trait]
pub trait FleetDirectoryPort: Send + Sync {
    async fn resolve_cluster(&self, key: &ClusterKey) -> Result<ManagementCluster>;

    async fn is_management_cluster(&self, cluster: &ManagementCluster) -> Result<bool>;

    async fn connect(&self, cluster: &ManagementCluster) -> Result<Arc<dyn ClusterApiPort>>;
}

#[cfg(test)]
mod memory_test;
