use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use hcpaudit_domain::{ClusterKey, ManagementCluster, TenantResource};

use crate::{ClusterApiPort, FleetDirectoryPort};

/// Cluster API backed by fixed data, with scriptable listing failures.
#[derive(Debug, Clone)]
pub struct InMemoryClusterApi {
    namespaces: Vec<String>,
    tenants: BTreeMap<String, Vec<TenantResource>>,
    broken_namespaces: BTreeSet<String>,
    serves_tenant_type: bool,
    pending_failures: Arc<Mutex<u32>>,
    listing_attempts: Arc<AtomicU32>,
}

impl Default for InMemoryClusterApi {
    fn default() -> Self {
        Self {
            namespaces: Vec::new(),
            tenants: BTreeMap::new(),
            broken_namespaces: BTreeSet::new(),
            serves_tenant_type: true,
            pending_failures: Arc::new(Mutex::new(0)),
            listing_attempts: Arc::new(AtomicU32::new(0)),
        }
    }
}

impl InMemoryClusterApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace(mut self, name: impl Into<String>) -> Self {
        self.namespaces.push(name.into());
        self
    }

    /// Adds a tenant resource, creating its namespace if it is not listed yet.
    pub fn with_tenant(mut self, tenant: TenantResource) -> Self {
        if !self.namespaces.contains(&tenant.namespace) {
            self.namespaces.push(tenant.namespace.clone());
        }
        self.tenants
            .entry(tenant.namespace.clone())
            .or_default()
            .push(tenant);
        self
    }

    /// Makes tenant listing inside `namespace` fail.
    pub fn with_broken_namespace(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.namespaces.contains(&name) {
            self.namespaces.push(name.clone());
        }
        self.broken_namespaces.insert(name);
        self
    }

    pub fn without_tenant_resource_type(mut self) -> Self {
        self.serves_tenant_type = false;
        self
    }

    /// The next `count` namespace listings fail before listings succeed again.
    pub fn failing_namespace_listings(self, count: u32) -> Self {
        if let Ok(mut pending) = self.pending_failures.lock() {
            *pending = count;
        }
        self
    }

    pub fn namespace_listing_attempts(&self) -> u32 {
        self.listing_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClusterApiPort for InMemoryClusterApi {
    async fn list_namespaces(&self) -> Result<Vec<String>> {
        self.listing_attempts.fetch_add(1, Ordering::SeqCst);
        let mut pending = self
            .pending_failures
            .lock()
            .map_err(|_| anyhow!("failure script lock poisoned"))?;
        if *pending > 0 {
            *pending -= 1;
            bail!("connection refused");
        }
        Ok(self.namespaces.clone())
    }

    async fn list_tenant_resources(&self, namespace: &str) -> Result<Vec<TenantResource>> {
        if self.broken_namespaces.contains(namespace) {
            bail!("the server is currently unable to handle the request");
        }
        Ok(self.tenants.get(namespace).cloned().unwrap_or_default())
    }

    async fn has_tenant_resource_type(&self) -> Result<bool> {
        Ok(self.serves_tenant_type)
    }
}

/// Fleet directory over a fixed set of clusters.
#[derive(Clone, Default)]
pub struct StaticFleetDirectory {
    clusters: Vec<(ManagementCluster, Arc<dyn ClusterApiPort>)>,
}

impl StaticFleetDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cluster(
        mut self,
        cluster: ManagementCluster,
        api: impl ClusterApiPort + 'static,
    ) -> Self {
        self.clusters.push((cluster, Arc::new(api)));
        self
    }

    fn find(&self, id: &str) -> Option<&(ManagementCluster, Arc<dyn ClusterApiPort>)> {
        self.clusters.iter().find(|(cluster, _)| cluster.id == id)
    }
}

#[async_trait]
impl FleetDirectoryPort for StaticFleetDirectory {
    async fn resolve_cluster(&self, key: &ClusterKey) -> Result<ManagementCluster> {
        self.clusters
            .iter()
            .map(|(cluster, _)| cluster)
            .find(|cluster| cluster.id == key.as_str() || cluster.name == key.as_str())
            .cloned()
            .ok_or_else(|| anyhow!("cluster '{key}' not found"))
    }

    async fn is_management_cluster(&self, cluster: &ManagementCluster) -> Result<bool> {
        match self.find(&cluster.id) {
            Some((_, api)) => api.has_tenant_resource_type().await,
            None => Ok(false),
        }
    }

    async fn connect(&self, cluster: &ManagementCluster) -> Result<Arc<dyn ClusterApiPort>> {
        self.find(&cluster.id)
            .map(|(_, api)| Arc::clone(api))
            .ok_or_else(|| anyhow!("no API client for cluster {}", cluster.id))
    }
}
