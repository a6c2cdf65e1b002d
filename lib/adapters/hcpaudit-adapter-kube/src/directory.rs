use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use hcpaudit_domain::{ClusterKey, ManagementCluster};
use hcpaudit_ports::{ClusterApiPort, FleetDirectoryPort};

use crate::client::KubeClusterApi;

/// Fleet directory backed by kubeconfig contexts.
///
/// A cluster key matches a context by name first, then by the cluster the
/// context points at. The context name becomes the cluster ID and the
/// kubeconfig cluster name its display name.
#[derive(Debug, Clone)]
pub struct KubeconfigDirectory {
    kubeconfig: Kubeconfig,
}

impl KubeconfigDirectory {
    /// Reads and merges `paths` in order; the first file wins on name
    /// clashes. No paths means the default kubeconfig (`~/.kube/config`).
    pub fn load(paths: &[PathBuf]) -> Result<Self> {
        let Some((first, rest)) = paths.split_first() else {
            let kubeconfig = Kubeconfig::read().context("failed to read kubeconfig")?;
            return Ok(Self::from_kubeconfig(kubeconfig));
        };

        let mut kubeconfig = read_file(first)?;
        for path in rest {
            kubeconfig = kubeconfig
                .merge(read_file(path)?)
                .with_context(|| format!("failed to merge kubeconfig at {}", path.display()))?;
        }
        Ok(Self::from_kubeconfig(kubeconfig))
    }

    pub fn from_kubeconfig(kubeconfig: Kubeconfig) -> Self {
        Self { kubeconfig }
    }

    pub fn lookup(&self, key: &str) -> Option<ManagementCluster> {
        let contexts = || {
            self.kubeconfig
                .contexts
                .iter()
                .filter_map(|named| named.context.as_ref().map(|ctx| (named, ctx)))
        };

        contexts()
            .find(|(named, _)| named.name == key)
            .or_else(|| contexts().find(|(_, ctx)| ctx.cluster == key))
            .map(|(named, ctx)| ManagementCluster::new(named.name.clone(), ctx.cluster.clone()))
    }

    async fn client_for(&self, cluster: &ManagementCluster) -> Result<Client> {
        let options = KubeConfigOptions {
            context: Some(cluster.id.clone()),
            ..Default::default()
        };
        let config = Config::from_custom_kubeconfig(self.kubeconfig.clone(), &options)
            .await
            .with_context(|| format!("failed to load client config for context {}", cluster.id))?;
        Client::try_from(config).context("failed to build Kubernetes client")
    }
}

#[async_trait]
impl FleetDirectoryPort for KubeconfigDirectory {
    async fn resolve_cluster(&self, key: &ClusterKey) -> Result<ManagementCluster> {
        let cluster = self
            .lookup(key.as_str())
            .ok_or_else(|| anyhow!("no kubeconfig context or cluster named '{key}'"))?;
        debug!(id = %cluster.id, name = %cluster.name, "resolved management cluster");
        Ok(cluster)
    }

    async fn is_management_cluster(&self, cluster: &ManagementCluster) -> Result<bool> {
        self.connect(cluster).await?.has_tenant_resource_type().await
    }

    async fn connect(&self, cluster: &ManagementCluster) -> Result<Arc<dyn ClusterApiPort>> {
        let client = self.client_for(cluster).await?;
        Ok(Arc::new(KubeClusterApi::new(client)))
    }
}

fn read_file(path: &Path) -> Result<Kubeconfig> {
    Kubeconfig::read_from(path)
        .with_context(|| format!("failed to read kubeconfig at {}", path.display()))
}
