use anyhow::{Context, Result};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::api::ListParams;
use kube::{Api, Client, ResourceExt};

use hcpaudit_domain::TenantResource;
use hcpaudit_ports::ClusterApiPort;

use crate::crd::{HOSTED_CLUSTER_CRD_NAME, HostedCluster};

/// Read-only access to a management cluster through the Kubernetes API.
#[derive(Clone)]
pub struct KubeClusterApi {
    client: Client,
}

impl KubeClusterApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterApiPort for KubeClusterApi {
    async fn list_namespaces(&self) -> Result<Vec<String>> {
        let namespaces: Api<Namespace> = Api::all(self.client.clone());
        let list = namespaces
            .list(&ListParams::default())
            .await
            .context("failed to list namespaces")?;
        Ok(list.items.iter().map(ResourceExt::name_any).collect())
    }

    async fn list_tenant_resources(&self, namespace: &str) -> Result<Vec<TenantResource>> {
        let hosted_clusters: Api<HostedCluster> =
            Api::namespaced(self.client.clone(), namespace);
        let list = hosted_clusters
            .list(&ListParams::default())
            .await
            .with_context(|| format!("failed to list hosted clusters in {namespace}"))?;
        Ok(list
            .items
            .iter()
            .map(|hc| hc.to_tenant_resource(namespace))
            .collect())
    }

    async fn has_tenant_resource_type(&self) -> Result<bool> {
        let crds: Api<CustomResourceDefinition> = Api::all(self.client.clone());
        let crd = crds
            .get_opt(HOSTED_CLUSTER_CRD_NAME)
            .await
            .with_context(|| format!("failed to get CRD {HOSTED_CLUSTER_CRD_NAME}"))?;
        Ok(crd.is_some())
    }
}
