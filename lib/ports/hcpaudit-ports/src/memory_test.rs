use hcpaudit_domain::{ClusterKey, ManagementCluster, TenantResource};

use crate::{ClusterApiPort, FleetDirectoryPort, InMemoryClusterApi, StaticFleetDirectory};

#[tokio::test]
async fn scripted_failures_run_out() {
    let api = InMemoryClusterApi::new()
        .with_namespace("ocm-production-abc")
        .failing_namespace_listings(2);

    assert!(api.list_namespaces().await.is_err());
    assert!(api.list_namespaces().await.is_err());
    assert_eq!(
        api.list_namespaces().await.unwrap(),
        vec!["ocm-production-abc".to_string()]
    );
    assert_eq!(api.namespace_listing_attempts(), 3);
}

#[tokio::test]
async fn tenants_are_scoped_to_their_namespace() {
    let api = InMemoryClusterApi::new()
        .with_tenant(TenantResource::new("alpha", "ocm-staging-a"))
        .with_namespace("ocm-staging-b")
        .with_broken_namespace("ocm-staging-c");

    assert_eq!(api.list_tenant_resources("ocm-staging-a").await.unwrap().len(), 1);
    assert!(api.list_tenant_resources("ocm-staging-b").await.unwrap().is_empty());
    assert!(api.list_tenant_resources("ocm-staging-c").await.is_err());
    assert_eq!(api.list_namespaces().await.unwrap().len(), 3);
}

#[tokio::test]
async fn directory_resolves_by_id_or_name() {
    let directory = StaticFleetDirectory::new()
        .with_cluster(
            ManagementCluster::new("2abc", "hs-mc-east"),
            InMemoryClusterApi::new(),
        )
        .with_cluster(
            ManagementCluster::new("3def", "plain-cluster"),
            InMemoryClusterApi::new().without_tenant_resource_type(),
        );

    let by_name = directory
        .resolve_cluster(&ClusterKey::parse("hs-mc-east").unwrap())
        .await
        .unwrap();
    let by_id = directory
        .resolve_cluster(&ClusterKey::parse("2abc").unwrap())
        .await
        .unwrap();
    assert_eq!(by_name, by_id);
    assert!(directory.is_management_cluster(&by_id).await.unwrap());

    let plain = directory
        .resolve_cluster(&ClusterKey::parse("3def").unwrap())
        .await
        .unwrap();
    assert!(!directory.is_management_cluster(&plain).await.unwrap());

    assert!(
        directory
            .resolve_cluster(&ClusterKey::parse("missing").unwrap())
            .await
            .is_err()
    );
}
