use pretty_assertions::assert_eq;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use hcpaudit_domain::{
    ANNOTATION_CLUSTER_SIZE_OVERRIDE, ANNOTATION_RECOMMENDED_CLUSTER_SIZE,
    ANNOTATION_RESOURCE_BASED_AUTOSCALING, AuditConfig, AuditError, LABEL_CLUSTER_ID,
    LABEL_HOSTED_CLUSTER_SIZE, ManagementCluster, ReadinessBucket, TenantResource,
};
use hcpaudit_adapter_kube::KubeconfigDirectory;
use hcpaudit_ports::{InMemoryClusterApi, StaticFleetDirectory};
use hcpaudit_ui_presentation::OutputFormat;

use crate::cli::AuditArgs;
use crate::commands::AutoscalingStatusCommand;
use crate::commands::autoscaling_status::kubeconfig_paths;

fn args(cluster: &str) -> AuditArgs {
    AuditArgs {
        mgmt_cluster_id: cluster.into(),
        output: None,
        show_only: String::new(),
        no_headers: false,
        kubeconfig: None,
    }
}

fn validation_error(args: &AuditArgs) -> AuditError {
    let err = AutoscalingStatusCommand::prepare(args, &AuditConfig::default()).unwrap_err();
    err.downcast_ref::<AuditError>().cloned().unwrap()
}

fn directory() -> Arc<StaticFleetDirectory> {
    let api = InMemoryClusterApi::new()
        .with_tenant(
            TenantResource::new("alpha", "ocm-production-001")
                .with_label(LABEL_CLUSTER_ID, "2abc")
                .with_label(LABEL_HOSTED_CLUSTER_SIZE, "medium")
                .with_annotation(ANNOTATION_RESOURCE_BASED_AUTOSCALING, "true")
                .with_annotation(ANNOTATION_CLUSTER_SIZE_OVERRIDE, "medium")
                .with_annotation(ANNOTATION_RECOMMENDED_CLUSTER_SIZE, "medium"),
        )
        .with_tenant(
            TenantResource::new("beta", "ocm-staging-002").with_label(LABEL_CLUSTER_ID, "3def"),
        );
    Arc::new(
        StaticFleetDirectory::new().with_cluster(ManagementCluster::new("1mc", "hs-mc-east"), api),
    )
}

#[test]
fn defaults_to_text_without_filter() {
    let command = AutoscalingStatusCommand::prepare(&args("hs-mc-east"), &AuditConfig::default())
        .unwrap();

    assert_eq!(command.format, OutputFormat::Text);
    assert_eq!(command.request.show_only, None);
    assert_eq!(command.request.cluster_key.as_str(), "hs-mc-east");
    assert!(!command.options.no_headers);
}

#[test]
fn flags_win_over_config() {
    let config = AuditConfig {
        kubeconfig: Some(PathBuf::from("/from/config")),
        output: Some("yaml".into()),
        log_filter: None,
    };
    let mut args = args("hs-mc-east");
    args.output = Some("json".into());
    args.kubeconfig = Some(PathBuf::from("/from/flag"));

    let command = AutoscalingStatusCommand::prepare(&args, &config).unwrap();
    assert_eq!(command.format, OutputFormat::Json);
    assert_eq!(command.kubeconfig, vec![PathBuf::from("/from/flag")]);
}

#[test]
fn config_fills_unset_flags() {
    let config = AuditConfig {
        kubeconfig: Some(PathBuf::from("/from/config")),
        output: Some("csv".into()),
        log_filter: None,
    };

    let command = AutoscalingStatusCommand::prepare(&args("hs-mc-east"), &config).unwrap();
    assert_eq!(command.format, OutputFormat::Csv);
}

#[test]
fn rejects_unknown_output_format() {
    let mut args = args("hs-mc-east");
    args.output = Some("table".into());

    let err = validation_error(&args);
    assert_eq!(
        err.to_string(),
        "invalid output format 'table'. Valid options: text, json, yaml, csv"
    );
}

#[test]
fn rejects_unknown_show_only_bucket() {
    let mut args = args("hs-mc-east");
    args.show_only = "ready".into();

    let err = validation_error(&args);
    assert_eq!(
        err.to_string(),
        "invalid show-only filter 'ready'. Valid options: needs-removal, ready-for-migration, safe-to-remove-override"
    );
}

#[test]
fn rejects_malformed_cluster_key() {
    assert_eq!(
        validation_error(&args("hs mc/east")),
        AuditError::InvalidClusterKey("hs mc/east".into())
    );
    assert_eq!(
        validation_error(&args("")),
        AuditError::InvalidClusterKey(String::new())
    );
}

#[test]
fn parses_show_only_bucket() {
    let mut args = args("hs-mc-east");
    args.show_only = "safe-to-remove-override".into();

    let command = AutoscalingStatusCommand::prepare(&args, &AuditConfig::default()).unwrap();
    assert_eq!(
        command.request.show_only,
        Some(ReadinessBucket::SafeToRemoveOverride)
    );
}

#[tokio::test(start_paused = true)]
async fn renders_filtered_report_as_csv() {
    let mut args = args("1mc");
    args.output = Some("csv".into());
    args.show_only = "ready-for-migration".into();
    args.no_headers = true;

    let command = AutoscalingStatusCommand::prepare(&args, &AuditConfig::default()).unwrap();
    let out = command.execute(directory()).await.unwrap();

    assert_eq!(out, "3def,beta,ocm-staging-002,false,false,N/A,N/A\n");
}

#[tokio::test(start_paused = true)]
async fn renders_table_for_named_cluster() {
    let command =
        AutoscalingStatusCommand::prepare(&args("hs-mc-east"), &AuditConfig::default()).unwrap();
    let out = command.execute(directory()).await.unwrap();

    assert!(out.contains("=== Management Cluster: hs-mc-east ==="));
    assert!(out.contains("Total Hosted Clusters: 2"));
    assert!(out.contains("CLUSTER ID"));
}

#[tokio::test(start_paused = true)]
async fn unknown_cluster_renders_nothing() {
    let command =
        AutoscalingStatusCommand::prepare(&args("hs-mc-west"), &AuditConfig::default()).unwrap();
    let err = command.execute(directory()).await.unwrap_err();

    assert!(format!("{err:#}").contains("failed to get cluster"));
}

#[test]
fn kubeconfig_flag_wins_over_env_and_config() {
    let env = OsString::from("/env/a:/env/b");
    assert_eq!(
        kubeconfig_paths(
            Some(Path::new("/from/flag")),
            Some(env.as_os_str()),
            Some(Path::new("/from/config"))
        ),
        vec![PathBuf::from("/from/flag")]
    );
}

#[test]
fn kubeconfig_env_wins_over_config() {
    let env = std::env::join_paths(["/env/a", "/env/b"]).unwrap();
    assert_eq!(
        kubeconfig_paths(None, Some(env.as_os_str()), Some(Path::new("/from/config"))),
        vec![PathBuf::from("/env/a"), PathBuf::from("/env/b")]
    );
}

#[test]
fn kubeconfig_falls_back_to_config_then_default() {
    let blank = OsString::new();
    assert_eq!(
        kubeconfig_paths(None, Some(blank.as_os_str()), Some(Path::new("/from/config"))),
        vec![PathBuf::from("/from/config")]
    );
    assert_eq!(kubeconfig_paths(None, None, None), Vec::<PathBuf>::new());
}

#[test]
fn multi_file_kubeconfig_env_loads_every_context() {
    let dir = tempfile::tempdir().unwrap();
    let east = dir.path().join("east");
    let west = dir.path().join("west");
    std::fs::write(&east, kubeconfig("east-admin", "hs-mc-east")).unwrap();
    std::fs::write(&west, kubeconfig("west-admin", "hs-mc-west")).unwrap();
    let env = std::env::join_paths([&east, &west]).unwrap();

    let paths = kubeconfig_paths(None, Some(env.as_os_str()), None);
    let directory = KubeconfigDirectory::load(&paths).unwrap();

    assert_eq!(
        directory.lookup("hs-mc-east"),
        Some(ManagementCluster::new("east-admin", "hs-mc-east"))
    );
    assert_eq!(
        directory.lookup("hs-mc-west"),
        Some(ManagementCluster::new("west-admin", "hs-mc-west"))
    );
}

fn kubeconfig(context: &str, cluster: &str) -> String {
    format!(
        r#"apiVersion: v1
kind: Config
clusters:
- name: {cluster}
  cluster:
    server: https://api.{cluster}.example.com:6443
contexts:
- name: {context}
  context:
    cluster: {cluster}
    user: {context}
users:
- name: {context}
  user:
    token: sha256~redacted
"#
    )
}
