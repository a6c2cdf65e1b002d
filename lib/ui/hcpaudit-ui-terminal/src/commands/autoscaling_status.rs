use anyhow::Result;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use hcpaudit_application::{AuditRequest, Auditor};
use hcpaudit_domain::{AuditConfig, ClusterKey, ReadinessBucket};
use hcpaudit_ports::FleetDirectoryPort;
use hcpaudit_ui_presentation::{OutputFormat, RenderOptions, render};

use crate::cli::AuditArgs;

pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

/// A validated `hcp get-cp-autoscaling-status` invocation.
///
/// Building one touches no cluster: every argument error surfaces here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoscalingStatusCommand {
    pub request: AuditRequest,
    pub format: OutputFormat,
    pub options: RenderOptions,
    /// Kubeconfig files to merge; empty means the default location.
    pub kubeconfig: Vec<PathBuf>,
}

impl AutoscalingStatusCommand {
    pub fn prepare(args: &AuditArgs, config: &AuditConfig) -> Result<Self> {
        let format = match args.output.as_deref().or(config.output.as_deref()) {
            Some(raw) => raw.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };
        let show_only = ReadinessBucket::parse_optional(&args.show_only)?;
        let cluster_key = ClusterKey::parse(&args.mgmt_cluster_id)?;

        Ok(Self {
            request: AuditRequest::new(cluster_key).show_only(show_only),
            format,
            options: RenderOptions {
                no_headers: args.no_headers,
            },
            kubeconfig: kubeconfig_paths(
                args.kubeconfig.as_deref(),
                std::env::var_os(KUBECONFIG_ENV).as_deref(),
                config.kubeconfig.as_deref(),
            ),
        })
    }

    /// Runs the audit and returns the rendered report.
    pub async fn execute(&self, directory: Arc<dyn FleetDirectoryPort>) -> Result<String> {
        let outcome = Auditor::new(directory).run(&self.request).await?;
        if !outcome.skipped.is_empty() {
            info!(skipped = outcome.skipped.len(), "some namespaces were left out of the report");
        }
        render(&outcome.report, self.format, self.options)
    }
}

/// Flag, then the `KUBECONFIG` path list, then the config file.
pub fn kubeconfig_paths(
    flag: Option<&Path>,
    env: Option<&OsStr>,
    config: Option<&Path>,
) -> Vec<PathBuf> {
    if let Some(path) = flag {
        return vec![path.to_path_buf()];
    }

    let from_env: Vec<PathBuf> = env
        .map(|raw| {
            std::env::split_paths(raw)
                .filter(|path| !path.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default();
    if !from_env.is_empty() {
        return from_env;
    }

    config.map(|path| vec![path.to_path_buf()]).unwrap_or_default()
}
