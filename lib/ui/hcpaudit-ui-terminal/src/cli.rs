use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "hcpaudit")]
#[command(version)]
#[command(about = "Audit hosted control plane autoscaling readiness", long_about = None)]
pub struct Cli {
    /// Path to the hcpaudit config file
    #[arg(long, global = true, env = "HCPAUDIT_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `info` or `hcpaudit_application=debug`
    #[arg(long, global = true, env = "HCPAUDIT_LOG")]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Hosted control plane operations
    Hcp {
        #[command(subcommand)]
        action: HcpCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum HcpCommands {
    /// Report control plane autoscaling migration readiness for a management cluster
    GetCpAutoscalingStatus(AuditArgs),
}

#[derive(Debug, Clone, Args)]
pub struct AuditArgs {
    /// Management cluster name or ID
    #[arg(long, env = "HCPAUDIT_MGMT_CLUSTER_ID")]
    pub mgmt_cluster_id: String,

    /// Output format: text, json, yaml, csv
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Only show one bucket: needs-removal, ready-for-migration, safe-to-remove-override
    #[arg(long, default_value = "")]
    pub show_only: String,

    /// Omit the header row from text and csv output
    #[arg(long)]
    pub no_headers: bool,

    /// Kubeconfig used to reach the management cluster [default: $KUBECONFIG, then config file]
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,
}
