//! Command-line front end: argument parsing, logging setup and command dispatch.

pub mod cli;
pub mod commands;
pub mod logging;

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use hcpaudit_adapter_kube::KubeconfigDirectory;
use hcpaudit_domain::AuditConfig;
use hcpaudit_domain::config::config_path;

use crate::cli::{Cli, Commands, HcpCommands};
use crate::commands::AutoscalingStatusCommand;

/// Parses the process arguments and runs the selected command.
pub async fn run() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = AuditConfig::load_or_default(&config_path(cli.config.as_deref()))?;
    logging::init(&logging::resolve_filter(cli.log_filter.as_deref(), &config))?;

    match cli.command {
        Commands::Hcp { action } => match action {
            HcpCommands::GetCpAutoscalingStatus(args) => {
                let command = AutoscalingStatusCommand::prepare(&args, &config)?;
                let directory = KubeconfigDirectory::load(&command.kubeconfig)?;
                let rendered = command.execute(Arc::new(directory)).await?;
                print!("{rendered}");
            }
        },
    }

    Ok(())
}
