use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    #[error("invalid output format '{0}'. Valid options: text, json, yaml, csv")]
    InvalidOutputFormat(String),

    #[error(
        "invalid show-only filter '{0}'. Valid options: needs-removal, ready-for-migration, safe-to-remove-override"
    )]
    InvalidFilter(String),

    #[error("Cluster key '{0}' isn't valid: it must contain only letters, digits, dashes and underscores")]
    InvalidClusterKey(String),

    #[error("cluster {0} is not a management cluster")]
    NotManagementCluster(String),

    #[error("failed to list namespaces after {attempts} attempts (cluster may be unreachable): {reason}")]
    ClusterUnreachable { attempts: u32, reason: String },

    #[error("no hosted cluster found")]
    NoTenant,

    #[error("found {0} hosted clusters, expected 1")]
    MultipleTenants(usize),

    #[error("failed to list hosted clusters: {0}")]
    TenantLookup(String),
}

impl AuditError {
    /// Errors that skip a single namespace without aborting the audit.
    pub fn is_tenant_scoped(&self) -> bool {
        matches!(
            self,
            AuditError::NoTenant | AuditError::MultipleTenants(_) | AuditError::TenantLookup(_)
        )
    }
}
