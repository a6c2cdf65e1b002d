use hcpaudit_domain::{AuditError, TenantResource};
use hcpaudit_ports::ClusterApiPort;

/// Finds the single hosted cluster a tenant namespace must contain.
///
/// Zero or several matches are data-integrity problems and are reported,
/// never resolved by picking one.
pub async fn resolve_tenant(
    api: &dyn ClusterApiPort,
    namespace: &str,
) -> Result<TenantResource, AuditError> {
    let mut tenants = api
        .list_tenant_resources(namespace)
        .await
        .map_err(|err| AuditError::TenantLookup(format!("{err:#}")))?;

    match tenants.len() {
        0 => Err(AuditError::NoTenant),
        1 => Ok(tenants.remove(0)),
        n => Err(AuditError::MultipleTenants(n)),
    }
}
