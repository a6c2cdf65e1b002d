use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use tokio::time::sleep;
use tracing::{debug, warn};

use hcpaudit_domain::AuditError;
use hcpaudit_ports::ClusterApiPort;

/// Fixed-delay retry budget for namespace listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

pub fn is_tenant_namespace(name: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(r"^ocm-(production|staging)-[a-zA-Z0-9]+$")
                .expect("tenant namespace pattern is valid")
        })
        .is_match(name)
}

#[derive(Debug, Clone, Default)]
pub struct NamespaceEnumerator {
    retry: RetryPolicy,
}

impl NamespaceEnumerator {
    pub fn new(retry: RetryPolicy) -> Self {
        Self { retry }
    }

    /// Lists every namespace and keeps the tenant ones, in listing order.
    pub async fn tenant_namespaces(
        &self,
        api: &dyn ClusterApiPort,
    ) -> Result<Vec<String>, AuditError> {
        let max_attempts = self.retry.max_attempts.max(1);
        let mut attempt = 1;
        let namespaces = loop {
            match api.list_namespaces().await {
                Ok(namespaces) => break namespaces,
                Err(err) if attempt >= max_attempts => {
                    return Err(AuditError::ClusterUnreachable {
                        attempts: max_attempts,
                        reason: format!("{err:#}"),
                    });
                }
                Err(err) => {
                    warn!(
                        attempt,
                        max_attempts,
                        "namespace listing failed, retrying in {:?}: {err:#}",
                        self.retry.delay
                    );
                    sleep(self.retry.delay).await;
                    attempt += 1;
                }
            }
        };

        let total = namespaces.len();
        let tenants: Vec<String> = namespaces
            .into_iter()
            .filter(|name| is_tenant_namespace(name))
            .collect();
        debug!(total, tenants = tenants.len(), "filtered tenant namespaces");
        Ok(tenants)
    }
}
