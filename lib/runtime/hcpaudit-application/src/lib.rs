//! Audit pipeline: enumerate tenant namespaces, resolve and classify each
//! hosted cluster, then optionally narrow the report to one readiness bucket.

pub mod auditor;
pub mod classifier;
pub mod enumerator;
pub mod filter;
pub mod resolver;

pub use auditor::{AuditOutcome, AuditRequest, Auditor, SkippedNamespace};
pub use classifier::classify;
pub use enumerator::{NamespaceEnumerator, RetryPolicy, is_tenant_namespace};
pub use filter::apply_filter;
pub use resolver::resolve_tenant;
