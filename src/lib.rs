//! Fleet audit of hosted control plane autoscaling readiness.
//!
//! Re-exports the layered crates so integration tests and embedders can
//! depend on a single package.

pub use hcpaudit_adapter_kube as adapters;
pub use hcpaudit_application as application;
pub use hcpaudit_domain as domain;
pub use hcpaudit_ports as ports;
pub use hcpaudit_ui_presentation as presentation;
