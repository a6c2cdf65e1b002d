//! Kubernetes implementations of the audit ports.

pub mod client;
pub mod crd;
pub mod directory;

pub use client::KubeClusterApi;
pub use crd::{HOSTED_CLUSTER_CRD_NAME, HostedCluster, HostedClusterSpec};
pub use directory::KubeconfigDirectory;
