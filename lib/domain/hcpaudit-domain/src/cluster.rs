use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AuditError;

/// A management cluster name or internal ID as typed by an operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClusterKey(String);

impl ClusterKey {
    pub fn parse(raw: &str) -> Result<Self, AuditError> {
        if cluster_key_pattern().is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(AuditError::InvalidClusterKey(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ClusterKey {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ClusterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn cluster_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("cluster key pattern is valid"))
}

/// A cluster key resolved by the fleet directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementCluster {
    pub id: String,
    pub name: String,
}

impl ManagementCluster {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
