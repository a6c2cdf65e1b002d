use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuditError;
use crate::tenant::TenantRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadinessBucket {
    NeedsRemoval,
    ReadyForMigration,
    SafeToRemoveOverride,
}

impl ReadinessBucket {
    pub const ALL: [ReadinessBucket; 3] = [
        ReadinessBucket::NeedsRemoval,
        ReadinessBucket::ReadyForMigration,
        ReadinessBucket::SafeToRemoveOverride,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessBucket::NeedsRemoval => "needs-removal",
            ReadinessBucket::ReadyForMigration => "ready-for-migration",
            ReadinessBucket::SafeToRemoveOverride => "safe-to-remove-override",
        }
    }

    pub fn contains(&self, record: &TenantRecord) -> bool {
        match self {
            ReadinessBucket::NeedsRemoval => record.needs_override_removal(),
            ReadinessBucket::ReadyForMigration => record.is_ready_for_migration(),
            ReadinessBucket::SafeToRemoveOverride => record.is_safe_to_remove_override(),
        }
    }

    /// Parses an optional `--show-only` value. Empty input means no filtering.
    pub fn parse_optional(raw: &str) -> Result<Option<Self>, AuditError> {
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some)
    }
}

impl fmt::Display for ReadinessBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadinessBucket {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReadinessBucket::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == s)
            .ok_or_else(|| AuditError::InvalidFilter(s.to_string()))
    }
}
