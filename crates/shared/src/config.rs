//! Configuration types for Guardpost

use serde::{Deserialize, Serialize};

/// Access log settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditConfig {
    /// Maximum number of retained access entries
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_max_entries() -> usize {
    10000
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

/// Top-level configuration format (guardpost.json)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardpostConfig {
    /// Access log settings
    #[serde(default)]
    pub audit: AuditConfig,

    /// Emit machine-readable JSON output by default
    #[serde(default)]
    pub json: bool,
}

impl GuardpostConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }
}
