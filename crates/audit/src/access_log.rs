//! AccessLog - Access decision logging for Guardpost

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Access log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessEntry {
    pub timestamp: String,
    pub event_type: AccessEventType,
    pub role: String,
    pub feature: String,
    pub allowed: bool,
    pub reason: Option<String>,
}

/// Types of access events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessEventType {
    FeatureAllowed,
    FeatureDenied,
    UnknownRole,
}

/// Bounded in-memory log of access decisions
///
/// Oldest entries are evicted once the capacity is reached. Nothing is
/// persisted.
#[derive(Debug)]
pub struct AccessLog {
    entries: VecDeque<AccessEntry>,
    max_entries: usize,
}

impl AccessLog {
    /// Create a new AccessLog
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Log an access entry
    pub fn record(&mut self, entry: AccessEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Log a feature check for a defined role
    pub fn record_check(&mut self, role: &str, feature: &str, allowed: bool, reason: Option<&str>) {
        self.record(AccessEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: if allowed {
                AccessEventType::FeatureAllowed
            } else {
                AccessEventType::FeatureDenied
            },
            role: role.to_string(),
            feature: feature.to_string(),
            allowed,
            reason: reason.map(|s| s.to_string()),
        });
    }

    /// Log a check against an unrecognized role
    pub fn record_unknown_role(&mut self, role: &str, feature: &str) {
        self.record(AccessEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AccessEventType::UnknownRole,
            role: role.to_string(),
            feature: feature.to_string(),
            allowed: false,
            reason: Some(format!("role '{}' is not defined", role)),
        });
    }

    /// Get recent entries, newest first
    pub fn get_recent(&self, limit: usize) -> Vec<&AccessEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Get recent denials, newest first
    pub fn get_recent_denials(&self, limit: usize) -> Vec<&AccessEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !e.allowed)
            .take(limit)
            .collect()
    }

    /// Get statistics
    pub fn stats(&self) -> AccessStats {
        let total = self.entries.len();
        let denials = self.entries.iter().filter(|e| !e.allowed).count();
        let unknown_roles = self
            .entries
            .iter()
            .filter(|e| e.event_type == AccessEventType::UnknownRole)
            .count();

        AccessStats {
            total_entries: total,
            denial_count: denials,
            unknown_role_count: unknown_roles,
        }
    }

    /// Export as JSON
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::to_value(self.entries.iter().collect::<Vec<_>>()).unwrap_or_default()
    }
}

/// Access log statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessStats {
    pub total_entries: usize,
    pub denial_count: usize,
    pub unknown_role_count: usize,
}

impl Default for AccessLog {
    fn default() -> Self {
        Self::new(10000)
    }
}
