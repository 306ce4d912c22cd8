//! PolicyTable - Role/feature permission checking

use serde::{Deserialize, Serialize};
use shared::{feature, Role};
use std::collections::HashMap;
use std::str::FromStr;

/// Outcome of a single policy evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
    /// Role string as supplied by the caller
    pub role: String,
    /// Feature string as supplied by the caller
    pub feature: String,
    pub allowed: bool,
    pub reason: String,
}

/// One row of the policy matrix export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMatrixRow {
    pub role: String,
    pub name: String,
    pub description: String,
    pub denied_features: Vec<String>,
    pub admin_access: bool,
    pub hr_access: bool,
}

/// Declarative role/feature policy
///
/// Holds one denied-feature set per role; a feature is allowed unless the
/// role's set names it. The deny sets are the single source for every check,
/// so the string-level entry points and the matrix export cannot drift apart.
///
/// Unknown role strings are denied outright; unknown feature strings carry no
/// restriction and pass unless a deny set lists them. Both defaults are part
/// of the contract, not error paths.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    /// Denied features per role
    denied: HashMap<Role, Vec<String>>,
}

impl PolicyTable {
    /// Create an empty table (everything allowed for defined roles)
    pub fn new() -> Self {
        Self {
            denied: HashMap::new(),
        }
    }

    /// Builder: deny a feature for a role
    pub fn deny(mut self, role: Role, feature: impl Into<String>) -> Self {
        self.denied.entry(role).or_default().push(feature.into());
        self
    }

    /// The built-in dashboard policy
    ///
    /// Guards may not open the audit trail; HR may not reach the field
    /// operations areas. Supervisors and admins are unrestricted.
    pub fn builtin() -> Self {
        Self::new()
            .deny(Role::Guard, feature::AUDIT)
            .deny(Role::Hr, feature::TRACKING)
            .deny(Role::Hr, feature::CHECKPOINTS)
            .deny(Role::Hr, feature::EQUIPMENT)
    }

    /// Denied features for a role
    pub fn denied_features(&self, role: Role) -> &[String] {
        self.denied.get(&role).map(|d| d.as_slice()).unwrap_or(&[])
    }

    /// Check whether a defined role may use a feature
    pub fn is_allowed(&self, role: Role, feature: &str) -> bool {
        !self.denied_features(role).iter().any(|f| f == feature)
    }

    /// Check whether a role string may use a feature
    ///
    /// Unrecognized role strings fail closed.
    pub fn has_permission(&self, role_id: &str, feature: &str) -> bool {
        Role::from_str(role_id)
            .map(|role| self.is_allowed(role, feature))
            .unwrap_or(false)
    }

    /// Evaluate a check and explain the outcome
    pub fn decide(&self, role_id: &str, feature: &str) -> AccessDecision {
        let (allowed, reason) = match Role::from_str(role_id) {
            Err(_) => {
                tracing::warn!(role = role_id, feature, "denying unknown role");
                (false, format!("role '{}' is not defined", role_id))
            }
            Ok(role) => {
                let allowed = self.is_allowed(role, feature);
                tracing::debug!(role = role_id, feature, allowed, "policy decision");
                if allowed {
                    (true, format!("feature '{}' is not restricted for role '{}'", feature, role))
                } else {
                    (false, format!("feature '{}' is denied for role '{}'", feature, role))
                }
            }
        };

        AccessDecision {
            role: role_id.to_string(),
            feature: feature.to_string(),
            allowed,
            reason,
        }
    }

    /// Export the policy as one row per defined role
    pub fn matrix(&self) -> Vec<RoleMatrixRow> {
        Role::ALL
            .iter()
            .map(|&role| RoleMatrixRow {
                role: role.id().to_string(),
                name: role.display_name().to_string(),
                description: role.description().to_string(),
                denied_features: self.denied_features(role).to_vec(),
                admin_access: role.is_admin(),
                hr_access: role.is_hr_or_admin(),
            })
            .collect()
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Check whether a role string may use a feature
///
/// Evaluates the built-in policy fresh on every call; no state is kept
/// between calls. Unrecognized role strings are denied; feature strings
/// outside the role's deny set are allowed.
pub fn has_permission(role_id: &str, feature: &str) -> bool {
    PolicyTable::builtin().has_permission(role_id, feature)
}

/// True only when the role string names the admin role
pub fn can_access_admin_features(role_id: &str) -> bool {
    Role::from_str(role_id)
        .map(|role| role.is_admin())
        .unwrap_or(false)
}

/// True when the role string names the HR or admin role
pub fn can_access_hr_features(role_id: &str) -> bool {
    Role::from_str(role_id)
        .map(|role| role.is_hr_or_admin())
        .unwrap_or(false)
}
