//! Workforce role types

use crate::UnknownRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workforce role that determines which dashboard features are accessible
///
/// Roles are assigned externally and supplied by the caller on every check;
/// this crate never stores or derives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Field guard on patrol duty
    Guard,
    /// Shift supervisor
    Supervisor,
    /// Platform administrator
    Admin,
    /// Human resources staff
    Hr,
}

impl Role {
    /// All defined roles
    pub const ALL: [Role; 4] = [Role::Guard, Role::Supervisor, Role::Admin, Role::Hr];

    /// Stable identifier used in configs and check requests
    pub fn id(&self) -> &'static str {
        match self {
            Role::Guard => "guard",
            Role::Supervisor => "supervisor",
            Role::Admin => "admin",
            Role::Hr => "hr",
        }
    }

    /// Human-readable role name
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Guard => "Guard",
            Role::Supervisor => "Supervisor",
            Role::Admin => "Administrator",
            Role::Hr => "Human Resources",
        }
    }

    /// Role description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Role::Guard => "Field guard on patrol duty",
            Role::Supervisor => "Shift supervisor overseeing guard teams",
            Role::Admin => "Platform administrator with full access",
            Role::Hr => "Human resources staff managing personnel",
        }
    }

    /// True only for the admin role
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// True for the HR and admin roles
    pub fn is_hr_or_admin(&self) -> bool {
        matches!(self, Role::Hr | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    /// Role ids match case-sensitively; 'Admin' and 'ADMIN' are unknown roles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guard" => Ok(Role::Guard),
            "supervisor" => Ok(Role::Supervisor),
            "admin" => Ok(Role::Admin),
            "hr" => Ok(Role::Hr),
            _ => Err(UnknownRoleError {
                role: s.to_string(),
                known_roles: Role::ALL.iter().map(|r| r.id().to_string()).collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============== Parsing Tests ==============

    #[test]
    fn test_parse_defined_roles() {
        assert_eq!("guard".parse::<Role>().unwrap(), Role::Guard);
        assert_eq!("supervisor".parse::<Role>().unwrap(), Role::Supervisor);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("hr".parse::<Role>().unwrap(), Role::Hr);
    }

    #[test]
    fn test_parse_unknown_role() {
        let err = "dispatcher".parse::<Role>().unwrap_err();
        assert_eq!(err.role, "dispatcher");
        assert_eq!(err.known_roles.len(), 4);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Admin".parse::<Role>().is_err());
        assert!("ADMIN".parse::<Role>().is_err());
        assert!("Guard".parse::<Role>().is_err());
        assert!("HR".parse::<Role>().is_err());
    }

    #[test]
    fn test_parse_empty_string() {
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_parse_whitespace_is_not_trimmed() {
        assert!(" admin".parse::<Role>().is_err());
        assert!("admin ".parse::<Role>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for role in Role::ALL {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    // ============== Predicate Tests ==============

    #[test]
    fn test_is_admin() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Guard.is_admin());
        assert!(!Role::Supervisor.is_admin());
        assert!(!Role::Hr.is_admin());
    }

    #[test]
    fn test_is_hr_or_admin() {
        assert!(Role::Hr.is_hr_or_admin());
        assert!(Role::Admin.is_hr_or_admin());
        assert!(!Role::Guard.is_hr_or_admin());
        assert!(!Role::Supervisor.is_hr_or_admin());
    }

    // ============== Metadata Tests ==============

    #[test]
    fn test_all_contains_each_role_once() {
        assert_eq!(Role::ALL.len(), 4);
        for role in Role::ALL {
            assert_eq!(Role::ALL.iter().filter(|r| **r == role).count(), 1);
        }
    }

    #[test]
    fn test_ids_are_lowercase() {
        for role in Role::ALL {
            assert_eq!(role.id(), role.id().to_lowercase());
        }
    }

    #[test]
    fn test_descriptions_are_non_empty() {
        for role in Role::ALL {
            assert!(!role.display_name().is_empty());
            assert!(!role.description().is_empty());
        }
    }

    // ============== Serialization Tests ==============

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Guard).unwrap(), "\"guard\"");
        assert_eq!(serde_json::to_string(&Role::Hr).unwrap(), "\"hr\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let role: Role = serde_json::from_str("\"supervisor\"").unwrap();
        assert_eq!(role, Role::Supervisor);
    }

    #[test]
    fn test_deserialize_unknown_fails() {
        assert!(serde_json::from_str::<Role>("\"manager\"").is_err());
        assert!(serde_json::from_str::<Role>("\"Admin\"").is_err());
    }
}
