//! Error types for Guardpost

use thiserror::Error;

/// Error returned when a role string does not name a defined role
#[derive(Debug, Clone, Error)]
#[error("Unknown role '{role}'. Defined roles: {}", known_roles.join(", "))]
pub struct UnknownRoleError {
    pub role: String,
    pub known_roles: Vec<String>,
}

/// General Guardpost error type
#[derive(Debug, Error)]
pub enum GuardpostError {
    #[error(transparent)]
    UnknownRole(#[from] UnknownRoleError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GuardpostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_error_message() {
        let err = UnknownRoleError {
            role: "dispatcher".to_string(),
            known_roles: vec!["guard".to_string(), "admin".to_string()],
        };

        let message = err.to_string();
        assert!(message.contains("dispatcher"));
        assert!(message.contains("guard, admin"));
    }

    #[test]
    fn test_unknown_role_converts_to_guardpost_error() {
        let err = UnknownRoleError {
            role: "x".to_string(),
            known_roles: vec![],
        };

        let wrapped: GuardpostError = err.into();
        assert!(matches!(wrapped, GuardpostError::UnknownRole(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let wrapped: GuardpostError = io.into();
        assert!(wrapped.to_string().contains("IO error"));
    }
}
