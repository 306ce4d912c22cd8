//! Feature keys for the dashboard
//!
//! Features are opaque strings; the policy layer never validates them against
//! a registry. The constants here only name the capability areas the
//! dashboard ships with, so callers and tests don't scatter string literals.

/// Audit trail and compliance review
pub const AUDIT: &str = "audit";

/// Live guard location tracking
pub const TRACKING: &str = "tracking";

/// Patrol checkpoint management
pub const CHECKPOINTS: &str = "checkpoints";

/// Equipment assignment and inventory
pub const EQUIPMENT: &str = "equipment";

/// Notification center
pub const NOTIFICATIONS: &str = "notifications";

/// Reports and analytics
pub const REPORTS: &str = "reports";

/// Emergency alert dispatch
pub const EMERGENCY: &str = "emergency";
