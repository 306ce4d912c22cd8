//! # Guardpost Audit
//!
//! In-memory access decision logging for Guardpost.

pub mod access_log;

pub use access_log::{AccessEntry, AccessEventType, AccessLog, AccessStats};
