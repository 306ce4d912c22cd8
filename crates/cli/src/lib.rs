//! # Guardpost CLI
//!
//! Command modules and the interactive mode for the `guardpost` binary.

pub mod commands;
pub mod interactive;
