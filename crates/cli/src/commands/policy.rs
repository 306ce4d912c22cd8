//! guardpost policy command

use audit::AccessLog;
use clap::{Args, Subcommand};
use console::style;
use rbac::PolicyTable;
use serde::{Deserialize, Serialize};
use shared::{GuardpostConfig, Role};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Args)]
pub struct PolicyCommand {
    #[command(subcommand)]
    pub command: PolicySubcommand,
}

#[derive(Debug, Subcommand)]
pub enum PolicySubcommand {
    /// Check whether a role may use a feature
    Check {
        /// Role to check
        #[arg(short, long)]
        role: String,
        /// Feature to check
        #[arg(short, long)]
        feature: String,
    },
    /// List all defined roles
    Roles,
    /// Print the full allow/deny matrix
    Table,
    /// Evaluate a batch of role/feature pairs from a JSON file
    Simulate {
        /// JSON file containing [{"role": "...", "feature": "..."}, ...]
        file: PathBuf,
    },
}

/// One role/feature pair from a simulation file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedCheck {
    pub role: String,
    pub feature: String,
}

impl PolicyCommand {
    pub fn run(&self, config: &GuardpostConfig, json: bool) -> anyhow::Result<()> {
        let table = PolicyTable::builtin();

        match &self.command {
            PolicySubcommand::Check { role, feature } => {
                let decision = table.decide(role, feature);

                if json {
                    println!("{}", serde_json::to_string_pretty(&decision)?);
                } else {
                    println!("{} {}", verdict(decision.allowed), decision.reason);
                }

                if !decision.allowed {
                    std::process::exit(1);
                }
            }
            PolicySubcommand::Roles => {
                let matrix = table.matrix();

                if json {
                    println!("{}", serde_json::to_string_pretty(&matrix)?);
                } else {
                    println!("Defined roles:");
                    for row in &matrix {
                        let denied = if row.denied_features.is_empty() {
                            "none".to_string()
                        } else {
                            row.denied_features.join(", ")
                        };
                        println!("  {:<12} {} (denied: {})", row.role, row.description, denied);
                    }
                }
            }
            PolicySubcommand::Table => {
                let matrix = table.matrix();

                if json {
                    println!("{}", serde_json::to_string_pretty(&matrix)?);
                } else {
                    println!(
                        "{:<12} {:<24} {:<8} {:<8} denied features",
                        "role", "name", "admin", "hr"
                    );
                    for row in &matrix {
                        println!(
                            "{:<12} {:<24} {:<8} {:<8} {}",
                            row.role,
                            row.name,
                            row.admin_access,
                            row.hr_access,
                            if row.denied_features.is_empty() {
                                "-".to_string()
                            } else {
                                row.denied_features.join(", ")
                            }
                        );
                    }
                }
            }
            PolicySubcommand::Simulate { file } => {
                let checks = read_checks(file)?;
                let mut log = AccessLog::new(config.audit.max_entries);

                for check in &checks {
                    let decision = table.decide(&check.role, &check.feature);
                    if Role::from_str(&check.role).is_err() {
                        log.record_unknown_role(&check.role, &check.feature);
                    } else {
                        log.record_check(
                            &check.role,
                            &check.feature,
                            decision.allowed,
                            Some(&decision.reason),
                        );
                    }

                    if !json {
                        println!(
                            "{} {} -> {}",
                            verdict(decision.allowed),
                            check.role,
                            check.feature
                        );
                    }
                }

                let stats = log.stats();
                if json {
                    let report = serde_json::json!({
                        "stats": stats,
                        "entries": log.export_json(),
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    println!();
                    println!(
                        "{} checks, {} denied ({} unknown roles)",
                        stats.total_entries, stats.denial_count, stats.unknown_role_count
                    );
                }
            }
        }

        Ok(())
    }
}

fn verdict(allowed: bool) -> console::StyledObject<&'static str> {
    if allowed {
        style("ALLOWED").green().bold()
    } else {
        style("DENIED").red().bold()
    }
}

fn read_checks(path: &Path) -> anyhow::Result<Vec<SimulatedCheck>> {
    let content = std::fs::read_to_string(path)?;
    let checks: Vec<SimulatedCheck> = serde_json::from_str(&content)?;
    Ok(checks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_checks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"role": "guard", "feature": "audit"}},
                {{"role": "hr", "feature": "tracking"}}
            ]"#
        )
        .unwrap();

        let checks = read_checks(file.path()).unwrap();
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].role, "guard");
        assert_eq!(checks[1].feature, "tracking");
    }

    #[test]
    fn test_read_checks_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not a list }}").unwrap();

        assert!(read_checks(file.path()).is_err());
    }

    #[test]
    fn test_read_checks_missing_file() {
        assert!(read_checks(Path::new("/nonexistent/checks.json")).is_err());
    }
}
