//! Interactive REPL mode

use std::io::{self, Write};
use std::str::FromStr;

use console::style;
use rbac::PolicyTable;
use shared::Role;

/// Interactive CLI for exploring the access policy
pub struct InteractiveCli {
    table: PolicyTable,
    current_role: Option<Role>,
}

impl InteractiveCli {
    pub fn new() -> Self {
        Self {
            table: PolicyTable::builtin(),
            current_role: None,
        }
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("Guardpost Interactive Mode");
        println!("Type /help for commands, /quit to exit");
        println!();

        loop {
            // Print prompt
            let role = self.current_role.map(|r| r.id()).unwrap_or("no role");
            print!("[{}] > ", role);
            io::stdout().flush()?;

            // Read input
            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            // Handle commands
            if input.starts_with('/') {
                match self.handle_command(input) {
                    Ok(should_exit) if should_exit => break,
                    Ok(_) => continue,
                    Err(e) => {
                        println!("Error: {}", e);
                        continue;
                    }
                }
            }

            // Bare input is a feature check against the current role
            self.check_feature(input);
        }

        Ok(())
    }

    fn check_feature(&self, feature: &str) {
        match self.current_role {
            Some(role) => {
                let decision = self.table.decide(role.id(), feature);
                let verdict = if decision.allowed {
                    style("ALLOWED").green().bold()
                } else {
                    style("DENIED").red().bold()
                };
                println!("{} {}", verdict, decision.reason);
            }
            None => println!("No role selected. Use /role <id> first."),
        }
    }

    fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => {
                println!("Commands:");
                println!("  /role <id>              - Switch current role");
                println!("  /roles                  - List defined roles");
                println!("  /check [role] <feature> - Check a permission");
                println!("  /table                  - Print the allow/deny matrix");
                println!("  /status                 - Show current status");
                println!("  /quit                   - Exit");
                println!();
                println!("Bare input is checked as a feature for the current role.");
            }
            "/role" => match parts.get(1) {
                Some(id) => match Role::from_str(id) {
                    Ok(role) => {
                        self.current_role = Some(role);
                        println!("Role set to: {}", role);
                    }
                    Err(e) => println!("{}", e),
                },
                None => match self.current_role {
                    Some(role) => println!("Current role: {}", role),
                    None => println!("No role selected"),
                },
            },
            "/roles" => {
                println!("Defined roles:");
                for row in self.table.matrix() {
                    let denied = if row.denied_features.is_empty() {
                        "none".to_string()
                    } else {
                        row.denied_features.join(", ")
                    };
                    println!("  {:<12} {} (denied: {})", row.role, row.description, denied);
                }
            }
            "/check" => match (parts.get(1), parts.get(2)) {
                (Some(role), Some(feature)) => {
                    let decision = self.table.decide(role, feature);
                    let verdict = if decision.allowed {
                        style("ALLOWED").green().bold()
                    } else {
                        style("DENIED").red().bold()
                    };
                    println!("{} {}", verdict, decision.reason);
                }
                (Some(feature), None) => self.check_feature(feature),
                _ => println!("Usage: /check [role] <feature>"),
            },
            "/table" => {
                for row in self.table.matrix() {
                    println!(
                        "  {:<12} admin={:<5} hr={:<5} denied: {}",
                        row.role,
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
            "/status" => {
                println!("Status:");
                println!("  Role: {:?}", self.current_role.map(|r| r.id()));
            }
            _ => {
                println!("Unknown command: {}", cmd);
            }
        }

        Ok(false)
    }
}

impl Default for InteractiveCli {
    fn default() -> Self {
        Self::new()
    }
}
