//! Guardpost CLI - Command-line interface for Guardpost
//!
//! Usage:
//!   guardpost                                             - Start interactive mode
//!   guardpost policy check --role <role> --feature <f>    - Check a single permission
//!   guardpost policy roles                                - List defined roles
//!   guardpost policy table                                - Print the allow/deny matrix
//!   guardpost policy simulate <file>                      - Batch-evaluate checks from JSON

use clap::{Parser, Subcommand};
use cli::commands::PolicyCommand;
use cli::interactive::InteractiveCli;
use shared::GuardpostConfig;

#[derive(Parser)]
#[command(name = "guardpost")]
#[command(about = "Guardpost - Role-based feature access for the guard workforce platform")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Path to guardpost.json configuration
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Policy inspection and checks
    Policy(PolicyCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GuardpostConfig::from_file(path)?,
        None => GuardpostConfig::default(),
    };
    let json = cli.json || config.json;

    match cli.command {
        Some(Commands::Policy(cmd)) => cmd.run(&config, json),
        None => {
            // No subcommand - start interactive mode
            let mut interactive = InteractiveCli::new();
            interactive.run()
        }
    }
}
