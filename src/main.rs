//! Logging profile resolver.
//!
//! Loads a TOML description of logging profiles and deployment trees, binds
//! each unit to the logging context of its nearest resolved profile, and
//! prints the result.
//!
//! ```text
//!   config.toml ─▶ loader ─▶ validation ─▶ AppConfig
//!                                           │
//!                    ┌──────────────────────┴───────────────────┐
//!                    ▼                                          ▼
//!       InMemoryProfileRegistry                    DeploymentUnit trees
//!                    │                                          │
//!                    └──────────▶ LoggingProfileProcessor ◀─────┘
//!                                   deploy / resolve
//!                                          │
//!                                          ▼
//!                               UnitSummary + ResolveReport
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use logging_profiles::config::load_config;
use logging_profiles::deployment::UnitSummary;
use logging_profiles::observability::logging::init_logging;
use logging_profiles::processor::{DeployOutcome, ResolveReport};
use logging_profiles::{DeploymentUnit, InMemoryProfileRegistry, LoggingProfileProcessor};

#[derive(Parser)]
#[command(name = "logging-profiles")]
#[command(about = "Resolve logging profiles across deployment trees", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bind logging profiles and print the resulting trees
    Resolve {
        #[arg(short, long)]
        config: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Load and validate a configuration file
    Check {
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Output {
    deployments: Vec<UnitSummary>,
    report: ResolveReport,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { config, format } => {
            let config = load_config(&config)?;
            init_logging(&config.observability)?;

            let registry = InMemoryProfileRegistry::from_config(&config);
            let processor = LoggingProfileProcessor::new(registry);

            let mut report = ResolveReport::default();
            let mut deployments = Vec::with_capacity(config.deployments.len());
            for deployment in &config.deployments {
                let mut unit = DeploymentUnit::from_config(deployment);
                match processor.deploy(&mut unit) {
                    DeployOutcome::Processed(unit_report) => report.merge(unit_report),
                    DeployOutcome::Skipped(reason) => {
                        tracing::info!(unit = %unit.id(), reason = ?reason, "Deployment skipped");
                    }
                }
                deployments.push(unit.summary());
            }

            match format {
                Format::Json => {
                    let output = Output { deployments, report };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                Format::Text => print_text(&deployments, &report),
            }
        }
        Commands::Check { config } => {
            let config = load_config(&config)?;
            println!(
                "OK: {} profile(s), {} deployment(s)",
                config.profiles.len(),
                config.deployments.len()
            );
        }
    }

    Ok(())
}

fn print_text(deployments: &[UnitSummary], report: &ResolveReport) {
    for unit in deployments {
        print_unit(unit, 0);
    }
    println!(
        "\n{} unit(s) visited, {} context(s) bound, {} handle(s) attached",
        report.visited.len(),
        report.contexts_bound,
        report.handles_attached
    );
    for unresolved in &report.unresolved {
        println!(
            "warning: profile '{}' declared by {} was not found",
            unresolved.profile, unresolved.resource
        );
    }
}

fn print_unit(unit: &UnitSummary, depth: usize) {
    let context = match &unit.bound_context {
        Some(bound) => format!("{} ({})", bound.profile, bound.id),
        None => "-".to_string(),
    };
    println!(
        "{:indent$}{}  declared={}  context={}  handle={}",
        "",
        unit.name,
        unit.declared_profile.as_deref().unwrap_or("-"),
        context,
        unit.handle.as_deref().unwrap_or("-"),
        indent = depth * 2
    );
    for child in &unit.children {
        print_unit(child, depth + 1);
    }
}
