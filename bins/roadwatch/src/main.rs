//! Roadwatch CLI - report and track potholes from the road.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use roadwatch_geo::Coordinate;
use std::process::ExitCode;

mod commands;
mod session;

use commands::{clear, list, nearby, remove_nearby, report};

/// Pothole reporting CLI for Roadwatch
#[derive(Parser)]
#[command(name = "roadwatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Current position as "lat,lng"
    #[arg(long, global = true, env = "ROADWATCH_POSITION", value_name = "LAT,LNG")]
    at: Option<Coordinate>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    /// Assume yes for confirmation prompts
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report a pothole at the current position
    Report,

    /// List reports near the current position
    Nearby,

    /// List all reports on record
    List,

    /// Remove every report near the current position
    RemoveNearby,

    /// Remove every report on record
    Clear,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("roadwatch=debug,roadwatch_reports=debug,roadwatch_store=debug")
            .init();
    }

    let result = match cli.command {
        Commands::Report => report::run(cli.at, &cli.format).await,
        Commands::Nearby => nearby::run(cli.at, &cli.format).await,
        Commands::List => list::run(cli.at, &cli.format).await,
        Commands::RemoveNearby => remove_nearby::run(cli.at, cli.yes, &cli.format).await,
        Commands::Clear => clear::run(cli.yes, &cli.format).await,
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
