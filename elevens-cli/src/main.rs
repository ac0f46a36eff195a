//! Elevens CLI - Command-line interface
//!
//! Commands:
//! - formations: List the formation catalog
//! - random: Auto-assign a team
//! - play: Play one match against an AI opponent
//! - series: Play many matches and tally the results
//! - serve: Start the HTTP API

mod match_cmd;
mod series_cmd;
mod server;
mod team_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "elevens")]
#[command(about = "Fantasy football squad builder and match simulator")]
#[command(version)]
struct Cli {
    /// Random seed for reproducible teams and matches
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available formations
    Formations,
    /// Auto-assign a team from the roster
    Random(team_cmd::RandomArgs),
    /// Play a single match against an AI opponent
    Play(match_cmd::MatchArgs),
    /// Play a series of matches against fresh AI opponents
    Series(series_cmd::SeriesArgs),
    /// Start the HTTP API server
    Serve(server::ServerArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Formations => team_cmd::list_formations(),
        Commands::Random(args) => team_cmd::run_random(args, cli.seed),
        Commands::Play(args) => match_cmd::run(args, cli.seed),
        Commands::Series(args) => series_cmd::run(args, cli.seed),
        Commands::Serve(args) => server::run(args, cli.seed),
    }
}
