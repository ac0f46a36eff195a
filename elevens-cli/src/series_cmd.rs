//! Series command - play again and again against fresh AI opponents
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), play_with_progress(), report_results()
//! - Level 3: (delegated to elevens-series)
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use elevens_core::{Formation, Roster, Team};
use elevens_series::{play_series_with_progress, SeriesConfig, SeriesResult, TallyEntry};

use crate::match_cmd::ensure_complete;
use crate::team_cmd::{create_rng, home_team, load_roster, print_team};

/// Rows shown in the scorer and man-of-the-match tables
const TABLE_ROWS: usize = 5;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SeriesArgs {
    /// Formation name (defaults to the team file's, then 4-3-3)
    #[arg(long)]
    pub formation: Option<String>,

    /// Roster JSON file (defaults to the built-in sample roster)
    #[arg(long, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Team JSON file: {"formation": ..., "slots": {slotId: playerName}}
    #[arg(long, value_name = "FILE")]
    pub team: Option<PathBuf>,

    /// Number of matches to play
    #[arg(long, default_value = "10")]
    pub matches: usize,

    /// Play matches one at a time instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run series command
///
/// This function reads like a table of contents:
/// 1. Load the roster and the home team
/// 2. Play every match, ticking a progress bar
/// 3. Report the aggregated record
pub fn run(args: SeriesArgs, seed: Option<u64>) -> Result<()> {
    let roster = load_roster(args.roster.as_deref())?;
    let mut rng = home_rng(seed);
    let (formation, home) = home_team(
        &roster,
        args.formation.as_deref(),
        args.team.as_deref(),
        &mut rng,
    )?;
    ensure_complete(&home)?;

    let config = build_config(&args, seed);
    tracing::info!(
        "Starting series: {} matches in {} (seed={:?})",
        config.matches,
        formation.name,
        config.seed
    );

    let result = play_with_progress(&home, &roster, formation, &config, args.json)?;

    report_results(formation, &home, &result, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Resolves the base seed up front so the logged seed replays the series
fn build_config(args: &SeriesArgs, seed: Option<u64>) -> SeriesConfig {
    let config = SeriesConfig::new(args.matches).with_seed(seed.unwrap_or_else(rand::random));
    if args.sequential {
        config.sequential()
    } else {
        config
    }
}

fn play_with_progress(
    home: &Team,
    roster: &Roster,
    formation: &Formation,
    config: &SeriesConfig,
    quiet: bool,
) -> Result<SeriesResult> {
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(config.matches as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.green/white} {pos}/{len} matches [{elapsed}]")?
                .progress_chars("=> "),
        );
        bar
    };

    let result = play_series_with_progress(home, roster.players(), formation, config, |_| {
        progress.inc(1)
    });
    progress.finish_and_clear();

    Ok(result)
}

fn report_results(formation: &Formation, home: &Team, result: &SeriesResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print_team(formation, home);
        print_text_results(result);
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// RNG for a random home side. Match `i` is seeded with `seed + i`, so the
/// home side steps back one to stay clear of every opponent.
fn home_rng(seed: Option<u64>) -> rand_chacha::ChaCha8Rng {
    create_rng(seed.map(|s| s.wrapping_sub(1)))
}

fn percent(count: u32, total: u32) -> f32 {
    if total == 0 {
        0.0
    } else {
        count as f32 / total as f32 * 100.0
    }
}

fn print_text_results(result: &SeriesResult) {
    let total = result.matches_played;

    println!("\n=== Series Results ===");
    println!("Matches: {}", total);
    println!("Won:     {} ({:.1}%)", result.wins, percent(result.wins, total));
    println!("Drawn:   {} ({:.1}%)", result.draws, percent(result.draws, total));
    println!("Lost:    {} ({:.1}%)", result.losses, percent(result.losses, total));
    println!(
        "Goals:   {} for, {} against ({:+})",
        result.goals_for,
        result.goals_against,
        result.goal_difference()
    );
    println!("Points:  {}", result.points());

    print_tally("Top scorers", &result.top_scorers);
    print_tally("Man of the match", &result.motm_awards);
}

fn print_tally(title: &str, entries: &[TallyEntry]) {
    println!("\n{}:", title);
    if entries.is_empty() {
        println!("  -");
    }
    for entry in entries.iter().take(TABLE_ROWS) {
        println!("  {:<26} {}", entry.name, entry.count);
    }
}

// ============================================================================
// TESTS
// ============================================================================
