//! Match command - play one match against an AI opponent
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: ensure_complete(), report_result()
//! - Level 3: (delegated to elevens-core MatchEngine)
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use elevens_core::{Formation, MatchEngine, MatchResult, Team, Winner, SQUAD_SIZE};

use crate::team_cmd::{create_rng, home_team, load_roster, print_team};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Formation name (defaults to the team file's, then 4-3-3)
    #[arg(long)]
    pub formation: Option<String>,

    /// Roster JSON file (defaults to the built-in sample roster)
    #[arg(long, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Team JSON file: {"formation": ..., "slots": {slotId: playerName}}
    #[arg(long, value_name = "FILE")]
    pub team: Option<PathBuf>,

    /// Output the match as JSON
    #[arg(long)]
    pub json: bool,
}

/// Everything one match produced
#[derive(Serialize)]
struct MatchReport<'a> {
    formation: &'static str,
    home: &'a Team,
    opponent: &'a Team,
    result: &'a MatchResult,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// This function reads like a table of contents:
/// 1. Load the roster and the home team
/// 2. Refuse to play an incomplete team
/// 3. Generate an opponent and simulate
/// 4. Report the result
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    let roster = load_roster(args.roster.as_deref())?;
    let mut engine = match seed {
        Some(s) => MatchEngine::with_seed(s),
        None => MatchEngine::new(),
    };

    let mut rng = create_rng(seed.map(|s| s.wrapping_add(1)));
    let (formation, home) = home_team(
        &roster,
        args.formation.as_deref(),
        args.team.as_deref(),
        &mut rng,
    )?;
    ensure_complete(&home)?;

    let (opponent, result) = engine.play_against_ai(&home, roster.players(), formation);
    tracing::info!(
        "{} {}-{} AI ({:?})",
        formation.name,
        result.home_goals,
        result.away_goals,
        result.winner
    );

    let report = MatchReport {
        formation: formation.name,
        home: &home,
        opponent: &opponent,
        result: &result,
    };
    report_result(formation, &report, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// A match needs a full eleven on the home side
pub fn ensure_complete(team: &Team) -> Result<()> {
    if !team.is_complete() {
        anyhow::bail!(
            "You need {} players to play. Currently have {}/{}",
            SQUAD_SIZE,
            team.filled_count(),
            SQUAD_SIZE
        );
    }
    Ok(())
}

fn report_result(formation: &Formation, report: &MatchReport<'_>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_text_result(formation, report);
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn print_text_result(formation: &Formation, report: &MatchReport<'_>) {
    print_team(formation, report.home);
    println!("\nOpponent:");
    print_team(formation, report.opponent);

    let result = report.result;
    println!("\n=== Full Time ===");
    println!("You {} - {} AI", result.home_goals, result.away_goals);
    println!("{}", headline(result.winner));
    println!("Your scorers: {}", scorer_line(&result.home_scorers));
    println!("AI scorers:   {}", scorer_line(&result.away_scorers));
    println!("Man of the match: {}", result.motm);
}

fn headline(winner: Winner) -> &'static str {
    match winner {
        Winner::Home => "You win!",
        Winner::Away => "The AI wins.",
        Winner::Draw => "It's a draw.",
    }
}

fn scorer_line(scorers: &[String]) -> String {
    if scorers.is_empty() {
        "-".to_string()
    } else {
        scorers.join(", ")
    }
}

// ============================================================================
// TESTS
// ============================================================================
