//! Team commands - formation catalog, random teams and team files
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: list_formations(), run_random() - orchestration
//! - Level 2: load_roster(), resolve_formation(), home_team() - shared phases
//! - Level 3: load_team_file(), build_team_from_file()
//! - Level 4: create_rng(), printing

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use elevens_core::{assign_squad, AssignConfig, Formation, Roster, Team, TeamStats, FORMATIONS};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct RandomArgs {
    /// Formation name, e.g. 4-3-3
    #[arg(long, default_value = "4-3-3")]
    pub formation: String,

    /// Roster JSON file (defaults to the built-in sample roster)
    #[arg(long, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Output the team as JSON
    #[arg(long)]
    pub json: bool,
}

/// Hand-picked team on disk: slot id to player name
#[derive(Debug, Deserialize)]
pub struct TeamFile {
    pub formation: Option<String>,
    #[serde(default)]
    pub slots: BTreeMap<String, String>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Print every formation with its slots
pub fn list_formations() -> Result<()> {
    for formation in FORMATIONS.iter() {
        let labels: Vec<&str> = formation.slots.iter().map(|s| s.label).collect();
        println!("{:<8} {}", formation.name, labels.join(" "));
    }
    Ok(())
}

/// Run random command
///
/// 1. Load the roster
/// 2. Auto-assign a team in the chosen formation
/// 3. Print it
pub fn run_random(args: RandomArgs, seed: Option<u64>) -> Result<()> {
    let roster = load_roster(args.roster.as_deref())?;
    let formation = resolve_formation(&args.formation)?;
    let mut rng = create_rng(seed);

    let team = assign_squad(roster.players(), formation, &AssignConfig::default(), &mut rng);
    tracing::info!("Assigned {}/11 players in {}", team.filled_count(), formation.name);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&team)?);
    } else {
        print_team(formation, &team);
    }
    Ok(())
}

// ============================================================================
// LEVEL 2 - SHARED PHASES
// ============================================================================

/// Load a roster file, or the sample roster when none is given
pub fn load_roster(path: Option<&Path>) -> Result<Roster> {
    match path {
        Some(path) => Roster::load(path),
        None => Ok(Roster::sample()),
    }
}

/// Look up a formation by name
pub fn resolve_formation(name: &str) -> Result<&'static Formation> {
    Formation::by_name(name).with_context(|| {
        let names: Vec<&str> = FORMATIONS.iter().map(|f| f.name).collect();
        format!("Unknown formation: {} (available: {})", name, names.join(", "))
    })
}

/// The user's side: from a team file if given, otherwise auto-assigned
///
/// A team file may name its own formation; it must agree with `formation`
/// when both are given.
pub fn home_team(
    roster: &Roster,
    formation_arg: Option<&str>,
    team_path: Option<&Path>,
    rng: &mut ChaCha8Rng,
) -> Result<(&'static Formation, Team)> {
    match team_path {
        Some(path) => {
            let file = load_team_file(path)?;
            let name = match (formation_arg, file.formation.as_deref()) {
                (Some(arg), Some(from_file)) if arg != from_file => anyhow::bail!(
                    "Team file {} is a {} team, not {}",
                    path.display(),
                    from_file,
                    arg
                ),
                (Some(arg), _) => arg,
                (None, Some(from_file)) => from_file,
                (None, None) => FORMATIONS[0].name,
            };
            let formation = resolve_formation(name)?;
            let team = build_team_from_file(roster, formation, &file)
                .with_context(|| format!("Invalid team file: {}", path.display()))?;
            Ok((formation, team))
        }
        None => {
            let formation = resolve_formation(formation_arg.unwrap_or(FORMATIONS[0].name))?;
            let team = assign_squad(roster.players(), formation, &AssignConfig::default(), rng);
            Ok((formation, team))
        }
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn load_team_file(path: &Path) -> Result<TeamFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read team file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse team file: {}", path.display()))
}

/// Place every named player, applying the same checks as manual selection
pub fn build_team_from_file(roster: &Roster, formation: &Formation, file: &TeamFile) -> Result<Team> {
    let mut team = formation.empty_team();
    for (slot_id, player_name) in &file.slots {
        let player = roster
            .find(player_name)
            .with_context(|| format!("Player not in roster: {}", player_name))?;
        team.place(formation, slot_id, player.clone())?;
    }
    Ok(team)
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
pub fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Print a team slot by slot, then its totals
pub fn print_team(formation: &Formation, team: &Team) {
    println!("\n=== {} ({}/11) ===", formation.name, team.filled_count());
    for (slot, assignment) in formation.slots.iter().zip(team.slots()) {
        match &assignment.player {
            Some(p) => println!(
                "  {:<4} {:<26} {:<3} {:<20} {:>4.0}G {:>4.0}A",
                slot.label, p.player_name, p.position.code(), p.team_name, p.goals, p.assists
            ),
            None => println!("  {:<4} -", slot.label),
        }
    }

    let stats = TeamStats::from_team(team);
    println!(
        "Power score: {}  (G {:.0}, A {:.0}, xG {:.1}, xA {:.1})",
        stats.power_score, stats.goals, stats.assists, stats.expected_goals, stats.expected_assists
    );
}

// ============================================================================
// TESTS
// ============================================================================
