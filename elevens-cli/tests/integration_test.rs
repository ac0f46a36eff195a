//! Integration tests for the Elevens stack
//!
//! Tests the full flow: roster, manual and automatic selection, single
//! matches and series play

use elevens_core::{
    assign_squad, simulate_match, AssignConfig, Formation, MatchEngine, Roster,
    SimulationConfig, TeamError, TeamStats, Winner, FORMATIONS, NO_MOTM,
};
use elevens_series::{play_series, SeriesConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn roster() -> Roster {
    Roster::sample()
}

/// Hand-picked 4-3-3 built through the manual selection path
fn hand_picked_433() -> elevens_core::Team {
    let roster = roster();
    let formation = Formation::by_name("4-3-3").unwrap();
    let mut team = formation.empty_team();
    let picks = [
        ("GK", "David Raya"),
        ("LB", "Gabriel Magalhaes"),
        ("CB1", "William Saliba"),
        ("CB2", "Virgil van Dijk"),
        ("RB", "Ben White"),
        ("CM1", "Declan Rice"),
        ("CM2", "Martin Odegaard"),
        ("CM3", "Rodri"),
        ("LW", "Phil Foden"),
        ("ST", "Erling Haaland"),
        ("RW", "Bukayo Saka"),
    ];
    for (slot, name) in picks {
        let player = roster.find(name).unwrap().clone();
        team.place(formation, slot, player).unwrap();
    }
    team
}

// ============================================================================
// SELECTION
// ============================================================================

#[test]
fn test_every_formation_fills_from_sample_roster() {
    let roster = roster();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for formation in FORMATIONS.iter() {
        let team = assign_squad(roster.players(), formation, &AssignConfig::default(), &mut rng);
        assert!(team.is_complete(), "{} should fill", formation.name);

        let names: HashSet<&str> = team.players().map(|p| p.player_name.as_str()).collect();
        assert_eq!(names.len(), 11, "{} has duplicate players", formation.name);

        for (slot, assignment) in formation.slots.iter().zip(team.slots()) {
            let player = assignment.player.as_ref().unwrap();
            assert!(slot.accepts(player.position), "{} in {}", player.player_name, slot.id);
        }
    }
}

#[test]
fn test_manual_selection_rules() {
    let roster = roster();
    let formation = Formation::by_name("4-3-3").unwrap();
    let mut team = formation.empty_team();

    let haaland = roster.find("Erling Haaland").unwrap().clone();
    assert!(matches!(
        team.place(formation, "GK", haaland.clone()),
        Err(TeamError::InvalidPosition { .. })
    ));

    team.place(formation, "ST", haaland.clone()).unwrap();
    assert_eq!(
        team.place(formation, "LW", haaland),
        Err(TeamError::DuplicatePlayer("Erling Haaland".to_string()))
    );

    let stats = TeamStats::from_team(&team);
    assert_eq!(stats.player_count, 1);
    assert!(!stats.is_complete);
}

// ============================================================================
// MATCHES
// ============================================================================

#[test]
fn test_hand_picked_team_plays_a_match() {
    let home = hand_picked_433();
    assert!(home.is_complete());

    let mut engine = MatchEngine::with_seed(2024);
    let (opponent, result) = engine.play_against_ai(&home, roster().players(), Formation::by_name("4-3-3").unwrap());

    assert!(opponent.is_complete());
    assert_eq!(result.home_scorers.len() as u32, result.home_goals);
    assert_eq!(result.away_scorers.len() as u32, result.away_goals);
    assert_eq!(result.winner, Winner::from_goals(result.home_goals, result.away_goals));
    assert_ne!(result.motm, NO_MOTM);
}

#[test]
fn test_empty_teams_have_no_scorers() {
    let formation = Formation::by_name("5-3-2").unwrap();
    let empty = formation.empty_team();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let result = simulate_match(&empty, &empty, &SimulationConfig::default(), &mut rng);
    assert!(result.home_scorers.is_empty());
    assert!(result.away_scorers.is_empty());
    assert_eq!(result.motm, NO_MOTM);
}

#[test]
fn test_seeded_engines_agree() {
    let home = hand_picked_433();
    let formation = Formation::by_name("4-3-3").unwrap();
    let players = roster();

    let a = MatchEngine::with_seed(8).play_against_ai(&home, players.players(), formation);
    let b = MatchEngine::with_seed(8).play_against_ai(&home, players.players(), formation);
    assert_eq!(a, b);
}

// ============================================================================
// SERIES
// ============================================================================

#[test]
fn test_series_full_stack() {
    let home = hand_picked_433();
    let formation = Formation::by_name("4-3-3").unwrap();
    let config = SeriesConfig::new(30).with_seed(77);

    let result = play_series(&home, roster().players(), formation, &config);

    assert_eq!(result.matches_played, 30);
    assert_eq!(result.records.len(), 30);
    assert_eq!(result.wins + result.draws + result.losses, 30);

    let scored: u32 = result.top_scorers.iter().map(|e| e.count).sum();
    assert_eq!(scored, result.goals_for);

    let awards: u32 = result.motm_awards.iter().map(|e| e.count).sum();
    assert_eq!(awards, 30);
}
