//! Integration tests for series play against the sample roster

use elevens_core::{Formation, MatchEngine, Roster};
use elevens_series::{play_series, play_series_with_progress, SeriesConfig, SeriesResult};
use std::sync::atomic::{AtomicUsize, Ordering};

fn home_team(formation: &Formation) -> elevens_core::Team {
    let roster = Roster::sample();
    MatchEngine::with_seed(2024).assign(roster.players(), formation)
}

#[test]
fn test_parallel_matches_sequential() {
    let roster = Roster::sample();
    let formation = Formation::by_name("4-3-3").unwrap();
    let home = home_team(formation);

    let parallel = play_series(&home, roster.players(), formation, &SeriesConfig::new(24).with_seed(9));
    let sequential = play_series(
        &home,
        roster.players(),
        formation,
        &SeriesConfig::new(24).with_seed(9).sequential(),
    );

    assert_eq!(parallel, sequential);
}

#[test]
fn test_series_totals_are_consistent() {
    let roster = Roster::sample();
    let formation = Formation::by_name("3-5-2").unwrap();
    let home = home_team(formation);
    let result = play_series(&home, roster.players(), formation, &SeriesConfig::new(40).with_seed(1));

    assert_eq!(result.matches_played, 40);
    assert_eq!(result.wins + result.draws + result.losses, 40);
    assert_eq!(result.records.len(), 40);

    let goals_for: u32 = result.records.iter().map(|r| r.result.home_goals).sum();
    assert_eq!(goals_for, result.goals_for);

    let tallied: u32 = result.top_scorers.iter().map(|e| e.count).sum();
    assert_eq!(tallied, result.goals_for);

    for (i, record) in result.records.iter().enumerate() {
        assert_eq!(record.match_number, i + 1);
        assert!(record.opponent.is_complete());
    }
}

#[test]
fn test_zero_matches() {
    let roster = Roster::sample();
    let formation = Formation::by_name("4-4-2").unwrap();
    let result = play_series(&formation.empty_team(), roster.players(), formation, &SeriesConfig::new(0));
    assert_eq!(result, SeriesResult::empty());
}

#[test]
fn test_progress_called_per_match() {
    let roster = Roster::sample();
    let formation = Formation::by_name("5-3-2").unwrap();
    let home = home_team(formation);
    let seen = AtomicUsize::new(0);

    play_series_with_progress(&home, roster.players(), formation, &SeriesConfig::new(15), |_| {
        seen.fetch_add(1, Ordering::Relaxed);
    });

    assert_eq!(seen.load(Ordering::Relaxed), 15);
}

#[test]
fn test_result_serializes() {
    let roster = Roster::sample();
    let formation = Formation::by_name("4-2-3-1").unwrap();
    let home = home_team(formation);
    let result = play_series(&home, roster.players(), formation, &SeriesConfig::new(3).with_seed(5));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["matchesPlayed"], 3);
    assert_eq!(json["records"].as_array().unwrap().len(), 3);
    assert!(json["records"][0]["result"]["winner"].is_string());
}

#[test]
fn test_unseeded_series_are_not_replayed() {
    let roster = Roster::sample();
    let formation = Formation::by_name("4-3-3").unwrap();
    let home = home_team(formation);
    let config = SeriesConfig::new(10);

    let first = play_series(&home, roster.players(), formation, &config);
    let second = play_series(&home, roster.players(), formation, &config);
    assert_ne!(first.records, second.records);
}
