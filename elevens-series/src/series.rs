//! Series play - many matches, one aggregated result
//!
//! Level 1 - Orchestration

use elevens_core::{Formation, Player, Team, NO_MOTM};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::config::SeriesConfig;
use crate::match_play::{play_single_match, MatchRecord, Outcome};

/// Name and count, for scorer and man-of-the-match tables
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    pub name: String,
    pub count: u32,
}

/// Aggregated series result, from the home team's point of view
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesResult {
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// Home scorers, most goals first
    pub top_scorers: Vec<TallyEntry>,
    /// Man of the match awards across both sides, most awards first.
    /// Matches without a man of the match are not counted.
    pub motm_awards: Vec<TallyEntry>,
    pub records: Vec<MatchRecord>,
}

impl SeriesResult {
    /// Create empty result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Aggregate played matches
    pub fn from_records(records: Vec<MatchRecord>) -> Self {
        let mut result = Self::empty();
        let mut scorers: FxHashMap<&str, u32> = FxHashMap::default();
        let mut motm: FxHashMap<&str, u32> = FxHashMap::default();

        for record in &records {
            result.matches_played += 1;
            match record.outcome() {
                Outcome::Win => result.wins += 1,
                Outcome::Draw => result.draws += 1,
                Outcome::Loss => result.losses += 1,
            }
            result.goals_for += record.result.home_goals;
            result.goals_against += record.result.away_goals;

            for scorer in &record.result.home_scorers {
                *scorers.entry(scorer.as_str()).or_default() += 1;
            }
            if record.result.motm != NO_MOTM {
                *motm.entry(record.result.motm.as_str()).or_default() += 1;
            }
        }

        result.top_scorers = sorted_tally(scorers);
        result.motm_awards = sorted_tally(motm);
        result.records = records;
        result
    }

    /// Combine two results
    pub fn combine(&self, other: &SeriesResult) -> SeriesResult {
        let mut records = self.records.clone();
        records.extend(other.records.iter().cloned());
        Self::from_records(records)
    }

    /// League points (3 per win, 1 per draw)
    pub fn points(&self) -> u32 {
        self.wins * Outcome::Win.points() + self.draws * Outcome::Draw.points()
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    pub fn win_rate(&self) -> f32 {
        if self.matches_played == 0 {
            0.0
        } else {
            self.wins as f32 / self.matches_played as f32
        }
    }
}

/// Play a series of matches (Level 1 orchestration)
///
/// Every match draws a new AI opponent from `players`. Match `i` is seeded
/// with `seed + i`, so parallel and sequential runs agree. An unseeded
/// config gets one random base seed for the whole series.
pub fn play_series(
    home: &Team,
    players: &[Player],
    formation: &Formation,
    config: &SeriesConfig,
) -> SeriesResult {
    play_series_with_progress(home, players, formation, config, |_| {})
}

/// Play a series, calling `on_match` after each match finishes
pub fn play_series_with_progress<F>(
    home: &Team,
    players: &[Player],
    formation: &Formation,
    config: &SeriesConfig,
    on_match: F,
) -> SeriesResult
where
    F: Fn(&MatchRecord) + Sync,
{
    if config.matches == 0 {
        return SeriesResult::empty();
    }

    let seeded;
    let config = match config.seed {
        Some(_) => config,
        None => {
            seeded = config.clone().with_seed(rand::random());
            &seeded
        }
    };

    tracing::info!(
        "Playing {} matches in {} ({}, seed {:?})",
        config.matches,
        formation.name,
        if config.parallel { "parallel" } else { "sequential" },
        config.seed
    );

    let play = |index: usize| {
        let record = play_single_match(home, players, formation, config, index);
        on_match(&record);
        record
    };

    let records: Vec<MatchRecord> = if config.parallel {
        (0..config.matches).into_par_iter().map(play).collect()
    } else {
        (0..config.matches).map(play).collect()
    };

    SeriesResult::from_records(records)
}

/// Highest count first, then alphabetical
fn sorted_tally(tally: FxHashMap<&str, u32>) -> Vec<TallyEntry> {
    let mut entries: Vec<TallyEntry> = tally
        .into_iter()
        .map(|(name, count)| TallyEntry {
            name: name.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    entries
}
