//! Aggregate team stats

use serde::Serialize;

use crate::team::Team;

/// Totals over a team's filled slots
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub player_count: usize,
    pub is_complete: bool,
    pub goals: f64,
    pub assists: f64,
    pub minutes: f64,
    pub yellow_cards: f64,
    pub expected_goals: f64,
    pub expected_assists: f64,
    /// Rounded `goals*3 + assists*2 + xG*2.5 + xA*1.5`
    pub power_score: i64,
}

impl TeamStats {
    pub fn from_team(team: &Team) -> Self {
        let mut stats = team.players().fold(Self::default(), |mut acc, p| {
            acc.player_count += 1;
            acc.goals += p.goals;
            acc.assists += p.assists;
            acc.minutes += p.minutes_played;
            acc.yellow_cards += p.yellow_cards;
            acc.expected_goals += p.expected_goals;
            acc.expected_assists += p.expected_assists;
            acc
        });

        stats.is_complete = team.is_complete();
        stats.power_score = (stats.goals * 3.0
            + stats.assists * 2.0
            + stats.expected_goals * 2.5
            + stats.expected_assists * 1.5)
            .round() as i64;
        stats
    }
}
