//! Team strength evaluation

use serde::{Deserialize, Serialize};

use crate::team::Team;

/// Stat weights for strength scoring
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrengthWeights {
    pub goal: f64,
    pub assist: f64,
    pub expected_goals: f64,
    pub expected_assists: f64,
    pub minutes: f64,
    /// Subtracted per yellow card
    pub yellow_card: f64,
    /// Subtracted per red card
    pub red_card: f64,
}

impl Default for StrengthWeights {
    fn default() -> Self {
        Self {
            goal: 3.0,
            assist: 2.0,
            expected_goals: 2.5,
            expected_assists: 1.5,
            minutes: 0.001,
            yellow_card: 0.5,
            red_card: 2.0,
        }
    }
}

/// Strength of a team: summed player scores scaled by the share of filled
/// slots, so an incomplete squad is weaker than the same players plus one.
/// A team with no players has strength 0.
pub fn team_strength(team: &Team, weights: &StrengthWeights, squad_size: usize) -> f64 {
    let filled = team.filled_count();
    if filled == 0 || squad_size == 0 {
        return 0.0;
    }

    let total = team.players().fold(0.0, |sum, p| {
        sum + p.goals * weights.goal
            + p.assists * weights.assist
            + p.expected_goals * weights.expected_goals
            + p.expected_assists * weights.expected_assists
            + p.minutes_played * weights.minutes
            - p.yellow_cards * weights.yellow_card
            - p.red_cards * weights.red_card
    });

    total * (filled as f64 / squad_size as f64)
}
