//! Match simulation
//!
//! A single match is resolved in one pass:
//! 1. Strength per side (see [`team_strength`])
//! 2. Expected goals from relative strength, home side boosted
//! 3. Noisy goal draw per side
//! 4. Winner by goal comparison
//! 5. Weighted scorer lottery per side
//! 6. Man of the match from the winning side (home on a draw)
//!
//! Nothing here fails: empty teams degrade to zero strength, empty scorer
//! lists and the [`NO_MOTM`] sentinel.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::formation::SQUAD_SIZE;
use crate::player::Player;
use crate::strength::{team_strength, StrengthWeights};
use crate::team::Team;

/// Man of the match when the deciding side has no players
pub const NO_MOTM: &str = "N/A";

/// Upper bound on one side's goals. Card penalties can push a strength
/// negative, which makes the other side's expected goals unbounded.
pub const MAX_GOALS: u32 = 30;

/// Simulation parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Goals shared out between the sides by relative strength
    pub base_goals: f64,
    /// Multiplier applied to the home side's share only
    pub home_advantage: f64,
    /// Width of the uniform noise added to expected goals
    pub noise_spread: f64,
    /// Slot count a complete team fills
    pub squad_size: usize,
    pub weights: StrengthWeights,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            base_goals: 2.5,
            home_advantage: 1.1,
            noise_spread: 3.0,
            squad_size: SQUAD_SIZE,
            weights: StrengthWeights::default(),
        }
    }
}

impl SimulationConfig {
    /// Set custom strength weights
    pub fn with_weights(mut self, weights: StrengthWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set home advantage multiplier
    pub fn with_home_advantage(mut self, home_advantage: f64) -> Self {
        self.home_advantage = home_advantage;
        self
    }
}

/// Match winner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Home,
    Away,
    Draw,
}

impl Winner {
    pub fn from_goals(home_goals: u32, away_goals: u32) -> Self {
        if home_goals > away_goals {
            Winner::Home
        } else if away_goals > home_goals {
            Winner::Away
        } else {
            Winner::Draw
        }
    }
}

/// Outcome of one simulated match
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub home_goals: u32,
    pub away_goals: u32,
    pub winner: Winner,
    /// Scorer surnames, one entry per home goal
    pub home_scorers: Vec<String>,
    /// Scorer surnames, one entry per away goal
    pub away_scorers: Vec<String>,
    /// Full name of the man of the match, or [`NO_MOTM`]
    pub motm: String,
}

/// Simulate a match between two (possibly incomplete) teams
pub fn simulate_match<R: Rng>(
    home: &Team,
    away: &Team,
    config: &SimulationConfig,
    rng: &mut R,
) -> MatchResult {
    let home_strength = team_strength(home, &config.weights, config.squad_size);
    let away_strength = team_strength(away, &config.weights, config.squad_size);

    let (home_expected, away_expected) = expected_goals(home_strength, away_strength, config);

    let home_goals = draw_goals(home_expected, config.noise_spread, rng);
    let away_goals = draw_goals(away_expected, config.noise_spread, rng);
    let winner = Winner::from_goals(home_goals, away_goals);

    let home_scorers = pick_scorers(home, home_goals, rng);
    let away_scorers = pick_scorers(away, away_goals, rng);

    let deciding_side = match winner {
        Winner::Away => away,
        Winner::Home | Winner::Draw => home,
    };
    let motm = man_of_the_match(deciding_side)
        .map(|p| p.player_name.clone())
        .unwrap_or_else(|| NO_MOTM.to_string());

    tracing::debug!(
        home_strength,
        away_strength,
        home_expected,
        away_expected,
        home_goals,
        away_goals,
        "Simulated match"
    );

    MatchResult {
        home_goals,
        away_goals,
        winner,
        home_scorers,
        away_scorers,
        motm,
    }
}

/// Expected goals for (home, away).
///
/// Only the home share is multiplied by the home advantage, so the pair may
/// sum to more than `base_goals`. Both default to 1 when total strength is
/// not positive.
pub fn expected_goals(home_strength: f64, away_strength: f64, config: &SimulationConfig) -> (f64, f64) {
    let total = home_strength + away_strength;
    if total > 0.0 {
        (
            config.base_goals * ((home_strength * config.home_advantage) / total),
            config.base_goals * (away_strength / total),
        )
    } else {
        (1.0, 1.0)
    }
}

/// Noisy goal count: `round(max(0, expected + (u - 0.5) * spread))`, capped at [`MAX_GOALS`]
pub fn draw_goals<R: Rng>(expected: f64, spread: f64, rng: &mut R) -> u32 {
    let u: f64 = rng.gen();
    goals_from_sample(expected, spread, u)
}

fn goals_from_sample(expected: f64, spread: f64, u: f64) -> u32 {
    (expected + (u - 0.5) * spread)
        .max(0.0)
        .min(MAX_GOALS as f64)
        .round() as u32
}

/// Scoring weight; zero goals or xG count as 1 so every player can score
fn scoring_weight(player: &Player) -> f64 {
    let goals = if player.goals == 0.0 { 1.0 } else { player.goals };
    let xg = if player.expected_goals == 0.0 {
        1.0
    } else {
        player.expected_goals
    };
    goals + player.assists * 0.5 + xg
}

/// Attribute `goals` goals to players by independent weighted draws.
/// A player may be credited more than once.
pub fn pick_scorers<R: Rng>(team: &Team, goals: u32, rng: &mut R) -> Vec<String> {
    let weighted: Vec<(&Player, f64)> = team.players().map(|p| (p, scoring_weight(p))).collect();
    let Some(&(last, _)) = weighted.last() else {
        return Vec::new();
    };
    if goals == 0 {
        return Vec::new();
    }

    let total_weight = weighted.iter().fold(0.0, |sum, (_, w)| sum + w);

    (0..goals)
        .map(|_| {
            let mut remaining = rng.gen::<f64>() * total_weight;
            let scorer = weighted
                .iter()
                .find(|(_, weight)| {
                    remaining -= weight;
                    remaining <= 0.0
                })
                .map(|(p, _)| *p)
                // Rounding can leave a sliver of weight after the last player
                .unwrap_or(last);
            scorer.surname().to_string()
        })
        .collect()
}

/// First player with the highest xG + xA
pub fn man_of_the_match(team: &Team) -> Option<&Player> {
    team.players().fold(None, |best, p| match best {
        Some(b) if p.involvement() <= b.involvement() => Some(b),
        _ => Some(p),
    })
}
