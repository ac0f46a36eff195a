//! Match play - one match against a freshly generated opponent
//!
//! Level 2 - Phase-level implementation

use elevens_core::{assign_squad, simulate_match, Formation, MatchResult, Player, Team, Winner};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::config::SeriesConfig;

/// Result of a match from the home side's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn from_winner(winner: Winner) -> Self {
        match winner {
            Winner::Home => Outcome::Win,
            Winner::Draw => Outcome::Draw,
            Winner::Away => Outcome::Loss,
        }
    }

    /// League points: 3 for a win, 1 for a draw
    pub fn points(&self) -> u32 {
        match self {
            Outcome::Win => 3,
            Outcome::Draw => 1,
            Outcome::Loss => 0,
        }
    }
}

/// One played match
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// 1-based match number
    pub match_number: usize,
    pub opponent: Team,
    pub result: MatchResult,
}

impl MatchRecord {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_winner(self.result.winner)
    }
}

/// Play the home team against an AI opponent drawn from `players`
pub fn play_single_match(
    home: &Team,
    players: &[Player],
    formation: &Formation,
    config: &SeriesConfig,
    index: usize,
) -> MatchRecord {
    let mut rng = ChaCha8Rng::seed_from_u64(config.match_seed(index));
    let opponent = assign_squad(players, formation, &config.assign, &mut rng);
    let result = simulate_match(home, &opponent, &config.simulation, &mut rng);

    MatchRecord {
        match_number: index + 1,
        opponent,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elevens_core::Roster;

    #[test]
    fn test_outcome_points() {
        assert_eq!(Outcome::from_winner(Winner::Home).points(), 3);
        assert_eq!(Outcome::from_winner(Winner::Draw).points(), 1);
        assert_eq!(Outcome::from_winner(Winner::Away).points(), 0);
    }

    #[test]
    fn test_single_match_is_reproducible() {
        let roster = Roster::sample();
        let formation = Formation::by_name("4-3-3").unwrap();
        let config = SeriesConfig::new(1).with_seed(100);
        let home = formation.empty_team();

        let a = play_single_match(&home, roster.players(), formation, &config, 4);
        let b = play_single_match(&home, roster.players(), formation, &config, 4);
        assert_eq!(a, b);
        assert_eq!(a.match_number, 5);
        assert!(a.opponent.is_complete());
    }
}
