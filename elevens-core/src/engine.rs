//! Match engine: simulation config plus an owned, seedable RNG

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::assign::{assign_squad, AssignConfig};
use crate::formation::Formation;
use crate::player::Player;
use crate::simulate::{simulate_match, MatchResult, SimulationConfig};
use crate::team::Team;

/// Convenience wrapper for callers that do not manage their own RNG
pub struct MatchEngine {
    pub config: SimulationConfig,
    pub assign_config: AssignConfig,
    rng: ChaCha8Rng,
}

impl MatchEngine {
    /// Engine seeded from system entropy
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Deterministic engine
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            config: SimulationConfig::default(),
            assign_config: AssignConfig::default(),
            rng,
        }
    }

    /// Set simulation config
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Auto-assign a team from the pool
    pub fn assign(&mut self, players: &[Player], formation: &Formation) -> Team {
        assign_squad(players, formation, &self.assign_config, &mut self.rng)
    }

    /// Simulate a single match
    pub fn simulate(&mut self, home: &Team, away: &Team) -> MatchResult {
        simulate_match(home, away, &self.config, &mut self.rng)
    }

    /// Generate an AI opponent from the pool and play it away from home
    pub fn play_against_ai(
        &mut self,
        home: &Team,
        players: &[Player],
        formation: &Formation,
    ) -> (Team, MatchResult) {
        let opponent = self.assign(players, formation);
        let result = self.simulate(home, &opponent);
        (opponent, result)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Position;

    fn players() -> Vec<Player> {
        let mut players = Vec::new();
        for (position, count) in [
            (Position::Goalkeeper, 2),
            (Position::Defender, 10),
            (Position::Midfielder, 10),
            (Position::Forward, 6),
        ] {
            for i in 0..count {
                players.push(Player {
                    goals: i as f64,
                    expected_goals: i as f64 * 0.8,
                    ..Player::new(format!("{} Number{}", position, i), position)
                });
            }
        }
        players
    }

    #[test]
    fn test_seeded_engines_agree() {
        let formation = Formation::by_name("4-2-3-1").unwrap();
        let pool = players();

        let mut a = MatchEngine::with_seed(21);
        let mut b = MatchEngine::with_seed(21);
        let home_a = a.assign(&pool, formation);
        let home_b = b.assign(&pool, formation);
        assert_eq!(home_a, home_b);

        let (opp_a, res_a) = a.play_against_ai(&home_a, &pool, formation);
        let (opp_b, res_b) = b.play_against_ai(&home_b, &pool, formation);
        assert_eq!(opp_a, opp_b);
        assert_eq!(res_a, res_b);
    }

    #[test]
    fn test_play_against_ai_opponent_is_complete() {
        let formation = Formation::by_name("4-4-2").unwrap();
        let pool = players();
        let mut engine = MatchEngine::with_seed(8);
        let home = engine.assign(&pool, formation);
        let (opponent, result) = engine.play_against_ai(&home, &pool, formation);

        assert!(opponent.is_complete());
        assert_eq!(result.home_scorers.len(), result.home_goals as usize);
        assert_eq!(result.away_scorers.len(), result.away_goals as usize);
    }
}
