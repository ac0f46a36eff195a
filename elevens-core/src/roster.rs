//! Roster - the player pool teams are drafted from

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::player::{Player, Position};

/// Built-in fallback dataset used when no roster file is supplied
const SAMPLE_ROSTER: &str = include_str!("../data/sample_roster.json");

/// Maximum number of players a search returns
pub const SEARCH_LIMIT: usize = 50;

/// Browse filter; unset fields match everything
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterFilter {
    /// Case-insensitive substring of the player name
    pub name: Option<String>,
    pub team_name: Option<String>,
    pub position: Option<Position>,
    pub nation: Option<String>,
}

impl RosterFilter {
    pub fn matches(&self, player: &Player) -> bool {
        let name_ok = self.name.as_ref().map_or(true, |needle| {
            player
                .player_name
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let team_ok = self
            .team_name
            .as_ref()
            .map_or(true, |t| &player.team_name == t);
        let position_ok = self.position.map_or(true, |p| player.position == p);
        let nation_ok = self.nation.as_ref().map_or(true, |n| &player.nation == n);

        name_ok && team_ok && position_ok && nation_ok
    }
}

/// Player pool
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Built-in sample roster
    pub fn sample() -> Self {
        match Self::from_json(SAMPLE_ROSTER) {
            Ok(roster) => roster,
            Err(e) => {
                tracing::error!("Built-in sample roster is invalid: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load from a JSON file holding an array of player records
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster: {}", path.display()))?;
        let roster = Self::from_json(&content)
            .with_context(|| format!("Failed to parse roster: {}", path.display()))?;

        tracing::info!("Loaded {} players from {}", roster.len(), path.display());
        Ok(roster)
    }

    /// Parse a JSON array of player records.
    ///
    /// Records whose position is not exactly GK, DF, MF or FW (hybrid tags
    /// like "MF,FW") can never fill a slot and are skipped.
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let records: Vec<serde_json::Value> = serde_json::from_str(content)?;
        let mut players = Vec::with_capacity(records.len());

        for record in records {
            let position = record.get("position").and_then(|v| v.as_str()).unwrap_or("");
            if position.parse::<Position>().is_err() {
                tracing::warn!(
                    "Skipping {} with unsupported position {:?}",
                    record.get("playerName").and_then(|v| v.as_str()).unwrap_or("<unnamed>"),
                    position
                );
                continue;
            }
            players.push(serde_json::from_value::<Player>(record)?);
        }

        Ok(Self::new(players))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Find a player by exact name
    pub fn find(&self, player_name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.player_name == player_name)
    }

    /// Players matching the filter, in roster order, capped at [`SEARCH_LIMIT`]
    pub fn search(&self, filter: &RosterFilter) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| filter.matches(p))
            .take(SEARCH_LIMIT)
            .collect()
    }

    /// Distinct club names, sorted
    pub fn teams(&self) -> Vec<&str> {
        let mut teams: Vec<&str> = self.players.iter().map(|p| p.team_name.as_str()).collect();
        teams.sort_unstable();
        teams.dedup();
        teams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::Formation;
    use std::io::Write;

    #[test]
    fn test_sample_roster_parses() {
        let roster = Roster::sample();
        assert_eq!(roster.len(), 36);
        for pos in Position::ALL {
            assert!(
                roster.players().iter().any(|p| p.position == pos),
                "sample roster has no {}",
                pos
            );
        }
    }

    #[test]
    fn test_sample_roster_fields_two_teams_per_formation() {
        let roster = Roster::sample();
        for formation in Formation::all() {
            for slot in &formation.slots {
                let eligible = roster
                    .players()
                    .iter()
                    .filter(|p| slot.accepts(p.position))
                    .count();
                assert!(eligible >= 2, "{} {}", formation.name, slot.id);
            }
        }
    }

    #[test]
    fn test_skips_hybrid_positions() {
        let json = r#"[
            {"playerName": "Kai Havertz", "position": "MF,FW", "goals": 13},
            {"playerName": "Declan Rice", "position": "MF", "goals": 7},
            {"playerName": "No Position"}
        ]"#;
        let roster = Roster::from_json(json).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.players()[0].player_name, "Declan Rice");
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(Roster::from_json("{\"not\": \"an array\"}").is_err());
        assert!(Roster::from_json(r#"[{"position": "GK"}]"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"playerName": "Alisson", "position": "GK", "teamName": "Liverpool"}}]"#
        )
        .unwrap();

        let roster = Roster::load(file.path()).unwrap();
        assert_eq!(roster.find("Alisson").unwrap().team_name, "Liverpool");
        assert!(Roster::load(Path::new("/nonexistent/roster.json")).is_err());
    }

    #[test]
    fn test_search_filters() {
        let roster = Roster::sample();

        let by_name = roster.search(&RosterFilter {
            name: Some("saka".into()),
            ..Default::default()
        });
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].player_name, "Bukayo Saka");

        let arsenal_defenders = roster.search(&RosterFilter {
            team_name: Some("Arsenal".into()),
            position: Some(Position::Defender),
            ..Default::default()
        });
        assert!(!arsenal_defenders.is_empty());
        assert!(arsenal_defenders
            .iter()
            .all(|p| p.team_name == "Arsenal" && p.position == Position::Defender));

        let nobody = roster.search(&RosterFilter {
            nation: Some("Atlantis".into()),
            ..Default::default()
        });
        assert!(nobody.is_empty());
    }

    #[test]
    fn test_search_limit() {
        let players = (0..80)
            .map(|i| Player::new(format!("Player {}", i), Position::Defender))
            .collect();
        let roster = Roster::new(players);
        assert_eq!(roster.search(&RosterFilter::default()).len(), SEARCH_LIMIT);
    }

    #[test]
    fn test_teams_sorted_unique() {
        let roster = Roster::sample();
        let teams = roster.teams();
        let mut sorted = teams.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(teams, sorted);
        assert!(teams.contains(&"Arsenal"));
    }
}
