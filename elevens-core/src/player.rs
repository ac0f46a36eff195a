//! Player records

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playing position code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DF")]
    Defender,
    #[serde(rename = "MF")]
    Midfielder,
    #[serde(rename = "FW")]
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Two-letter code as used by roster data
    pub fn code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DF",
            Position::Midfielder => "MF",
            Position::Forward => "FW",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .iter()
            .copied()
            .find(|p| p.code() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown position code: {}", s))
    }
}

/// A player record from the roster.
///
/// `player_name` is the identity key within a pool. Performance counters are
/// non-negative; missing or null counters in roster data read as zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub player_name: String,
    pub position: Position,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starts: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches_played: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub minutes_played: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goals: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assists: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub yellow_cards: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub red_cards: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expected_goals: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expected_assists: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub penalties_scored: u32,
}

impl Player {
    /// Create a player with the given identity and all counters at zero
    pub fn new(player_name: impl Into<String>, position: Position) -> Self {
        Self {
            player_name: player_name.into(),
            position,
            nation: String::new(),
            team_name: String::new(),
            age: 0,
            starts: 0,
            matches_played: 0,
            minutes_played: 0.0,
            goals: 0.0,
            assists: 0.0,
            yellow_cards: 0.0,
            red_cards: 0.0,
            expected_goals: 0.0,
            expected_assists: 0.0,
            penalties_scored: 0,
        }
    }

    /// Surname: last space-separated token, or the full name if that is empty
    pub fn surname(&self) -> &str {
        surname(&self.player_name)
    }

    /// Attacking involvement used to pick the man of the match
    pub fn involvement(&self) -> f64 {
        self.expected_goals + self.expected_assists
    }
}

pub(crate) fn surname(name: &str) -> &str {
    name.rsplit(' ')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(name)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
