//! Elevens Core - Squad assignment and match simulation
//!
//! This crate provides the core game logic for Elevens:
//! - Player records and position codes
//! - Formation catalog (11 slots, one goalkeeper)
//! - Team slot assignment with manual-selection validation
//! - Strength scoring and stochastic match simulation
//! - Performance-biased squad auto-assignment (random team / AI opponent)
//! - Roster loading, browsing and aggregate team stats

pub mod player;
pub mod formation;
pub mod team;
pub mod strength;
pub mod simulate;
pub mod assign;
pub mod engine;
pub mod roster;
pub mod stats;

// Re-exports for convenient access
pub use player::{Player, Position};
pub use formation::{Formation, FormationSlot, FORMATIONS, SQUAD_SIZE};
pub use team::{SlotAssignment, Team, TeamError};
pub use strength::{team_strength, StrengthWeights};
pub use simulate::{simulate_match, MatchResult, SimulationConfig, Winner, MAX_GOALS, NO_MOTM};
pub use assign::{assign_squad, AssignConfig};
pub use engine::MatchEngine;
pub use roster::{Roster, RosterFilter};
pub use stats::TeamStats;
