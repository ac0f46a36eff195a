//! Elevens Series - repeated matches against fresh AI opponents
//!
//! This crate provides the "play again" loop:
//! - Single match play against an auto-assigned opponent
//! - Series of matches, sequential or parallel, reproducible by seed
//! - Aggregated record, goals and scorer / man-of-the-match tallies
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: play_series (orchestration)
//! - Level 2: play_single_match, aggregate (phases)
//! - Level 3: tallies and per-match records (steps)
//! - Level 4: configuration

mod config;
mod match_play;
mod series;

pub use config::SeriesConfig;
pub use match_play::{play_single_match, MatchRecord, Outcome};
pub use series::{play_series, play_series_with_progress, SeriesResult, TallyEntry};
