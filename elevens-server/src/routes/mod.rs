//! HTTP route handlers

pub mod play;
pub mod roster;
pub mod status;
pub mod team;

use elevens_core::{Formation, Roster, Team};

use crate::error::ApiError;

/// Rebuild a client-supplied team through `Team::place`.
///
/// Players are taken from the roster by name, so slot ids, duplicates and
/// positions get the same checks as a manual selection.
pub(crate) fn rebuild_team(roster: &Roster, formation: &Formation, team: &Team) -> Result<Team, ApiError> {
    let mut rebuilt = formation.empty_team();
    for assignment in team.slots() {
        let Some(player) = &assignment.player else {
            continue;
        };
        let known = roster
            .find(&player.player_name)
            .ok_or_else(|| ApiError::not_found(format!("Unknown player: {}", player.player_name)))?;
        rebuilt.place(formation, &assignment.slot_id, known.clone())?;
    }
    Ok(rebuilt)
}
