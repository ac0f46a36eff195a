//! Team slot assignment

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::formation::{Formation, SQUAD_SIZE};
use crate::player::{Player, Position};

/// Rejected manual selection
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TeamError {
    #[error("slot {0} is not part of this formation")]
    UnknownSlot(String),
    #[error("{0} is already in your team")]
    DuplicatePlayer(String),
    #[error("{player} plays {position}, not valid for slot {slot}")]
    InvalidPosition {
        player: String,
        position: Position,
        slot: String,
    },
}

/// One slot of a team and its occupant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAssignment {
    pub slot_id: String,
    pub player: Option<Player>,
}

impl SlotAssignment {
    pub fn empty(slot_id: impl Into<String>) -> Self {
        Self {
            slot_id: slot_id.into(),
            player: None,
        }
    }

    pub fn filled(slot_id: impl Into<String>, player: Player) -> Self {
        Self {
            slot_id: slot_id.into(),
            player: Some(player),
        }
    }
}

/// Mapping from slot id to player-or-empty, in formation slot order.
///
/// The simulator only relies on this shape. Uniqueness of players is
/// maintained by [`Team::place`] and by the auto-assigner.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    slots: Vec<SlotAssignment>,
}

impl Team {
    /// Empty team with one slot per formation slot
    pub fn from_formation(formation: &Formation) -> Self {
        Self {
            slots: formation
                .slots
                .iter()
                .map(|s| SlotAssignment::empty(s.id))
                .collect(),
        }
    }

    /// Build a team from raw assignments, unvalidated
    pub fn from_assignments(slots: Vec<SlotAssignment>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[SlotAssignment] {
        &self.slots
    }

    /// Filled players in slot order
    pub fn players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.slots.iter().filter_map(|s| s.player.as_ref())
    }

    /// Occupant of a slot (None for an empty or unknown slot)
    pub fn get(&self, slot_id: &str) -> Option<&Player> {
        self.slots
            .iter()
            .find(|s| s.slot_id == slot_id)
            .and_then(|s| s.player.as_ref())
    }

    pub fn filled_count(&self) -> usize {
        self.players().count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.filled_count() == SQUAD_SIZE
    }

    pub fn contains(&self, player_name: &str) -> bool {
        self.players().any(|p| p.player_name == player_name)
    }

    /// Put a player into a slot after validating the selection.
    ///
    /// Rejects unknown slots, players already in the team and players whose
    /// position the slot does not accept. Replaces any previous occupant.
    pub fn place(
        &mut self,
        formation: &Formation,
        slot_id: &str,
        player: Player,
    ) -> Result<(), TeamError> {
        let slot = formation
            .slot(slot_id)
            .ok_or_else(|| TeamError::UnknownSlot(slot_id.to_string()))?;

        if self.contains(&player.player_name) {
            return Err(TeamError::DuplicatePlayer(player.player_name));
        }

        if !slot.accepts(player.position) {
            return Err(TeamError::InvalidPosition {
                player: player.player_name,
                position: player.position,
                slot: slot_id.to_string(),
            });
        }

        let entry = self
            .slots
            .iter_mut()
            .find(|s| s.slot_id == slot_id)
            .ok_or_else(|| TeamError::UnknownSlot(slot_id.to_string()))?;
        entry.player = Some(player);
        Ok(())
    }

    /// Empty a slot, returning its previous occupant
    pub fn remove(&mut self, slot_id: &str) -> Option<Player> {
        self.slots
            .iter_mut()
            .find(|s| s.slot_id == slot_id)
            .and_then(|s| s.player.take())
    }

    /// Empty every slot
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.player = None;
        }
    }
}
