//! Squad auto-assignment
//!
//! Fills a formation slot by slot with a randomized greedy pick: rank the
//! eligible, unused players by a performance score and choose uniformly from
//! the top of that ranking. Used for both the "random team" feature and the
//! AI opponent.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::formation::{Formation, FormationSlot};
use crate::player::Player;
use crate::team::{SlotAssignment, Team};

/// Auto-assignment parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignConfig {
    /// How many top-ranked candidates the random pick chooses between
    pub shortlist_size: usize,
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self { shortlist_size: 5 }
    }
}

/// Ranking score for auto-assignment
pub fn selection_score(player: &Player) -> f64 {
    player.goals * 3.0 + player.assists * 2.0 + player.expected_goals * 2.0
}

/// Build a team for `formation` from `players`.
///
/// Slots are filled in formation order. A slot with no eligible unused
/// player stays empty. No player name is used twice.
pub fn assign_squad<R: Rng>(
    players: &[Player],
    formation: &Formation,
    config: &AssignConfig,
    rng: &mut R,
) -> Team {
    let mut used: FxHashSet<&str> = FxHashSet::default();
    let mut slots = Vec::with_capacity(formation.slots.len());

    for slot in &formation.slots {
        let picked = pick_for_slot(players, slot, &used, config.shortlist_size, rng);
        if let Some(player) = picked {
            used.insert(player.player_name.as_str());
        }
        slots.push(SlotAssignment {
            slot_id: slot.id.to_string(),
            player: picked.cloned(),
        });
    }

    tracing::debug!(
        formation = formation.name,
        pool = players.len(),
        filled = used.len(),
        "Assigned squad"
    );

    Team::from_assignments(slots)
}

/// Pick one eligible player for a slot from the shortlist
fn pick_for_slot<'a, R: Rng>(
    players: &'a [Player],
    slot: &FormationSlot,
    used: &FxHashSet<&str>,
    shortlist_size: usize,
    rng: &mut R,
) -> Option<&'a Player> {
    let mut candidates: Vec<&Player> = players
        .iter()
        .filter(|p| slot.accepts(p.position) && !used.contains(p.player_name.as_str()))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    // Stable sort: equal scores keep pool order
    candidates.sort_by(|a, b| {
        selection_score(b)
            .partial_cmp(&selection_score(a))
            .unwrap_or(Ordering::Equal)
    });

    let shortlist_len = candidates.len().min(shortlist_size.max(1));
    candidates[..shortlist_len].choose(rng).copied()
}
