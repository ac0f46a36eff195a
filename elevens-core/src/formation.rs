//! Formation catalog

use serde::Serialize;

use crate::player::Position;
use crate::team::Team;

/// Number of slots in every formation
pub const SQUAD_SIZE: usize = 11;

const GK: &[Position] = &[Position::Goalkeeper];
const DF: &[Position] = &[Position::Defender];
const MF: &[Position] = &[Position::Midfielder];
const FW: &[Position] = &[Position::Forward];
const FW_MF: &[Position] = &[Position::Forward, Position::Midfielder];
const MF_FW: &[Position] = &[Position::Midfielder, Position::Forward];
const MF_DF: &[Position] = &[Position::Midfielder, Position::Defender];
const DF_MF: &[Position] = &[Position::Defender, Position::Midfielder];

/// A named position in a formation
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormationSlot {
    pub id: &'static str,
    pub position: Position,
    pub label: &'static str,
    /// Player positions accepted by this slot (hybrid slots list several)
    pub valid_positions: &'static [Position],
}

impl FormationSlot {
    pub const fn new(
        id: &'static str,
        position: Position,
        label: &'static str,
        valid_positions: &'static [Position],
    ) -> Self {
        Self {
            id,
            position,
            label,
            valid_positions,
        }
    }

    /// Check whether a player position may occupy this slot
    pub fn accepts(&self, position: Position) -> bool {
        self.valid_positions.contains(&position)
    }
}

/// A named formation: exactly 11 ordered slots
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Formation {
    pub name: &'static str,
    pub slots: [FormationSlot; SQUAD_SIZE],
}

/// All offered formations. The first entry is the default.
pub static FORMATIONS: [Formation; 5] = [
    Formation {
        name: "4-3-3",
        slots: [
            FormationSlot::new("GK", Position::Goalkeeper, "GK", GK),
            FormationSlot::new("LB", Position::Defender, "LB", DF),
            FormationSlot::new("CB1", Position::Defender, "CB", DF),
            FormationSlot::new("CB2", Position::Defender, "CB", DF),
            FormationSlot::new("RB", Position::Defender, "RB", DF),
            FormationSlot::new("CM1", Position::Midfielder, "CM", MF),
            FormationSlot::new("CM2", Position::Midfielder, "CM", MF),
            FormationSlot::new("CM3", Position::Midfielder, "CM", MF),
            FormationSlot::new("LW", Position::Forward, "LW", FW_MF),
            FormationSlot::new("ST", Position::Forward, "ST", FW),
            FormationSlot::new("RW", Position::Forward, "RW", FW_MF),
        ],
    },
    Formation {
        name: "4-4-2",
        slots: [
            FormationSlot::new("GK", Position::Goalkeeper, "GK", GK),
            FormationSlot::new("LB", Position::Defender, "LB", DF),
            FormationSlot::new("CB1", Position::Defender, "CB", DF),
            FormationSlot::new("CB2", Position::Defender, "CB", DF),
            FormationSlot::new("RB", Position::Defender, "RB", DF),
            FormationSlot::new("LM", Position::Midfielder, "LM", MF),
            FormationSlot::new("CM1", Position::Midfielder, "CM", MF),
            FormationSlot::new("CM2", Position::Midfielder, "CM", MF),
            FormationSlot::new("RM", Position::Midfielder, "RM", MF),
            FormationSlot::new("ST1", Position::Forward, "ST", FW),
            FormationSlot::new("ST2", Position::Forward, "ST", FW),
        ],
    },
    Formation {
        name: "3-5-2",
        slots: [
            FormationSlot::new("GK", Position::Goalkeeper, "GK", GK),
            FormationSlot::new("CB1", Position::Defender, "CB", DF),
            FormationSlot::new("CB2", Position::Defender, "CB", DF),
            FormationSlot::new("CB3", Position::Defender, "CB", DF),
            FormationSlot::new("LWB", Position::Midfielder, "LWB", MF_DF),
            FormationSlot::new("CM1", Position::Midfielder, "CM", MF),
            FormationSlot::new("CM2", Position::Midfielder, "CM", MF),
            FormationSlot::new("CM3", Position::Midfielder, "CM", MF),
            FormationSlot::new("RWB", Position::Midfielder, "RWB", MF_DF),
            FormationSlot::new("ST1", Position::Forward, "ST", FW),
            FormationSlot::new("ST2", Position::Forward, "ST", FW),
        ],
    },
    Formation {
        name: "4-2-3-1",
        slots: [
            FormationSlot::new("GK", Position::Goalkeeper, "GK", GK),
            FormationSlot::new("LB", Position::Defender, "LB", DF),
            FormationSlot::new("CB1", Position::Defender, "CB", DF),
            FormationSlot::new("CB2", Position::Defender, "CB", DF),
            FormationSlot::new("RB", Position::Defender, "RB", DF),
            FormationSlot::new("CDM1", Position::Midfielder, "CDM", MF),
            FormationSlot::new("CDM2", Position::Midfielder, "CDM", MF),
            FormationSlot::new("LW", Position::Midfielder, "LW", MF_FW),
            FormationSlot::new("CAM", Position::Midfielder, "CAM", MF),
            FormationSlot::new("RW", Position::Midfielder, "RW", MF_FW),
            FormationSlot::new("ST", Position::Forward, "ST", FW),
        ],
    },
    Formation {
        name: "5-3-2",
        slots: [
            FormationSlot::new("GK", Position::Goalkeeper, "GK", GK),
            FormationSlot::new("LWB", Position::Defender, "LWB", DF_MF),
            FormationSlot::new("CB1", Position::Defender, "CB", DF),
            FormationSlot::new("CB2", Position::Defender, "CB", DF),
            FormationSlot::new("CB3", Position::Defender, "CB", DF),
            FormationSlot::new("RWB", Position::Defender, "RWB", DF_MF),
            FormationSlot::new("CM1", Position::Midfielder, "CM", MF),
            FormationSlot::new("CM2", Position::Midfielder, "CM", MF),
            FormationSlot::new("CM3", Position::Midfielder, "CM", MF),
            FormationSlot::new("ST1", Position::Forward, "ST", FW),
            FormationSlot::new("ST2", Position::Forward, "ST", FW),
        ],
    },
];

impl Formation {
    /// All catalog formations
    pub fn all() -> &'static [Formation] {
        &FORMATIONS
    }

    /// Look up a catalog formation by name
    pub fn by_name(name: &str) -> Option<&'static Formation> {
        FORMATIONS.iter().find(|f| f.name == name)
    }

    /// Look up a catalog formation, falling back to the default (4-3-3)
    pub fn by_name_or_default(name: &str) -> &'static Formation {
        Self::by_name(name).unwrap_or(&FORMATIONS[0])
    }

    /// Get a slot by id
    pub fn slot(&self, id: &str) -> Option<&FormationSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Team with every slot of this formation empty
    pub fn empty_team(&self) -> Team {
        Team::from_formation(self)
    }
}
