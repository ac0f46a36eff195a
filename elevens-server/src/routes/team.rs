//! Team selection endpoints

use axum::{extract::State, Json};
use elevens_core::{assign_squad, AssignConfig, Formation, Team, TeamStats};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::routes::rebuild_team;
use crate::state::ServerState;

#[derive(Deserialize)]
pub struct RandomTeamRequest {
    #[serde(default)]
    pub formation: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectRequest {
    #[serde(default)]
    pub formation: String,
    /// Current team; a fresh empty team when omitted
    pub team: Option<Team>,
    pub slot_id: String,
    pub player_name: String,
}

#[derive(Serialize)]
pub struct TeamResponse {
    pub formation: &'static str,
    pub team: Team,
    pub stats: TeamStats,
}

impl TeamResponse {
    fn new(formation: &Formation, team: Team) -> Self {
        Self {
            formation: formation.name,
            stats: TeamStats::from_team(&team),
            team,
        }
    }
}

/// POST /api/team/random - auto-assign a full team
pub async fn random_team(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<RandomTeamRequest>,
) -> Json<TeamResponse> {
    let formation = Formation::by_name_or_default(&req.formation);
    let team = assign_squad(
        state.roster.players(),
        formation,
        &AssignConfig::default(),
        &mut *state.rng(),
    );
    tracing::info!("Random {} team, {} players", formation.name, team.filled_count());
    Json(TeamResponse::new(formation, team))
}

/// POST /api/team/select - place a roster player into a slot
pub async fn select_player(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let formation = Formation::by_name_or_default(&req.formation);
    let player = state
        .roster
        .find(&req.player_name)
        .ok_or_else(|| ApiError::not_found(format!("Unknown player: {}", req.player_name)))?;

    let mut team = match &req.team {
        Some(team) => rebuild_team(&state.roster, formation, team)?,
        None => formation.empty_team(),
    };
    team.place(formation, &req.slot_id, player.clone())?;

    Ok(Json(TeamResponse::new(formation, team)))
}
