//! Match endpoint

use axum::{extract::State, Json};
use elevens_core::{
    assign_squad, simulate_match, AssignConfig, Formation, MatchResult, SimulationConfig, Team,
    SQUAD_SIZE,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::routes::rebuild_team;
use crate::state::ServerState;

#[derive(Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub formation: String,
    pub team: Team,
}

#[derive(Serialize)]
pub struct MatchResponse {
    pub opponent: Team,
    pub result: MatchResult,
}

/// POST /api/match - play a complete team against a generated opponent
pub async fn play_match(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, ApiError> {
    let formation = Formation::by_name_or_default(&req.formation);
    let home = rebuild_team(&state.roster, formation, &req.team)?;
    if !home.is_complete() {
        return Err(ApiError::bad_request(format!(
            "You need {} players to play. Currently have {}/{}",
            SQUAD_SIZE,
            home.filled_count(),
            SQUAD_SIZE
        )));
    }

    let (opponent, result) = {
        let mut rng = state.rng();
        let opponent = assign_squad(
            state.roster.players(),
            formation,
            &AssignConfig::default(),
            &mut *rng,
        );
        let result = simulate_match(&home, &opponent, &SimulationConfig::default(), &mut *rng);
        (opponent, result)
    };

    tracing::info!(
        "Match {}-{} ({:?}), motm {}",
        result.home_goals,
        result.away_goals,
        result.winner,
        result.motm
    );

    Ok(Json(MatchResponse { opponent, result }))
}
