//! Formation catalog and roster browsing

use axum::{
    extract::{Query, State},
    Json,
};
use elevens_core::{Formation, Player, RosterFilter};
use std::sync::Arc;

use crate::state::ServerState;

/// GET /api/formations
pub async fn get_formations() -> Json<&'static [Formation]> {
    Json(Formation::all())
}

/// GET /api/players - filtered search, capped like the roster search
pub async fn search_players(
    State(state): State<Arc<ServerState>>,
    Query(filter): Query<RosterFilter>,
) -> Json<Vec<Player>> {
    let players = state
        .roster
        .search(&filter)
        .into_iter()
        .cloned()
        .collect();
    Json(players)
}

/// GET /api/teams - club names, sorted
pub async fn get_teams(State(state): State<Arc<ServerState>>) -> Json<Vec<String>> {
    Json(state.roster.teams().into_iter().map(String::from).collect())
}
