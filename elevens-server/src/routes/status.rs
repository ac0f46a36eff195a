//! Status endpoint

use axum::{extract::State, Json};
use elevens_core::FORMATIONS;
use serde::Serialize;
use std::sync::Arc;

use crate::state::ServerState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub engine: &'static str,
    pub players: usize,
    pub formations: usize,
}

pub async fn status_handler(State(state): State<Arc<ServerState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        engine: "rust",
        players: state.roster.len(),
        formations: FORMATIONS.len(),
    })
}
