//! Elevens Server - HTTP API for the squad builder
//!
//! This crate provides the web backend:
//! - Roster browsing (players, clubs, formations)
//! - Random and manual team selection
//! - Matches against generated AI opponents
//!
//! The API is stateless: every request carries the team it acts on.

mod error;
mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use elevens_core::Roster;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use error::ApiError;
pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    /// Roster JSON file; the built-in sample roster is used when unset
    pub roster_path: Option<PathBuf>,
    /// Seed for opponent generation and match simulation
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8002,
            roster_path: None,
            seed: None,
        }
    }
}

impl ServerConfig {
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_roster(mut self, path: impl Into<PathBuf>) -> Self {
        self.roster_path = Some(path.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the shared state this config describes
    pub fn build_state(&self) -> anyhow::Result<ServerState> {
        let roster = match &self.roster_path {
            Some(path) => Roster::load(path)?,
            None => Roster::sample(),
        };
        Ok(ServerState::new(roster, self.seed))
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Catalog and roster
        .route("/api/formations", get(routes::roster::get_formations))
        .route("/api/players", get(routes::roster::search_players))
        .route("/api/teams", get(routes::roster::get_teams))
        // Team selection
        .route("/api/team/random", post(routes::team::random_team))
        .route("/api/team/select", post(routes::team::select_player))
        // Match play
        .route("/api/match", post(routes::play::play_match))
        // Shared state
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(config.build_state()?);

    tracing::info!("Elevens Server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Roster: {} players", state.roster.len());

    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
