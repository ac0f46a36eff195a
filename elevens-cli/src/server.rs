//! Server command - start the HTTP API
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to elevens-server crate)
//! - Level 4: configuration validation

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use elevens_server::{run_server, ServerConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8002")]
    pub port: u16,

    /// Roster JSON file (defaults to the built-in sample roster)
    #[arg(long, value_name = "FILE")]
    pub roster: Option<PathBuf>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
///
/// 1. Configure server
/// 2. Start server (blocking)
pub fn run(args: ServerArgs, seed: Option<u64>) -> Result<()> {
    let config = configure_server(&args, seed)?;

    tracing::info!("Starting Elevens API on port {}", config.port);

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configure server from command arguments
fn configure_server(args: &ServerArgs, seed: Option<u64>) -> Result<ServerConfig> {
    let mut config = ServerConfig::default().with_port(args.port);
    if let Some(path) = &args.roster {
        validate_roster_path(path)?;
        config = config.with_roster(path);
    }
    if let Some(s) = seed {
        config = config.with_seed(s);
    }
    Ok(config)
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(config))
}

// ============================================================================
// LEVEL 4 - VALIDATION
// ============================================================================

fn validate_roster_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Roster file does not exist: {}", path.display());
    } else if !path.is_file() {
        anyhow::bail!("Roster path is not a file: {}", path.display());
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_server_defaults() {
        let args = ServerArgs {
            port: 8002,
            roster: None,
        };

        let config = configure_server(&args, Some(4)).unwrap();
        assert_eq!(config.port, 8002);
        assert_eq!(config.roster_path, None);
        assert_eq!(config.seed, Some(4));
    }

    #[test]
    fn test_configure_server_missing_roster() {
        let args = ServerArgs {
            port: 9000,
            roster: Some(PathBuf::from("/nonexistent/roster.json")),
        };
        assert!(configure_server(&args, None).is_err());
    }

    #[test]
    fn test_validate_roster_path_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_roster_path(dir.path()).is_err());
    }
}
