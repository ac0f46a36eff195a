//! Example to run the Elevens API server standalone
//!
//! Run with: cargo run -p elevens-server --example run_server

use elevens_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig {
        port: 8080,
        ..Default::default()
    };

    println!("Starting Elevens API on port {}", config.port);
    println!("Try http://localhost:{}/api/formations", config.port);

    run_server(config).await
}
