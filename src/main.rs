//! Player Auction - main binary
//!
//! Serves the live auction API and WebSocket event stream. State lives
//! in the in-memory store; pass `--seed-demo` to preload sample teams,
//! players, and a draft auction for local testing.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use seed::seed_demo_data;
use server::{ServerConfig, ServerState, create_app};
use store::MemoryStore;

mod seed;

/// Player Auction - real-time cumulative bidding service
#[derive(Parser, Debug)]
#[command(name = "player-auction")]
#[command(about = "Live player auction with cumulative bidding and WebSocket fan-out")]
#[command(version)]
struct Args {
    /// Host to bind to
    #[arg(long, env = "AUCTION_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "AUCTION_PORT")]
    port: Option<u16>,

    /// Preload demo teams, players, and a draft auction
    #[arg(long, env = "AUCTION_SEED_DEMO")]
    seed_demo: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = ServerConfig::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let store = Arc::new(MemoryStore::new());
    if args.seed_demo {
        seed_demo_data(&store);
        tracing::info!(
            teams = store.team_count(),
            players = store.player_count(),
            "seeded demo data"
        );
    }

    let state = ServerState::new(store);
    let app = create_app(state);

    let addr = config.bind_addr();
    tracing::info!(%addr, "starting auction server");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
