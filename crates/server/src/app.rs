//! Axum application builder.
//!
//! Configures routes, middleware, and state for the server.

use axum::Router;
use axum::routing::{get, post};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{api, health, ws};
use crate::state::ServerState;

/// Create the Axum application with all routes.
pub fn create_app(state: ServerState) -> Router {
    // CORS layer for frontend development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        // Health endpoints
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
        // WebSocket endpoint
        .route("/ws", get(ws::ws_handler))
        // Auction lifecycle
        .route("/api/auction/{id}/start", post(api::start_auction))
        .route("/api/auction/{id}/close", post(api::close_auction))
        // Round control
        .route("/api/auction/select-player", post(api::select_player))
        .route("/api/auction/place-bid", post(api::place_bid))
        .route("/api/auction/sell-player", post(api::sell_player))
        // Read-only views
        .route("/api/auction/{id}", get(api::auction_snapshot))
        .route("/api/auction/{id}/team-spending", get(api::team_spending))
        .route("/api/teams", get(api::list_teams))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // State
        .with_state(state)
}

/// Server configuration.
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Host to bind to.
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8002,
            host: "0.0.0.0".into(),
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let port = std::env::var("AUCTION_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8002);

        let host = std::env::var("AUCTION_HOST").unwrap_or_else(|_| "0.0.0.0".into());

        Self { port, host }
    }

    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
