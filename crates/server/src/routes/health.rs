//! Health check endpoints.
//!
//! # Endpoints
//!
//! - `GET /health` - Liveness probe (always 200 if server is up)
//! - `GET /health/ready` - Readiness probe (store reachable)

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::ServerState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: &'static str,
    /// Server uptime in seconds.
    pub uptime_secs: u64,
    /// Active WebSocket connections.
    pub ws_connections: u64,
    /// Bids accepted since boot.
    pub bids_accepted: u64,
    /// Players sold since boot.
    pub players_sold: u64,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Whether server is ready.
    pub ready: bool,
    /// Registered team count.
    pub teams: usize,
}

/// Liveness probe: `GET /health`
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let metrics = &state.metrics;

    Json(HealthResponse {
        status: "healthy",
        uptime_secs: state.uptime_secs(),
        ws_connections: metrics.ws_count(),
        bids_accepted: metrics.bid_count(),
        players_sold: metrics.sold_count(),
    })
}

/// Readiness probe: `GET /health/ready`
///
/// Ready once the store answers queries.
pub async fn ready(State(state): State<ServerState>) -> Json<ReadyResponse> {
    let teams = state.store.list_teams().len();

    Json(ReadyResponse { ready: true, teams })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy",
            uptime_secs: 60,
            ws_connections: 5,
            bids_accepted: 12,
            players_sold: 3,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"bids_accepted\":12"));
    }
}
