//! Control API endpoints.
//!
//! Thin request/response layer: validates the shape of inbound JSON,
//! delegates to the control API, and lets [`crate::error::AppError`]
//! translate failures into HTTP status + message pairs.
//!
//! # Endpoints
//!
//! - `POST /api/auction/{id}/start` - Move draft auction to live
//! - `POST /api/auction/{id}/close` - Close live auction (terminal)
//! - `POST /api/auction/select-player` - Put a player up for bid
//! - `POST /api/auction/place-bid` - Record a bid increment
//! - `POST /api/auction/sell-player` - Sell to the leading team
//! - `GET /api/auction/{id}` - Auction state snapshot
//! - `GET /api/auction/{id}/team-spending?playerId=` - Per-team totals
//! - `GET /api/teams` - Registered teams

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use types::{AuctionId, PlayerId, Team, TeamId};

use crate::control::{
    AuctionSnapshot, LifecycleResponse, PlaceBidResponse, SelectPlayerResponse, SelectTarget,
    SellPlayerResponse, TeamSpendingResponse,
};
use crate::error::{AppError, AppJson, AppResult};
use crate::state::ServerState;

/// Start an auction: `POST /api/auction/{id}/start`
pub async fn start_auction(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<LifecycleResponse>> {
    state.control.start_auction(AuctionId(id)).await.map(Json)
}

/// Close an auction: `POST /api/auction/{id}/close`
pub async fn close_auction(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<LifecycleResponse>> {
    state.control.close_auction(AuctionId(id)).await.map(Json)
}

/// Request body for select-player.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectPlayerRequest {
    pub auction_id: AuctionId,
    /// Explicit player to put up for bid.
    pub player_id: Option<PlayerId>,
    /// Pick a random unsold roster player instead.
    #[serde(default)]
    pub random: bool,
}

/// Put a player up for bid: `POST /api/auction/select-player`
///
/// Exactly one of `playerId` or `random=true` must be given.
pub async fn select_player(
    State(state): State<ServerState>,
    AppJson(req): AppJson<SelectPlayerRequest>,
) -> AppResult<Json<SelectPlayerResponse>> {
    let target = match (req.player_id, req.random) {
        (Some(id), false) => SelectTarget::Player(id),
        (None, true) => SelectTarget::Random,
        (Some(_), true) => {
            return Err(AppError::InvalidInput(
                "give either playerId or random=true, not both".into(),
            ));
        }
        (None, false) => {
            return Err(AppError::InvalidInput(
                "playerId or random=true is required".into(),
            ));
        }
    };

    state
        .control
        .select_player(req.auction_id, target)
        .await
        .map(Json)
}

/// Request body for place-bid.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBidRequest {
    pub auction_id: AuctionId,
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub bid_amount: f64,
}

/// Record a bid increment: `POST /api/auction/place-bid`
pub async fn place_bid(
    State(state): State<ServerState>,
    AppJson(req): AppJson<PlaceBidRequest>,
) -> AppResult<Json<PlaceBidResponse>> {
    state
        .control
        .place_bid(req.auction_id, req.player_id, req.team_id, req.bid_amount)
        .await
        .map(Json)
}

/// Request body for sell-player.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellPlayerRequest {
    pub auction_id: AuctionId,
    pub player_id: PlayerId,
}

/// Sell the current player: `POST /api/auction/sell-player`
pub async fn sell_player(
    State(state): State<ServerState>,
    AppJson(req): AppJson<SellPlayerRequest>,
) -> AppResult<Json<SellPlayerResponse>> {
    state
        .control
        .sell_player(req.auction_id, req.player_id)
        .await
        .map(Json)
}

/// Query parameters for team-spending.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingQuery {
    pub player_id: PlayerId,
}

/// Per-team bid totals: `GET /api/auction/{id}/team-spending?playerId=`
pub async fn team_spending(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Query(query): Query<SpendingQuery>,
) -> AppResult<Json<TeamSpendingResponse>> {
    state
        .control
        .team_spending(AuctionId(id), query.player_id)
        .await
        .map(Json)
}

/// Auction state snapshot: `GET /api/auction/{id}`
pub async fn auction_snapshot(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<AuctionSnapshot>> {
    state.control.auction_snapshot(AuctionId(id)).await.map(Json)
}

/// Response for the team list.
#[derive(Debug, Serialize)]
pub struct TeamsResponse {
    pub success: bool,
    pub teams: Vec<Team>,
}

/// Registered teams: `GET /api/teams`
pub async fn list_teams(State(state): State<ServerState>) -> Json<TeamsResponse> {
    Json(TeamsResponse {
        success: true,
        teams: state.store.list_teams(),
    })
}
