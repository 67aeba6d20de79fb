//! Control API: the operations admins invoke to drive an auction.
//!
//! Every mutation follows the same shape: acquire the auction's mutex,
//! load a working copy of the record, run the engine on it, save on
//! success, then broadcast the resulting event. Failures return before
//! the save, so no partial state is ever visible (commit-or-nothing),
//! and no event is emitted for a failed operation.
//!
//! # Concurrency
//!
//! Mutations on one auction are serialized by a per-auction
//! `tokio::sync::Mutex` held across load, engine call, and save. This
//! prevents two concurrent bids from both reading the pre-increment
//! cumulative total (lost update). Distinct auctions never contend.
//!
//! Broadcast is fire-and-forget: a send failure (no subscribers, lagged
//! client) never rolls back the committed mutation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tokio::sync::{Mutex, broadcast};

use engine::{Auction, PlayerChoice};
use store::AuctionStore;
use types::{AuctionId, Bid, Money, Player, PlayerId, Team, TeamId, Timestamp};

use crate::error::{AppError, AppResult};
use crate::events::AuctionEvent;
use crate::state::ServerMetrics;

/// Target of a select-player request: an explicit player or a random
/// pick from the unsold roster.
#[derive(Debug, Clone, Copy)]
pub enum SelectTarget {
    Player(PlayerId),
    Random,
}

/// Response for auction lifecycle transitions (start/close).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleResponse {
    pub success: bool,
    pub auction_id: AuctionId,
}

/// Response for a successful player selection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectPlayerResponse {
    pub success: bool,
    pub player_id: PlayerId,
    pub player_name: String,
}

/// Response for an accepted bid.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBidResponse {
    pub success: bool,
    pub bid_amount: f64,
    pub team_name: String,
}

/// Response for a completed sale.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellPlayerResponse {
    pub success: bool,
}

/// One row of the per-team spending breakdown.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSpendingEntry {
    pub team_id: TeamId,
    pub team_name: String,
    pub total_bid: f64,
}

/// Response for the team-spending query.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSpendingResponse {
    pub success: bool,
    pub spending: Vec<TeamSpendingEntry>,
}

/// Snapshot of one auction's authoritative state, for late joiners.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionSnapshot {
    pub success: bool,
    pub auction: Auction,
}

/// The control surface driving auction mutations.
pub struct ControlApi {
    store: Arc<dyn AuctionStore>,
    events: broadcast::Sender<AuctionEvent>,
    metrics: Arc<ServerMetrics>,
    /// Per-auction mutation locks, created on first touch.
    locks: StdMutex<HashMap<AuctionId, Arc<Mutex<()>>>>,
}

impl ControlApi {
    pub fn new(
        store: Arc<dyn AuctionStore>,
        events: broadcast::Sender<AuctionEvent>,
        metrics: Arc<ServerMetrics>,
    ) -> Self {
        Self {
            store,
            events,
            metrics,
            locks: StdMutex::new(HashMap::new()),
        }
    }

    /// Move an auction from draft to live and announce it.
    pub async fn start_auction(&self, auction_id: AuctionId) -> AppResult<LifecycleResponse> {
        let lock = self.lock_for(auction_id);
        let _guard = lock.lock().await;

        let mut auction = self.load_auction(auction_id)?;
        auction.start()?;
        let name = auction.name.clone();
        self.store.save_auction(auction);

        tracing::info!(%auction_id, "auction started");
        self.emit(AuctionEvent::AuctionStarted {
            auction_id,
            auction_name: name,
        });

        Ok(LifecycleResponse {
            success: true,
            auction_id,
        })
    }

    /// Close a live auction. Terminal.
    pub async fn close_auction(&self, auction_id: AuctionId) -> AppResult<LifecycleResponse> {
        let lock = self.lock_for(auction_id);
        let _guard = lock.lock().await;

        let mut auction = self.load_auction(auction_id)?;
        auction.close()?;
        let name = auction.name.clone();
        self.store.save_auction(auction);

        tracing::info!(%auction_id, "auction closed");
        self.emit(AuctionEvent::AuctionClosed {
            auction_id,
            auction_name: name,
        });

        Ok(LifecycleResponse {
            success: true,
            auction_id,
        })
    }

    /// Put a player up for bid, resetting the round state.
    pub async fn select_player(
        &self,
        auction_id: AuctionId,
        target: SelectTarget,
    ) -> AppResult<SelectPlayerResponse> {
        let lock = self.lock_for(auction_id);
        let _guard = lock.lock().await;

        let mut auction = self.load_auction(auction_id)?;
        let choice = match target {
            SelectTarget::Player(id) => PlayerChoice::Player(id),
            SelectTarget::Random => PlayerChoice::Random,
        };
        let player_id = auction.select_player(choice)?;
        let player = self.load_player(player_id)?;
        self.store.save_auction(auction);

        let base = player.base_price.to_float();
        tracing::info!(%auction_id, %player_id, "player up for bid");
        self.emit(AuctionEvent::PlayerLive {
            player_id,
            player_name: player.name.clone(),
            base_price: base,
            position: player.position.clone(),
            batch: player.batch.clone(),
            photo: player.photo.clone(),
            min_bid: base,
            current_bid: 0.0,
            total_amount: base,
        });

        Ok(SelectPlayerResponse {
            success: true,
            player_id,
            player_name: player.name,
        })
    }

    /// Record a bid increment for the player currently up for bid.
    pub async fn place_bid(
        &self,
        auction_id: AuctionId,
        player_id: PlayerId,
        team_id: TeamId,
        bid_amount: f64,
    ) -> AppResult<PlaceBidResponse> {
        if !bid_amount.is_finite() || bid_amount <= 0.0 {
            return Err(AppError::InvalidInput(
                "bidAmount must be a positive number".into(),
            ));
        }
        let amount = Money::from_float(bid_amount);
        if !amount.is_positive() {
            return Err(AppError::InvalidInput(
                "bidAmount is below the smallest money increment".into(),
            ));
        }

        let lock = self.lock_for(auction_id);
        let _guard = lock.lock().await;

        let mut auction = self.load_auction(auction_id)?;
        let player = self.load_player(player_id)?;
        let team = self.load_team(team_id)?;

        let placed = auction.place_bid(player_id, team_id, amount, player.base_price)?;

        let bid = Bid {
            id: self.store.next_bid_id(),
            auction_id,
            player_id,
            team_id,
            amount,
            round: auction.round,
            timestamp: now_ms(),
        };
        self.store.append_bid(bid);
        self.store.save_auction(auction);
        self.metrics.bid_accepted();

        tracing::debug!(
            %auction_id, %player_id, %team_id,
            amount = bid_amount,
            cumulative = placed.cumulative_bid.to_float(),
            "bid accepted"
        );
        self.emit(AuctionEvent::NewBid {
            team_id,
            team_name: team.name.clone(),
            amount: placed.amount.to_float(),
            cumulative_bid: placed.cumulative_bid.to_float(),
            base_price: player.base_price.to_float(),
            total_amount: placed.total_amount.to_float(),
            player_id,
            player_name: player.name,
        });

        Ok(PlaceBidResponse {
            success: true,
            bid_amount: placed.amount.to_float(),
            team_name: team.name,
        })
    }

    /// Sell the current player to the leading team.
    pub async fn sell_player(
        &self,
        auction_id: AuctionId,
        player_id: PlayerId,
    ) -> AppResult<SellPlayerResponse> {
        let lock = self.lock_for(auction_id);
        let _guard = lock.lock().await;

        let mut auction = self.load_auction(auction_id)?;
        let player = self.load_player(player_id)?;

        let sold = auction.sell_player(player_id, player.base_price)?;
        let team = self.load_team(sold.team_id)?;
        self.store.save_auction(auction);
        self.metrics.player_sold();

        tracing::info!(
            %auction_id, %player_id, team_id = %sold.team_id,
            sold_price = sold.sold_price.to_float(),
            "player sold"
        );
        self.emit(AuctionEvent::PlayerSold {
            player_id,
            player_name: player.name,
            team_id: sold.team_id,
            team_name: team.name,
            sold_price: sold.sold_price.to_float(),
            base_price: sold.base_price.to_float(),
            cumulative_bids: sold.cumulative_bids.to_float(),
        });

        Ok(SellPlayerResponse { success: true })
    }

    /// Per-team bid totals for one (auction, player) pair, covering a
    /// single bidding round. Read-only.
    pub async fn team_spending(
        &self,
        auction_id: AuctionId,
        player_id: PlayerId,
    ) -> AppResult<TeamSpendingResponse> {
        let auction = self.load_auction(auction_id)?;
        self.load_player(player_id)?;

        // The open round while the player is up for bid, otherwise the
        // last round that recorded a bid for this player.
        let round = if auction.current_player_id == Some(player_id) {
            auction.round
        } else {
            self.store
                .latest_bid_round(auction_id, player_id)
                .unwrap_or(0)
        };

        let spending = self
            .store
            .spending_by_team(auction_id, player_id, round)
            .into_iter()
            .map(|spend| {
                let team = self.load_team(spend.team_id)?;
                Ok(TeamSpendingEntry {
                    team_id: spend.team_id,
                    team_name: team.name,
                    total_bid: spend.total.to_float(),
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(TeamSpendingResponse {
            success: true,
            spending,
        })
    }

    /// Current authoritative state of one auction. Read-only.
    pub async fn auction_snapshot(&self, auction_id: AuctionId) -> AppResult<AuctionSnapshot> {
        let auction = self.load_auction(auction_id)?;
        Ok(AuctionSnapshot {
            success: true,
            auction,
        })
    }

    fn lock_for(&self, auction_id: AuctionId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        locks.entry(auction_id).or_default().clone()
    }

    fn load_auction(&self, id: AuctionId) -> AppResult<Auction> {
        self.store
            .load_auction(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    fn load_player(&self, id: PlayerId) -> AppResult<Player> {
        self.store
            .load_player(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    fn load_team(&self, id: TeamId) -> AppResult<Team> {
        self.store
            .load_team(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    fn emit(&self, event: AuctionEvent) {
        tracing::debug!(kind = event.kind(), "broadcasting event");
        self.metrics.event_broadcast();
        // Fire-and-forget: send fails only when no client is subscribed.
        let _ = self.events.send(event);
    }
}

fn now_ms() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as Timestamp)
        .unwrap_or(0)
}
