//! Persistence store for the auction service.
//!
//! The engine never fetches lazily: the control layer loads typed
//! records through [`AuctionStore`], runs the engine on a working copy,
//! and saves whole records back only on success. A failed operation
//! therefore leaves the store untouched (commit-or-nothing).
//!
//! # Modules
//!
//! - [`memory`]: In-memory implementation backing the service and tests

pub mod memory;

pub use memory::MemoryStore;

use engine::{Auction, TeamSpend};
use types::{AuctionId, Bid, BidId, Player, PlayerId, Team, TeamId};

/// Typed repository interface consumed by the control API.
///
/// Bids are append-only; auctions are saved as whole records.
pub trait AuctionStore: Send + Sync {
    fn load_auction(&self, id: AuctionId) -> Option<Auction>;
    fn save_auction(&self, auction: Auction);

    /// Append one bid to the ledger. Never updates or deletes.
    fn append_bid(&self, bid: Bid);
    fn bids_for(&self, auction_id: AuctionId, player_id: PlayerId) -> Vec<Bid>;
    /// Per-team totals for one bidding round of the pair.
    fn spending_by_team(
        &self,
        auction_id: AuctionId,
        player_id: PlayerId,
        round: u64,
    ) -> Vec<TeamSpend>;
    /// Most recent round with a recorded bid for the pair.
    fn latest_bid_round(&self, auction_id: AuctionId, player_id: PlayerId) -> Option<u64>;
    /// Allocate the next bid identifier.
    fn next_bid_id(&self) -> BidId;

    fn load_player(&self, id: PlayerId) -> Option<Player>;
    fn load_team(&self, id: TeamId) -> Option<Team>;
    fn players_in_auction(&self, id: AuctionId) -> Vec<Player>;
    fn list_teams(&self) -> Vec<Team>;

    fn insert_auction(&self, auction: Auction);
    fn insert_player(&self, player: Player);
    fn insert_team(&self, team: Team);
}
