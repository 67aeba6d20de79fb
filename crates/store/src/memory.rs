//! In-memory store implementation.
//!
//! Holds all records behind one `RwLock`. This lock only protects map
//! integrity; serialization of auction mutations is the control layer's
//! responsibility (per-auction mutex held across load, engine call, and
//! save).

use std::collections::HashMap;
use std::sync::RwLock;

use engine::{Auction, BidLedger, TeamSpend};
use types::{AuctionId, Bid, BidId, Player, PlayerId, Team, TeamId};

use crate::AuctionStore;

#[derive(Default)]
struct Inner {
    auctions: HashMap<AuctionId, Auction>,
    players: HashMap<PlayerId, Player>,
    teams: HashMap<TeamId, Team>,
    ledger: BidLedger,
    next_bid: u64,
}

/// In-memory [`AuctionStore`] backed by hash maps and the engine's
/// append-only bid ledger.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        // Lock poisoning only happens if a writer panicked; treat the
        // data as still usable rather than propagating the poison.
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Total number of recorded bids, across all auctions.
    pub fn bid_count(&self) -> usize {
        self.read().ledger.len()
    }

    /// Number of registered teams.
    pub fn team_count(&self) -> usize {
        self.read().teams.len()
    }

    /// Number of registered players.
    pub fn player_count(&self) -> usize {
        self.read().players.len()
    }
}

impl AuctionStore for MemoryStore {
    fn load_auction(&self, id: AuctionId) -> Option<Auction> {
        self.read().auctions.get(&id).cloned()
    }

    fn save_auction(&self, auction: Auction) {
        self.write().auctions.insert(auction.id, auction);
    }

    fn append_bid(&self, bid: Bid) {
        self.write().ledger.record(bid);
    }

    fn bids_for(&self, auction_id: AuctionId, player_id: PlayerId) -> Vec<Bid> {
        self.read().ledger.bids_for(auction_id, player_id).to_vec()
    }

    fn spending_by_team(
        &self,
        auction_id: AuctionId,
        player_id: PlayerId,
        round: u64,
    ) -> Vec<TeamSpend> {
        self.read()
            .ledger
            .spending_by_team(auction_id, player_id, round)
    }

    fn latest_bid_round(&self, auction_id: AuctionId, player_id: PlayerId) -> Option<u64> {
        self.read().ledger.latest_round_for(auction_id, player_id)
    }

    fn next_bid_id(&self) -> BidId {
        let mut inner = self.write();
        inner.next_bid += 1;
        BidId(inner.next_bid)
    }

    fn load_player(&self, id: PlayerId) -> Option<Player> {
        self.read().players.get(&id).cloned()
    }

    fn load_team(&self, id: TeamId) -> Option<Team> {
        self.read().teams.get(&id).cloned()
    }

    fn players_in_auction(&self, id: AuctionId) -> Vec<Player> {
        let inner = self.read();
        let Some(auction) = inner.auctions.get(&id) else {
            return Vec::new();
        };
        auction
            .players
            .iter()
            .filter_map(|pid| inner.players.get(pid).cloned())
            .collect()
    }

    fn list_teams(&self) -> Vec<Team> {
        let mut teams: Vec<Team> = self.read().teams.values().cloned().collect();
        teams.sort_by_key(|t| t.id);
        teams
    }

    fn insert_auction(&self, auction: Auction) {
        self.write().auctions.insert(auction.id, auction);
    }

    fn insert_player(&self, player: Player) {
        self.write().players.insert(player.id, player);
    }

    fn insert_team(&self, team: Team) {
        self.write().teams.insert(team.id, team);
    }
}
