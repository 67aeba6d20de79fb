//! Plain data records: teams, players, and bids.
//!
//! These are the durable rows the engine reads and writes. They carry no
//! behavior; auction lifecycle logic lives in the `engine` crate.

use crate::{AuctionId, BidId, Money, PlayerId, TeamId, Timestamp};
use serde::{Deserialize, Serialize};

/// A bidding team. Static roster entry, referenced by bids and by the
/// current round leader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Owner display name.
    pub owner: String,
    /// Cohort/batch label (e.g. "CSE 1").
    pub batch: String,
}

/// A player that can be put up for bid. Static roster entry with a base
/// price; sale outcomes are tracked on the auction, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub batch: String,
    /// Field position label (e.g. "Striker (ST)").
    pub position: String,
    pub base_price: Money,
    /// Photo filename, if one was uploaded.
    pub photo: Option<String>,
}

/// One recorded bid increment. Immutable and append-only: the sum of all
/// bid amounts recorded for the open round equals the auction's cached
/// cumulative total at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: BidId,
    pub auction_id: AuctionId,
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub amount: Money,
    /// Bidding round this increment belongs to. A player re-selected
    /// after an abandoned round gets a new round number, so aggregates
    /// scoped by round never mix the two pots.
    pub round: u64,
    pub timestamp: Timestamp,
}
