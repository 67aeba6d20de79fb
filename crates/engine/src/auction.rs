//! Auction lifecycle state machine.
//!
//! An auction moves `Draft -> Live -> Closed` (terminal). Inside `Live`
//! a nested round sub-lifecycle runs one player at a time:
//! `idle -> open(player) -> idle`.
//!
//! Bidding is cumulative: each bid is an increment added to a running
//! pot, not a replacement of a previous high bid. The team that placed
//! the most recent increment is the leader and wins on sell. This is the
//! auction format's defining rule, not a simplification.

use serde::{Deserialize, Serialize};

use types::{AuctionId, Money, PlayerId, TeamId};

use crate::error::{EngineError, Result};

/// Auction lifecycle status. Single source of truth; "is live" is a
/// derived view, never a stored flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Draft,
    Live,
    Closed,
}

/// How the next player should be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerChoice {
    Player(PlayerId),
    Random,
}

/// Outcome of an accepted bid, carrying the data broadcast to clients.
#[derive(Debug, Clone, PartialEq)]
pub struct BidPlaced {
    pub team_id: TeamId,
    pub amount: Money,
    /// Running total of all increments this round, including this bid.
    pub cumulative_bid: Money,
    /// Base price plus cumulative.
    pub total_amount: Money,
}

/// A completed sale recorded on the auction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub price: Money,
}

/// Outcome of selling the current player.
#[derive(Debug, Clone, PartialEq)]
pub struct Sold {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub sold_price: Money,
    pub base_price: Money,
    pub cumulative_bids: Money,
}

/// One auction's authoritative state.
///
/// Invariants:
/// - `current_player_id` is `Some` iff a bidding round is open.
/// - `cumulative_bid` is zero immediately after a player is selected or
///   sold, and always equals the sum of ledger amounts for the open
///   (auction, player) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub id: AuctionId,
    pub name: String,
    pub status: AuctionStatus,
    pub current_player_id: Option<PlayerId>,
    /// Bidding round sequence, incremented each time a player is
    /// selected. Bids are stamped with it so ledger reads cover exactly
    /// one round; an abandoned round's bids stay recorded but drop out
    /// of round-scoped queries.
    pub round: u64,
    pub cumulative_bid: Money,
    pub leader_team_id: Option<TeamId>,
    /// Roster of players belonging to this auction.
    pub players: Vec<PlayerId>,
    /// Completed sales, in sale order.
    pub sold: Vec<Sale>,
}

impl Auction {
    /// Create a new draft auction with the given roster.
    pub fn new(id: AuctionId, name: impl Into<String>, players: Vec<PlayerId>) -> Self {
        Self {
            id,
            name: name.into(),
            status: AuctionStatus::Draft,
            current_player_id: None,
            round: 0,
            cumulative_bid: Money::ZERO,
            leader_team_id: None,
            players,
            sold: Vec::new(),
        }
    }

    /// Derived view of `status == Live`.
    pub fn is_live(&self) -> bool {
        self.status == AuctionStatus::Live
    }

    /// Whether a bidding round is currently open.
    pub fn round_open(&self) -> bool {
        self.current_player_id.is_some()
    }

    /// Roster members not yet sold, in roster order.
    pub fn available_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .copied()
            .filter(|id| !self.sold.iter().any(|s| s.player_id == *id))
            .collect()
    }

    fn reset_round(&mut self) {
        self.current_player_id = None;
        self.cumulative_bid = Money::ZERO;
        self.leader_team_id = None;
    }

    /// Move the auction from draft to live.
    pub fn start(&mut self) -> Result<()> {
        if self.status != AuctionStatus::Draft {
            return Err(EngineError::InvalidTransition {
                from: self.status,
                to: AuctionStatus::Live,
            });
        }
        self.status = AuctionStatus::Live;
        self.reset_round();
        Ok(())
    }

    /// Close a live auction. Terminal; allowed from any round sub-state.
    pub fn close(&mut self) -> Result<()> {
        if self.status != AuctionStatus::Live {
            return Err(EngineError::InvalidTransition {
                from: self.status,
                to: AuctionStatus::Closed,
            });
        }
        self.status = AuctionStatus::Closed;
        self.reset_round();
        Ok(())
    }

    /// Open a bidding round for the chosen player.
    ///
    /// Resets the cumulative total and clears the leader regardless of
    /// the prior round's state; selecting a new player while a round is
    /// open abandons that round. Each open bumps the round sequence, so
    /// an abandoned pot never bleeds into the new one.
    pub fn select_player(&mut self, choice: PlayerChoice) -> Result<PlayerId> {
        if !self.is_live() {
            return Err(EngineError::NotLive);
        }

        let player_id = match choice {
            PlayerChoice::Player(id) => {
                if !self.players.contains(&id) {
                    return Err(EngineError::PlayerNotInAuction(id));
                }
                if self.sold.iter().any(|s| s.player_id == id) {
                    return Err(EngineError::PlayerAlreadySold(id));
                }
                id
            }
            PlayerChoice::Random => {
                use rand::seq::SliceRandom;
                let available = self.available_players();
                *available
                    .choose(&mut rand::thread_rng())
                    .ok_or(EngineError::NoAvailablePlayers)?
            }
        };

        self.round += 1;
        self.current_player_id = Some(player_id);
        self.cumulative_bid = Money::ZERO;
        self.leader_team_id = None;
        Ok(player_id)
    }

    /// Accept a bid increment for the player currently up for bid.
    ///
    /// Any positive amount is accepted; minimum-increment and cap policy
    /// is deliberately left to the caller. The amount must already be
    /// validated as positive at the API boundary.
    pub fn place_bid(
        &mut self,
        player_id: PlayerId,
        team_id: TeamId,
        amount: Money,
        base_price: Money,
    ) -> Result<BidPlaced> {
        debug_assert!(amount.is_positive());

        let current = self.open_round_player()?;
        if current != player_id {
            return Err(EngineError::PlayerMismatch {
                expected: Some(current),
                got: player_id,
            });
        }

        self.cumulative_bid += amount;
        self.leader_team_id = Some(team_id);

        Ok(BidPlaced {
            team_id,
            amount,
            cumulative_bid: self.cumulative_bid,
            total_amount: base_price + self.cumulative_bid,
        })
    }

    /// Sell the current player to the leading team and return the round
    /// to idle. Fails with `NoBidPlaced` if no bid has been accepted.
    pub fn sell_player(&mut self, player_id: PlayerId, base_price: Money) -> Result<Sold> {
        let current = self.open_round_player()?;
        if current != player_id {
            return Err(EngineError::PlayerMismatch {
                expected: Some(current),
                got: player_id,
            });
        }

        let team_id = self.leader_team_id.ok_or(EngineError::NoBidPlaced)?;
        let cumulative = self.cumulative_bid;
        let sold_price = base_price + cumulative;

        self.sold.push(Sale {
            player_id,
            team_id,
            price: sold_price,
        });
        self.reset_round();

        Ok(Sold {
            player_id,
            team_id,
            sold_price,
            base_price,
            cumulative_bids: cumulative,
        })
    }

    fn open_round_player(&self) -> Result<PlayerId> {
        if !self.is_live() {
            return Err(EngineError::NotLive);
        }
        self.current_player_id.ok_or(EngineError::NotLive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_auction() -> Auction {
        let mut auction = Auction::new(
            AuctionId(1),
            "Season Draft",
            vec![PlayerId(10), PlayerId(11), PlayerId(12)],
        );
        auction.start().unwrap();
        auction
    }

    #[test]
    fn test_start_only_from_draft() {
        let mut auction = Auction::new(AuctionId(1), "A", vec![]);
        assert!(auction.start().is_ok());
        assert_eq!(auction.status, AuctionStatus::Live);

        assert_eq!(
            auction.start(),
            Err(EngineError::InvalidTransition {
                from: AuctionStatus::Live,
                to: AuctionStatus::Live,
            })
        );
    }

    #[test]
    fn test_close_is_terminal() {
        let mut auction = live_auction();
        auction.close().unwrap();
        assert_eq!(auction.status, AuctionStatus::Closed);
        assert!(matches!(
            auction.close(),
            Err(EngineError::InvalidTransition { .. })
        ));
        assert!(matches!(
            auction.start(),
            Err(EngineError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_close_from_open_round_resets() {
        let mut auction = live_auction();
        auction
            .select_player(PlayerChoice::Player(PlayerId(10)))
            .unwrap();
        auction
            .place_bid(
                PlayerId(10),
                TeamId(1),
                Money::from_float(100.0),
                Money::from_float(1000.0),
            )
            .unwrap();

        auction.close().unwrap();
        assert!(!auction.round_open());
        assert_eq!(auction.cumulative_bid, Money::ZERO);
        assert_eq!(auction.leader_team_id, None);
    }

    #[test]
    fn test_select_requires_live() {
        let mut auction = Auction::new(AuctionId(1), "A", vec![PlayerId(10)]);
        assert_eq!(
            auction.select_player(PlayerChoice::Player(PlayerId(10))),
            Err(EngineError::NotLive)
        );
    }

    #[test]
    fn test_select_rejects_non_roster_player() {
        let mut auction = live_auction();
        assert_eq!(
            auction.select_player(PlayerChoice::Player(PlayerId(99))),
            Err(EngineError::PlayerNotInAuction(PlayerId(99)))
        );
    }

    #[test]
    fn test_select_resets_round_state() {
        let mut auction = live_auction();
        auction
            .select_player(PlayerChoice::Player(PlayerId(10)))
            .unwrap();
        auction
            .place_bid(
                PlayerId(10),
                TeamId(1),
                Money::from_float(250.0),
                Money::from_float(1000.0),
            )
            .unwrap();

        // Switching player mid-round abandons the pot.
        auction
            .select_player(PlayerChoice::Player(PlayerId(11)))
            .unwrap();
        assert_eq!(auction.current_player_id, Some(PlayerId(11)));
        assert_eq!(auction.cumulative_bid, Money::ZERO);
        assert_eq!(auction.leader_team_id, None);
    }

    #[test]
    fn test_select_bumps_round_sequence() {
        let mut auction = live_auction();
        assert_eq!(auction.round, 0);

        auction
            .select_player(PlayerChoice::Player(PlayerId(10)))
            .unwrap();
        assert_eq!(auction.round, 1);

        // Abandon and re-open: a fresh round number each time.
        auction
            .select_player(PlayerChoice::Player(PlayerId(11)))
            .unwrap();
        auction
            .select_player(PlayerChoice::Player(PlayerId(10)))
            .unwrap();
        assert_eq!(auction.round, 3);
    }

    #[test]
    fn test_select_rejects_sold_player() {
        let mut auction = live_auction();
        auction
            .select_player(PlayerChoice::Player(PlayerId(10)))
            .unwrap();
        auction
            .place_bid(PlayerId(10), TeamId(1), Money::from_float(10.0), Money::ZERO)
            .unwrap();
        auction.sell_player(PlayerId(10), Money::ZERO).unwrap();

        assert_eq!(
            auction.select_player(PlayerChoice::Player(PlayerId(10))),
            Err(EngineError::PlayerAlreadySold(PlayerId(10)))
        );
        assert_eq!(auction.sold.len(), 1);
        assert!(!auction.round_open());
    }

    #[test]
    fn test_random_select_excludes_sold_players() {
        let mut auction = live_auction();
        for player in [PlayerId(10), PlayerId(11)] {
            auction.select_player(PlayerChoice::Player(player)).unwrap();
            auction
                .place_bid(player, TeamId(1), Money::from_float(10.0), Money::ZERO)
                .unwrap();
            auction.sell_player(player, Money::ZERO).unwrap();
        }

        let picked = auction.select_player(PlayerChoice::Random).unwrap();
        assert_eq!(picked, PlayerId(12));
    }

    #[test]
    fn test_random_select_with_empty_set_fails() {
        let mut auction = Auction::new(AuctionId(1), "Empty", vec![]);
        auction.start().unwrap();
        assert_eq!(
            auction.select_player(PlayerChoice::Random),
            Err(EngineError::NoAvailablePlayers)
        );
        // Round stays idle.
        assert!(!auction.round_open());
    }

    #[test]
    fn test_bid_requires_open_round() {
        let mut auction = live_auction();
        assert_eq!(
            auction.place_bid(
                PlayerId(10),
                TeamId(1),
                Money::from_float(100.0),
                Money::ZERO
            ),
            Err(EngineError::NotLive)
        );
    }

    #[test]
    fn test_stale_bid_has_no_side_effects() {
        let mut auction = live_auction();
        auction
            .select_player(PlayerChoice::Player(PlayerId(10)))
            .unwrap();

        let before = auction.clone();
        let err = auction
            .place_bid(
                PlayerId(11),
                TeamId(1),
                Money::from_float(100.0),
                Money::ZERO,
            )
            .unwrap_err();

        assert_eq!(
            err,
            EngineError::PlayerMismatch {
                expected: Some(PlayerId(10)),
                got: PlayerId(11),
            }
        );
        assert_eq!(auction, before);
    }

    #[test]
    fn test_sell_without_bid_fails() {
        let mut auction = live_auction();
        auction
            .select_player(PlayerChoice::Player(PlayerId(10)))
            .unwrap();
        assert_eq!(
            auction.sell_player(PlayerId(10), Money::from_float(1000.0)),
            Err(EngineError::NoBidPlaced)
        );
    }

    #[test]
    fn test_cumulative_bidding_scenario() {
        // Base 1000; TeamA +200, TeamB +150; sold to TeamB at 1350.
        let base = Money::from_float(1000.0);
        let mut auction = live_auction();
        auction
            .select_player(PlayerChoice::Player(PlayerId(10)))
            .unwrap();

        let first = auction
            .place_bid(PlayerId(10), TeamId(1), Money::from_float(200.0), base)
            .unwrap();
        assert_eq!(first.cumulative_bid, Money::from_float(200.0));
        assert_eq!(first.total_amount, Money::from_float(1200.0));

        let second = auction
            .place_bid(PlayerId(10), TeamId(2), Money::from_float(150.0), base)
            .unwrap();
        assert_eq!(second.cumulative_bid, Money::from_float(350.0));
        assert_eq!(second.total_amount, Money::from_float(1350.0));
        // Last bidder leads, even with a smaller increment.
        assert_eq!(auction.leader_team_id, Some(TeamId(2)));

        let sold = auction.sell_player(PlayerId(10), base).unwrap();
        assert_eq!(sold.team_id, TeamId(2));
        assert_eq!(sold.sold_price, Money::from_float(1350.0));
        assert_eq!(sold.cumulative_bids, Money::from_float(350.0));

        assert!(!auction.round_open());
        assert_eq!(auction.cumulative_bid, Money::ZERO);
        assert_eq!(auction.leader_team_id, None);
        assert_eq!(auction.available_players(), vec![PlayerId(11), PlayerId(12)]);
    }
}
