//! Append-only bid ledger.
//!
//! The ledger is the source of truth for bid history. The auction record
//! caches the running cumulative total for O(1) reads; that cached field
//! is derived state and must always be rebuildable from this log.

use std::collections::HashMap;

use types::{AuctionId, Bid, Money, PlayerId, TeamId};

/// Per-team aggregate of bid increments for one player.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSpend {
    pub team_id: TeamId,
    pub total: Money,
}

/// Append-only sequence of bids keyed by (auction, player).
///
/// Bids are never updated or deleted. Insertion order is preserved per
/// key, so the last entry for the active pair identifies the leader.
#[derive(Debug, Default)]
pub struct BidLedger {
    entries: HashMap<(AuctionId, PlayerId), Vec<Bid>>,
}

impl BidLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one bid. O(1) amortized.
    pub fn record(&mut self, bid: Bid) {
        self.entries
            .entry((bid.auction_id, bid.player_id))
            .or_default()
            .push(bid);
    }

    /// All bids for one (auction, player) pair, in insertion order.
    pub fn bids_for(&self, auction_id: AuctionId, player_id: PlayerId) -> &[Bid] {
        self.entries
            .get(&(auction_id, player_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Sum of bid amounts for one (auction, player) pair within one
    /// round. Bids from abandoned rounds of the same player stay in the
    /// log but are excluded here.
    pub fn cumulative_for(&self, auction_id: AuctionId, player_id: PlayerId, round: u64) -> Money {
        self.bids_for(auction_id, player_id)
            .iter()
            .filter(|b| b.round == round)
            .map(|b| b.amount)
            .sum()
    }

    /// Most recent round with a recorded bid for this pair.
    pub fn latest_round_for(&self, auction_id: AuctionId, player_id: PlayerId) -> Option<u64> {
        self.bids_for(auction_id, player_id)
            .iter()
            .map(|b| b.round)
            .max()
    }

    /// Bid amounts within one round grouped by team, ordered by each
    /// team's first bid.
    pub fn spending_by_team(
        &self,
        auction_id: AuctionId,
        player_id: PlayerId,
        round: u64,
    ) -> Vec<TeamSpend> {
        let mut order: Vec<TeamId> = Vec::new();
        let mut totals: HashMap<TeamId, Money> = HashMap::new();

        for bid in self.bids_for(auction_id, player_id) {
            if bid.round != round {
                continue;
            }
            if !totals.contains_key(&bid.team_id) {
                order.push(bid.team_id);
            }
            *totals.entry(bid.team_id).or_insert(Money::ZERO) += bid.amount;
        }

        order
            .into_iter()
            .map(|team_id| TeamSpend {
                team_id,
                total: totals[&team_id],
            })
            .collect()
    }

    /// Total number of recorded bids across all pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::BidId;

    fn bid(id: u64, round: u64, team: u64, amount: f64) -> Bid {
        Bid {
            id: BidId(id),
            auction_id: AuctionId(1),
            player_id: PlayerId(10),
            team_id: TeamId(team),
            amount: Money::from_float(amount),
            round,
            timestamp: id * 1000,
        }
    }

    #[test]
    fn test_cumulative_is_sum_of_recorded_amounts() {
        let mut ledger = BidLedger::new();
        ledger.record(bid(1, 1, 1, 200.0));
        ledger.record(bid(2, 1, 2, 150.0));
        ledger.record(bid(3, 1, 1, 50.0));

        assert_eq!(
            ledger.cumulative_for(AuctionId(1), PlayerId(10), 1),
            Money::from_float(400.0)
        );
        assert_eq!(ledger.bids_for(AuctionId(1), PlayerId(10)).len(), 3);
    }

    #[test]
    fn test_empty_pair_reads_as_zero() {
        let ledger = BidLedger::new();
        assert_eq!(
            ledger.cumulative_for(AuctionId(9), PlayerId(9), 1),
            Money::ZERO
        );
        assert!(ledger.bids_for(AuctionId(9), PlayerId(9)).is_empty());
        assert_eq!(ledger.latest_round_for(AuctionId(9), PlayerId(9)), None);
    }

    #[test]
    fn test_spending_by_team_groups_and_preserves_first_bid_order() {
        let mut ledger = BidLedger::new();
        ledger.record(bid(1, 1, 2, 100.0));
        ledger.record(bid(2, 1, 1, 50.0));
        ledger.record(bid(3, 1, 2, 25.0));

        let spending = ledger.spending_by_team(AuctionId(1), PlayerId(10), 1);
        assert_eq!(spending.len(), 2);
        assert_eq!(spending[0].team_id, TeamId(2));
        assert_eq!(spending[0].total, Money::from_float(125.0));
        assert_eq!(spending[1].team_id, TeamId(1));
        assert_eq!(spending[1].total, Money::from_float(50.0));
    }

    #[test]
    fn test_abandoned_round_bids_are_excluded() {
        // Round 1 was abandoned after one bid; the player re-opened as
        // round 3. Scoped reads must not mix the two pots.
        let mut ledger = BidLedger::new();
        ledger.record(bid(1, 1, 1, 100.0));
        ledger.record(bid(2, 3, 2, 50.0));

        assert_eq!(
            ledger.cumulative_for(AuctionId(1), PlayerId(10), 3),
            Money::from_float(50.0)
        );
        assert_eq!(
            ledger.cumulative_for(AuctionId(1), PlayerId(10), 1),
            Money::from_float(100.0)
        );
        assert_eq!(ledger.latest_round_for(AuctionId(1), PlayerId(10)), Some(3));

        let spending = ledger.spending_by_team(AuctionId(1), PlayerId(10), 3);
        assert_eq!(spending.len(), 1);
        assert_eq!(spending[0].team_id, TeamId(2));
        assert_eq!(spending[0].total, Money::from_float(50.0));

        // Full history is still intact for display/rebuild.
        assert_eq!(ledger.bids_for(AuctionId(1), PlayerId(10)).len(), 2);
    }

    #[test]
    fn test_pairs_are_isolated() {
        let mut ledger = BidLedger::new();
        ledger.record(bid(1, 1, 1, 100.0));
        let mut other = bid(2, 1, 1, 999.0);
        other.player_id = PlayerId(11);
        ledger.record(other);

        assert_eq!(
            ledger.cumulative_for(AuctionId(1), PlayerId(10), 1),
            Money::from_float(100.0)
        );
        assert_eq!(
            ledger.cumulative_for(AuctionId(1), PlayerId(11), 1),
            Money::from_float(999.0)
        );
    }
}
