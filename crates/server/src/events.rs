//! Broadcast event payloads (server -> clients).
//!
//! Events are one-directional and fire-and-forget: no acknowledgment, no
//! delivery guarantee. Ordering is guaranteed per auction because events
//! are sent inside the same critical section that commits the causing
//! state transition.
//!
//! # Wire format
//!
//! Each event serializes as a flat JSON object tagged by kind:
//!
//! ```json
//! {"event":"new_bid","teamId":2,"teamName":"Team Beta","amount":150.0,...}
//! ```

use serde::{Deserialize, Serialize};
use types::{AuctionId, PlayerId, TeamId};

/// State-change events broadcast to every connected client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuctionEvent {
    #[serde(rename_all = "camelCase")]
    AuctionStarted {
        auction_id: AuctionId,
        auction_name: String,
    },
    #[serde(rename_all = "camelCase")]
    AuctionClosed {
        auction_id: AuctionId,
        auction_name: String,
    },
    /// A player is up for bid. `current_bid` is always 0 and
    /// `total_amount` equals the base price at this point.
    #[serde(rename_all = "camelCase")]
    PlayerLive {
        player_id: PlayerId,
        player_name: String,
        base_price: f64,
        position: String,
        batch: String,
        photo: Option<String>,
        min_bid: f64,
        current_bid: f64,
        total_amount: f64,
    },
    /// A bid increment was accepted. `cumulative_bid` includes this
    /// bid; `total_amount` is base price plus cumulative.
    #[serde(rename_all = "camelCase")]
    NewBid {
        team_id: TeamId,
        team_name: String,
        amount: f64,
        cumulative_bid: f64,
        base_price: f64,
        total_amount: f64,
        player_id: PlayerId,
        player_name: String,
    },
    #[serde(rename_all = "camelCase")]
    PlayerSold {
        player_id: PlayerId,
        player_name: String,
        team_id: TeamId,
        team_name: String,
        sold_price: f64,
        base_price: f64,
        cumulative_bids: f64,
    },
}

impl AuctionEvent {
    /// Wire tag of this event, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            AuctionEvent::AuctionStarted { .. } => "auction_started",
            AuctionEvent::AuctionClosed { .. } => "auction_closed",
            AuctionEvent::PlayerLive { .. } => "player_live",
            AuctionEvent::NewBid { .. } => "new_bid",
            AuctionEvent::PlayerSold { .. } => "player_sold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bid_wire_format() {
        let event = AuctionEvent::NewBid {
            team_id: TeamId(2),
            team_name: "Team Beta".into(),
            amount: 150.0,
            cumulative_bid: 350.0,
            base_price: 1000.0,
            total_amount: 1350.0,
            player_id: PlayerId(10),
            player_name: "Sam Cole".into(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"new_bid\""));
        assert!(json.contains("\"teamName\":\"Team Beta\""));
        assert!(json.contains("\"cumulativeBid\":350.0"));
        assert!(json.contains("\"totalAmount\":1350.0"));
    }

    #[test]
    fn test_player_live_wire_format() {
        let event = AuctionEvent::PlayerLive {
            player_id: PlayerId(10),
            player_name: "Sam Cole".into(),
            base_price: 1000.0,
            position: "Striker (ST)".into(),
            batch: "CSE 2".into(),
            photo: None,
            min_bid: 1000.0,
            current_bid: 0.0,
            total_amount: 1000.0,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"player_live\""));
        assert!(json.contains("\"currentBid\":0.0"));
        assert!(json.contains("\"minBid\":1000.0"));
    }

    #[test]
    fn test_events_round_trip() {
        let events = [
            AuctionEvent::AuctionStarted {
                auction_id: AuctionId(1),
                auction_name: "Season Draft".into(),
            },
            AuctionEvent::AuctionClosed {
                auction_id: AuctionId(1),
                auction_name: "Season Draft".into(),
            },
        ];

        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let back: AuctionEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(back, event);
        }
    }
}
