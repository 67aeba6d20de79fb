//! Error types for engine operations.

use std::fmt;
use types::PlayerId;

use crate::auction::AuctionStatus;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while driving an auction. All are recoverable
/// and map to client-facing responses at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The auction is not live, or no bidding round is open.
    NotLive,
    /// The request targets a player other than the one currently up for
    /// bid. Guards stale clients racing a player change.
    PlayerMismatch {
        expected: Option<PlayerId>,
        got: PlayerId,
    },
    /// The player is not a roster member of this auction.
    PlayerNotInAuction(PlayerId),
    /// Explicit selection of a player already sold in this auction.
    PlayerAlreadySold(PlayerId),
    /// Random selection was requested but every roster player is sold.
    NoAvailablePlayers,
    /// Sell was requested before any bid was placed.
    NoBidPlaced,
    /// The requested lifecycle transition is not allowed from the
    /// current status.
    InvalidTransition {
        from: AuctionStatus,
        to: AuctionStatus,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NotLive => write!(f, "auction is not live"),
            EngineError::PlayerMismatch { expected, got } => match expected {
                Some(current) => write!(
                    f,
                    "bid targets {} but {} is currently up for bid",
                    got, current
                ),
                None => write!(f, "bid targets {} but no player is up for bid", got),
            },
            EngineError::PlayerNotInAuction(id) => {
                write!(f, "{} is not part of this auction", id)
            }
            EngineError::PlayerAlreadySold(id) => {
                write!(f, "{} was already sold in this auction", id)
            }
            EngineError::NoAvailablePlayers => {
                write!(f, "no unsold players available for selection")
            }
            EngineError::NoBidPlaced => write!(f, "no bid has been placed for this player"),
            EngineError::InvalidTransition { from, to } => {
                write!(f, "cannot move auction from {:?} to {:?}", from, to)
            }
        }
    }
}

impl std::error::Error for EngineError {}
