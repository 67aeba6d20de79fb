//! Core types shared across the player auction system.
//!
//! # Modules
//!
//! - [`ids`]: Newtype identifiers for auctions, players, teams, and bids
//! - [`money`]: Fixed-point monetary type (4 decimal places)
//! - [`records`]: Plain data records (Team, Player, Bid)

pub mod ids;
pub mod money;
pub mod records;

pub use ids::{AuctionId, BidId, MONEY_SCALE, PlayerId, TeamId, Timestamp};
pub use money::Money;
pub use records::{Bid, Player, Team};
