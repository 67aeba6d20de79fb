//! Live auction engine: state machine and bid ledger.
//!
//! This crate is the authoritative core of the system. It is pure and
//! synchronous; persistence and broadcast live in the `store` and
//! `server` crates.
//!
//! # Modules
//!
//! - [`auction`]: Auction lifecycle and round state machine
//! - [`ledger`]: Append-only bid log with per-team aggregation
//! - [`error`]: Recoverable engine errors

pub mod auction;
pub mod error;
pub mod ledger;

pub use auction::{Auction, AuctionStatus, BidPlaced, PlayerChoice, Sale, Sold};
pub use error::{EngineError, Result};
pub use ledger::{BidLedger, TeamSpend};
