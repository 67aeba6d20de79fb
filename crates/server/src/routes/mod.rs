//! Route handlers for the server.
//!
//! # Modules
//!
//! - [`health`]: Health and readiness endpoints
//! - [`ws`]: WebSocket handler for the live event stream
//! - [`api`]: Control API endpoints driving the auction

pub mod api;
pub mod health;
pub mod ws;
