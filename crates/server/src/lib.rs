//! Server crate: Axum-based web service for the live player auction.
//!
//! Drives a single real-time bidding round for one player at a time,
//! broadcasts state transitions to all connected clients, and keeps bid
//! state consistent under concurrent admin requests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  validated    ┌─────────────┐  commit   ┌───────────┐
//! │ Control API  │──────────────▶│   Engine    │──────────▶│   Store   │
//! │ (routes/api) │  per-auction  │ (state      │  save     │ (records, │
//! │              │  mutex held   │  machine +  │           │  ledger)  │
//! └──────┬───────┘               │  ledger)    │           └───────────┘
//!        │ after commit          └─────────────┘
//!        ▼
//! ┌──────────────┐   fan-out    ┌─────────────┐
//! │  broadcast   │─────────────▶│ WS clients  │
//! └──────────────┘              └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Axum application builder and router setup
//! - [`state`]: Shared server state (channels, metrics)
//! - [`error`]: Unified error handling with HTTP status codes
//! - [`events`]: Broadcast event payloads
//! - [`control`]: Control API (per-auction serialization, commit-or-nothing)
//! - [`routes`]: HTTP route handlers (health, ws, api)

pub mod app;
pub mod control;
pub mod error;
pub mod events;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use app::{ServerConfig, create_app};
pub use control::{ControlApi, SelectTarget};
pub use error::{AppError, AppResult};
pub use events::AuctionEvent;
pub use state::{ServerMetrics, ServerState};
