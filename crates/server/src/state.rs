//! Shared server state.
//!
//! Contains the control API, the broadcast channel, and process-wide
//! metrics shared across handlers. Cloned into each handler via Axum's
//! State extractor.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::sync::broadcast;

use store::AuctionStore;

use crate::control::ControlApi;
use crate::events::AuctionEvent;

/// Capacity of the event fan-out channel. Slow clients that lag past
/// this many events skip ahead rather than blocking the auction.
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Shared state for all route handlers.
#[derive(Clone)]
pub struct ServerState {
    /// Control API driving auction mutations.
    pub control: Arc<ControlApi>,

    /// Persistence store, for read-only handlers.
    pub store: Arc<dyn AuctionStore>,

    /// Broadcast channel for auction events (server -> clients).
    pub event_tx: broadcast::Sender<AuctionEvent>,

    /// Server start time.
    pub start_time: Instant,

    /// Shared metrics.
    pub metrics: Arc<ServerMetrics>,
}

impl ServerState {
    /// Create server state around a store, wiring the broadcast channel
    /// and control API together.
    pub fn new(store: Arc<dyn AuctionStore>) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let metrics = Arc::new(ServerMetrics::new());
        let control = Arc::new(ControlApi::new(
            store.clone(),
            event_tx.clone(),
            metrics.clone(),
        ));

        Self {
            control,
            store,
            event_tx,
            start_time: Instant::now(),
            metrics,
        }
    }

    /// Get uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Subscribe to auction events.
    pub fn subscribe(&self) -> broadcast::Receiver<AuctionEvent> {
        self.event_tx.subscribe()
    }
}

/// Server-side metrics.
pub struct ServerMetrics {
    /// Active WebSocket connections.
    pub ws_connections: AtomicU64,
    /// Bids accepted since boot.
    pub bids_accepted: AtomicU64,
    /// Players sold since boot.
    pub players_sold: AtomicU64,
    /// Events handed to the broadcast channel since boot.
    pub events_broadcast: AtomicU64,
}

impl ServerMetrics {
    pub fn new() -> Self {
        Self {
            ws_connections: AtomicU64::new(0),
            bids_accepted: AtomicU64::new(0),
            players_sold: AtomicU64::new(0),
            events_broadcast: AtomicU64::new(0),
        }
    }

    /// Increment WebSocket connection count.
    pub fn ws_connect(&self) {
        self.ws_connections.fetch_add(1, Ordering::Relaxed);
    }

    /// Decrement WebSocket connection count.
    pub fn ws_disconnect(&self) {
        self.ws_connections.fetch_sub(1, Ordering::Relaxed);
    }

    pub fn bid_accepted(&self) {
        self.bids_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn player_sold(&self) {
        self.players_sold.fetch_add(1, Ordering::Relaxed);
    }

    pub fn event_broadcast(&self) {
        self.events_broadcast.fetch_add(1, Ordering::Relaxed);
    }

    pub fn ws_count(&self) -> u64 {
        self.ws_connections.load(Ordering::Relaxed)
    }

    pub fn bid_count(&self) -> u64 {
        self.bids_accepted.load(Ordering::Relaxed)
    }

    pub fn sold_count(&self) -> u64 {
        self.players_sold.load(Ordering::Relaxed)
    }

    pub fn event_count(&self) -> u64 {
        self.events_broadcast.load(Ordering::Relaxed)
    }
}

impl Default for ServerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ws_connection_counting() {
        let metrics = ServerMetrics::new();
        assert_eq!(metrics.ws_count(), 0);

        metrics.ws_connect();
        metrics.ws_connect();
        assert_eq!(metrics.ws_count(), 2);

        metrics.ws_disconnect();
        assert_eq!(metrics.ws_count(), 1);
    }

    #[test]
    fn test_counters_increment() {
        let metrics = ServerMetrics::new();
        metrics.bid_accepted();
        metrics.bid_accepted();
        metrics.player_sold();
        metrics.event_broadcast();

        assert_eq!(metrics.bid_count(), 2);
        assert_eq!(metrics.sold_count(), 1);
        assert_eq!(metrics.event_count(), 1);
    }
}
