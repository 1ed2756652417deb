//! Registry of connected clients and the letter draws handed out to them.

use dashmap::DashMap;
use parking_lot::Mutex;
use rand::{rngs::StdRng, SeedableRng};
use tokio::sync::mpsc;

use crate::letters::{self, Letter};
use crate::protocol::ServerEvent;
use crate::util::id::ClientId;

pub type EventSender = mpsc::UnboundedSender<ServerEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<ServerEvent>;

/// One global table: every client gets its own starting hand and every peel
/// is seen by everyone.
pub struct Table {
    clients: DashMap<ClientId, EventSender>,
    rng: Mutex<StdRng>,
}

impl Default for Table {
    fn default() -> Self { Self::new() }
}

impl Table {
    pub fn new() -> Self { Self::with_rng(StdRng::from_entropy()) }

    /// Deterministic draws, for tests.
    pub fn with_seed(seed: u64) -> Self { Self::with_rng(StdRng::seed_from_u64(seed)) }

    fn with_rng(rng: StdRng) -> Self {
        Self { clients: DashMap::new(), rng: Mutex::new(rng) }
    }

    /// Register a client and deal it a starting hand, to it alone.
    pub fn join(&self) -> (ClientId, EventReceiver) {
        let id = ClientId::new();
        let (tx, rx) = mpsc::unbounded_channel();
        let hand = letters::initial_hand(&mut *self.rng.lock());
        // rx is still held here, the send cannot fail
        let _ = tx.send(ServerEvent::InitialTiles(hand));
        self.clients.insert(id, tx);
        tracing::info!(client = %id, clients = self.clients.len(), "client connected");
        (id, rx)
    }

    pub fn leave(&self, id: &ClientId) -> bool {
        let removed = self.clients.remove(id).is_some();
        if removed {
            tracing::info!(client = %id, clients = self.clients.len(), "client disconnected");
        }
        removed
    }

    /// Draw one letter and send it to every client, the requester included.
    pub fn peel(&self, from: &ClientId) -> Letter {
        let letter = Letter::random(&mut *self.rng.lock());
        let delivered = self.broadcast(ServerEvent::NewTile(letter));
        tracing::debug!(client = %from, %letter, delivered, "peel");
        letter
    }

    pub fn send_to(&self, id: &ClientId, event: ServerEvent) -> bool {
        self.clients.get(id).map(|tx| tx.send(event).is_ok()).unwrap_or(false)
    }

    /// Deliver to all clients, dropping any whose receiver has gone away.
    /// Returns how many received it.
    pub fn broadcast(&self, event: ServerEvent) -> usize {
        self.clients.retain(|id, tx| {
            let alive = tx.send(event.clone()).is_ok();
            if !alive {
                tracing::debug!(client = %id, "pruned closed client");
            }
            alive
        });
        self.clients.len()
    }

    pub fn client_count(&self) -> usize { self.clients.len() }
}
