/**
 * Application State Management
 *
 * The `AppState` struct is the central state container for the Axum
 * application: the message store, the broadcast hub, the presence
 * tracker, and the optional database pool.
 *
 * # Thread Safety
 *
 * Every field is cheaply cloneable and internally synchronized:
 * - `MessageStore` wraps `Arc<RwLock<..>>`
 * - `ChatHub` wraps a `broadcast::Sender`
 * - `PresenceTracker` wraps `Arc<Mutex<..>>`
 * - `Option<PgPool>` is a pooled handle
 *
 * # State Extraction
 *
 * `FromRef` implementations let handlers extract just the piece of
 * state they need instead of the whole `AppState`, following Axum's
 * recommended pattern.
 */
use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::chat::MessageStore;
use crate::backend::hub::{ChatHub, PresenceTracker};

/// Application state shared by every handler and connection driver
#[derive(Clone)]
pub struct AppState {
    /// Authoritative in-memory message store
    pub store: MessageStore,

    /// Broadcast hub fanning events out to all connections
    pub hub: ChatHub,

    /// Presence registry announced through the hub
    ///
    /// Injected here (and from here into each connection driver) so it
    /// is an owned object with a defined contract rather than a global.
    pub presence: PresenceTracker,

    /// Database connection pool
    ///
    /// `None` when `DATABASE_URL` is not configured; handlers check
    /// before writing through.
    pub db_pool: Option<PgPool>,
}

impl AppState {
    /// Create a fresh state with empty store, hub, and presence
    pub fn new(db_pool: Option<PgPool>) -> Self {
        Self {
            store: MessageStore::new(),
            hub: ChatHub::new(),
            presence: PresenceTracker::new(),
            db_pool,
        }
    }
}

impl FromRef<AppState> for MessageStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for ChatHub {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hub.clone()
    }
}

impl FromRef<AppState> for PresenceTracker {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.presence.clone()
    }
}

impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
