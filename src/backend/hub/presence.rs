/**
 * Presence Tracker
 *
 * Process-wide registry of currently connected, named chat participants.
 * Each live connection owns at most one entry, keyed by its ephemeral
 * connection id; the tracker's size is therefore always the number of
 * live connections that have announced a display name.
 *
 * The tracker is an owned object injected into the connection driver at
 * construction, never an implicit global. A mutex-guarded map is enough
 * here: operations are tiny and never held across await points.
 */
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Concurrency-safe `(connection id -> display name)` registry
///
/// Cloning is cheap; all clones share the same map.
#[derive(Clone, Default)]
pub struct PresenceTracker {
    inner: Arc<Mutex<HashMap<Uuid, String>>>,
}

impl PresenceTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connection under a display name
    ///
    /// Registering the same connection id twice overwrites its display
    /// name; it never creates a duplicate entry.
    pub fn register(&self, connection_id: Uuid, display_name: String) {
        self.inner
            .lock()
            .expect("presence lock poisoned")
            .insert(connection_id, display_name);
    }

    /// Remove a connection's entry, returning its display name
    ///
    /// Removing a connection that never registered is a no-op and
    /// returns `None`.
    pub fn unregister(&self, connection_id: Uuid) -> Option<String> {
        self.inner
            .lock()
            .expect("presence lock poisoned")
            .remove(&connection_id)
    }

    /// Number of currently registered connections
    pub fn count(&self) -> usize {
        self.inner.lock().expect("presence lock poisoned").len()
    }
}
