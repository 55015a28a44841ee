/**
 * Server Initialization
 *
 * Initialization and setup of the Axum HTTP server: state creation,
 * optional database loading, state restoration, and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Load the optional database pool
 * 2. Create `AppState` (store, hub, presence)
 * 3. Restore persisted messages into the store when a database exists
 * 4. Assemble the router
 *
 * Restoration failures are logged but never prevent startup; the server
 * then begins with an empty message list.
 */
use axum::Router;

use crate::backend::chat::db::load_messages;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// Returns the router and the state it was built from (the state is
/// also handed back so the binary and tests can reach the hub and the
/// store directly).
pub async fn create_app() -> (Router, AppState) {
    tracing::info!("Initializing AgriChat backend server");

    let db_pool = load_database().await;
    let app_state = AppState::new(db_pool);

    if let Some(pool) = app_state.db_pool.clone() {
        restore_messages(&pool, &app_state).await;
    }

    tracing::info!("Message store, hub, and presence tracker initialized");

    let app = create_router(app_state.clone());
    (app, app_state)
}

/// Restore the message list from the database
///
/// Loads persisted messages (oldest first) into the in-memory store so
/// the server keeps its history across restarts. Presence is ephemeral
/// by design and is never restored.
async fn restore_messages(pool: &sqlx::PgPool, app_state: &AppState) {
    tracing::info!("Loading messages from database...");

    match load_messages(pool).await {
        Ok(messages) => {
            tracing::info!("Loaded {} messages from database", messages.len());
            app_state.store.load(messages).await;
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load messages from database (table may not exist yet): {:?}",
                e
            );
            tracing::warn!("Starting with an empty message store");
        }
    }
}
