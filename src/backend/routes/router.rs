/**
 * Router Configuration
 *
 * Assembles the full route table:
 *
 * - `GET    /`                          - informational root route
 * - `GET    /api/messages`              - message list
 * - `POST   /api/messages`              - create message
 * - `PUT    /api/messages/{id}`         - edit message
 * - `DELETE /api/messages/{id}`         - delete message
 * - `DELETE /api/messages/admin/clear`  - admin bulk clear (guarded)
 * - `GET    /ws`                        - WebSocket upgrade onto the hub
 *
 * # Route Order
 *
 * The admin clear route is registered before the `{id}` routes and
 * carries its own middleware layer, so the guard wraps only the
 * privileged endpoint.
 *
 * # CORS
 *
 * The API is served CORS-permissive; browser clients of the community
 * site run on a different origin than the API.
 */
use axum::{
    middleware::from_fn,
    routing::{delete, get},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::backend::chat::handlers::{
    clear_messages, create_message, delete_message, list_messages, update_message,
};
use crate::backend::hub::socket::handle_socket_upgrade;
use crate::backend::middleware::auth::admin_middleware;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (store, hub, presence, database)
pub fn create_router(app_state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/api/messages/admin/clear", delete(clear_messages))
        .layer(from_fn(admin_middleware));

    Router::new()
        .route("/", get(|| async { "AgriChat API running" }))
        .route(
            "/api/messages",
            get(list_messages).post(create_message),
        )
        .route(
            "/api/messages/{id}",
            axum::routing::put(update_message).delete(delete_message),
        )
        .merge(admin_routes)
        .route("/ws", get(handle_socket_upgrade))
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
