/**
 * WebSocket Connection Driver
 *
 * Owns the I/O for one hub connection: parses inbound frames into chat
 * events, feeds them through the per-connection state machine, and
 * forwards fan-out envelopes back to the socket.
 *
 * # Connection Lifecycle
 *
 * 1. `GET /ws` upgrades to a WebSocket; the connection gets a fresh
 *    ephemeral id (this is not the durable user identity — a
 *    reconnecting client re-announces presence).
 * 2. Inbound events run through `handle_client_event` and the resulting
 *    broadcasts are dispatched to the hub.
 * 3. Outbound envelopes are filtered per connection (typing skips its
 *    originator) and written as JSON text frames.
 * 4. On close — graceful or not — the driver runs `handle_disconnect`,
 *    which drops the presence entry and re-announces the count.
 *
 * # Reactions
 *
 * `reactionAdded` is the one inbound event with a durable side effect:
 * the driver appends the tuple to the stored message before fanning it
 * out, so reconnecting clients see historical reactions. The fan-out
 * layer itself stays a pure relay. A reaction racing a delete is
 * dropped without broadcast.
 *
 * # Lag
 *
 * A connection that falls behind the broadcast channel skips events and
 * keeps going; a full re-fetch of `GET /api/messages` reconciles its
 * view (best-effort at-most-once delivery).
 */
use axum::{
    extract::ws::{Message as WsMessage, WebSocket, WebSocketUpgrade},
    extract::State,
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use crate::backend::chat::db;
use crate::backend::hub::connection::{
    handle_client_event, handle_disconnect, ConnectionState,
};
use crate::backend::server::state::AppState;
use crate::shared::ChatEvent;

/// Handle `GET /ws` — upgrade onto the broadcast hub
pub async fn handle_socket_upgrade(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| run_connection(socket, state))
}

/// Drive one hub connection to completion
async fn run_connection(socket: WebSocket, state: AppState) {
    let connection_id = Uuid::new_v4();
    tracing::info!("[Hub] Connection {} opened", connection_id);

    let mut hub_rx = state.hub.subscribe();
    let (mut sink, mut stream) = socket.split();
    let mut conn_state = ConnectionState::Connected;

    loop {
        tokio::select! {
            inbound = stream.next() => {
                match inbound {
                    Some(Ok(WsMessage::Text(text))) => {
                        let event: ChatEvent = match serde_json::from_str(&text) {
                            Ok(event) => event,
                            Err(e) => {
                                tracing::warn!(
                                    "[Hub] Connection {} sent malformed event: {:?}",
                                    connection_id,
                                    e
                                );
                                continue;
                            }
                        };

                        if !apply_side_effects(&state, connection_id, &event).await {
                            continue;
                        }

                        tracing::debug!(
                            "[Hub] Connection {} event: {}",
                            connection_id,
                            event.name()
                        );
                        for out in handle_client_event(
                            &mut conn_state,
                            connection_id,
                            event,
                            &state.presence,
                        ) {
                            state.hub.dispatch(connection_id, out);
                        }
                    }
                    Some(Ok(WsMessage::Close(_))) | None => break,
                    Some(Ok(_)) => {
                        // Ping/pong are handled by axum; binary frames are ignored
                    }
                    Some(Err(e)) => {
                        tracing::debug!(
                            "[Hub] Connection {} read error: {:?}",
                            connection_id,
                            e
                        );
                        break;
                    }
                }
            }
            outbound = hub_rx.recv() => {
                match outbound {
                    Ok(envelope) => {
                        if !envelope.deliverable_to(connection_id) {
                            continue;
                        }
                        let payload = match serde_json::to_string(&envelope.event) {
                            Ok(payload) => payload,
                            Err(e) => {
                                tracing::error!("[Hub] Failed to serialize event: {:?}", e);
                                continue;
                            }
                        };
                        if sink.send(WsMessage::Text(payload.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            "[Hub] Connection {} lagged, skipped {} events",
                            connection_id,
                            skipped
                        );
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    }

    // Implicit disconnect: drop the presence entry, re-announce the count
    for out in handle_disconnect(&mut conn_state, connection_id, &state.presence) {
        state.hub.dispatch(connection_id, out);
    }
    tracing::info!("[Hub] Connection {} closed", connection_id);
}

/// Apply the durable side effect of an inbound event, if it has one
///
/// Returns false when the event should be dropped without fan-out
/// (currently only a reaction whose message no longer exists).
async fn apply_side_effects(state: &AppState, connection_id: Uuid, event: &ChatEvent) -> bool {
    let ChatEvent::ReactionAdded {
        message_id,
        emoji,
        username,
    } = event
    else {
        return true;
    };

    match state
        .store
        .add_reaction(*message_id, emoji.clone(), username.clone())
        .await
    {
        Ok(message) => {
            if let Some(pool) = &state.db_pool {
                if let Err(e) = db::update_reactions(pool, &message).await {
                    tracing::warn!(
                        "[Hub] Failed to persist reaction on {}: {:?}",
                        message_id,
                        e
                    );
                }
            }
            true
        }
        Err(_) => {
            // The message was deleted before the reaction arrived
            tracing::debug!(
                "[Hub] Connection {} reacted to missing message {}, dropping",
                connection_id,
                message_id
            );
            false
        }
    }
}
