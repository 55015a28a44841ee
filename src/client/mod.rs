/**
 * Client Module
 *
 * UI-agnostic client state. A frontend embeds [`ChatView`], feeds it
 * the initial `GET /api/messages` fetch plus the hub event stream, and
 * reads back the grouped message list, typing indicators, and presence
 * count for rendering.
 */
pub mod view;

pub use view::{day_label, ChatView, TYPING_EXPIRY_SECS};
