/**
 * Database Operations for Chat Messages
 *
 * Write-through persistence for the in-memory message store. The
 * database is optional; when `DATABASE_URL` is not configured the server
 * runs purely in memory and every function in this module is simply
 * never called.
 *
 * Reactions are stored as a JSONB array on the message row, keeping the
 * durable record identical in shape to the wire record so reconnecting
 * clients see historical reactions.
 */
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::{Message, Reaction};

/// Insert a newly created message
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `message` - The message exactly as the store assigned it
pub async fn save_message(pool: &PgPool, message: &Message) -> Result<(), sqlx::Error> {
    let reactions = serde_json::to_value(&message.reactions)
        .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

    sqlx::query(
        r#"
        INSERT INTO messages (id, sender, content, edited, reply_to, reactions, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(message.id)
    .bind(&message.sender)
    .bind(&message.content)
    .bind(message.edited)
    .bind(message.reply_to)
    .bind(reactions)
    .bind(message.created_at)
    .bind(message.updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Persist an edit (content, edited flag, updated_at)
pub async fn update_message(pool: &PgPool, message: &Message) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE messages
        SET content = $2, edited = $3, updated_at = $4
        WHERE id = $1
        "#,
    )
    .bind(message.id)
    .bind(&message.content)
    .bind(message.edited)
    .bind(message.updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Persist the full reaction list of a message
///
/// Called after the store appended a reaction; writing the whole array
/// keeps the row consistent with the in-memory record without needing a
/// separate reactions table.
pub async fn update_reactions(pool: &PgPool, message: &Message) -> Result<(), sqlx::Error> {
    let reactions = serde_json::to_value(&message.reactions)
        .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

    sqlx::query(
        r#"
        UPDATE messages
        SET reactions = $2, updated_at = $3
        WHERE id = $1
        "#,
    )
    .bind(message.id)
    .bind(reactions)
    .bind(message.updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a message row
pub async fn delete_message(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM messages WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete every message row (admin bulk clear)
pub async fn clear_messages(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM messages").execute(pool).await?;
    Ok(())
}

/// Load all messages, oldest first
///
/// Used once at startup to restore the in-memory store. Rows with a
/// malformed reactions column are loaded with an empty reaction list
/// rather than failing the whole restore.
pub async fn load_messages(pool: &PgPool) -> Result<Vec<Message>, sqlx::Error> {
    #[derive(sqlx::FromRow)]
    struct MessageRow {
        id: Uuid,
        sender: String,
        content: String,
        edited: bool,
        reply_to: Option<Uuid>,
        reactions: serde_json::Value,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    }

    let rows = sqlx::query_as::<_, MessageRow>(
        r#"
        SELECT id, sender, content, edited, reply_to, reactions, created_at, updated_at
        FROM messages
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let messages = rows
        .into_iter()
        .map(|row| {
            let reactions: Vec<Reaction> =
                serde_json::from_value(row.reactions).unwrap_or_else(|e| {
                    tracing::warn!(
                        "[Chat] Malformed reactions on message {}, loading empty: {:?}",
                        row.id,
                        e
                    );
                    Vec::new()
                });
            Message {
                id: row.id,
                sender: row.sender,
                content: row.content,
                edited: row.edited,
                reply_to: row.reply_to,
                reactions,
                created_at: row.created_at,
                updated_at: row.updated_at,
            }
        })
        .collect();

    Ok(messages)
}
