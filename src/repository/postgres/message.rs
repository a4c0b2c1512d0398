use anyhow::Context;
use sqlx::PgPool;
use tracing::Span;
use uuid::Uuid;

use crate::domain::{Message, MessageChanges, MessageRecord, NewMessage};

#[tracing::instrument(skip(pool))]
pub async fn list_messages(pool: &PgPool) -> Result<Vec<Message>, anyhow::Error> {
    let records = sqlx::query_as::<_, MessageRecord>(
        r#"
        SELECT id, content, campaign_id, status, scheduled_time, created_at, updated_at
        FROM messages
        ORDER BY created_at, id
        "#,
    )
    .fetch_all(pool)
    .await
    .context("Failed to fetch messages")?;

    records.into_iter().map(Message::try_from).collect()
}

#[tracing::instrument(skip(pool), fields(message_id=%id))]
pub async fn get_message(id: Uuid, pool: &PgPool) -> Result<Option<Message>, anyhow::Error> {
    let record = sqlx::query_as::<_, MessageRecord>(
        r#"
        SELECT id, content, campaign_id, status, scheduled_time, created_at, updated_at
        FROM messages
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("Failed to fetch message")?;

    record.map(Message::try_from).transpose()
}

#[tracing::instrument(skip(pool), fields(message_id=%id))]
pub async fn message_exists(id: Uuid, pool: &PgPool) -> Result<bool, anyhow::Error> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(
            SELECT 1
            FROM messages
            WHERE id = $1
        )
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
    .context("Failed to check if message exists")?;

    Ok(exists)
}

#[tracing::instrument(
    skip_all,
    fields(campaign_id=%message.campaign_id, message_id=tracing::field::Empty)
)]
pub async fn insert_message(message: &NewMessage, pool: &PgPool) -> Result<Message, anyhow::Error> {
    let record = sqlx::query_as::<_, MessageRecord>(
        r#"
        INSERT INTO messages (id, content, campaign_id, status, scheduled_time)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, content, campaign_id, status, scheduled_time, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(message.content.as_ref())
    .bind(message.campaign_id)
    .bind(message.status.as_str())
    .bind(message.scheduled_time.instant())
    .fetch_one(pool)
    .await
    .context("Failed to insert new message")?;

    Span::current().record("message_id", tracing::field::display(&record.id));
    Message::try_from(record)
}

#[tracing::instrument(skip(changes, pool), fields(message_id=%id))]
pub async fn update_message(
    id: Uuid,
    changes: &MessageChanges,
    pool: &PgPool,
) -> Result<Option<Message>, anyhow::Error> {
    let record = sqlx::query_as::<_, MessageRecord>(
        r#"
        UPDATE messages
        SET content = COALESCE($2, content),
            campaign_id = COALESCE($3, campaign_id),
            status = COALESCE($4, status),
            scheduled_time = COALESCE($5, scheduled_time),
            updated_at = now()
        WHERE id = $1
        RETURNING id, content, campaign_id, status, scheduled_time, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(changes.content.as_ref().map(|c| c.as_ref()))
    .bind(changes.campaign_id)
    .bind(changes.status.map(|s| s.as_str()))
    .bind(changes.scheduled_time.map(|t| t.instant()))
    .fetch_optional(pool)
    .await
    .context("Failed to update message")?;

    record.map(Message::try_from).transpose()
}

#[tracing::instrument(skip(pool), fields(message_id=%id))]
pub async fn delete_message(id: Uuid, pool: &PgPool) -> Result<bool, anyhow::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM messages
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await
    .context("Failed to delete message")?;

    Ok(result.rows_affected() > 0)
}
