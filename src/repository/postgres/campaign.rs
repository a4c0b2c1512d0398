use anyhow::Context;
use sqlx::PgPool;
use tracing::Span;
use uuid::Uuid;

use crate::domain::{Campaign, CampaignChanges, CampaignRecord, NewCampaign};

#[tracing::instrument(skip(pool))]
pub async fn list_campaigns(pool: &PgPool) -> Result<Vec<Campaign>, anyhow::Error> {
    let records = sqlx::query_as::<_, CampaignRecord>(
        r#"
        SELECT id, name, description, status, leads, account_ids, created_at, updated_at
        FROM campaigns
        ORDER BY created_at, id
        "#,
    )
    .fetch_all(pool)
    .await
    .context("Failed to fetch campaigns")?;

    records.into_iter().map(Campaign::try_from).collect()
}

#[tracing::instrument(skip(pool), fields(campaign_id=%id))]
pub async fn get_campaign(id: Uuid, pool: &PgPool) -> Result<Option<Campaign>, anyhow::Error> {
    let record = sqlx::query_as::<_, CampaignRecord>(
        r#"
        SELECT id, name, description, status, leads, account_ids, created_at, updated_at
        FROM campaigns
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("Failed to fetch campaign")?;

    record.map(Campaign::try_from).transpose()
}

#[tracing::instrument(skip(pool), fields(campaign_id=%id))]
pub async fn campaign_exists(id: Uuid, pool: &PgPool) -> Result<bool, anyhow::Error> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(
            SELECT 1
            FROM campaigns
            WHERE id = $1
        )
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
    .context("Failed to check if campaign exists")?;

    Ok(exists)
}

#[tracing::instrument(skip_all, fields(campaign_id=tracing::field::Empty))]
pub async fn insert_campaign(
    campaign: &NewCampaign,
    pool: &PgPool,
) -> Result<Campaign, anyhow::Error> {
    let record = sqlx::query_as::<_, CampaignRecord>(
        r#"
        INSERT INTO campaigns (id, name, description, status, leads, account_ids)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, description, status, leads, account_ids, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(campaign.name.as_ref())
    .bind(campaign.description.as_ref())
    .bind(campaign.status.as_str())
    .bind(campaign.leads.as_ref())
    .bind(campaign.account_ids.as_ref())
    .fetch_one(pool)
    .await
    .context("Failed to insert new campaign")?;

    Span::current().record("campaign_id", tracing::field::display(&record.id));
    Campaign::try_from(record)
}

// Absent changes bind as NULL and COALESCE keeps the stored column.
#[tracing::instrument(skip(changes, pool), fields(campaign_id=%id))]
pub async fn update_campaign(
    id: Uuid,
    changes: &CampaignChanges,
    pool: &PgPool,
) -> Result<Option<Campaign>, anyhow::Error> {
    let record = sqlx::query_as::<_, CampaignRecord>(
        r#"
        UPDATE campaigns
        SET name = COALESCE($2, name),
            description = COALESCE($3, description),
            status = COALESCE($4, status),
            leads = COALESCE($5, leads),
            account_ids = COALESCE($6, account_ids),
            updated_at = now()
        WHERE id = $1
        RETURNING id, name, description, status, leads, account_ids, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(changes.name.as_ref().map(|n| n.as_ref()))
    .bind(changes.description.as_ref().map(|d| d.as_ref()))
    .bind(changes.status.map(|s| s.as_str()))
    .bind(changes.leads.as_ref().map(|l| l.as_ref()))
    .bind(changes.account_ids.as_ref().map(|a| a.as_ref()))
    .fetch_optional(pool)
    .await
    .context("Failed to update campaign")?;

    record.map(Campaign::try_from).transpose()
}

#[tracing::instrument(skip(pool), fields(campaign_id=%id))]
pub async fn delete_campaign(id: Uuid, pool: &PgPool) -> Result<bool, anyhow::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM campaigns
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await
    .context("Failed to delete campaign")?;

    Ok(result.rows_affected() > 0)
}
