mod campaign;
mod message;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Campaign, CampaignChanges, Message, MessageChanges, NewCampaign, NewMessage};
use crate::repository::Repository;

pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, anyhow::Error> {
        campaign::list_campaigns(&self.pool).await
    }

    async fn get_campaign(&self, id: Uuid) -> Result<Option<Campaign>, anyhow::Error> {
        campaign::get_campaign(id, &self.pool).await
    }

    async fn campaign_exists(&self, id: Uuid) -> Result<bool, anyhow::Error> {
        campaign::campaign_exists(id, &self.pool).await
    }

    async fn insert_campaign(&self, new_campaign: &NewCampaign) -> Result<Campaign, anyhow::Error> {
        campaign::insert_campaign(new_campaign, &self.pool).await
    }

    async fn update_campaign(
        &self,
        id: Uuid,
        changes: &CampaignChanges,
    ) -> Result<Option<Campaign>, anyhow::Error> {
        campaign::update_campaign(id, changes, &self.pool).await
    }

    async fn delete_campaign(&self, id: Uuid) -> Result<bool, anyhow::Error> {
        campaign::delete_campaign(id, &self.pool).await
    }

    async fn list_messages(&self) -> Result<Vec<Message>, anyhow::Error> {
        message::list_messages(&self.pool).await
    }

    async fn get_message(&self, id: Uuid) -> Result<Option<Message>, anyhow::Error> {
        message::get_message(id, &self.pool).await
    }

    async fn message_exists(&self, id: Uuid) -> Result<bool, anyhow::Error> {
        message::message_exists(id, &self.pool).await
    }

    async fn insert_message(&self, new_message: &NewMessage) -> Result<Message, anyhow::Error> {
        message::insert_message(new_message, &self.pool).await
    }

    async fn update_message(
        &self,
        id: Uuid,
        changes: &MessageChanges,
    ) -> Result<Option<Message>, anyhow::Error> {
        message::update_message(id, changes, &self.pool).await
    }

    async fn delete_message(&self, id: Uuid) -> Result<bool, anyhow::Error> {
        message::delete_message(id, &self.pool).await
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
