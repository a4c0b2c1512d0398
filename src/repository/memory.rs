use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Campaign, CampaignChanges, Message, MessageChanges, NewCampaign, NewMessage};
use crate::repository::Repository;

/// Process-local store. Records are kept in insertion order, which is also `created_at` order.
#[derive(Default)]
pub struct InMemoryRepository {
    campaigns: RwLock<Vec<Campaign>>,
    messages: RwLock<Vec<Message>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    #[tracing::instrument(skip(self))]
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, anyhow::Error> {
        Ok(self.campaigns.read().await.clone())
    }

    #[tracing::instrument(skip(self), fields(campaign_id=%id))]
    async fn get_campaign(&self, id: Uuid) -> Result<Option<Campaign>, anyhow::Error> {
        Ok(self
            .campaigns
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    #[tracing::instrument(skip(self), fields(campaign_id=%id))]
    async fn campaign_exists(&self, id: Uuid) -> Result<bool, anyhow::Error> {
        Ok(self.campaigns.read().await.iter().any(|c| c.id == id))
    }

    #[tracing::instrument(skip_all, fields(campaign_id=tracing::field::Empty))]
    async fn insert_campaign(&self, new_campaign: &NewCampaign) -> Result<Campaign, anyhow::Error> {
        let now = Utc::now();
        let campaign = Campaign {
            id: Uuid::new_v4(),
            name: new_campaign.name.as_ref().to_string(),
            description: new_campaign.description.as_ref().to_string(),
            status: new_campaign.status,
            leads: new_campaign.leads.as_ref().to_vec(),
            account_ids: new_campaign.account_ids.as_ref().to_vec(),
            created_at: now,
            updated_at: now,
        };
        tracing::Span::current().record("campaign_id", tracing::field::display(&campaign.id));

        self.campaigns.write().await.push(campaign.clone());
        Ok(campaign)
    }

    #[tracing::instrument(skip(self, changes), fields(campaign_id=%id))]
    async fn update_campaign(
        &self,
        id: Uuid,
        changes: &CampaignChanges,
    ) -> Result<Option<Campaign>, anyhow::Error> {
        let mut campaigns = self.campaigns.write().await;
        let updated = campaigns.iter_mut().find(|c| c.id == id).map(|campaign| {
            changes.apply_to(campaign, Utc::now());
            campaign.clone()
        });
        Ok(updated)
    }

    #[tracing::instrument(skip(self), fields(campaign_id=%id))]
    async fn delete_campaign(&self, id: Uuid) -> Result<bool, anyhow::Error> {
        let mut campaigns = self.campaigns.write().await;
        let before = campaigns.len();
        campaigns.retain(|c| c.id != id);
        Ok(campaigns.len() < before)
    }

    #[tracing::instrument(skip(self))]
    async fn list_messages(&self) -> Result<Vec<Message>, anyhow::Error> {
        Ok(self.messages.read().await.clone())
    }

    #[tracing::instrument(skip(self), fields(message_id=%id))]
    async fn get_message(&self, id: Uuid) -> Result<Option<Message>, anyhow::Error> {
        Ok(self
            .messages
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    #[tracing::instrument(skip(self), fields(message_id=%id))]
    async fn message_exists(&self, id: Uuid) -> Result<bool, anyhow::Error> {
        Ok(self.messages.read().await.iter().any(|m| m.id == id))
    }

    #[tracing::instrument(
        skip_all,
        fields(campaign_id=%new_message.campaign_id, message_id=tracing::field::Empty)
    )]
    async fn insert_message(&self, new_message: &NewMessage) -> Result<Message, anyhow::Error> {
        let now = Utc::now();
        let message = Message {
            id: Uuid::new_v4(),
            content: new_message.content.as_ref().to_string(),
            campaign_id: new_message.campaign_id,
            status: new_message.status,
            scheduled_time: new_message.scheduled_time.instant(),
            created_at: now,
            updated_at: now,
        };
        tracing::Span::current().record("message_id", tracing::field::display(&message.id));

        self.messages.write().await.push(message.clone());
        Ok(message)
    }

    #[tracing::instrument(skip(self, changes), fields(message_id=%id))]
    async fn update_message(
        &self,
        id: Uuid,
        changes: &MessageChanges,
    ) -> Result<Option<Message>, anyhow::Error> {
        let mut messages = self.messages.write().await;
        let updated = messages.iter_mut().find(|m| m.id == id).map(|message| {
            changes.apply_to(message, Utc::now());
            message.clone()
        });
        Ok(updated)
    }

    #[tracing::instrument(skip(self), fields(message_id=%id))]
    async fn delete_message(&self, id: Uuid) -> Result<bool, anyhow::Error> {
        let mut messages = self.messages.write().await;
        let before = messages.len();
        messages.retain(|m| m.id != id);
        Ok(messages.len() < before)
    }

    // No connections to release; records live until the store is dropped.
    async fn close(&self) {}
}
